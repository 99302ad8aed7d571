//! Simulation engine for TILESTRIKE.
//!
//! Owns the player, the enemy list and the projectile/particle pools,
//! runs them at a fixed tick rate against the tile map, and produces
//! `GameStateSnapshot`s for the renderer and HUD.

pub mod camera;
pub mod enemy;
pub mod engine;
pub mod fixed_step;
pub mod particle;
pub mod player;
pub mod pool;
pub mod projectile;
pub mod snapshot;
pub mod world_setup;

pub use tilestrike_core as core;
pub use engine::{SimConfig, SimulationEngine};
