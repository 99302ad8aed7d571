//! TILESTRIKE headless application.
//!
//! This crate wires the simulation to the outside world: the config
//! file, key bindings, the real-time frame loop and the save files.

pub mod config;
pub mod game_loop;
pub mod hud;
pub mod input;
pub mod persistence;
pub mod profiling;

pub use tilestrike_core as core;
