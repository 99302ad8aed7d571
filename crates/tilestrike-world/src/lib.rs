//! Tile world for TILESTRIKE.
//!
//! Collision grid, damage zones, movement resolution,
//! line-of-sight sampling and seeded map generation.

pub use tilestrike_core as core;

pub mod generate;
pub mod grid;
pub mod los;
pub mod zone;

// Re-export key types for convenience.
pub use generate::{generate, MapGenConfig};
pub use grid::{MoveResult, TileMap};
pub use los::has_line_of_sight;
pub use zone::Zone;
