//! Core types and definitions for TILESTRIKE.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, constants, input frames, events, snapshots and save data.
//! It has no dependency on any runtime or rendering framework.

pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod save;
pub mod state;
pub mod types;

pub use glam::Vec2;
