//! Enemy AI for TILESTRIKE.
//!
//! Implements the patrol/chase behaviour state machine, the tuning
//! profile it reads, and the steering helpers shared by all actors.

pub mod fsm;
pub mod profiles;
pub mod steering;

pub use tilestrike_core as core;
