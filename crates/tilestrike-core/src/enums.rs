//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side fired a projectile. Projectiles only hit the opposing side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Player,
    Enemy,
}

/// Enemy behaviour state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Wandering in a fixed direction, re-rolled periodically.
    #[default]
    Patrol,
    /// Moving straight at the target, firing when close.
    Chase,
}

/// Source of damage applied to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    Projectile,
    Environment,
}

/// Kind of a static map zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    #[default]
    Damage,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}

/// File operation requested by the player during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistenceRequest {
    QuickSave,
    QuickLoad,
}
