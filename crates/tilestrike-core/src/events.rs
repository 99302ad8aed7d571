//! Events emitted by the simulation for audio, effects and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A projectile was spawned (pool had a free slot).
    ShotFired { owner: Owner },
    /// A projectile struck an entity of the opposing side.
    ProjectileHit {
        owner: Owner,
        position: Vec2,
        damage: f32,
        knockback: f32,
    },
    /// A projectile was stopped by a wall.
    ProjectileBlocked { owner: Owner, position: Vec2 },
    /// The player lost health.
    PlayerDamaged { amount: f32, kind: DamageKind },
    /// The player's health reached zero.
    PlayerDied,
    /// An enemy switched behaviour state.
    EnemyStateChanged { index: usize, state: EnemyState },
    /// An enemy's health reached zero.
    EnemyKilled { index: usize },
}
