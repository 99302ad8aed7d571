//! Enemy tuning profile.
//!
//! Consolidates the parameters the FSM and the enemy entity read.

use tilestrike_core::constants::*;

/// Behavioural parameters for an enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Top movement speed (px/s).
    pub max_speed: f32,
    /// Velocity change per second while steering (px/s²).
    pub accel: f32,
    /// Patrol switches to chase below this distance (px), line-of-sight required.
    pub chase_enter_range: f32,
    /// Chase falls back to patrol above this distance (px).
    pub chase_exit_range: f32,
    /// Chasing enemies fire below this distance (px).
    pub fire_range: f32,
    /// Seconds between shots.
    pub fire_cooldown: f32,
    /// Seconds between patrol heading re-rolls.
    pub patrol_reroll_secs: f32,
}

impl Default for EnemyProfile {
    fn default() -> Self {
        Self {
            max_speed: ENEMY_MAX_SPEED,
            accel: ENEMY_ACCEL,
            chase_enter_range: ENEMY_CHASE_ENTER_RANGE,
            chase_exit_range: ENEMY_CHASE_EXIT_RANGE,
            fire_range: ENEMY_FIRE_RANGE,
            fire_cooldown: ENEMY_FIRE_COOLDOWN,
            patrol_reroll_secs: ENEMY_PATROL_REROLL_SECS,
        }
    }
}
