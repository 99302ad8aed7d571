//! Game state snapshot: the read-only view handed to renderers and the HUD.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub camera: CameraView,
    pub hud: HudView,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: Vec2,
    pub health: f32,
    pub is_dead: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub size: Vec2,
    pub health: f32,
    pub state: EnemyState,
}

/// An active projectile slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub owner: Owner,
}

/// An active particle slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec2,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    /// World-space centre of the view.
    pub position: Vec2,
    pub view_size: Vec2,
}

/// Numbers shown on the heads-up display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub player_health: f32,
    pub enemies_alive: u32,
    pub projectiles_active: u32,
}
