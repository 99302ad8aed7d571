//! Snapshot builder: collects renderer/HUD state after a tick.

use tilestrike_core::enums::GamePhase;
use tilestrike_core::events::SimEvent;
use tilestrike_core::state::*;
use tilestrike_core::types::SimTime;

use crate::camera::Camera;
use crate::enemy::Enemy;
use crate::particle::ParticlePool;
use crate::player::Player;
use crate::projectile::ProjectilePool;

/// Build a complete snapshot. Only active pool slots and their
/// positions are exposed.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: SimTime,
    phase: GamePhase,
    player: &Player,
    enemies: &[Enemy],
    projectiles: &ProjectilePool,
    particles: &ParticlePool,
    camera: &Camera,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let projectile_views: Vec<ProjectileView> = projectiles
        .iter_active()
        .map(|slot| ProjectileView {
            position: slot.position,
            owner: slot.payload.owner,
        })
        .collect();

    let particle_views = particles
        .iter_active()
        .map(|slot| ParticleView {
            position: slot.position,
            color: slot.payload.color,
        })
        .collect();

    let hud = HudView {
        player_health: player.health,
        enemies_alive: enemies.iter().filter(|e| e.is_alive()).count() as u32,
        projectiles_active: projectile_views.len() as u32,
    };

    GameStateSnapshot {
        time,
        phase,
        player: player.view(),
        enemies: enemies.iter().map(Enemy::view).collect(),
        projectiles: projectile_views,
        particles: particle_views,
        camera: camera.view(),
        hud,
        events,
    }
}
