//! Pooled cosmetic particles and impact bursts.

use glam::Vec2;
use rand::Rng;

use tilestrike_core::constants::*;
use tilestrike_core::enums::Owner;
use tilestrike_core::events::SimEvent;

use crate::pool::ObjectPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticlePayload {
    pub color: [u8; 3],
}

impl Default for ParticlePayload {
    fn default() -> Self {
        Self {
            color: [255, 255, 255],
        }
    }
}

pub type ParticlePool = ObjectPool<ParticlePayload>;

pub fn shot_color(owner: Owner) -> [u8; 3] {
    match owner {
        Owner::Player => PLAYER_SHOT_COLOR,
        Owner::Enemy => ENEMY_SHOT_COLOR,
    }
}

/// Scatter a small burst of particles from `origin` in random directions.
pub fn spawn_burst<R: Rng + ?Sized>(
    pool: &mut ParticlePool,
    rng: &mut R,
    origin: Vec2,
    color: [u8; 3],
) {
    for _ in 0..IMPACT_PARTICLE_COUNT {
        let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(IMPACT_PARTICLE_SPEED_MIN..=IMPACT_PARTICLE_SPEED_MAX);
        let ttl = rng.gen_range(IMPACT_PARTICLE_TTL_MIN..=IMPACT_PARTICLE_TTL_MAX);
        pool.spawn(origin, Vec2::from_angle(angle) * speed, ttl, ParticlePayload { color });
    }
}

/// Spawn a burst for every projectile hit or wall block in `events`.
pub fn spawn_impacts<R: Rng + ?Sized>(pool: &mut ParticlePool, rng: &mut R, events: &[SimEvent]) {
    for event in events {
        match *event {
            SimEvent::ProjectileHit {
                owner, position, ..
            } => spawn_burst(pool, rng, position, shot_color(owner)),
            SimEvent::ProjectileBlocked { position, .. } => {
                spawn_burst(pool, rng, position, WALL_SPARK_COLOR)
            }
            _ => {}
        }
    }
}
