//! Pooled projectiles: spawning with spread, wall blocking and hit tests.

use glam::Vec2;
use rand::Rng;

use tilestrike_core::constants::*;
use tilestrike_core::enums::{DamageKind, Owner};
use tilestrike_core::events::SimEvent;
use tilestrike_core::types::Rect;
use tilestrike_world::TileMap;

use crate::enemy::Enemy;
use crate::player::Player;
use crate::pool::{ObjectPool, Slot};

/// Per-projectile data carried in a pool slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectilePayload {
    pub damage: f32,
    pub owner: Owner,
    /// Reported with hits; not applied to the target.
    pub knockback: f32,
}

pub type ProjectilePool = ObjectPool<ProjectilePayload>;

/// Launch parameters for one shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotSpec {
    pub owner: Owner,
    pub speed: f32,
    pub ttl: f32,
    pub damage: f32,
    /// Full spread cone in degrees; the shot deviates by up to half of it.
    pub spread_deg: f32,
    pub knockback: f32,
}

impl ShotSpec {
    pub const PLAYER: ShotSpec = ShotSpec {
        owner: Owner::Player,
        speed: PLAYER_SHOT_SPEED,
        ttl: PLAYER_SHOT_TTL,
        damage: PLAYER_SHOT_DAMAGE,
        spread_deg: PLAYER_SHOT_SPREAD_DEG,
        knockback: PLAYER_SHOT_KNOCKBACK,
    };

    pub const ENEMY: ShotSpec = ShotSpec {
        owner: Owner::Enemy,
        speed: ENEMY_SHOT_SPEED,
        ttl: ENEMY_SHOT_TTL,
        damage: ENEMY_SHOT_DAMAGE,
        spread_deg: ENEMY_SHOT_SPREAD_DEG,
        knockback: ENEMY_SHOT_KNOCKBACK,
    };
}

/// Spawn a projectile at `origin` heading along `direction`, jittered by
/// `spec.spread_deg`. Emits `ShotFired` only if a slot was free.
pub fn fire<R: Rng + ?Sized>(
    pool: &mut ProjectilePool,
    rng: &mut R,
    origin: Vec2,
    direction: Vec2,
    spec: &ShotSpec,
    events: &mut Vec<SimEvent>,
) {
    let mut angle = direction.y.atan2(direction.x);
    if spec.spread_deg > 0.0 {
        let half = spec.spread_deg * 0.5;
        angle += rng.gen_range(-half..=half).to_radians();
    }
    let payload = ProjectilePayload {
        damage: spec.damage,
        owner: spec.owner,
        knockback: spec.knockback,
    };
    let velocity = Vec2::from_angle(angle) * spec.speed;
    if pool.spawn(origin, velocity, spec.ttl, payload) {
        events.push(SimEvent::ShotFired { owner: spec.owner });
    } else {
        tracing::trace!(owner = ?spec.owner, "projectile pool full, shot dropped");
    }
}

/// Collision box around a projectile position.
pub fn projectile_box(position: Vec2) -> Rect {
    let half = PROJECTILE_HALF_SIZE;
    Rect::new(
        position.x as i32 - half,
        position.y as i32 - half,
        half * 2,
        half * 2,
    )
}

/// Advance every settled projectile one tick: age, move through the map,
/// retire on walls, then test against the opposing side. Projectiles
/// fired earlier in the same tick are left at their spawn point.
pub fn update(
    pool: &mut ProjectilePool,
    map: &TileMap,
    dt: f32,
    player: &mut Player,
    enemies: &mut [Enemy],
    events: &mut Vec<SimEvent>,
) {
    pool.age_settled(dt, |slot| step_projectile(slot, map, dt, player, enemies, events));
}

fn step_projectile(
    slot: &mut Slot<ProjectilePayload>,
    map: &TileMap,
    dt: f32,
    player: &mut Player,
    enemies: &mut [Enemy],
    events: &mut Vec<SimEvent>,
) {
    let delta = slot.velocity * dt;
    let moved = map.resolve_movement(&projectile_box(slot.position), delta.x, delta.y);
    slot.position = moved.rect.center();

    if moved.remaining_dx.abs() < 1e-5
        && moved.remaining_dy.abs() < 1e-5
        && map.collides(&moved.rect)
    {
        slot.active = false;
        events.push(SimEvent::ProjectileBlocked {
            owner: slot.payload.owner,
            position: slot.position,
        });
        return;
    }

    let hit = match slot.payload.owner {
        Owner::Player => hit_enemies(&moved.rect, &slot.payload, enemies, events),
        Owner::Enemy => hit_player(&moved.rect, &slot.payload, player, events),
    };
    if hit {
        slot.active = false;
        events.push(SimEvent::ProjectileHit {
            owner: slot.payload.owner,
            position: slot.position,
            damage: slot.payload.damage,
            knockback: slot.payload.knockback,
        });
    }
}

/// First live enemy overlapping `rect` takes the damage; the rest are untested.
fn hit_enemies(
    rect: &Rect,
    payload: &ProjectilePayload,
    enemies: &mut [Enemy],
    events: &mut Vec<SimEvent>,
) -> bool {
    let Some((index, enemy)) = enemies
        .iter_mut()
        .enumerate()
        .find(|(_, e)| e.is_alive() && rect.overlaps(&e.rect()))
    else {
        return false;
    };
    if enemy.take_damage(payload.damage) {
        tracing::debug!(index, "enemy killed");
        events.push(SimEvent::EnemyKilled { index });
    }
    true
}

fn hit_player(
    rect: &Rect,
    payload: &ProjectilePayload,
    player: &mut Player,
    events: &mut Vec<SimEvent>,
) -> bool {
    if !rect.overlaps(&player.rect()) {
        return false;
    }
    player.apply_damage(payload.damage, DamageKind::Projectile, events);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn open_map() -> TileMap {
        TileMap::bordered(20, 20, 32)
    }

    fn spec_without_spread(owner: Owner) -> ShotSpec {
        ShotSpec {
            spread_deg: 0.0,
            ..if owner == Owner::Player {
                ShotSpec::PLAYER
            } else {
                ShotSpec::ENEMY
            }
        }
    }

    #[test]
    fn test_fire_without_spread_follows_direction() {
        let mut pool = ProjectilePool::new(4);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = Vec::new();
        let spec = spec_without_spread(Owner::Player);
        fire(&mut pool, &mut rng, Vec2::new(100.0, 100.0), Vec2::Y, &spec, &mut events);

        let slot = pool.iter_active().next().unwrap();
        assert!(slot.velocity.x.abs() < 1e-3);
        assert!((slot.velocity.y - PLAYER_SHOT_SPEED).abs() < 1e-3);
        assert_eq!(events, vec![SimEvent::ShotFired { owner: Owner::Player }]);
    }

    #[test]
    fn test_fire_spread_stays_within_half_cone() {
        let mut pool = ProjectilePool::new(200);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut events = Vec::new();
        for _ in 0..200 {
            fire(&mut pool, &mut rng, Vec2::ZERO, Vec2::X, &ShotSpec::ENEMY, &mut events);
        }
        let limit = (ENEMY_SHOT_SPREAD_DEG * 0.5).to_radians() + 1e-5;
        for slot in pool.iter_active() {
            let angle = slot.velocity.y.atan2(slot.velocity.x);
            assert!(angle.abs() <= limit, "angle {angle} outside cone");
        }
    }

    #[test]
    fn test_fire_on_full_pool_emits_nothing() {
        let mut pool = ProjectilePool::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut events = Vec::new();
        let spec = spec_without_spread(Owner::Player);
        fire(&mut pool, &mut rng, Vec2::ZERO, Vec2::X, &spec, &mut events);
        fire(&mut pool, &mut rng, Vec2::ZERO, Vec2::X, &spec, &mut events);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_projectile_inside_wall_is_blocked() {
        let map = open_map();
        let mut pool = ProjectilePool::new(4);
        let mut player = Player::new(Vec2::new(300.0, 300.0));
        let mut events = Vec::new();
        // Centred in the left border column.
        pool.spawn(
            Vec2::new(10.0, 100.0),
            Vec2::ZERO,
            1.0,
            ProjectilePayload {
                owner: Owner::Player,
                ..Default::default()
            },
        );
        pool.settle();
        update(&mut pool, &map, 0.125, &mut player, &mut [], &mut events);
        assert_eq!(pool.active_count(), 0);
        assert!(matches!(
            events.as_slice(),
            [SimEvent::ProjectileBlocked { owner: Owner::Player, .. }]
        ));
    }

    #[test]
    fn test_projectile_rests_flush_against_wall() {
        let map = open_map();
        let mut pool = ProjectilePool::new(4);
        let mut player = Player::new(Vec2::new(300.0, 300.0));
        let mut events = Vec::new();
        // 6 px per tick toward the right border wall at x = 608.
        pool.spawn(
            Vec2::new(590.0, 100.0),
            Vec2::new(48.0, 0.0),
            5.0,
            ProjectilePayload::default(),
        );
        pool.settle();
        for _ in 0..10 {
            update(&mut pool, &map, 0.125, &mut player, &mut [], &mut events);
        }
        let slot = pool.iter_active().next().unwrap();
        assert_eq!(slot.position, Vec2::new(605.0, 100.0));
        assert!(!map.collides(&projectile_box(slot.position)));
        assert!(events.is_empty());
    }

    #[test]
    fn test_player_shot_hits_first_enemy_only() {
        let map = open_map();
        let mut pool = ProjectilePool::new(4);
        let mut player = Player::new(Vec2::new(80.0, 80.0));
        let mut enemies = vec![
            Enemy::new(Vec2::new(300.0, 300.0), 1),
            Enemy::new(Vec2::new(302.0, 300.0), 2),
        ];
        let mut events = Vec::new();
        pool.spawn(
            Vec2::new(300.0, 300.0),
            Vec2::ZERO,
            1.0,
            ProjectilePayload {
                damage: 15.0,
                owner: Owner::Player,
                knockback: 140.0,
            },
        );
        pool.settle();
        update(&mut pool, &map, 0.125, &mut player, &mut enemies, &mut events);

        assert_eq!(pool.active_count(), 0);
        assert_eq!(enemies[0].health, ENEMY_MAX_HEALTH - 15.0);
        assert_eq!(enemies[1].health, ENEMY_MAX_HEALTH);
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        assert!(events
            .iter()
            .any(|e| matches!(e, SimEvent::ProjectileHit { knockback, .. } if *knockback == 140.0)));
    }

    #[test]
    fn test_enemy_shot_ignores_enemies() {
        let map = open_map();
        let mut pool = ProjectilePool::new(4);
        let mut player = Player::new(Vec2::new(80.0, 80.0));
        let mut enemies = vec![Enemy::new(Vec2::new(300.0, 300.0), 1)];
        let mut events = Vec::new();
        pool.spawn(
            Vec2::new(300.0, 300.0),
            Vec2::ZERO,
            1.0,
            ProjectilePayload {
                damage: 8.0,
                owner: Owner::Enemy,
                knockback: 80.0,
            },
        );
        pool.settle();
        update(&mut pool, &map, 0.125, &mut player, &mut enemies, &mut events);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(enemies[0].health, ENEMY_MAX_HEALTH);
    }

    #[test]
    fn test_enemy_shot_damages_player_through_armor() {
        let map = open_map();
        let mut pool = ProjectilePool::new(4);
        let mut player = Player::new(Vec2::new(200.0, 200.0));
        let mut events = Vec::new();
        pool.spawn(
            Vec2::new(200.0, 200.0),
            Vec2::ZERO,
            1.0,
            ProjectilePayload {
                damage: 10.0,
                owner: Owner::Enemy,
                knockback: 0.0,
            },
        );
        pool.settle();
        update(&mut pool, &map, 0.125, &mut player, &mut [], &mut events);
        assert_eq!(pool.active_count(), 0);
        assert!((player.health - (PLAYER_MAX_HEALTH - 9.0)).abs() < 1e-4);
        assert!(events.iter().any(|e| matches!(
            e,
            SimEvent::PlayerDamaged { kind: DamageKind::Projectile, .. }
        )));
    }

    #[test]
    fn test_projectile_expires_before_moving() {
        let map = open_map();
        let mut pool = ProjectilePool::new(1);
        let mut player = Player::new(Vec2::new(80.0, 80.0));
        let mut events = Vec::new();
        pool.spawn(
            Vec2::new(300.0, 300.0),
            Vec2::new(100.0, 0.0),
            0.125,
            ProjectilePayload::default(),
        );
        pool.settle();
        update(&mut pool, &map, 0.125, &mut player, &mut [], &mut events);
        assert_eq!(pool.active_count(), 0);
        assert!(events.is_empty());
    }
}
