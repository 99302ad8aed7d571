//! Entity spawn factories for setting up the simulation world.
//!
//! Places the player on its spawn tile and scatters enemies over open
//! ground away from the player.

use glam::Vec2;
use rand::Rng;

use tilestrike_core::constants::*;
use tilestrike_core::types::Rect;
use tilestrike_world::TileMap;

use crate::enemy::Enemy;
use crate::player::Player;

/// Placement attempts per enemy before giving up on it.
const SPAWN_ATTEMPTS: usize = 200;

/// Player standing on the centre of `tile`.
pub fn spawn_player(map: &TileMap, tile: (usize, usize)) -> Player {
    Player::new(map.tile_center(tile.0, tile.1))
}

/// Up to `count` enemies on random open tile centres at least
/// `ENEMY_SPAWN_MIN_DISTANCE` from `avoid`. Enemy `i` seeds its private
/// stream with `seed + i + 1`.
pub fn spawn_enemies<R: Rng + ?Sized>(
    map: &TileMap,
    rng: &mut R,
    count: usize,
    avoid: Vec2,
    seed: u64,
) -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(count);
    if map.tiles_w() < 3 || map.tiles_h() < 3 {
        return enemies;
    }
    let size = Vec2::splat(ENEMY_SIZE);

    for i in 0..count {
        let spot = (0..SPAWN_ATTEMPTS).find_map(|_| {
            let tx = rng.gen_range(1..map.tiles_w() - 1);
            let ty = rng.gen_range(1..map.tiles_h() - 1);
            let center = map.tile_center(tx, ty);
            let clear = !map.collides(&Rect::from_center(center, size));
            let far = center.distance(avoid) >= ENEMY_SPAWN_MIN_DISTANCE;
            (clear && far).then_some(center)
        });
        match spot {
            Some(center) => {
                let enemy_seed = seed.wrapping_add(i as u64 + 1);
                enemies.push(Enemy::new(center, enemy_seed));
            }
            None => tracing::warn!(index = i, "no open tile for enemy, skipped"),
        }
    }
    enemies
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tilestrike_world::{generate, MapGenConfig};

    #[test]
    fn test_player_on_spawn_tile_centre() {
        let map = TileMap::bordered(10, 10, 32);
        let player = spawn_player(&map, (4, 4));
        assert_eq!(player.position, Vec2::new(144.0, 144.0));
        assert!(!map.collides(&player.rect()));
    }

    #[test]
    fn test_enemies_spawn_clear_and_far() {
        let map = generate(&MapGenConfig {
            tiles_w: 60,
            tiles_h: 60,
            ..Default::default()
        });
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let avoid = Vec2::new(144.0, 144.0);
        let enemies = spawn_enemies(&map, &mut rng, 6, avoid, 42);
        assert_eq!(enemies.len(), 6);
        for enemy in &enemies {
            assert!(!map.collides(&enemy.rect()));
            assert!(enemy.position.distance(avoid) >= ENEMY_SPAWN_MIN_DISTANCE);
        }
    }

    #[test]
    fn test_enemies_skipped_when_no_room() {
        // Every interior tile is within range of the avoided point.
        let map = TileMap::bordered(6, 6, 32);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let enemies = spawn_enemies(&map, &mut rng, 3, Vec2::new(96.0, 96.0), 1);
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let map = TileMap::bordered(40, 40, 32);
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let ea = spawn_enemies(&map, &mut a, 4, Vec2::ZERO, 5);
        let eb = spawn_enemies(&map, &mut b, 4, Vec2::ZERO, 5);
        let pa: Vec<Vec2> = ea.iter().map(|e| e.position).collect();
        let pb: Vec<Vec2> = eb.iter().map(|e| e.position).collect();
        assert_eq!(pa, pb);
    }
}
