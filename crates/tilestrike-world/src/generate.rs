//! Seeded procedural map generation.
//!
//! Same seed and dimensions always produce the same collision grid.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tilestrike_core::constants::*;
use tilestrike_core::types::Rect;

use crate::grid::TileMap;
use crate::zone::Zone;

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapGenConfig {
    pub tiles_w: usize,
    pub tiles_h: usize,
    pub tile_size: i32,
    pub seed: u64,
    /// Obstacle placements per tile of map area.
    pub obstacle_density: f64,
    /// Tile whose 3×3 neighbourhood is forced walkable after placement.
    pub spawn_clearing: Option<(usize, usize)>,
}

impl Default for MapGenConfig {
    fn default() -> Self {
        Self {
            tiles_w: MAP_TILES_W,
            tiles_h: MAP_TILES_H,
            tile_size: TILE_SIZE,
            seed: MAP_SEED,
            obstacle_density: OBSTACLE_DENSITY,
            spawn_clearing: Some(PLAYER_SPAWN_TILE),
        }
    }
}

/// Build a bordered map, scatter small obstacle blocks and add the damage zone.
pub fn generate(config: &MapGenConfig) -> TileMap {
    let (w, h) = (config.tiles_w, config.tiles_h);
    let ts = config.tile_size;
    let mut map = TileMap::bordered(w, h, ts);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    // Obstacles need at least one interior column and row past the border.
    if w >= 5 && h >= 5 {
        let placements = (w as f64 * h as f64 * config.obstacle_density.max(0.0)) as usize;
        for _ in 0..placements {
            let x = rng.gen_range(2..=w - 3);
            let y = rng.gen_range(2..=h - 3);
            let ow = rng.gen_range(OBSTACLE_MIN_TILES..=OBSTACLE_MAX_TILES);
            let oh = rng.gen_range(OBSTACLE_MIN_TILES..=OBSTACLE_MAX_TILES);
            let ow = ow.min(w - 1 - x);
            let oh = oh.min(h - 1 - y);
            map.block_region(x, y, ow, oh);
        }
    }

    let (zx, zy) = DAMAGE_ZONE_TILE;
    map.add_zone(Zone::damage(
        Rect::new(zx * ts, zy * ts, DAMAGE_ZONE_TILES * ts, DAMAGE_ZONE_TILES * ts),
        DAMAGE_ZONE_DPS,
    ));

    if let Some((sx, sy)) = config.spawn_clearing {
        map.clear_region(sx.saturating_sub(1), sy.saturating_sub(1), 3, 3);
    }

    tracing::info!(
        tiles_w = w,
        tiles_h = h,
        seed = config.seed,
        blocked = map.blocked_count(),
        "generated tile map"
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> MapGenConfig {
        MapGenConfig {
            tiles_w: 40,
            tiles_h: 30,
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn test_border_always_blocked() {
        let map = generate(&small_config(7));
        for x in 0..40 {
            assert!(map.is_blocked(x, 0));
            assert!(map.is_blocked(x, 29));
        }
        for y in 0..30 {
            assert!(map.is_blocked(0, y));
            assert!(map.is_blocked(39, y));
        }
    }

    #[test]
    fn test_same_seed_same_map() {
        let a = generate(&small_config(42));
        let b = generate(&small_config(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(&small_config(1));
        let b = generate(&small_config(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_obstacles_are_placed() {
        let map = generate(&small_config(3));
        let border = 2 * 40 + 2 * 28;
        assert!(map.blocked_count() > border);
    }

    #[test]
    fn test_spawn_clearing_is_walkable() {
        for seed in 0..20 {
            let map = generate(&small_config(seed));
            for y in 3..=5 {
                for x in 3..=5 {
                    assert!(!map.is_blocked(x, y), "seed {seed} left ({x},{y}) blocked");
                }
            }
        }
    }

    #[test]
    fn test_damage_zone_present() {
        let map = generate(&small_config(5));
        assert_eq!(map.zones().len(), 1);
        let zone = &map.zones()[0];
        assert_eq!(zone.rect, Rect::new(320, 320, 96, 96));
        assert_eq!(zone.dps, DAMAGE_ZONE_DPS);
    }

    #[test]
    fn test_tiny_map_has_only_border() {
        let config = MapGenConfig {
            tiles_w: 4,
            tiles_h: 4,
            spawn_clearing: None,
            ..Default::default()
        };
        let map = generate(&config);
        assert_eq!(map.blocked_count(), 12);
    }
}
