//! Simulation constants and tuning parameters.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Upper bound on the wall-clock time fed into the accumulator per frame (seconds).
pub const MAX_FRAME_TIME: f64 = 0.25;

// --- World ---

/// Default map size in tiles.
pub const MAP_TILES_W: usize = 160;
pub const MAP_TILES_H: usize = 160;

/// Default tile edge length in pixels.
pub const TILE_SIZE: i32 = 32;

/// Default generator seed.
pub const MAP_SEED: u64 = 1337;

/// Fraction of the grid area used as the obstacle placement count.
pub const OBSTACLE_DENSITY: f64 = 0.07;

/// Obstacle edge length range in tiles (inclusive).
pub const OBSTACLE_MIN_TILES: usize = 1;
pub const OBSTACLE_MAX_TILES: usize = 3;

/// Damage zone placement (top-left tile) and extent in tiles.
pub const DAMAGE_ZONE_TILE: (i32, i32) = (10, 10);
pub const DAMAGE_ZONE_TILES: i32 = 3;

/// Damage zone strength (health per second).
pub const DAMAGE_ZONE_DPS: f32 = 10.0;

/// Player spawn tile.
pub const PLAYER_SPAWN_TILE: (usize, usize) = (4, 4);

// --- Camera ---

/// Default view size in pixels.
pub const VIEW_WIDTH: f32 = 960.0;
pub const VIEW_HEIGHT: f32 = 540.0;

/// Deadzone extent as a fraction of the view.
pub const DEADZONE_FRACTION: f32 = 0.35;

// --- Player ---

pub const PLAYER_WIDTH: f32 = 24.0;
pub const PLAYER_HEIGHT: f32 = 28.0;
pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_ARMOR: f32 = 0.1;
pub const PLAYER_MAX_SPEED: f32 = 220.0;
pub const PLAYER_ACCEL: f32 = 1800.0;
pub const PLAYER_DECEL: f32 = 2400.0;
pub const PLAYER_FIRE_COOLDOWN: f32 = 0.2;

/// Move input below this squared length counts as no input.
pub const INPUT_DEADZONE_SQ: f32 = 1e-5;

// --- Enemy ---

pub const ENEMY_SIZE: f32 = 24.0;
pub const ENEMY_MAX_HEALTH: f32 = 50.0;
pub const ENEMY_MAX_SPEED: f32 = 160.0;
pub const ENEMY_ACCEL: f32 = 1600.0;
pub const ENEMY_FIRE_COOLDOWN: f32 = 0.9;
pub const DEFAULT_ENEMY_COUNT: usize = 6;

/// Patrol enters chase below this distance (with line-of-sight).
pub const ENEMY_CHASE_ENTER_RANGE: f32 = 280.0;

/// Chase falls back to patrol above this distance.
pub const ENEMY_CHASE_EXIT_RANGE: f32 = 420.0;

/// Chasing enemies fire below this distance.
pub const ENEMY_FIRE_RANGE: f32 = 260.0;

/// Seconds between patrol direction re-rolls.
pub const ENEMY_PATROL_REROLL_SECS: f32 = 2.0;

/// Where killed enemies are parked.
pub const ENEMY_GRAVEYARD: (f32, f32) = (-1000.0, -1000.0);

/// Minimum spawn distance between an enemy and the player (pixels).
pub const ENEMY_SPAWN_MIN_DISTANCE: f32 = 320.0;

// --- Projectiles ---

pub const PROJECTILE_CAPACITY: usize = 256;

/// Half extent of a projectile's collision box (pixels).
pub const PROJECTILE_HALF_SIZE: i32 = 3;

pub const PLAYER_SHOT_SPEED: f32 = 520.0;
pub const PLAYER_SHOT_TTL: f32 = 1.2;
pub const PLAYER_SHOT_DAMAGE: f32 = 15.0;
pub const PLAYER_SHOT_SPREAD_DEG: f32 = 4.0;
pub const PLAYER_SHOT_KNOCKBACK: f32 = 140.0;

pub const ENEMY_SHOT_SPEED: f32 = 400.0;
pub const ENEMY_SHOT_TTL: f32 = 1.5;
pub const ENEMY_SHOT_DAMAGE: f32 = 8.0;
pub const ENEMY_SHOT_SPREAD_DEG: f32 = 6.0;
pub const ENEMY_SHOT_KNOCKBACK: f32 = 80.0;

// --- Particles ---

pub const PARTICLE_CAPACITY: usize = 512;
pub const IMPACT_PARTICLE_COUNT: usize = 6;
pub const IMPACT_PARTICLE_SPEED_MIN: f32 = 40.0;
pub const IMPACT_PARTICLE_SPEED_MAX: f32 = 120.0;
pub const IMPACT_PARTICLE_TTL_MIN: f32 = 0.25;
pub const IMPACT_PARTICLE_TTL_MAX: f32 = 0.5;

pub const PLAYER_SHOT_COLOR: [u8; 3] = [230, 230, 80];
pub const ENEMY_SHOT_COLOR: [u8; 3] = [230, 100, 100];
pub const WALL_SPARK_COLOR: [u8; 3] = [180, 180, 190];
