//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the tile map, the player, the enemy list and
//! both object pools. It applies one input frame per tick, runs every
//! update in a fixed order, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use tilestrike_core::constants::*;
use tilestrike_core::enums::{GamePhase, PersistenceRequest};
use tilestrike_core::error::{Result, TilestrikeError};
use tilestrike_core::events::SimEvent;
use tilestrike_core::input::{Action, InputFrame};
use tilestrike_core::save::{ActorSave, SaveData};
use tilestrike_core::state::GameStateSnapshot;
use tilestrike_core::types::SimTime;
use tilestrike_world::{generate, MapGenConfig, TileMap};

use crate::camera::Camera;
use crate::enemy::Enemy;
use crate::particle::{self, ParticlePool};
use crate::player::Player;
use crate::projectile::{self, ProjectilePool};
use crate::snapshot;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for spread, particles and enemy placement. Same seed and
    /// same inputs give the same simulation.
    pub seed: u64,
    /// Seed for the map generator.
    pub map_seed: u64,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    pub map_tiles_w: usize,
    pub map_tiles_h: usize,
    pub tile_size: i32,
    pub obstacle_density: f64,
    pub player_spawn_tile: (usize, usize),
    pub view_width: f32,
    pub view_height: f32,
    pub enemy_count: usize,
    pub projectile_capacity: usize,
    pub particle_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            map_seed: MAP_SEED,
            tick_rate: TICK_RATE,
            map_tiles_w: MAP_TILES_W,
            map_tiles_h: MAP_TILES_H,
            tile_size: TILE_SIZE,
            obstacle_density: OBSTACLE_DENSITY,
            player_spawn_tile: PLAYER_SPAWN_TILE,
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            enemy_count: DEFAULT_ENEMY_COUNT,
            projectile_capacity: PROJECTILE_CAPACITY,
            particle_capacity: PARTICLE_CAPACITY,
        }
    }
}

impl SimConfig {
    /// Fixed tick duration in seconds.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate.max(1))
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate == 0 {
            return Err(TilestrikeError::InvalidConfig("tick_rate must be positive".into()));
        }
        if self.tile_size <= 0 {
            return Err(TilestrikeError::InvalidConfig("tile_size must be positive".into()));
        }
        if self.map_tiles_w < 3 || self.map_tiles_h < 3 {
            return Err(TilestrikeError::InvalidConfig(format!(
                "map must be at least 3x3 tiles, got {}x{}",
                self.map_tiles_w, self.map_tiles_h
            )));
        }
        let (sx, sy) = self.player_spawn_tile;
        if sx == 0 || sy == 0 || sx + 1 >= self.map_tiles_w || sy + 1 >= self.map_tiles_h {
            return Err(TilestrikeError::InvalidConfig(format!(
                "player spawn tile ({sx}, {sy}) is not an interior tile"
            )));
        }
        if self.view_width <= 0.0 || self.view_height <= 0.0 {
            return Err(TilestrikeError::InvalidConfig("view size must be positive".into()));
        }
        Ok(())
    }

    pub fn map_gen(&self) -> MapGenConfig {
        MapGenConfig {
            tiles_w: self.map_tiles_w,
            tiles_h: self.map_tiles_h,
            tile_size: self.tile_size,
            seed: self.map_seed,
            obstacle_density: self.obstacle_density,
            spawn_clearing: Some(self.player_spawn_tile),
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    dt: f64,
    map: TileMap,
    player: Player,
    enemies: Vec<Enemy>,
    projectiles: ProjectilePool,
    particles: ParticlePool,
    camera: Camera,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Generate the map from `config` and populate it.
    pub fn new(config: SimConfig) -> Self {
        let map = generate(&config.map_gen());
        Self::with_map(config, map)
    }

    /// Populate an existing map. The map size in `config` is ignored.
    pub fn with_map(config: SimConfig, map: TileMap) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let player = world_setup::spawn_player(&map, config.player_spawn_tile);
        let enemies =
            world_setup::spawn_enemies(&map, &mut rng, config.enemy_count, player.position, config.seed);
        let world_size = Vec2::new(map.pixel_width() as f32, map.pixel_height() as f32);
        let mut camera = Camera::new(Vec2::new(config.view_width, config.view_height), world_size);
        camera.follow(&player);

        tracing::info!(
            seed = config.seed,
            tick_rate = config.tick_rate,
            enemies = enemies.len(),
            "simulation ready"
        );

        Self {
            dt: config.dt(),
            projectiles: ProjectilePool::new(config.projectile_capacity),
            particles: ParticlePool::new(config.particle_capacity),
            config,
            map,
            player,
            enemies,
            camera,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns the save/load the player asked for, if any; the caller
    /// performs the file I/O. Edge-triggered actions are read from
    /// `input`, so a press should be delivered to one tick only.
    pub fn tick(&mut self, input: &InputFrame) -> Option<PersistenceRequest> {
        if input.was_pressed(Action::Pause) {
            self.toggle_pause();
        }

        if self.phase == GamePhase::Active {
            self.run_systems(input);
            self.time.advance(self.dt);
        }

        if input.was_pressed(Action::QuickSave) {
            Some(PersistenceRequest::QuickSave)
        } else if input.was_pressed(Action::QuickLoad) {
            Some(PersistenceRequest::QuickLoad)
        } else {
            None
        }
    }

    /// Current state for the renderer/HUD. Drains events collected since
    /// the previous snapshot.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(
            self.time,
            self.phase,
            &self.player,
            &self.enemies,
            &self.projectiles,
            &self.particles,
            &self.camera,
            events,
        )
    }

    /// Positions and health of the player and every enemy, in array order.
    pub fn to_save_data(&self) -> SaveData {
        let p = &self.player;
        SaveData {
            player: ActorSave::new(p.position.x, p.position.y, p.health),
            enemies: self
                .enemies
                .iter()
                .map(|e| ActorSave::new(e.position.x, e.position.y, e.health))
                .collect(),
        }
    }

    /// Merge a save onto the live entities by index. Extra saved enemies
    /// are ignored; live enemies past the end of the save keep their
    /// state; absent fields keep live values.
    pub fn apply_save_data(&mut self, data: &SaveData) {
        if let Some([x, y]) = data.player.pos {
            self.player.position = Vec2::new(x, y);
        }
        if let Some(hp) = data.player.hp {
            self.player.restore_health(hp);
        }
        for (enemy, saved) in self.enemies.iter_mut().zip(&data.enemies) {
            if let Some([x, y]) = saved.pos {
                enemy.position = Vec2::new(x, y);
            }
            if let Some(hp) = saved.hp {
                enemy.health = hp;
            }
        }
        self.camera.follow(&self.player);
        tracing::info!(
            saved_enemies = data.enemies.len(),
            live_enemies = self.enemies.len(),
            "save data applied"
        );
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Fixed tick duration in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &ProjectilePool {
        &self.projectiles
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Active => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Active,
        };
        tracing::info!(phase = ?self.phase, tick = self.time.tick, "phase toggled");
    }

    /// Run all updates in order.
    fn run_systems(&mut self, input: &InputFrame) {
        let dt = self.dt as f32;

        // 1. Player
        let cursor_world = self.camera.screen_to_world(input.cursor_screen);
        self.player.update(
            input,
            cursor_world,
            &self.map,
            &mut self.projectiles,
            &mut self.rng,
            dt,
            &mut self.events,
        );

        // 2. Enemies, array order; dead ones are skipped
        let target = self.player.position;
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if !enemy.is_alive() {
                continue;
            }
            enemy.update(
                index,
                target,
                &self.map,
                &mut self.projectiles,
                &mut self.rng,
                dt,
                &mut self.events,
            );
        }

        // 3. Projectiles
        let first_new = self.events.len();
        projectile::update(
            &mut self.projectiles,
            &self.map,
            dt,
            &mut self.player,
            &mut self.enemies,
            &mut self.events,
        );

        // 4. Impact bursts for this tick's hits and blocks
        particle::spawn_impacts(&mut self.particles, &mut self.rng, &self.events[first_new..]);

        // 5. Particles
        self.particles.update_settled(dt);

        // 6. Camera
        self.camera.follow(&self.player);
    }
}
