//! Enemy entities driven by the patrol/chase FSM.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tilestrike_ai::fsm::{self, EnemyContext, Movement};
use tilestrike_ai::profiles::EnemyProfile;
use tilestrike_ai::steering::{approach, direction_to, roll_patrol_heading};
use tilestrike_core::constants::*;
use tilestrike_core::enums::EnemyState;
use tilestrike_core::events::SimEvent;
use tilestrike_core::state::EnemyView;
use tilestrike_core::types::{Positioned, Rect};
use tilestrike_world::{has_line_of_sight, TileMap};

use crate::projectile::{self, ProjectilePool, ShotSpec};

#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub health: f32,
    pub state: EnemyState,
    pub profile: EnemyProfile,
    patrol_heading: Vec2,
    patrol_timer: f32,
    fire_timer: f32,
    /// Private stream for patrol re-rolls so one enemy's wandering does
    /// not shift another's.
    rng: ChaCha8Rng,
}

impl Enemy {
    pub fn new(position: Vec2, seed: u64) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size: Vec2::splat(ENEMY_SIZE),
            health: ENEMY_MAX_HEALTH,
            state: EnemyState::Patrol,
            profile: EnemyProfile::default(),
            patrol_heading: Vec2::X,
            patrol_timer: 0.0,
            fire_timer: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.position, self.size)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn patrol_heading(&self) -> Vec2 {
        self.patrol_heading
    }

    /// One tick of behaviour against `target`.
    #[allow(clippy::too_many_arguments)]
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        target: Vec2,
        map: &TileMap,
        projectiles: &mut ProjectilePool,
        shot_rng: &mut R,
        dt: f32,
        events: &mut Vec<SimEvent>,
    ) {
        self.patrol_timer += dt;
        self.fire_timer -= dt;

        let ctx = EnemyContext {
            state: self.state,
            distance: self.position.distance(target),
            has_line_of_sight: has_line_of_sight(map, self.position, target),
            patrol_timer: self.patrol_timer,
            fire_timer: self.fire_timer,
        };
        let decision = fsm::evaluate(&ctx, &self.profile);

        if decision.state_changed {
            tracing::debug!(index, from = ?self.state, to = ?decision.new_state, "enemy state change");
            self.state = decision.new_state;
            events.push(SimEvent::EnemyStateChanged {
                index,
                state: decision.new_state,
            });
        }

        if decision.reroll_patrol {
            self.patrol_timer = 0.0;
            self.patrol_heading = roll_patrol_heading(&mut self.rng);
        }

        match decision.movement {
            Movement::Hold => {}
            Movement::Wander => self.steer(self.patrol_heading, map, dt),
            Movement::Pursue => self.steer(direction_to(self.position, target), map, dt),
        }

        if decision.fire {
            let aim = direction_to(self.position, target);
            if aim != Vec2::ZERO {
                projectile::fire(projectiles, shot_rng, self.position, aim, &ShotSpec::ENEMY, events);
                self.fire_timer = self.profile.fire_cooldown;
            }
        }
    }

    fn steer(&mut self, heading: Vec2, map: &TileMap, dt: f32) {
        let desired = heading * self.profile.max_speed;
        self.velocity = approach(self.velocity, desired, self.profile.accel * dt);
        let delta = self.velocity * dt;
        let moved = map.resolve_movement(&self.rect(), delta.x, delta.y);
        self.position = moved.rect.center();
    }

    /// Subtract health. Returns true on the hit that kills; the body is
    /// parked off-map.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        let was_alive = self.is_alive();
        self.health -= amount;
        if self.health <= 0.0 {
            self.position = Vec2::new(ENEMY_GRAVEYARD.0, ENEMY_GRAVEYARD.1);
            self.velocity = Vec2::ZERO;
        }
        was_alive && !self.is_alive()
    }

    pub fn view(&self) -> EnemyView {
        EnemyView {
            position: self.position,
            size: self.size,
            health: self.health,
            state: self.state,
        }
    }
}

impl Positioned for Enemy {
    fn position(&self) -> Vec2 {
        self.position
    }
}
