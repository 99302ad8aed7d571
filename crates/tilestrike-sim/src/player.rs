//! The player entity.

use glam::Vec2;
use rand::Rng;

use tilestrike_ai::steering::{approach, direction_to};
use tilestrike_core::constants::*;
use tilestrike_core::enums::DamageKind;
use tilestrike_core::events::SimEvent;
use tilestrike_core::input::{Action, InputFrame};
use tilestrike_core::state::PlayerView;
use tilestrike_core::types::{Positioned, Rect};
use tilestrike_world::TileMap;

use crate::projectile::{self, ProjectilePool, ShotSpec};

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub health: f32,
    /// Fraction of incoming damage absorbed.
    pub armor: f32,
    pub is_dead: bool,
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub fire_cooldown: f32,
    fire_timer: f32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            health: PLAYER_MAX_HEALTH,
            armor: PLAYER_ARMOR,
            is_dead: false,
            max_speed: PLAYER_MAX_SPEED,
            accel: PLAYER_ACCEL,
            decel: PLAYER_DECEL,
            fire_cooldown: PLAYER_FIRE_COOLDOWN,
            fire_timer: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.position, self.size)
    }

    /// One tick: steer, move through the map, take zone damage, maybe fire.
    /// A dead player does nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        input: &InputFrame,
        cursor_world: Vec2,
        map: &TileMap,
        projectiles: &mut ProjectilePool,
        rng: &mut R,
        dt: f32,
        events: &mut Vec<SimEvent>,
    ) {
        if self.is_dead {
            return;
        }

        let wish = input.move_vector();
        self.velocity = if wish.length_squared() > INPUT_DEADZONE_SQ {
            approach(self.velocity, wish.normalize() * self.max_speed, self.accel * dt)
        } else {
            approach(self.velocity, Vec2::ZERO, self.decel * dt)
        };

        let delta = self.velocity * dt;
        let moved = map.resolve_movement(&self.rect(), delta.x, delta.y);
        self.position = moved.rect.center();

        let dps = map.damage_per_second(&moved.rect);
        if dps > 0.0 {
            self.apply_damage(dps * dt, DamageKind::Environment, events);
        }

        self.fire_timer -= dt;
        if input.is_held(Action::Fire) && self.fire_timer <= 0.0 {
            let aim = direction_to(self.position, cursor_world);
            if aim != Vec2::ZERO {
                projectile::fire(projectiles, rng, self.position, aim, &ShotSpec::PLAYER, events);
                self.fire_timer = self.fire_cooldown;
            }
        }
    }

    /// Armor-reduced damage. Ignored once dead. Returns the health removed.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        if self.is_dead {
            return 0.0;
        }
        let effective = (amount * (1.0 - self.armor)).max(0.0);
        self.health = (self.health - effective).max(0.0);
        if self.health <= 0.0 {
            self.is_dead = true;
        }
        effective
    }

    /// [`Player::take_damage`] plus the matching events.
    pub fn apply_damage(&mut self, amount: f32, kind: DamageKind, events: &mut Vec<SimEvent>) {
        let was_dead = self.is_dead;
        let effective = self.take_damage(amount);
        if was_dead {
            return;
        }
        events.push(SimEvent::PlayerDamaged {
            amount: effective,
            kind,
        });
        if self.is_dead {
            tracing::info!(?kind, "player died");
            events.push(SimEvent::PlayerDied);
        }
    }

    /// Overwrite health from outside the damage path (save loading);
    /// the dead flag is recomputed.
    pub fn restore_health(&mut self, health: f32) {
        self.health = health;
        self.is_dead = health <= 0.0;
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            size: self.size,
            health: self.health,
            is_dead: self.is_dead,
        }
    }
}

impl Positioned for Player {
    fn position(&self) -> Vec2 {
        self.position
    }
}
