//! Enemy behaviour finite state machine.
//!
//! Pure functions that compute state transitions and the movement/fire
//! intent for one enemy based on its situation. Operates on plain data;
//! the caller owns the entity and applies the decision.

use tilestrike_core::enums::EnemyState;

use crate::profiles::EnemyProfile;

/// Input to the FSM for a single enemy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub state: EnemyState,
    /// Distance to the target (px).
    pub distance: f32,
    /// Whether the target is visible.
    pub has_line_of_sight: bool,
    /// Seconds since the last patrol re-roll, already advanced this tick.
    pub patrol_timer: f32,
    /// Seconds until the next shot is allowed, already advanced this tick.
    pub fire_timer: f32,
}

/// How the enemy should move this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// No steering on this tick.
    Hold,
    /// Steer along the patrol heading.
    Wander,
    /// Steer straight at the target.
    Pursue,
}

/// Output from the FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyDecision {
    pub new_state: EnemyState,
    pub state_changed: bool,
    pub movement: Movement,
    /// Re-roll the patrol heading and reset the patrol timer before moving.
    pub reroll_patrol: bool,
    /// Fire one shot at the target and restart the fire timer.
    pub fire: bool,
}

impl EnemyDecision {
    fn transition(to: EnemyState) -> Self {
        Self {
            new_state: to,
            state_changed: true,
            movement: Movement::Hold,
            reroll_patrol: false,
            fire: false,
        }
    }
}

/// Evaluate the FSM for one enemy.
///
/// A tick that changes state does nothing else; movement and firing
/// resume on the following tick.
pub fn evaluate(ctx: &EnemyContext, profile: &EnemyProfile) -> EnemyDecision {
    match ctx.state {
        EnemyState::Patrol => evaluate_patrol(ctx, profile),
        EnemyState::Chase => evaluate_chase(ctx, profile),
    }
}

fn evaluate_patrol(ctx: &EnemyContext, profile: &EnemyProfile) -> EnemyDecision {
    if ctx.distance < profile.chase_enter_range && ctx.has_line_of_sight {
        return EnemyDecision::transition(EnemyState::Chase);
    }

    EnemyDecision {
        new_state: EnemyState::Patrol,
        state_changed: false,
        movement: Movement::Wander,
        reroll_patrol: ctx.patrol_timer > profile.patrol_reroll_secs,
        fire: false,
    }
}

fn evaluate_chase(ctx: &EnemyContext, profile: &EnemyProfile) -> EnemyDecision {
    if ctx.distance > profile.chase_exit_range || !ctx.has_line_of_sight {
        return EnemyDecision::transition(EnemyState::Patrol);
    }

    EnemyDecision {
        new_state: EnemyState::Chase,
        state_changed: false,
        movement: Movement::Pursue,
        reroll_patrol: false,
        fire: ctx.distance < profile.fire_range && ctx.fire_timer <= 0.0,
    }
}
