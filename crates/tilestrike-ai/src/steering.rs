//! Velocity steering helpers shared by the player and enemies.

use glam::Vec2;
use rand::Rng;

/// Move `current` toward `target` by at most `max_delta`.
///
/// Snaps to `target` when it is within reach, so the result never overshoots.
pub fn approach(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let diff = target - current;
    let len = diff.length();
    if len <= max_delta || len < 1e-6 {
        return target;
    }
    current + diff / len * max_delta
}

/// Unit vector from `from` toward `to`, or zero when the points coincide.
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let diff = to - from;
    if diff.length_squared() > 1e-6 {
        diff.normalize()
    } else {
        Vec2::ZERO
    }
}

/// Pick a fresh patrol heading, uniformly over the circle.
pub fn roll_patrol_heading<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec2::from_angle(angle)
}
