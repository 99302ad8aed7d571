//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in integer world pixels.
///
/// `x`/`y` are the top-left corner; `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of `size` centred on `center`. Corner and extent are truncated
    /// toward zero, matching how entity boxes are derived every tick.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: (center.x - size.x * 0.5) as i32,
            y: (center.y - size.y * 0.5) as i32,
            w: size.x as i32,
            h: size.y as i32,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Integer centre `(x + w/2, y + h/2)` as a float vector.
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.x + self.w / 2) as f32, (self.y + self.h / 2) as f32)
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap,
    /// and empty boxes never overlap anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Copy shifted by whole pixels.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Copy grown by `px` on every side.
    pub fn inflate(&self, px: i32) -> Rect {
        Rect::new(self.x - px, self.y - px, self.w + px * 2, self.h + px * 2)
    }

    /// Move (never resize) this box so it lies inside `bounds`.
    ///
    /// On an axis where the box is at least as large as the bounds it is
    /// centred on the bounds instead.
    pub fn clamped_within(&self, bounds: &Rect) -> Rect {
        let x = clamp_axis(self.x, self.w, bounds.x, bounds.w);
        let y = clamp_axis(self.y, self.h, bounds.y, bounds.h);
        Rect::new(x, y, self.w, self.h)
    }
}

fn clamp_axis(pos: i32, len: i32, min: i32, span: i32) -> i32 {
    if len >= span {
        min + span / 2 - len / 2
    } else if pos < min {
        min
    } else if pos + len > min + span {
        min + span - len
    } else {
        pos
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Anything with a world-space position that other systems may track.
pub trait Positioned {
    fn position(&self) -> Vec2;
}
