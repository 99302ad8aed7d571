//! Normalised per-frame input consumed by the simulation.
//!
//! Device polling and key bindings live outside the core; the simulation
//! only ever sees a move vector, a cursor position and named actions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Named player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
    Interact,
    Pause,
    QuickSave,
    QuickLoad,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Fire,
        Action::Interact,
        Action::Pause,
        Action::QuickSave,
        Action::QuickLoad,
    ];

    /// Config key for this action (`"move_up"`, `"quicksave"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::MoveLeft => "move_left",
            Action::MoveRight => "move_right",
            Action::Fire => "fire",
            Action::Interact => "interact",
            Action::Pause => "pause",
            Action::QuickSave => "quicksave",
            Action::QuickLoad => "quickload",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.name() == name)
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Small set of actions, one bit per variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet(u16);

impl ActionSet {
    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn remove(&mut self, action: Action) {
        self.0 &= !action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Actions in `self` that are not in `other`.
    pub fn difference(&self, other: &ActionSet) -> ActionSet {
        ActionSet(self.0 & !other.0)
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::default();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

/// Input sampled once per real frame and applied to every tick of that frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Movement in [-1, 1]², never longer than 1.
    move_axis: Vec2,
    /// Cursor in screen pixels.
    pub cursor_screen: Vec2,
    pub pressed: ActionSet,
    pub held: ActionSet,
    pub released: ActionSet,
}

impl InputFrame {
    /// Frame with the given move vector, clamped to unit length.
    pub fn with_move(x: f32, y: f32) -> Self {
        let mut frame = Self::default();
        frame.set_move(x, y);
        frame
    }

    pub fn set_move(&mut self, x: f32, y: f32) {
        let v = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
        self.move_axis = if v.length_squared() > 1.0 {
            v.normalize()
        } else {
            v
        };
    }

    pub fn move_vector(&self) -> Vec2 {
        self.move_axis
    }

    pub fn was_pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(action)
    }

    pub fn was_released(&self, action: Action) -> bool {
        self.released.contains(action)
    }

    /// Copy with edge-triggered actions cleared; used for the second and
    /// later ticks of a frame so a press is only seen once.
    pub fn without_edges(&self) -> Self {
        Self {
            pressed: ActionSet::default(),
            released: ActionSet::default(),
            ..*self
        }
    }
}
