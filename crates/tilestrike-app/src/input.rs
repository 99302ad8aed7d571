//! Key bindings → input frames, plus the scripted key source used by the
//! headless runner.

use std::collections::BTreeMap;

use tilestrike_core::input::{Action, ActionSet, InputFrame};
use tilestrike_core::Vec2;

/// Resolves held key names to actions and tracks edges between frames.
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    bindings: Vec<(Action, Vec<String>)>,
    previous_held: ActionSet,
}

impl InputMapper {
    /// Unknown action names in `bindings` are logged and ignored.
    pub fn new(bindings: &BTreeMap<String, Vec<String>>) -> Self {
        let bindings = bindings
            .iter()
            .filter_map(|(name, keys)| match Action::from_name(name) {
                Some(action) => Some((action, keys.clone())),
                None => {
                    tracing::warn!(action = %name, "unknown action in input bindings");
                    None
                }
            })
            .collect();
        Self {
            bindings,
            previous_held: ActionSet::default(),
        }
    }

    /// Build the frame for the keys held right now.
    pub fn frame(&mut self, held_keys: &[&str], cursor_screen: Vec2) -> InputFrame {
        let held: ActionSet = self
            .bindings
            .iter()
            .filter(|(_, keys)| keys.iter().any(|k| held_keys.contains(&k.as_str())))
            .map(|(action, _)| *action)
            .collect();

        let axis = |neg: Action, pos: Action| {
            let mut v = 0.0;
            if held.contains(neg) {
                v -= 1.0;
            }
            if held.contains(pos) {
                v += 1.0;
            }
            v
        };

        let mut frame = InputFrame::with_move(
            axis(Action::MoveLeft, Action::MoveRight),
            axis(Action::MoveUp, Action::MoveDown),
        );
        frame.cursor_screen = cursor_screen;
        frame.held = held;
        frame.pressed = held.difference(&self.previous_held);
        frame.released = self.previous_held.difference(&held);
        self.previous_held = held;
        frame
    }
}

/// One step of a scripted timeline: keys held from `start` (inclusive)
/// to `end` (exclusive), counted in real frames.
#[derive(Debug, Clone)]
struct Segment {
    start: u64,
    end: u64,
    keys: &'static [&'static str],
}

/// Fixed key timeline for unattended runs: walk right while firing,
/// quick-save, walk back, quick-load, then quit.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    timeline: Vec<Segment>,
    cursor_screen: Vec2,
    frame: u64,
    length: u64,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        let timeline = vec![
            Segment { start: 0, end: 180, keys: &["K_d", "MOUSE_LEFT"] },
            Segment { start: 200, end: 201, keys: &["K_F5"] },
            Segment { start: 210, end: 300, keys: &["K_a"] },
            Segment { start: 320, end: 321, keys: &["K_F9"] },
        ];
        Self {
            timeline,
            cursor_screen: Vec2::new(900.0, 270.0),
            frame: 0,
            length: 360,
        }
    }
}

impl ScriptedInput {
    /// Keys held during the next frame.
    pub fn next_keys(&mut self) -> Vec<&'static str> {
        let frame = self.frame;
        self.frame += 1;
        self.timeline
            .iter()
            .filter(|s| (s.start..s.end).contains(&frame))
            .flat_map(|s| s.keys.iter().copied())
            .collect()
    }

    pub fn cursor_screen(&self) -> Vec2 {
        self.cursor_screen
    }

    /// True once the whole timeline has been played.
    pub fn quit_requested(&self) -> bool {
        self.frame >= self.length
    }
}
