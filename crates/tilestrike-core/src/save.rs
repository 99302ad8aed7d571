//! Save-game schema.
//!
//! Only entity position and health are persisted. The tile map is
//! regenerated from its seed on every run and is not part of a save.

use serde::{Deserialize, Serialize};

/// Position and health of one actor. Missing fields leave the live value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorSave {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<f32>,
}

impl ActorSave {
    pub fn new(x: f32, y: f32, hp: f32) -> Self {
        Self {
            pos: Some([x, y]),
            hp: Some(hp),
        }
    }
}

/// Full save data written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub player: ActorSave,
    /// Enemies in live array order.
    #[serde(default)]
    pub enemies: Vec<ActorSave>,
}
