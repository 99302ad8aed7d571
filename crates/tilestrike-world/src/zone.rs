//! Static map zones.

use serde::{Deserialize, Serialize};

use tilestrike_core::enums::ZoneKind;
use tilestrike_core::types::Rect;

/// Axis-aligned region in world pixels with a per-second effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub rect: Rect,
    /// Health removed per second while overlapping the zone.
    pub dps: f32,
}

impl Zone {
    pub fn damage(rect: Rect, dps: f32) -> Self {
        Self {
            kind: ZoneKind::Damage,
            rect,
            dps,
        }
    }
}
