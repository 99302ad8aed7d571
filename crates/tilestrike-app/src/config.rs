//! Application configuration persisted as JSON.
//!
//! A missing file is created with defaults. A present file is merged onto
//! the defaults key by key, so older files pick up new settings.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tilestrike_core::error::Result;
use tilestrike_core::input::Action;
use tilestrike_sim::SimConfig;

/// Default location, relative to the working directory.
pub const CONFIG_PATH: &str = "config/config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicsConfig {
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    pub master_volume: f32,
}

/// Settings for the headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Stop after this many real frames. `None` runs until the input
    /// source reports quit.
    pub frame_cap: Option<u64>,
    pub target_fps: u32,
    pub auto_save_on_exit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub lang: String,
    pub graphics: GraphicsConfig,
    pub audio: AudioConfig,
    /// Action name → key names. Several keys may drive one action.
    pub input: BTreeMap<String, Vec<String>>,
    pub sim: SimConfig,
    pub session: SessionConfig,
    pub save_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lang: "ru".into(),
            graphics: GraphicsConfig { scale: 1.0 },
            audio: AudioConfig { master_volume: 1.0 },
            input: default_bindings(),
            sim: SimConfig::default(),
            session: SessionConfig {
                frame_cap: Some(600),
                target_fps: 60,
                auto_save_on_exit: true,
            },
            save_dir: PathBuf::from("saves"),
        }
    }
}

fn default_bindings() -> BTreeMap<String, Vec<String>> {
    let keys: [(Action, &[&str]); 9] = [
        (Action::MoveUp, &["K_w", "K_UP"]),
        (Action::MoveDown, &["K_s", "K_DOWN"]),
        (Action::MoveLeft, &["K_a", "K_LEFT"]),
        (Action::MoveRight, &["K_d", "K_RIGHT"]),
        (Action::Fire, &["MOUSE_LEFT", "JOY_BTN_0"]),
        (Action::Interact, &["K_e"]),
        (Action::Pause, &["K_ESCAPE"]),
        (Action::QuickSave, &["K_F5"]),
        (Action::QuickLoad, &["K_F9"]),
    ];
    keys.into_iter()
        .map(|(action, keys)| {
            let keys = keys.iter().map(|k| k.to_string()).collect();
            (action.name().to_string(), keys)
        })
        .collect()
}

impl AppConfig {
    /// Load `path`, or write and return the defaults when it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        let defaults = AppConfig::default();
        if !path.exists() {
            defaults.save(path)?;
            tracing::info!(path = %path.display(), "default config written");
            return Ok(defaults);
        }

        let text = fs::read_to_string(path)?;
        let stored: Value = serde_json::from_str(&text)?;
        let mut merged = serde_json::to_value(&defaults)?;
        deep_merge(&mut merged, stored);
        let config = serde_json::from_value(merged)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Objects merge recursively; anything else in `overlay` replaces `base`.
fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => deep_merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
