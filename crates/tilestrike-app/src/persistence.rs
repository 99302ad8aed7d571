//! Save files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tilestrike_core::error::Result;
use tilestrike_core::save::SaveData;

const QUICK_SLOT: &str = "quick_save";

/// JSON save slots under one directory.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    pub fn quick_save(&self, data: &SaveData) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(QUICK_SLOT);
        fs::write(&path, serde_json::to_string_pretty(data)?)?;
        tracing::info!(path = %path.display(), enemies = data.enemies.len(), "quick-save written");
        Ok(())
    }

    /// `Ok(None)` when no quick-save exists yet.
    pub fn quick_load(&self) -> Result<Option<SaveData>> {
        let path = self.slot_path(QUICK_SLOT);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no quick-save to load");
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Auto-save shares the quick-save slot.
    pub fn auto_save(&self, data: &SaveData) -> Result<()> {
        self.quick_save(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilestrike_core::save::ActorSave;

    fn store(name: &str) -> SaveStore {
        let dir = std::env::temp_dir().join(format!("tilestrike_test_saves_{name}"));
        let _ = fs::remove_dir_all(&dir);
        SaveStore::new(dir)
    }

    fn sample() -> SaveData {
        SaveData {
            player: ActorSave::new(100.0, 200.0, 80.0),
            enemies: vec![ActorSave::new(400.0, 300.0, 50.0)],
        }
    }

    #[test]
    fn test_quick_load_without_file_is_none() {
        let store = store("empty");
        assert!(store.quick_load().unwrap().is_none());
    }

    #[test]
    fn test_quick_save_then_load() {
        let store = store("round_trip");
        store.quick_save(&sample()).unwrap();
        assert!(store.dir().join("quick_save.json").exists());
        assert_eq!(store.quick_load().unwrap(), Some(sample()));
        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn test_auto_save_overwrites_quick_slot() {
        let store = store("auto");
        store.quick_save(&SaveData::default()).unwrap();
        store.auto_save(&sample()).unwrap();
        assert_eq!(store.quick_load().unwrap(), Some(sample()));
        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn test_corrupt_save_is_an_error() {
        let store = store("corrupt");
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.dir().join("quick_save.json"), "[1, 2").unwrap();
        assert!(store.quick_load().is_err());
        let _ = fs::remove_dir_all(store.dir());
    }
}
