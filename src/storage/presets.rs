use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use super::error::StorageError;
use super::jsonl::{self, generate_id};
use super::stores::PresetStore;
use crate::model::{TestPreset, validate_name};

const DEFAULT_NAME_PREFIX: &str = "Preset";

/// Stores all presets in a single JSONL file, one preset per line.
pub struct PresetManager {
    path: PathBuf,
}

impl PresetManager {
    /// Creates a manager backed by the given file. The file is created on
    /// first write.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<TestPreset>, StorageError> {
        jsonl::read_all(&self.path)
    }
}

impl PresetStore for PresetManager {
    fn get_all_presets(&self) -> Result<Vec<TestPreset>, StorageError> {
        self.load()
    }

    fn save_preset(&mut self, mut preset: TestPreset) -> Result<TestPreset, StorageError> {
        preset.name = validate_name(&preset.name)?;
        let mut presets = self.load()?;
        if preset.id.is_empty() {
            let now = Utc::now();
            preset.id = generate_id("preset", now, |id| presets.iter().any(|p| p.id == id));
            preset.created_at.get_or_insert(now);
        }
        match presets.iter_mut().find(|p| p.id == preset.id) {
            Some(slot) => *slot = preset.clone(),
            None => presets.push(preset.clone()),
        }
        jsonl::write_all(&self.path, &presets)?;
        info!(preset_id = %preset.id, name = %preset.name, "saved preset");
        Ok(preset)
    }

    fn rename_preset(&mut self, id: &str, new_name: &str) -> Result<(), StorageError> {
        let name = validate_name(new_name)?;
        let mut presets = self.load()?;
        let preset = presets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StorageError::PresetNotFound(id.to_string()))?;
        preset.name = name;
        jsonl::write_all(&self.path, &presets)
    }

    fn delete_preset(&mut self, id: &str) -> Result<(), StorageError> {
        let mut presets = self.load()?;
        let before = presets.len();
        presets.retain(|p| p.id != id);
        if presets.len() == before {
            return Err(StorageError::PresetNotFound(id.to_string()));
        }
        jsonl::write_all(&self.path, &presets)
    }

    fn next_default_name(&self) -> Result<String, StorageError> {
        let presets = self.load()?;
        let name = (presets.len() + 1..)
            .map(|n| format!("{DEFAULT_NAME_PREFIX} {n}"))
            .find(|candidate| !presets.iter().any(|p| p.name == *candidate))
            .unwrap_or_else(|| DEFAULT_NAME_PREFIX.to_string());
        Ok(name)
    }
}
