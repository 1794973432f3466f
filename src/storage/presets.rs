//! Filter preset repository
//!
//! Manages loading and saving presets to `presets.json`, in creation order.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{FilterPreset, PresetId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PresetData {
    presets: Vec<FilterPreset>,
}

/// Repository for preset persistence
pub struct PresetRepository {
    path: PathBuf,
    data: RwLock<Vec<FilterPreset>>,
}

impl PresetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> ExpenseResult<()> {
        let file_data: PresetData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.presets;

        Ok(())
    }

    pub fn save(&self) -> ExpenseResult<()> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(
            &self.path,
            &PresetData {
                presets: data.clone(),
            },
        )
    }

    pub fn get(&self, id: PresetId) -> ExpenseResult<Option<FilterPreset>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|p| p.id == id).cloned())
    }

    /// Preset with the given name, compared case-insensitively after trimming
    pub fn get_by_name(&self, name: &str) -> ExpenseResult<Option<FilterPreset>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let wanted = name.trim().to_lowercase();
        Ok(data
            .iter()
            .find(|p| p.name.trim().to_lowercase() == wanted)
            .cloned())
    }

    /// Preset whose ID matches a user-supplied identifier
    pub fn get_by_identifier(&self, identifier: &str) -> ExpenseResult<Option<FilterPreset>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|p| p.id.matches(identifier)).cloned())
    }

    pub fn get_all(&self) -> ExpenseResult<Vec<FilterPreset>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    pub fn upsert(&self, preset: FilterPreset) -> ExpenseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|p| p.id == preset.id) {
            Some(existing) => *existing = preset,
            None => data.push(preset),
        }

        Ok(())
    }

    pub fn delete(&self, id: PresetId) -> ExpenseResult<Option<FilterPreset>> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data
            .iter()
            .position(|p| p.id == id)
            .map(|index| data.remove(index)))
    }
}
