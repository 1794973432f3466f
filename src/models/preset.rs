//! Saved filter presets
//!
//! A preset is a named `FilterSpec`. The engine only ever sees the spec; the
//! id, name and timestamp belong to the preset store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PresetId;
use super::query::FilterSpec;

/// Maximum preset name length after trimming
pub const MAX_PRESET_NAME_LEN: usize = 50;

/// A named, persisted filter specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPreset {
    pub id: PresetId,
    pub name: String,
    pub filters: FilterSpec,
    pub created_at: DateTime<Utc>,
}

impl FilterPreset {
    /// Create a new preset
    pub fn new(name: impl Into<String>, filters: FilterSpec) -> Self {
        Self {
            id: PresetId::new(),
            name: name.into(),
            filters,
            created_at: Utc::now(),
        }
    }

    /// Validate the preset name
    pub fn validate(&self) -> Result<(), PresetValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PresetValidationError::EmptyName);
        }
        if name.chars().count() > MAX_PRESET_NAME_LEN {
            return Err(PresetValidationError::NameTooLong(name.chars().count()));
        }
        Ok(())
    }
}

impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for presets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for PresetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Preset name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Preset name must be at most {} characters (got {})",
                MAX_PRESET_NAME_LEN, len
            ),
        }
    }
}

impl std::error::Error for PresetValidationError {}
