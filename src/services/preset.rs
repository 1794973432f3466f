//! Filter preset service
//!
//! Saves named filter specifications and applies them to expense snapshots.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::engine::filter_expenses;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, FilterPreset, FilterSpec};
use crate::storage::Storage;

/// Service for filter preset management
pub struct PresetService<'a> {
    storage: &'a Storage,
}

impl<'a> PresetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Save a new preset under a unique name
    pub fn save(&self, name: &str, filters: FilterSpec) -> ExpenseResult<FilterPreset> {
        let name = name.trim();
        let preset = FilterPreset::new(name, filters);

        preset
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        if self.storage.presets.get_by_name(name)?.is_some() {
            return Err(ExpenseError::Duplicate {
                entity_type: "Preset",
                identifier: name.to_string(),
            });
        }

        self.storage.presets.upsert(preset.clone())?;
        self.storage.presets.save()?;

        self.storage.log_create(
            EntityType::Preset,
            preset.id.to_string(),
            Some(preset.name.clone()),
            &preset,
        )?;

        Ok(preset)
    }

    /// All presets in creation order
    pub fn list(&self) -> ExpenseResult<Vec<FilterPreset>> {
        self.storage.presets.get_all()
    }

    /// Find a preset by name first, then by ID
    pub fn find(&self, identifier: &str) -> ExpenseResult<FilterPreset> {
        if let Some(preset) = self.storage.presets.get_by_name(identifier)? {
            return Ok(preset);
        }

        self.storage
            .presets
            .get_by_identifier(identifier)?
            .ok_or_else(|| ExpenseError::preset_not_found(identifier))
    }

    /// Delete a preset, returning the removed preset
    pub fn delete(&self, identifier: &str) -> ExpenseResult<FilterPreset> {
        let preset = self.find(identifier)?;

        self.storage.presets.delete(preset.id)?;
        self.storage.presets.save()?;

        self.storage.log_delete(
            EntityType::Preset,
            preset.id.to_string(),
            Some(preset.name.clone()),
            &preset,
        )?;

        Ok(preset)
    }

    /// Records matching the preset's filters, in input order
    pub fn apply(&self, preset: &FilterPreset, records: &[Expense], today: NaiveDate) -> Vec<Expense> {
        filter_expenses(records, &preset.filters, today)
    }
}
