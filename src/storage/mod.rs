//! Storage layer for the expense tracker
//!
//! JSON file storage with atomic writes, plus the audit log every mutation
//! is recorded in.

pub mod expenses;
pub mod file_io;
pub mod presets;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use presets::PresetRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensePaths,
    audit: AuditLogger,
    pub expenses: ExpenseRepository,
    pub presets: PresetRepository,
}

impl Storage {
    /// Create storage rooted at `paths`, creating directories as needed
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            presets: PresetRepository::new(paths.presets_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> ExpenseResult<()> {
        self.expenses.load()?;
        self.presets.load()?;
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> ExpenseResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.expenses.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Money::from_cents(1999),
            Category::Entertainment,
            "Concert",
        );
        storage.expenses.upsert(expense.clone()).unwrap();
        storage.expenses.save().unwrap();

        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.expenses.get_all().unwrap(), vec![expense]);
    }

    #[test]
    fn test_log_helpers_append_to_audit_log() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(EntityType::Expense, "exp-1", None, &"created")
            .unwrap();
        storage
            .log_delete(EntityType::Expense, "exp-1", None, &"deleted")
            .unwrap();

        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }
}
