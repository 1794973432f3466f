//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to `expenses.json`. Records keep their
//! insertion order, which is the order the query engine sees them in.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, replacing anything in memory
    pub fn load(&self) -> ExpenseResult<()> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.expenses;

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> ExpenseResult<()> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let file_data = ExpenseData {
            expenses: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Expenses whose ID matches a user-supplied identifier
    pub fn find_matching(&self, identifier: &str) -> ExpenseResult<Vec<Expense>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .filter(|e| e.id.matches(identifier))
            .cloned()
            .collect())
    }

    /// Snapshot of all expenses in insertion order
    pub fn get_all(&self) -> ExpenseResult<Vec<Expense>> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Insert a new expense or replace an existing one in place
    pub fn upsert(&self, expense: Expense) -> ExpenseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => *existing = expense,
            None => data.push(expense),
        }

        Ok(())
    }

    /// Remove an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data
            .iter()
            .position(|e| e.id == id)
            .map(|index| data.remove(index)))
    }

    pub fn count(&self) -> ExpenseResult<usize> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
