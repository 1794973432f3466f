//! JSON Export functionality
//!
//! Exports expenses and saved presets to JSON format with schema versioning.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, FilterPreset};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Exported expenses, in the order they were selected
    pub expenses: Vec<Expense>,

    /// All saved filter presets
    pub presets: Vec<FilterPreset>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub preset_count: usize,
    /// Earliest expense date
    pub earliest_expense: Option<String>,
    /// Latest expense date
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Build an export from explicit expense and preset lists
    pub fn new(expenses: Vec<Expense>, presets: Vec<FilterPreset>) -> Self {
        let earliest_expense = expenses.iter().map(|e| e.date).min().map(|d| d.to_string());
        let latest_expense = expenses.iter().map(|e| e.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            preset_count: presets.len(),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            presets,
            metadata,
        }
    }
}

/// Write an export as JSON
pub fn write_export_json<W: Write>(
    export: &FullExport,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
