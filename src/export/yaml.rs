//! YAML Export functionality
//!
//! Writes the same structure as the JSON export in a human-readable form.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use std::io::Write;

/// Write an export as YAML, preceded by a comment header
pub fn write_export_yaml<W: Write>(export: &FullExport, writer: &mut W) -> ExpenseResult<()> {
    let header = format!(
        "# Expense Tracker Export\n# Generated: {}\n# App Version: {}\n# Expenses: {}\n\n",
        export.exported_at, export.app_version, export.metadata.expense_count
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export)?;

    Ok(())
}
