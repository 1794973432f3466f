//! Export module for the expense tracker
//!
//! - CSV: the quoted `Date,Amount,Category,Description` format for spreadsheets
//! - JSON: machine-readable export of expenses and presets
//! - YAML: the same export in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{csv_fields, expenses_to_csv, write_expenses_csv, CSV_HEADER};
pub use json::{write_export_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::write_export_yaml;
