//! Export CLI command
//!
//! Writes the filtered, sorted selection as CSV, or as a JSON/YAML export
//! that also carries the saved presets.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::filter::{resolve_filters, FilterArgs, SortArgs};
use crate::config::Settings;
use crate::engine::ExpenseQuery;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{write_expenses_csv, write_export_json, write_export_yaml, FullExport};
use crate::models::{Expense, GroupKey};
use crate::services::{ExpenseService, PresetService};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV (selected expenses only)
    Csv,
    /// JSON (selected expenses plus presets)
    Json,
    /// YAML (selected expenses plus presets, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Start from a saved preset's filters
    #[arg(long)]
    pub preset: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub sort: SortArgs,
}

/// Handle `export`
pub fn handle_export(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let query = ExpenseQuery {
        filter: resolve_filters(storage, args.preset.as_deref(), &args.filters)?,
        sort: args.sort.resolve(settings.default_sort)?,
        group: GroupKey::None,
    };
    let records = ExpenseService::new(storage).list()?;
    let selected = query.select(&records, today);
    let count = selected.len();

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_selection(storage, &args, selected, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            eprintln!("Exported {} expenses to: {}", count, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_selection(storage, &args, selected, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

fn write_selection<W: Write>(
    storage: &Storage,
    args: &ExportArgs,
    selected: Vec<Expense>,
    writer: &mut W,
) -> ExpenseResult<()> {
    match args.format {
        ExportFormat::Csv => write_expenses_csv(&selected, writer),
        ExportFormat::Json => {
            let export = FullExport::new(selected, PresetService::new(storage).list()?);
            write_export_json(&export, writer, args.pretty)
        }
        ExportFormat::Yaml => {
            let export = FullExport::new(selected, PresetService::new(storage).list()?);
            write_export_yaml(&export, writer)
        }
    }
}
