//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer and the query
//! engine.

pub mod config;
pub mod expense;
pub mod export;
pub mod filter;
pub mod history;
pub mod preset;

pub use config::{handle_config, ConfigArgs};
pub use expense::{
    handle_add, handle_delete, handle_edit, handle_list, handle_summary, AddArgs, EditArgs,
    ListArgs, SummaryArgs,
};
pub use export::{handle_export, ExportArgs, ExportFormat};
pub use filter::{FilterArgs, SortArgs};
pub use history::{handle_history, HistoryArgs};
pub use preset::{handle_preset_command, PresetCommands};
