use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expense_tracker::calendar::{Clock, SystemClock};
use expense_tracker::cli::{
    handle_add, handle_config, handle_delete, handle_edit, handle_export, handle_history,
    handle_list, handle_preset_command, handle_summary, AddArgs, ConfigArgs, EditArgs, ExportArgs,
    HistoryArgs, ListArgs, PresetCommands, SummaryArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses, then filter, sort, group and summarize them \
                  from the command line. Saved filter presets and CSV, JSON and \
                  YAML exports included."
)]
struct Cli {
    /// Data directory (overrides the platform default)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// Change fields of an existing expense
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (exp-xxxxxxxx or full UUID)
        id: String,
    },

    /// List expenses with filters, sorting and grouping
    #[command(alias = "ls")]
    List(ListArgs),

    /// Totals, averages and per-category breakdown
    Summary(SummaryArgs),

    /// Export expenses as CSV, JSON or YAML
    Export(ExportArgs),

    /// Saved filter presets
    #[command(subcommand)]
    Preset(PresetCommands),

    /// Recent changes from the audit log
    History(HistoryArgs),

    /// Show paths and settings, or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let today = SystemClock.today();

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&storage, &settings, args, today)?,
        Some(Commands::Edit(args)) => handle_edit(&storage, &settings, args)?,
        Some(Commands::Delete { id }) => handle_delete(&storage, &id)?,
        Some(Commands::List(args)) => handle_list(&storage, &settings, args, today)?,
        Some(Commands::Summary(args)) => handle_summary(&storage, &settings, args, today)?,
        Some(Commands::Export(args)) => handle_export(&storage, &settings, args, today)?,
        Some(Commands::Preset(cmd)) => handle_preset_command(&storage, cmd)?,
        Some(Commands::History(args)) => handle_history(&storage, &settings, args)?,
        Some(Commands::Config(args)) => handle_config(&paths, &mut settings, args)?,
        None => {
            println!("expenses - terminal expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add 12.50 food \"Lunch\"' to record your first expense.");
        }
    }

    Ok(())
}
