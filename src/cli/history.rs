//! Audit history command

use clap::Args;

use crate::config::Settings;
use crate::display::format_history;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show (defaults to the configured value)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// One line per entry instead of a table
    #[arg(long)]
    pub plain: bool,
}

/// Handle `history`
pub fn handle_history(storage: &Storage, settings: &Settings, args: HistoryArgs) -> ExpenseResult<()> {
    let limit = args.limit.unwrap_or(settings.recent_history);
    let entries = storage.audit().read_recent(limit)?;

    if args.plain {
        for entry in &entries {
            println!("{}", entry.format_human_readable());
        }
    } else {
        println!("{}", format_history(&entries));
    }

    Ok(())
}
