//! `config` command: show paths and settings, optionally change settings

use clap::Args;

use super::filter::SortArgs;
use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::GroupKey;

/// Arguments for `config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Set the currency symbol
    #[arg(long)]
    pub currency: Option<String>,

    #[command(flatten)]
    pub sort: SortArgs,

    /// Set the default grouping for `list`
    #[arg(long)]
    pub group: Option<String>,

    /// Set how many entries `history` shows by default
    #[arg(long)]
    pub history: Option<usize>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.currency.is_some()
            || self.sort.sort.is_some()
            || self.sort.order.is_some()
            || self.group.is_some()
            || self.history.is_some()
    }
}

/// Handle `config`
pub fn handle_config(
    paths: &ExpensePaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> ExpenseResult<()> {
    if args.has_changes() {
        if let Some(currency) = &args.currency {
            let currency = currency.trim();
            if currency.is_empty() {
                return Err(ExpenseError::Validation(
                    "Currency symbol cannot be empty".into(),
                ));
            }
            settings.currency_symbol = currency.to_string();
        }
        settings.default_sort = args.sort.resolve(settings.default_sort)?;
        if let Some(group) = &args.group {
            settings.default_group = group.parse::<GroupKey>()?;
        }
        if let Some(history) = args.history {
            settings.recent_history = history;
        }
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Default sort:    {}", settings.default_sort);
    println!("  Default group:   {}", settings.default_group);
    println!("  History entries: {}", settings.recent_history);

    Ok(())
}
