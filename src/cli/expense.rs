//! Expense CLI commands
//!
//! `add`, `edit`, `delete`, `list` and `summary`.

use chrono::NaiveDate;
use clap::Args;

use super::filter::{parse_amount, parse_date, resolve_filters, FilterArgs, SortArgs};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_groups, format_summary};
use crate::engine::{filter_expenses, summarize, ExpenseQuery};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, GroupKey};
use crate::services::{CreateExpenseInput, ExpenseService, UpdateExpenseInput};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category (food, transportation, entertainment, shopping, bills, other)
    pub category: String,

    /// What the money was spent on
    pub description: String,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Expense ID (exp-xxxxxxxx or full UUID)
    pub id: String,

    /// New amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub sort: SortArgs,

    /// Group by (none, category, day, week, month, year, amount)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Start from a saved preset's filters
    #[arg(long)]
    pub preset: Option<String>,

    /// Print the groups as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Summarize only the records matching a saved preset
    #[arg(long)]
    pub preset: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle `add`
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let date = match &args.date {
        Some(date) => parse_date(date)?,
        None => today,
    };

    let expense = ExpenseService::new(storage).create(CreateExpenseInput {
        date,
        amount: parse_amount(&args.amount)?,
        category: args.category.parse::<Category>()?,
        description: args.description,
    })?;

    println!("Added expense {}", expense.id);
    print!("{}", format_expense_details(&expense, &settings.currency_symbol));
    Ok(())
}

/// Handle `edit`
pub fn handle_edit(storage: &Storage, settings: &Settings, args: EditArgs) -> ExpenseResult<()> {
    let input = UpdateExpenseInput {
        date: args.date.as_deref().map(parse_date).transpose()?,
        amount: args.amount.as_deref().map(parse_amount).transpose()?,
        category: args
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?,
        description: args.description,
    };

    if input.is_empty() {
        return Err(ExpenseError::Validation(
            "Nothing to change. Pass --amount, --category, --description or --date.".into(),
        ));
    }

    let expense = ExpenseService::new(storage).update(&args.id, input)?;

    println!("Updated expense {}", expense.id);
    print!("{}", format_expense_details(&expense, &settings.currency_symbol));
    Ok(())
}

/// Handle `delete`
pub fn handle_delete(storage: &Storage, id: &str) -> ExpenseResult<()> {
    let expense = ExpenseService::new(storage).delete(id)?;
    println!("Deleted expense {} ({})", expense.id, expense.description);
    Ok(())
}

/// Handle `list`
pub fn handle_list(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let query = ExpenseQuery {
        filter: resolve_filters(storage, args.preset.as_deref(), &args.filters)?,
        sort: args.sort.resolve(settings.default_sort)?,
        group: match &args.group {
            Some(group) => group.parse::<GroupKey>()?,
            None => settings.default_group,
        },
    };

    let records = ExpenseService::new(storage).list()?;
    let groups = query.run(&records, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if !query.filter.is_empty() {
        println!("Filters: {}", query.filter.describe());
        println!();
    }
    print!("{}", format_expense_groups(&groups, &settings.currency_symbol));
    if groups.is_empty() {
        println!();
    }
    Ok(())
}

/// Handle `summary`
pub fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let filter = resolve_filters(storage, args.preset.as_deref(), &args.filters)?;
    let records = ExpenseService::new(storage).list()?;
    let selected = filter_expenses(&records, &filter, today);
    let view = summarize(&selected, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if !filter.is_empty() {
        println!("Filters: {}", filter.describe());
        println!();
    }
    print!("{}", format_summary(&view, &settings.currency_symbol));
    Ok(())
}
