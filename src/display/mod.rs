//! Display formatting for terminal output
//!
//! Renders expense groups, summaries, presets and the audit history as
//! `tabled` tables, with amounts shown in the configured currency.

pub mod expense;
pub mod history;
pub mod preset;
pub mod summary;

pub use expense::{format_expense_details, format_expense_groups};
pub use history::format_history;
pub use preset::{format_preset_details, format_preset_list};
pub use summary::format_summary;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

/// Render rows with the shared table style, right-aligning `numeric_columns`
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>, numeric_columns: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    for &column in numeric_columns {
        table.with(Modify::new(Columns::single(column)).with(Alignment::right()));
    }
    table.to_string()
}
