//! Expense display formatting

use tabled::Tabled;

use super::render_table;
use crate::calendar::day_label;
use crate::engine::ExpenseGroup;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, symbol: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: day_label(expense.date),
            category: expense.category.name(),
            description: expense.description.clone(),
            amount: expense.amount.format_with_symbol(symbol),
        }
    }
}

/// Format grouped expenses, one titled table per group
pub fn format_expense_groups(groups: &[ExpenseGroup], symbol: &str) -> String {
    if groups.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut output = String::new();
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        let noun = if group.len() == 1 { "expense" } else { "expenses" };
        output.push_str(&format!(
            "{} ({} {}, {})\n",
            group.label,
            group.len(),
            noun,
            group.total().format_with_symbol(symbol)
        ));

        let rows: Vec<_> = group
            .expenses
            .iter()
            .map(|e| ExpenseRow::new(e, symbol))
            .collect();
        output.push_str(&render_table(rows, &[4]));
        output.push('\n');
    }

    output
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.description));
    output.push_str(&format!("  ID:         {}\n", expense.id));
    output.push_str(&format!("  Date:       {}\n", day_label(expense.date)));
    output.push_str(&format!(
        "  Amount:     {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Category:   {}\n", expense.category));
    output.push_str(&format!(
        "  Recorded:   {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    if expense.updated_at != expense.created_at {
        output.push_str(&format!(
            "  Updated:    {}\n",
            expense.updated_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }

    output
}
