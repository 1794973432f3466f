//! Summary panel formatting

use tabled::Tabled;

use super::render_table;
use crate::calendar::day_label;
use crate::engine::SummaryView;
use crate::models::Expense;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

fn describe_extreme(expense: Option<&Expense>, symbol: &str) -> String {
    match expense {
        Some(e) => format!(
            "{} - {} ({})",
            e.amount.format_with_symbol(symbol),
            e.description,
            day_label(e.date)
        ),
        None => "-".to_string(),
    }
}

/// Format the summary panel followed by the per-category breakdown
pub fn format_summary(view: &SummaryView, symbol: &str) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);

    let mut output = String::new();
    output.push_str("Expense Summary\n");
    output.push_str("===============\n");
    output.push_str(&format!("  Total spent:      {}\n", money(view.total_expenses)));
    output.push_str(&format!("  This month:       {}\n", money(view.monthly_total)));
    output.push_str(&format!("  Expenses:         {}\n", view.expense_count));
    output.push_str(&format!("  Average expense:  {}\n", money(view.average_expense)));
    output.push_str(&format!("  Average per day:  {}\n", money(view.average_daily)));
    output.push_str(&format!("  Average / month:  {}\n", money(view.average_monthly)));

    match &view.top_category {
        Some(top) => output.push_str(&format!(
            "  Top category:     {} ({})\n",
            top.category,
            money(top.total)
        )),
        None => output.push_str("  Top category:     -\n"),
    }
    output.push_str(&format!(
        "  Highest expense:  {}\n",
        describe_extreme(view.highest_expense.as_ref(), symbol)
    ));
    output.push_str(&format!(
        "  Lowest expense:   {}\n",
        describe_extreme(view.lowest_expense.as_ref(), symbol)
    ));
    output.push('\n');

    let rows: Vec<_> = view
        .category_totals
        .iter()
        .map(|(category, total)| CategoryRow {
            category: category.name(),
            total: money(*total),
            share: format!("{:.1}%", view.category_percentage(*category)),
        })
        .collect();
    output.push_str(&render_table(rows, &[1, 2]));
    output.push('\n');

    output
}
