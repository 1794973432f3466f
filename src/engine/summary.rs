//! Summary statistics over a record set
//!
//! Everything is recomputed from the snapshot on each call. Tie-breaks are
//! deterministic: the top category prefers the earlier category in
//! enumeration order, and the extrema come from a stable ascending sort by
//! amount (lowest = first element, highest = last element).

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::sort::sort_expenses;
use crate::calendar::DateRange;
use crate::models::{Category, Expense, Money, SortField, SortSpec};

/// A category with its total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Aggregate statistics for a record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// Sum of every amount
    pub total_expenses: Money,
    /// Sum over the calendar month containing today
    pub monthly_total: Money,
    /// Per-category totals; always holds all six categories
    pub category_totals: BTreeMap<Category, Money>,
    pub top_category: Option<CategoryTotal>,
    pub expense_count: usize,
    pub average_expense: Money,
    /// Total divided by the days from the oldest record through today
    pub average_daily: Money,
    /// Total divided by the number of distinct months with records
    pub average_monthly: Money,
    pub highest_expense: Option<Expense>,
    pub lowest_expense: Option<Expense>,
}

impl SummaryView {
    /// Share of the total spent in `category`, in percent
    pub fn category_percentage(&self, category: Category) -> f64 {
        let total = self.category_totals.get(&category).copied().unwrap_or_default();
        if self.total_expenses.is_zero() {
            0.0
        } else {
            (total.cents() as f64 / self.total_expenses.cents() as f64) * 100.0
        }
    }
}

/// Category with the strictly largest total, earlier categories winning ties
fn top_category(totals: &BTreeMap<Category, Money>) -> CategoryTotal {
    let mut best = CategoryTotal {
        category: Category::ALL[0],
        total: totals.get(&Category::ALL[0]).copied().unwrap_or_default(),
    };
    for category in Category::ALL.iter().skip(1) {
        let total = totals.get(category).copied().unwrap_or_default();
        if total > best.total {
            best = CategoryTotal {
                category: *category,
                total,
            };
        }
    }
    best
}

/// Compute the summary of `records` as of `today`
pub fn summarize(records: &[Expense], today: NaiveDate) -> SummaryView {
    let mut category_totals: BTreeMap<Category, Money> =
        Category::ALL.iter().map(|c| (*c, Money::zero())).collect();
    let mut total_expenses = Money::zero();
    let mut monthly_total = Money::zero();
    let mut months = BTreeSet::new();
    let current_month = DateRange::month_of(today);

    for expense in records {
        total_expenses += expense.amount;
        *category_totals.entry(expense.category).or_default() += expense.amount;
        if current_month.contains(expense.date) {
            monthly_total += expense.amount;
        }
        months.insert((expense.date.year(), expense.date.month()));
    }

    let expense_count = records.len();
    let average_expense = total_expenses.divide_rounded(expense_count as i64);

    let average_daily = records
        .iter()
        .map(|e| e.date)
        .min()
        .map(|oldest| (today - oldest).num_days() + 1)
        .filter(|days| *days > 0)
        .map(|days| total_expenses.divide_rounded(days))
        .unwrap_or_default();

    let average_monthly = total_expenses.divide_rounded(months.len() as i64);

    let by_amount = sort_expenses(records, SortSpec::ascending(SortField::Amount));

    SummaryView {
        total_expenses,
        monthly_total,
        top_category: (!records.is_empty()).then(|| top_category(&category_totals)),
        category_totals,
        expense_count,
        average_expense,
        average_daily,
        average_monthly,
        highest_expense: by_amount.last().cloned(),
        lowest_expense: by_amount.first().cloned(),
    }
}
