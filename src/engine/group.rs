//! Grouping of an ordered record sequence into labeled buckets
//!
//! Groups appear in the order their first member appears in the input, and
//! members keep their input order. Every record lands in exactly one group.

use std::collections::HashMap;

use serde::Serialize;

use crate::calendar::{day_label, month_label, start_of_week, year_label};
use crate::models::{Expense, GroupKey, Money};

/// Label used for the single bucket when grouping is off
pub const ALL_EXPENSES_LABEL: &str = "All Expenses";

/// Fixed amount buckets, half-open on the upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountBucket {
    Under25,
    From25To50,
    From50To100,
    From100To250,
    From250To500,
    Over500,
}

impl AmountBucket {
    pub const ALL: [AmountBucket; 6] = [
        AmountBucket::Under25,
        AmountBucket::From25To50,
        AmountBucket::From50To100,
        AmountBucket::From100To250,
        AmountBucket::From250To500,
        AmountBucket::Over500,
    ];

    /// Bucket containing `amount`
    pub fn for_amount(amount: Money) -> Self {
        match amount.cents() {
            c if c < 2_500 => Self::Under25,
            c if c < 5_000 => Self::From25To50,
            c if c < 10_000 => Self::From50To100,
            c if c < 25_000 => Self::From100To250,
            c if c < 50_000 => Self::From250To500,
            _ => Self::Over500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under25 => "$0 - $25",
            Self::From25To50 => "$25 - $50",
            Self::From50To100 => "$50 - $100",
            Self::From100To250 => "$100 - $250",
            Self::From250To500 => "$250 - $500",
            Self::Over500 => "$500+",
        }
    }
}

/// A labeled bucket of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseGroup {
    pub label: String,
    pub expenses: Vec<Expense>,
}

impl ExpenseGroup {
    /// Sum of the amounts in this group
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Number of records in this group
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Label of the bucket `expense` belongs to under `key`
pub fn group_label(expense: &Expense, key: GroupKey) -> String {
    match key {
        GroupKey::None => ALL_EXPENSES_LABEL.to_string(),
        GroupKey::Category => expense.category.name().to_string(),
        GroupKey::Day => day_label(expense.date),
        GroupKey::Week => format!("Week of {}", day_label(start_of_week(expense.date))),
        GroupKey::Month => month_label(expense.date),
        GroupKey::Year => year_label(expense.date),
        GroupKey::AmountRange => AmountBucket::for_amount(expense.amount).label().to_string(),
    }
}

/// Partition `records` into groups in first-encounter order
///
/// Empty input produces no groups for every key.
pub fn group_expenses(records: &[Expense], key: GroupKey) -> Vec<ExpenseGroup> {
    let mut groups: Vec<ExpenseGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for expense in records {
        let label = group_label(expense, key);
        match index.get(&label) {
            Some(&position) => groups[position].expenses.push(expense.clone()),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push(ExpenseGroup {
                    label,
                    expenses: vec![expense.clone()],
                });
            }
        }
    }

    groups
}
