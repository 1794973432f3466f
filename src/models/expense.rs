//! Expense model
//!
//! An expense is a dated, positive amount with a category and a short
//! description. Records are treated as immutable snapshots by the query
//! engine; edits go through the service layer and bump `updated_at`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Largest amount a single expense may record ($1,000,000,000.00)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Minimum description length after trimming
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Maximum description length after trimming
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// What the money was spent on
    pub description: String,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            date,
            amount,
            category,
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the entry-time invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        let description_len = self.description.trim().chars().count();
        if description_len < MIN_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooShort(description_len));
        }
        if description_len > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(description_len));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    DescriptionTooShort(usize),
    DescriptionTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must be at most {} (got {})", MAX_AMOUNT, amount)
            }
            Self::DescriptionTooShort(len) => write!(
                f,
                "Description must be at least {} characters (got {})",
                MIN_DESCRIPTION_LEN, len
            ),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description must be at most {} characters (got {})",
                MAX_DESCRIPTION_LEN, len
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
