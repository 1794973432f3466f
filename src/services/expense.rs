//! Expense service
//!
//! Validated create, edit and delete of expense records, with every change
//! written to disk and recorded in the audit log.

use chrono::{NaiveDate, Utc};

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: Category,
    pub description: String,
}

/// Partial edit of an expense; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub date: Option<NaiveDate>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub description: Option<String>,
}

impl UpdateExpenseInput {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn create(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::new(
            input.date,
            input.amount,
            input.category,
            input.description.trim(),
        );

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full UUID, `exp-` short ID or UUID prefix
    ///
    /// A prefix that matches more than one expense is rejected.
    pub fn find(&self, identifier: &str) -> ExpenseResult<Expense> {
        if let Ok(id) = ExpenseId::parse(identifier.trim()) {
            if let Some(expense) = self.storage.expenses.get(id)? {
                return Ok(expense);
            }
        }

        let mut matches = self.storage.expenses.find_matching(identifier)?;
        match matches.len() {
            0 => Err(ExpenseError::expense_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(ExpenseError::Validation(format!(
                "Identifier '{}' matches {} expenses; use more characters",
                identifier, n
            ))),
        }
    }

    /// All expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }

    /// Apply a partial edit, bumping `updated_at`
    pub fn update(&self, identifier: &str, input: UpdateExpenseInput) -> ExpenseResult<Expense> {
        let mut expense = self.find(identifier)?;
        let before = expense.clone();

        if let Some(date) = input.date {
            expense.date = date;
        }
        if let Some(amount) = input.amount {
            expense.amount = amount;
        }
        if let Some(category) = input.category {
            expense.category = category;
        }
        if let Some(description) = input.description {
            expense.description = description.trim().to_string();
        }

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let diff = describe_changes(&before, &expense);
        if diff.is_none() {
            return Ok(before);
        }

        expense.updated_at = Utc::now();

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &before,
            &expense,
            diff,
        )?;

        Ok(expense)
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&self, identifier: &str) -> ExpenseResult<Expense> {
        let expense = self.find(identifier)?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        Ok(expense)
    }
}

fn describe_changes(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.category != after.category {
        changes.push(format!("category: {} -> {}", before.category, after.category));
    }
    if before.description != after.description {
        changes.push(format!(
            "description: '{}' -> '{}'",
            before.description, after.description
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
