//! Service layer for the expense tracker
//!
//! Business logic on top of the storage layer: validation, lookup by short ID,
//! change summaries and audit logging.

pub mod expense;
pub mod preset;

pub use expense::{CreateExpenseInput, ExpenseService, UpdateExpenseInput};
pub use preset::PresetService;
