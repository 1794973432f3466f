//! Core data models for the expense tracker
//!
//! Expense records, the fixed category set, money, and the query value
//! objects (filters, sorting, grouping, presets).

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod preset;
pub mod query;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError, MAX_AMOUNT};
pub use ids::{ExpenseId, PresetId};
pub use money::Money;
pub use preset::{FilterPreset, PresetValidationError};
pub use query::{DatePreset, FilterSpec, GroupKey, SortDirection, SortField, SortSpec};
