//! Expense query and aggregation engine
//!
//! Pure functions from a record snapshot plus a query to a fresh result. The
//! engine holds no state and performs no I/O; callers re-run it whenever the
//! snapshot or the query changes.
//!
//! # Pipeline
//!
//! ```text
//! records -> filter_expenses -> sort_expenses -> group_expenses -> groups
//! records -> summarize -> SummaryView
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::engine::ExpenseQuery;
//! use expense_tracker::models::{Category, Expense, FilterSpec, GroupKey, Money, SortSpec};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let records = vec![
//!     Expense::new(today, Money::from_cents(1200), Category::Food, "Lunch"),
//!     Expense::new(today, Money::from_cents(3400), Category::Bills, "Phone"),
//! ];
//! let query = ExpenseQuery {
//!     filter: FilterSpec::new().categories([Category::Food]),
//!     sort: SortSpec::default(),
//!     group: GroupKey::Category,
//! };
//! let groups = query.run(&records, today);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].label, "Food");
//! ```

pub mod filter;
pub mod group;
pub mod presets;
pub mod sort;
pub mod summary;

pub use filter::{filter_expenses, CompiledFilter};
pub use group::{group_expenses, group_label, AmountBucket, ExpenseGroup, ALL_EXPENSES_LABEL};
pub use presets::resolve_preset;
pub use sort::{compare_by, sort_expenses};
pub use summary::{summarize, CategoryTotal, SummaryView};

use chrono::NaiveDate;

use crate::models::{Expense, FilterSpec, GroupKey, SortSpec};

/// A complete display query: filter, then sort, then group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub group: GroupKey,
}

impl ExpenseQuery {
    /// Filtered and sorted records, ungrouped
    pub fn select(&self, records: &[Expense], today: NaiveDate) -> Vec<Expense> {
        let filtered = filter_expenses(records, &self.filter, today);
        sort_expenses(&filtered, self.sort)
    }

    /// Filtered, sorted and grouped records
    pub fn run(&self, records: &[Expense], today: NaiveDate) -> Vec<ExpenseGroup> {
        group_expenses(&self.select(records, today), self.group)
    }
}
