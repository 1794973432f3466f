//! Record ordering
//!
//! Sorting is stable in both directions: records that compare equal keep
//! their input order, so tie resolution downstream is reproducible.

use std::cmp::Ordering;

use crate::models::{Expense, SortDirection, SortField, SortSpec};

/// Case-insensitive text order, falling back to exact text for a total order
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Ascending comparison of two records on a single field
pub fn compare_by(field: SortField, a: &Expense, b: &Expense) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::Category => compare_text(a.category.name(), b.category.name()),
        SortField::Description => compare_text(&a.description, &b.description),
    }
}

/// Return a sorted copy of `records`
pub fn sort_expenses(records: &[Expense], spec: SortSpec) -> Vec<Expense> {
    let mut sorted = records.to_vec();
    // slice::sort_by is a stable merge sort
    sorted.sort_by(|a, b| {
        let ordering = compare_by(spec.field, a, b);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(day: u32, cents: i64, category: Category, description: &str) -> Expense {
        Expense::new(date(2025, 1, day), Money::from_cents(cents), category, description)
    }

    fn amounts(records: &[Expense]) -> Vec<i64> {
        records.iter().map(|e| e.amount.cents()).collect()
    }

    fn descriptions(records: &[Expense]) -> Vec<&str> {
        records.iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_sort_by_amount() {
        let records = vec![
            expense(1, 3000, Category::Food, "thirty"),
            expense(2, 1000, Category::Food, "ten"),
            expense(3, 2000, Category::Food, "twenty"),
        ];

        let ascending = sort_expenses(&records, SortSpec::ascending(SortField::Amount));
        assert_eq!(amounts(&ascending), vec![1000, 2000, 3000]);

        let descending = sort_expenses(&records, SortSpec::descending(SortField::Amount));
        assert_eq!(amounts(&descending), vec![3000, 2000, 1000]);

        // Input untouched
        assert_eq!(amounts(&records), vec![3000, 1000, 2000]);
    }

    #[test]
    fn test_sort_by_date() {
        let records = vec![
            expense(15, 100, Category::Food, "middle"),
            expense(31, 100, Category::Food, "last"),
            expense(1, 100, Category::Food, "first"),
        ];
        let sorted = sort_expenses(&records, SortSpec::ascending(SortField::Date));
        assert_eq!(descriptions(&sorted), vec!["first", "middle", "last"]);
    }

    #[test]
    fn test_sort_by_category_name() {
        let records = vec![
            expense(1, 100, Category::Transportation, "bus"),
            expense(2, 100, Category::Bills, "power"),
            expense(3, 100, Category::Food, "bread"),
        ];
        let sorted = sort_expenses(&records, SortSpec::ascending(SortField::Category));
        assert_eq!(descriptions(&sorted), vec!["power", "bread", "bus"]);
    }

    #[test]
    fn test_description_sort_ignores_case() {
        let records = vec![
            expense(1, 100, Category::Other, "banana"),
            expense(2, 100, Category::Other, "Apple"),
            expense(3, 100, Category::Other, "cherry"),
        ];
        let sorted = sort_expenses(&records, SortSpec::ascending(SortField::Description));
        assert_eq!(descriptions(&sorted), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = vec![
            expense(1, 500, Category::Food, "a"),
            expense(2, 100, Category::Food, "b"),
            expense(3, 500, Category::Food, "c"),
            expense(4, 100, Category::Food, "d"),
        ];

        let ascending = sort_expenses(&records, SortSpec::ascending(SortField::Amount));
        assert_eq!(descriptions(&ascending), vec!["b", "d", "a", "c"]);

        let descending = sort_expenses(&records, SortSpec::descending(SortField::Amount));
        assert_eq!(descriptions(&descending), vec!["a", "c", "b", "d"]);

        // Toggling the direction twice lands on the same order
        let spec = SortSpec::ascending(SortField::Amount);
        let toggled = SortSpec::new(spec.field, spec.direction.toggled().toggled());
        assert_eq!(sort_expenses(&records, toggled), ascending);
    }
}
