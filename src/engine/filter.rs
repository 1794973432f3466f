//! Record filtering
//!
//! A record passes when it satisfies every constraint present in the
//! `FilterSpec`. Input order is preserved.

use chrono::NaiveDate;

use super::presets::resolve_preset;
use crate::models::{Category, Expense, FilterSpec, Money};

/// A `FilterSpec` with its date range resolved and its query lowercased
#[derive(Debug, Clone)]
pub struct CompiledFilter<'a> {
    categories: &'a [Category],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    min_amount: Option<Money>,
    max_amount: Option<Money>,
    query: Option<String>,
}

impl<'a> CompiledFilter<'a> {
    /// Resolve presets against `today` and prepare the text query
    pub fn new(spec: &'a FilterSpec, today: NaiveDate) -> Self {
        let (start, end) = match spec.date_preset.and_then(|p| resolve_preset(p, today)) {
            Some(range) => (Some(range.start), Some(range.end)),
            None => (spec.start_date, spec.end_date),
        };

        Self {
            categories: &spec.categories,
            start,
            end,
            min_amount: spec.min_amount,
            max_amount: spec.max_amount,
            query: spec.search_query().map(str::to_lowercase),
        }
    }

    /// The effective inclusive date bounds
    pub fn date_bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start, self.end)
    }

    /// Check a single record against every constraint
    pub fn matches(&self, expense: &Expense) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&expense.category) {
            return false;
        }

        if self.start.is_some_and(|start| expense.date < start) {
            return false;
        }
        if self.end.is_some_and(|end| expense.date > end) {
            return false;
        }

        if self.min_amount.is_some_and(|min| expense.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| expense.amount > max) {
            return false;
        }

        match &self.query {
            Some(query) => matches_text(expense, query),
            None => true,
        }
    }
}

/// Case-insensitive match against description, category name or amount
fn matches_text(expense: &Expense, query: &str) -> bool {
    expense.description.to_lowercase().contains(query)
        || expense.category.name().to_lowercase().contains(query)
        || expense.amount.to_decimal_string().contains(query)
}

/// Return the records that pass `spec`, in input order
pub fn filter_expenses(records: &[Expense], spec: &FilterSpec, today: NaiveDate) -> Vec<Expense> {
    let filter = CompiledFilter::new(spec, today);
    records
        .iter()
        .filter(|expense| filter.matches(expense))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DatePreset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(day: NaiveDate, cents: i64, category: Category, description: &str) -> Expense {
        Expense::new(day, Money::from_cents(cents), category, description)
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(date(2025, 1, 3), 1250, Category::Food, "Groceries at market"),
            expense(date(2025, 1, 10), 4500, Category::Transportation, "Train pass"),
            expense(date(2025, 1, 20), 8999, Category::Shopping, "Running shoes"),
            expense(date(2025, 2, 2), 12000, Category::Bills, "Electric bill"),
            expense(date(2025, 2, 14), 6000, Category::Entertainment, "Concert tickets"),
        ]
    }

    fn descriptions(records: &[Expense]) -> Vec<&str> {
        records.iter().map(|e| e.description.as_str()).collect()
    }

    fn today() -> NaiveDate {
        date(2025, 2, 15)
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let records = sample();
        let result = filter_expenses(&records, &FilterSpec::new(), today());
        assert_eq!(result, records);
    }

    #[test]
    fn test_category_filter() {
        let spec = FilterSpec::new().categories([Category::Food, Category::Bills]);
        let result = filter_expenses(&sample(), &spec, today());
        assert_eq!(descriptions(&result), vec!["Groceries at market", "Electric bill"]);
    }

    #[test]
    fn test_explicit_date_range_is_inclusive() {
        let spec = FilterSpec::new().date_range(date(2025, 1, 10), date(2025, 2, 2));
        let result = filter_expenses(&sample(), &spec, today());
        assert_eq!(
            descriptions(&result),
            vec!["Train pass", "Running shoes", "Electric bill"]
        );
    }

    #[test]
    fn test_one_sided_date_bounds() {
        let mut spec = FilterSpec::new();
        spec.start_date = Some(date(2025, 2, 1));
        assert_eq!(filter_expenses(&sample(), &spec, today()).len(), 2);

        let mut spec = FilterSpec::new();
        spec.end_date = Some(date(2025, 1, 10));
        assert_eq!(filter_expenses(&sample(), &spec, today()).len(), 2);
    }

    #[test]
    fn test_preset_overrides_explicit_bounds() {
        let spec = FilterSpec::new()
            .date_range(date(2024, 1, 1), date(2024, 12, 31))
            .preset(DatePreset::ThisMonth);
        let result = filter_expenses(&sample(), &spec, today());
        assert_eq!(descriptions(&result), vec!["Electric bill", "Concert tickets"]);
    }

    #[test]
    fn test_custom_preset_without_bounds_passes_everything() {
        let spec = FilterSpec::new().preset(DatePreset::Custom);
        assert_eq!(filter_expenses(&sample(), &spec, today()).len(), 5);
    }

    #[test]
    fn test_custom_preset_uses_explicit_bounds() {
        let spec = FilterSpec::new()
            .preset(DatePreset::Custom)
            .date_range(date(2025, 1, 1), date(2025, 1, 31));
        assert_eq!(filter_expenses(&sample(), &spec, today()).len(), 3);
    }

    #[test]
    fn test_amount_range_is_inclusive() {
        let spec = FilterSpec::new()
            .amount_range(Some(Money::from_cents(4500)), Some(Money::from_cents(8999)));
        let result = filter_expenses(&sample(), &spec, today());
        assert_eq!(
            descriptions(&result),
            vec!["Train pass", "Running shoes", "Concert tickets"]
        );
    }

    #[test]
    fn test_contradictory_bounds_match_nothing() {
        let spec = FilterSpec::new()
            .amount_range(Some(Money::from_cents(5000)), Some(Money::from_cents(1000)));
        assert!(filter_expenses(&sample(), &spec, today()).is_empty());

        let spec = FilterSpec::new().date_range(date(2025, 2, 1), date(2025, 1, 1));
        assert!(filter_expenses(&sample(), &spec, today()).is_empty());
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let spec = FilterSpec::new().search("TRAIN");
        assert_eq!(descriptions(&filter_expenses(&sample(), &spec, today())), vec!["Train pass"]);
    }

    #[test]
    fn test_search_matches_category_name() {
        let spec = FilterSpec::new().search("entertain");
        assert_eq!(
            descriptions(&filter_expenses(&sample(), &spec, today())),
            vec!["Concert tickets"]
        );
    }

    #[test]
    fn test_search_matches_amount_string() {
        let spec = FilterSpec::new().search("89.99");
        assert_eq!(
            descriptions(&filter_expenses(&sample(), &spec, today())),
            vec!["Running shoes"]
        );
    }

    #[test]
    fn test_search_is_anded_with_other_filters() {
        let spec = FilterSpec::new().search("bill").categories([Category::Food]);
        assert!(filter_expenses(&sample(), &spec, today()).is_empty());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let spec = FilterSpec::new().search("   ");
        assert_eq!(filter_expenses(&sample(), &spec, today()).len(), 5);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let spec = FilterSpec::new()
            .categories([Category::Shopping, Category::Entertainment, Category::Bills])
            .amount_range(None, Some(Money::from_cents(10000)));
        let once = filter_expenses(&sample(), &spec, today());
        let twice = filter_expenses(&once, &spec, today());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_compiled_bounds() {
        let spec = FilterSpec::new().preset(DatePreset::Today);
        let compiled = CompiledFilter::new(&spec, today());
        assert_eq!(compiled.date_bounds(), (Some(today()), Some(today())));
    }
}
