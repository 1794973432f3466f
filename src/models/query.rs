//! Query specification value objects
//!
//! `FilterSpec`, `SortSpec` and `GroupKey` describe what a caller wants to see;
//! the engine turns them plus a record snapshot into results. All of them are
//! plain values that serialize to JSON for presets and settings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::Money;
use crate::error::ExpenseError;

/// Lowercase and strip separators so `last-3-months`, `last_3_months` and
/// `last3Months` all compare equal
fn normalize_keyword(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Symbolic date ranges relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatePreset {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    Last3Months,
    Last6Months,
    ThisYear,
    LastYear,
    Custom,
}

impl DatePreset {
    pub const ALL: [DatePreset; 11] = [
        DatePreset::Today,
        DatePreset::Yesterday,
        DatePreset::ThisWeek,
        DatePreset::LastWeek,
        DatePreset::ThisMonth,
        DatePreset::LastMonth,
        DatePreset::Last3Months,
        DatePreset::Last6Months,
        DatePreset::ThisYear,
        DatePreset::LastYear,
        DatePreset::Custom,
    ];

    /// Stable identifier, as used in JSON and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "thisWeek",
            Self::LastWeek => "lastWeek",
            Self::ThisMonth => "thisMonth",
            Self::LastMonth => "lastMonth",
            Self::Last3Months => "last3Months",
            Self::Last6Months => "last6Months",
            Self::ThisYear => "thisYear",
            Self::LastYear => "lastYear",
            Self::Custom => "custom",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This Week",
            Self::LastWeek => "Last Week",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::Last3Months => "Last 3 Months",
            Self::Last6Months => "Last 6 Months",
            Self::ThisYear => "This Year",
            Self::LastYear => "Last Year",
            Self::Custom => "Custom Range",
        }
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DatePreset {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = normalize_keyword(s);
        Self::ALL
            .iter()
            .copied()
            .find(|preset| normalize_keyword(preset.key()) == needle)
            .ok_or_else(|| ExpenseError::Validation(format!("Unknown date preset '{}'", s.trim())))
    }
}

/// Constraints applied to a record set
///
/// Every field is optional; an empty spec passes every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Allowed categories (empty means all)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,

    /// Symbolic date range; a non-custom preset overrides explicit bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_preset: Option<DatePreset>,

    /// Inclusive lower date bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper date bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Inclusive lower amount bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Money>,

    /// Inclusive upper amount bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Money>,

    /// Case-insensitive free-text query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterSpec {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given categories
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Restrict to a symbolic date range
    pub fn preset(mut self, preset: DatePreset) -> Self {
        self.date_preset = Some(preset);
        self
    }

    /// Restrict to an explicit date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Restrict to an amount range
    pub fn amount_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// Restrict to records matching a text query
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// The search query if it contains anything besides whitespace
    pub fn search_query(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.date_preset.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.search_query().is_none()
    }

    /// Short human-readable description of the active constraints
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if !self.categories.is_empty() {
            let names: Vec<_> = self.categories.iter().map(|c| c.name()).collect();
            parts.push(format!("categories: {}", names.join(", ")));
        }
        match self.date_preset {
            Some(preset) if preset != DatePreset::Custom => {
                parts.push(format!("date: {}", preset.label()))
            }
            _ => match (self.start_date, self.end_date) {
                (Some(start), Some(end)) => parts.push(format!("date: {} to {}", start, end)),
                (Some(start), None) => parts.push(format!("date: from {}", start)),
                (None, Some(end)) => parts.push(format!("date: until {}", end)),
                (None, None) => {}
            },
        }
        match (self.min_amount, self.max_amount) {
            (Some(min), Some(max)) => parts.push(format!("amount: {} - {}", min, max)),
            (Some(min), None) => parts.push(format!("amount: >= {}", min)),
            (None, Some(max)) => parts.push(format!("amount: <= {}", max)),
            (None, None) => {}
        }
        if let Some(query) = self.search_query() {
            parts.push(format!("search: \"{}\"", query));
        }

        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join("; ")
        }
    }
}

/// Field to order records by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Amount,
    Category,
    Description,
}

impl SortField {
    /// Keyword accepted by `--sort`
    pub fn key(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortField {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            "description" => Ok(Self::Description),
            _ => Err(ExpenseError::Validation(format!(
                "Unknown sort field '{}'. Expected date, amount, category or description",
                s.trim()
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Keyword accepted by `--order`
    pub fn key(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// The opposite direction
    pub fn toggled(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortDirection {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ExpenseError::Validation(format!(
                "Unknown sort direction '{}'. Expected asc or desc",
                s.trim()
            ))),
        }
    }
}

/// Field + direction pair
///
/// The default is newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// Bucketing strategy for grouped display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKey {
    #[default]
    None,
    Category,
    Day,
    Week,
    Month,
    Year,
    AmountRange,
}

impl GroupKey {
    /// Keyword accepted by `--group`
    pub fn key(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Category => "category",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::AmountRange => "amount-range",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GroupKey {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "none" => Ok(Self::None),
            "category" => Ok(Self::Category),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "amount" | "amountrange" => Ok(Self::AmountRange),
            _ => Err(ExpenseError::Validation(format!(
                "Unknown grouping '{}'. Expected none, category, day, week, month, year or amount-range",
                s.trim()
            ))),
        }
    }
}
