//! Filter and sort flags shared by `list`, `summary`, `export` and `preset save`

use chrono::NaiveDate;
use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, DatePreset, FilterSpec, Money, SortDirection, SortField, SortSpec};
use crate::services::PresetService;
use crate::storage::Storage;

/// Filter flags
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only these categories (repeat or comma-separate)
    #[arg(short, long = "category", value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Date preset (today, yesterday, this-week, last-week, this-month,
    /// last-month, last-3-months, last-6-months, this-year, last-year)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Earliest date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Minimum amount, inclusive (e.g. "10" or "10.50")
    #[arg(long)]
    pub min: Option<String>,

    /// Maximum amount, inclusive
    #[arg(long)]
    pub max: Option<String>,

    /// Text to find in description, category or amount
    #[arg(short, long)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// True when no filter flag was given
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.period.is_none()
            && self.from.is_none()
            && self.to.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.search.is_none()
    }

    /// Build a spec from the flags alone
    pub fn to_spec(&self) -> ExpenseResult<FilterSpec> {
        self.apply_to(FilterSpec::new())
    }

    /// Overlay the given flags on `base`, leaving unset fields untouched
    pub fn apply_to(&self, mut base: FilterSpec) -> ExpenseResult<FilterSpec> {
        if !self.categories.is_empty() {
            base.categories = self
                .categories
                .iter()
                .map(|c| c.parse::<Category>())
                .collect::<ExpenseResult<Vec<_>>>()?;
        }
        if let Some(period) = &self.period {
            base.date_preset = Some(period.parse::<DatePreset>()?);
        }
        if let Some(from) = &self.from {
            base.start_date = Some(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            base.end_date = Some(parse_date(to)?);
        }
        // Explicit bounds only apply without a resolving preset
        if (self.from.is_some() || self.to.is_some()) && self.period.is_none() {
            if let Some(preset) = base.date_preset {
                if preset != DatePreset::Custom {
                    base.date_preset = Some(DatePreset::Custom);
                }
            }
        }
        if let Some(min) = &self.min {
            base.min_amount = Some(parse_amount(min)?);
        }
        if let Some(max) = &self.max {
            base.max_amount = Some(parse_amount(max)?);
        }
        if let Some(search) = &self.search {
            base.search = Some(search.clone());
        }

        Ok(base)
    }
}

/// Sort flags
#[derive(Args, Debug, Clone, Default)]
pub struct SortArgs {
    /// Sort field (date, amount, category, description)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub order: Option<String>,
}

impl SortArgs {
    /// Resolve against the configured default
    pub fn resolve(&self, default: SortSpec) -> ExpenseResult<SortSpec> {
        let field = match &self.sort {
            Some(field) => field.parse::<SortField>()?,
            None => default.field,
        };
        let direction = match &self.order {
            Some(order) => order.parse::<SortDirection>()?,
            None => default.direction,
        };
        Ok(SortSpec::new(field, direction))
    }
}

/// Filters from an optional saved preset overlaid with explicit flags
pub fn resolve_filters(
    storage: &Storage,
    preset: Option<&str>,
    args: &FilterArgs,
) -> ExpenseResult<FilterSpec> {
    let base = match preset {
        Some(identifier) => PresetService::new(storage).find(identifier)?.filters,
        None => FilterSpec::new(),
    };
    args.apply_to(base)
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD format.", s))
    })
}

/// Parse a decimal amount
pub fn parse_amount(s: &str) -> ExpenseResult<Money> {
    Money::parse(s).map_err(|e| ExpenseError::Validation(e.to_string()))
}
