//! Date preset resolution
//!
//! Maps a symbolic preset to concrete inclusive bounds relative to `today`.

use chrono::{Duration, NaiveDate};

use crate::calendar::{end_of_month, shift_month_start, DateRange};
use crate::models::DatePreset;

/// Resolve a preset to a date range
///
/// `Custom` resolves to `None`; the caller supplies explicit bounds instead.
pub fn resolve_preset(preset: DatePreset, today: NaiveDate) -> Option<DateRange> {
    let range = match preset {
        DatePreset::Today => DateRange::day(today),
        DatePreset::Yesterday => DateRange::day(today - Duration::days(1)),
        DatePreset::ThisWeek => DateRange::week_of(today),
        DatePreset::LastWeek => DateRange::week_of(today - Duration::days(7)),
        DatePreset::ThisMonth => DateRange::month_of(today),
        DatePreset::LastMonth => DateRange::month_of(shift_month_start(today, -1)),
        DatePreset::Last3Months => DateRange::new(shift_month_start(today, -2), end_of_month(today)),
        DatePreset::Last6Months => DateRange::new(shift_month_start(today, -5), end_of_month(today)),
        DatePreset::ThisYear => DateRange::year_of(today),
        DatePreset::LastYear => DateRange::year_of(shift_month_start(today, -12)),
        DatePreset::Custom => return None,
    };
    Some(range)
}
