//! Calendar arithmetic and the injected clock
//!
//! All query logic works on calendar dates. Conventions used throughout:
//!
//! - Weeks start on Sunday and run through Saturday.
//! - Month lengths follow the proleptic Gregorian calendar, so February has
//!   29 days in years divisible by 4, except centuries not divisible by 400.
//! - Every range is inclusive on both ends.
//!
//! "Today" is never read from the ambient environment inside the engine; it is
//! supplied by a [`Clock`] so results are reproducible.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First day of the week for all week-based boundaries and labels
pub const WEEK_START: Weekday = Weekday::Sun;

/// Source of the current date
pub trait Clock {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from explicit bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering a single day
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// The Sunday-Saturday week containing `date`
    pub fn week_of(date: NaiveDate) -> Self {
        let start = start_of_week(date);
        Self::new(start, start + Duration::days(6))
    }

    /// The calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        Self::new(start_of_month(date), end_of_month(date))
    }

    /// The calendar year containing `date`
    pub fn year_of(date: NaiveDate) -> Self {
        Self::new(start_of_year(date), end_of_year(date))
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered (0 for an inverted range)
    pub fn num_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Whether `year` is a Gregorian leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-12)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// The Sunday on or before `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// First day of the month containing `date`
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Last day of the month containing `date`
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let length = days_in_month(date.year(), date.month());
    start_of_month(date) + Duration::days(length as i64 - 1)
}

/// January 1st of the year containing `date`
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.ordinal0() as i64)
}

/// December 31st of the year containing `date`
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    let length = if is_leap_year(date.year()) { 366 } else { 365 };
    start_of_year(date) + Duration::days(length - 1)
}

/// First day of the month `offset` months away from the month of `date`
///
/// Saturates at the representable date limits.
pub fn shift_month_start(date: NaiveDate, offset: i32) -> NaiveDate {
    let start = start_of_month(date);
    let months = Months::new(offset.unsigned_abs());
    if offset >= 0 {
        start.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    } else {
        start.checked_sub_months(months).unwrap_or(NaiveDate::MIN)
    }
}

/// Human-readable day label, e.g. `Jan 5, 2025`
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Month label, e.g. `January 2025`
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Year label, e.g. `2025`
pub fn year_label(date: NaiveDate) -> String {
    date.year().to_string()
}
