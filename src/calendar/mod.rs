//! calendar/mod.rs
//!
//! Calendar systems the picker can be driven by. A calendar system answers
//! the questions the grid and the constraint checks need (how long is a
//! month, is a year leap) and converts between its own `(year, month, day)`
//! triples and absolute `chrono::NaiveDate` values.
//!
//! # Overview
//!
//! - **`CalendarSystem`**: the provider trait. Implementations must be cheap
//!   to share, since every `Locale` holds one behind an `Arc`.
//! - **`CalendarDate`**: a date expressed in some calendar system.
//! - **`Gregorian`**: the proleptic Gregorian calendar (see `gregorian.rs`).
//! - **`Persian`**: the Solar Hijri calendar (see `persian.rs`).
//!
//! Weekdays are never computed by a calendar system directly: a date is
//! converted with `to_date` and the weekday is read off the `NaiveDate`.

use std::fmt;

use chrono::NaiveDate;

pub mod gregorian;
pub mod persian;

pub use gregorian::Gregorian;
pub use persian::Persian;

/// A date in the active calendar system.
///
/// Ordering is lexicographic on `(year, month, day)`, which is the natural
/// chronological order inside a single calendar system. Comparing dates that
/// came from two different systems is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Creates a date without validating it against any calendar.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }

    /// Returns `true` if the triple names an existing day in `calendar`.
    ///
    /// ```
    /// # use datepicker_core::calendar::{CalendarDate, Gregorian};
    /// assert!(CalendarDate::new(2024, 2, 29).is_valid_in(&Gregorian));
    /// assert!(!CalendarDate::new(2023, 2, 29).is_valid_in(&Gregorian));
    /// ```
    pub fn is_valid_in(&self, calendar: &dyn CalendarSystem) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= calendar.days_in_month(self.year, self.month)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// The external locale-calendar provider.
///
/// Every calendar system supported here has twelve months per year; month
/// arguments are always in `1..=12`.
pub trait CalendarSystem: fmt::Debug + Send + Sync {
    /// Short identifier, e.g. `"gregorian"`.
    fn name(&self) -> &'static str;

    fn is_leap_year(&self, year: i32) -> bool;

    /// Number of days in `month` of `year` (28..=31 for Gregorian).
    fn days_in_month(&self, year: i32, month: u32) -> u32;

    /// Converts a triple of this calendar into an absolute date. Returns
    /// `None` when the triple does not exist or is out of chrono's range.
    fn to_date(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate>;

    /// Converts an absolute date into this calendar.
    fn from_date(&self, date: NaiveDate) -> CalendarDate;
}
