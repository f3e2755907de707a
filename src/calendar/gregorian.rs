//! gregorian.rs
//!
//! The proleptic Gregorian calendar, backed by `chrono::NaiveDate`.

use chrono::{Datelike, NaiveDate};

use super::{CalendarDate, CalendarSystem};

/// Month lengths (index 1..12) in a common year; index 0 is unused.
const MONTH_LENGTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The Gregorian calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

/// Gregorian leap rule: every fourth year, except centuries not divisible
/// by 400.
///
/// ```
/// # use datepicker_core::calendar::gregorian::leap_year;
/// assert!(leap_year(1600) && leap_year(2000));
/// assert!(!leap_year(1700) && !leap_year(2100));
/// assert!(leap_year(2028));
/// assert!(!leap_year(2026));
/// ```
pub fn leap_year(year: i32) -> bool {
    (year % 4 == 0) && ((year % 100 != 0) || (year % 400 == 0))
}

impl CalendarSystem for Gregorian {
    fn name(&self) -> &'static str {
        "gregorian"
    }

    fn is_leap_year(&self, year: i32) -> bool {
        leap_year(year)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        if month == 2 && leap_year(year) {
            return 29;
        }
        MONTH_LENGTH.get(month as usize).copied().unwrap_or(0)
    }

    fn to_date(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn from_date(&self, date: NaiveDate) -> CalendarDate {
        CalendarDate::new(date.year(), date.month(), date.day())
    }
}
