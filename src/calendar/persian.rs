//! persian.rs
//!
//! The Solar Hijri (Persian) calendar.
//!
//! Leap years follow the arithmetic 33-year rule: a year `y` is leap when
//! `(25 * y + 11) mod 33 < 8`. The first six months have 31 days, the next
//! five have 30 and Esfand has 29 days, or 30 in a leap year.
//!
//! Conversions are anchored at 1 Farvardin 1403, which fell on 2024-03-20.

use chrono::NaiveDate;

use super::{CalendarDate, CalendarSystem};

const ANCHOR_YEAR: i64 = 1403;

/// Days in one 33-year cycle: 33 * 365 + 8 leap days.
const CYCLE_DAYS: i64 = 12053;

/// Day-of-year (0-based) on which Mehr, the first 30-day month, starts.
const MEHR_START: i64 = 186;

/// The Solar Hijri calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Persian;

fn anchor() -> NaiveDate {
    // 1 Farvardin 1403
    NaiveDate::from_ymd_opt(2024, 3, 20).unwrap_or_default()
}

fn is_leap(year: i64) -> bool {
    (25 * year + 11).rem_euclid(33) < 8
}

/// Number of leap years in `1..=year`. Differences of this count are exact
/// for any pair of years, including years before 1.
fn leap_years_through(year: i64) -> i64 {
    (8 * year + 29).div_euclid(33)
}

/// Days elapsed from 1 Farvardin of year 1 to 1 Farvardin of `year`.
fn days_before_year(year: i64) -> i64 {
    365 * (year - 1) + leap_years_through(year - 1)
}

/// 0-based day of year for a month/day pair.
fn ordinal0(month: u32, day: u32) -> i64 {
    let month = month as i64;
    let before = if month <= 7 {
        31 * (month - 1)
    } else {
        MEHR_START + 30 * (month - 7)
    };
    before + day as i64 - 1
}

impl CalendarSystem for Persian {
    fn name(&self) -> &'static str {
        "persian"
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(year as i64)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        match month {
            1..=6 => 31,
            7..=11 => 30,
            12 if self.is_leap_year(year) => 30,
            12 => 29,
            _ => 0,
        }
    }

    fn to_date(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        if !CalendarDate::new(year, month, day).is_valid_in(self) {
            return None;
        }
        let offset = days_before_year(year as i64) + ordinal0(month, day)
            - days_before_year(ANCHOR_YEAR);
        anchor().checked_add_signed(chrono::Duration::try_days(offset)?)
    }

    fn from_date(&self, date: NaiveDate) -> CalendarDate {
        let n = days_before_year(ANCHOR_YEAR) + date.signed_duration_since(anchor()).num_days();

        // Estimate from the mean year length, then settle on the exact year.
        let mut year = (33 * n).div_euclid(CYCLE_DAYS) + 1;
        while days_before_year(year + 1) <= n {
            year += 1;
        }
        while days_before_year(year) > n {
            year -= 1;
        }

        let ordinal = n - days_before_year(year);
        let (month, day) = if ordinal < MEHR_START {
            (ordinal / 31 + 1, ordinal % 31 + 1)
        } else {
            let rest = ordinal - MEHR_START;
            (rest / 30 + 7, rest % 30 + 1)
        };
        CalendarDate::new(year as i32, month as u32, day as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_years() {
        let p = Persian;
        assert!(p.is_leap_year(1399));
        assert!(p.is_leap_year(1403));
        assert!(!p.is_leap_year(1400));
        assert!(!p.is_leap_year(1402));
        assert_eq!(p.days_in_month(1403, 12), 30);
        assert_eq!(p.days_in_month(1402, 12), 29);
    }

    #[test]
    fn test_leap_count_matches_rule() {
        let mut count = leap_years_through(-500);
        for year in -499..3000 {
            if is_leap(year) {
                count += 1;
            }
            assert_eq!(count, leap_years_through(year), "year {}", year);
        }
    }

    #[test]
    fn test_nowruz_dates() {
        let p = Persian;
        assert_eq!(p.to_date(1399, 1, 1), Some(ymd(2020, 3, 20)));
        assert_eq!(p.to_date(1400, 1, 1), Some(ymd(2021, 3, 21)));
        assert_eq!(p.to_date(1403, 1, 1), Some(ymd(2024, 3, 20)));
        assert_eq!(p.to_date(1404, 1, 1), Some(ymd(2025, 3, 21)));
        // Last day of the leap year 1399.
        assert_eq!(p.to_date(1399, 12, 30), Some(ymd(2021, 3, 20)));
        assert_eq!(p.to_date(1402, 12, 30), None);
    }

    #[test]
    fn test_from_date() {
        let p = Persian;
        assert_eq!(p.from_date(ymd(2024, 3, 19)), CalendarDate::new(1402, 12, 29));
        assert_eq!(p.from_date(ymd(2024, 10, 16)), CalendarDate::new(1403, 7, 25));
        assert_eq!(p.from_date(ymd(2024, 9, 22)), CalendarDate::new(1403, 7, 1));
    }

    #[test]
    fn test_every_day_converts_back() {
        let p = Persian;
        let mut date = ymd(1950, 1, 1);
        let end = ymd(2060, 1, 1);
        while date < end {
            let c = p.from_date(date);
            assert_eq!(p.to_date(c.year, c.month, c.day), Some(date), "{}", c);
            date = date.succ_opt().unwrap();
        }
    }
}
