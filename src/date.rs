//! date.rs
//!
//! Locale-aware calendar primitives used by the grid builder, the selection
//! locator and the navigation controller. Every function that depends on the
//! calendar system or the week start takes the `Locale` explicitly; the
//! actual calendar arithmetic is delegated to the locale's `CalendarSystem`,
//! and this module only sequences those calls.
//!
//! # Overview
//!
//! - **`days_in_month(locale, year, month)`**: Length of a month.
//! - **`first_weekday_of_month(locale, year, month)`**: Weekday of the 1st.
//! - **`add_months(year, month, delta)`**: Month arithmetic with year rollover.
//! - **`day_of_year(locale, year, month, day)`**: 1-based ordinal of a date.
//! - **`weekday_of(locale, year, month, day)`**: Weekday of any date.
//! - **`week_of_year(locale, year, month, day, first_day_of_week)`**: Week
//!   number under the "first full week" rule.
//! - **`leading_cells(first_weekday, first_day_of_week)`**: How many cells of
//!   the first grid row belong to the previous month.

use chrono::{Datelike, Weekday};

use crate::locale::{weekday_offset, Locale};
use crate::MONTHS_PER_YEAR;

/// Number of days in `month` of `year` in the locale's calendar.
///
/// ```
/// # use datepicker_core::{date::days_in_month, locale::Locale};
/// let us = Locale::default();
/// assert_eq!(days_in_month(&us, 2024, 2), 29);
/// assert_eq!(days_in_month(&us, 2023, 2), 28);
/// ```
pub fn days_in_month(locale: &Locale, year: i32, month: u32) -> u32 {
    locale.calendar().days_in_month(year, month)
}

/// Weekday of any date of the locale's calendar, or `None` when the triple
/// cannot be converted to an absolute date.
pub fn weekday_of(locale: &Locale, year: i32, month: u32, day: u32) -> Option<Weekday> {
    locale
        .calendar()
        .to_date(year, month, day)
        .map(|date| date.weekday())
}

/// Weekday on which `month` of `year` starts.
///
/// Falls back to the locale's first day of week for dates the calendar
/// cannot convert (far outside chrono's supported range).
///
/// ```
/// # use datepicker_core::{date::first_weekday_of_month, locale::Locale};
/// # use chrono::Weekday;
/// let us = Locale::default();
/// assert_eq!(first_weekday_of_month(&us, 2023, 1), Weekday::Sun);
/// assert_eq!(first_weekday_of_month(&us, 2024, 2), Weekday::Thu);
/// ```
pub fn first_weekday_of_month(locale: &Locale, year: i32, month: u32) -> Weekday {
    weekday_of(locale, year, month, 1).unwrap_or_else(|| {
        tracing::warn!(year, month, "month start outside the supported date range");
        locale.first_day_of_week()
    })
}

/// Adds `delta` months (which may be negative) to `(year, month)`.
///
/// Month 13 becomes month 1 of the next year and month 0 becomes month 12
/// of the previous year, for any size of `delta`. The resulting year
/// saturates at the bounds of `i32`.
///
/// ```
/// # use datepicker_core::date::add_months;
/// assert_eq!(add_months(2023, 12, 1), (2024, 1));
/// assert_eq!(add_months(2024, 1, -1), (2023, 12));
/// assert_eq!(add_months(2024, 6, -18), (2022, 12));
/// ```
pub fn add_months(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let months = MONTHS_PER_YEAR as i64;
    let total = year as i64 * months + (month as i64 - 1) + delta as i64;
    let year = total.div_euclid(months).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    (year, (total.rem_euclid(months) + 1) as u32)
}

/// Converts a date to its day-of-year index (1-based).
///
/// ```
/// # use datepicker_core::{date::day_of_year, locale::Locale};
/// let us = Locale::default();
/// assert_eq!(day_of_year(&us, 2023, 1, 1), 1);
/// assert_eq!(day_of_year(&us, 2023, 12, 31), 365);
/// // For a leap year:
/// assert_eq!(day_of_year(&us, 2024, 3, 1), 61); // Jan(31) + Feb(29) + 1
/// ```
pub fn day_of_year(locale: &Locale, year: i32, month: u32, day: u32) -> u32 {
    let calendar = locale.calendar();
    (1..month).map(|m| calendar.days_in_month(year, m)).sum::<u32>() + day
}

/// Week number of a date using the "first full week" rule: week 1 is the
/// first week that starts on `first_day_of_week` inside the year. Days before
/// it belong to the last week (52 or 53) of the previous year.
///
/// ```
/// # use datepicker_core::{date::week_of_year, locale::Locale};
/// # use chrono::Weekday;
/// let us = Locale::default();
/// // 2023 starts on a Sunday.
/// assert_eq!(week_of_year(&us, 2023, 1, 1, Weekday::Sun), 1);
/// // 1 Jan 2022 is a Saturday, still in the last week of 2021.
/// assert_eq!(week_of_year(&us, 2022, 1, 1, Weekday::Sun), 52);
/// ```
pub fn week_of_year(
    locale: &Locale,
    year: i32,
    month: u32,
    day: u32,
    first_day_of_week: Weekday,
) -> u32 {
    let ordinal0 = day_of_year(locale, year, month, day) as i64 - 1;
    let weekday = match weekday_of(locale, year, month, day) {
        Some(w) => w.num_days_from_sunday() as i64,
        None => return 0,
    };

    // Weekday of the first day of the year, possibly negative.
    let day_for_first = weekday - ordinal0 % 7;
    // Days from the first of the year until the first full week starts.
    let offset = (first_day_of_week.num_days_from_sunday() as i64 - day_for_first + 14) % 7;
    let days_into_weeks = ordinal0 - offset;
    if days_into_weeks >= 0 {
        return (days_into_weeks / 7 + 1) as u32;
    }

    // Part of the previous year's last week.
    let previous = year - 1;
    let last_month = MONTHS_PER_YEAR;
    let last_day = days_in_month(locale, previous, last_month);
    week_of_year(locale, previous, last_month, last_day, first_day_of_week)
}

/// Number of leading cells in the first grid row that belong to the previous
/// month, given the weekday of the 1st and the locale's week start.
///
/// A month starting on the first day of the week has no leading cells.
///
/// ```
/// # use datepicker_core::date::leading_cells;
/// # use chrono::Weekday;
/// assert_eq!(leading_cells(Weekday::Sun, Weekday::Sun), 0);
/// assert_eq!(leading_cells(Weekday::Thu, Weekday::Sun), 4);
/// assert_eq!(leading_cells(Weekday::Sun, Weekday::Mon), 6);
/// ```
pub fn leading_cells(first_weekday: Weekday, first_day_of_week: Weekday) -> usize {
    weekday_offset(first_weekday, first_day_of_week) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// The two-branch leading-cell arithmetic a grid used to be built with:
    /// one expression when the month starts numerically after the week
    /// start, another otherwise. Returns the value of cell 0 counted back
    /// from the end of the previous month, i.e. the number of leading cells.
    fn branching_leading_cells(first_weekday: u32, first_day_of_week: u32) -> usize {
        let (fw, fdw) = (first_weekday as i32, first_day_of_week as i32);
        let previous_len = 31;
        let cell0 = if fw > fdw {
            previous_len - fw + 1 + fdw
        } else {
            previous_len - (7 + fw - 1 - fdw)
        };
        (previous_len - cell0 + 1) as usize
    }

    #[test]
    fn test_leading_cells_against_branching_formula() {
        for first_weekday in ALL_WEEKDAYS {
            for fdw in ALL_WEEKDAYS {
                let simple = leading_cells(first_weekday, fdw);
                let branching = branching_leading_cells(
                    first_weekday.num_days_from_sunday(),
                    fdw.num_days_from_sunday(),
                );
                if first_weekday == fdw {
                    // The branching form produces a whole week of overflow
                    // when the month starts on the week start.
                    assert_eq!(simple, 0);
                    assert_eq!(branching, 7);
                } else {
                    assert_eq!(simple, branching, "{:?} / {:?}", first_weekday, fdw);
                    assert!(simple < 7);
                }
            }
        }
    }

    #[test]
    fn test_add_months_rollover() {
        assert_eq!(add_months(2023, 12, 1), (2024, 1));
        assert_eq!(add_months(2023, 1, -1), (2022, 12));
        assert_eq!(add_months(2023, 5, 0), (2023, 5));
        assert_eq!(add_months(2023, 5, 24), (2025, 5));
        assert_eq!(add_months(0, 1, -1), (-1, 12));
    }

    #[test]
    fn test_add_months_extreme_years() {
        assert_eq!(add_months(i32::MAX, 6, 1), (i32::MAX, 7));
        assert_eq!(add_months(i32::MIN, 6, -1), (i32::MIN, 5));
        assert_eq!(add_months(300_000_000, 1, -1), (299_999_999, 12));
    }

    #[test]
    fn test_first_weekday_of_month() {
        let us = Locale::default();
        assert_eq!(first_weekday_of_month(&us, 2024, 6), Weekday::Sat);
        assert_eq!(first_weekday_of_month(&us, 2023, 10), Weekday::Sun);

        // 1 Farvardin 1403 was a Wednesday.
        let fa = Locale::from_tag("fa-IR").unwrap();
        assert_eq!(first_weekday_of_month(&fa, 1403, 1), Weekday::Wed);
    }

    #[test]
    fn test_day_of_year_persian() {
        let fa = Locale::from_tag("fa-IR").unwrap();
        assert_eq!(day_of_year(&fa, 1403, 7, 1), 187);
        assert_eq!(day_of_year(&fa, 1403, 12, 30), 366);
        assert_eq!(day_of_year(&fa, 1402, 12, 29), 365);
    }

    #[test]
    fn test_week_of_year_first_full_week() {
        let us = Locale::default();
        assert_eq!(week_of_year(&us, 2023, 12, 31, Weekday::Sun), 53);
        assert_eq!(week_of_year(&us, 2024, 6, 15, Weekday::Sun), 23);
        assert_eq!(week_of_year(&us, 2024, 1, 1, Weekday::Mon), 1);
        // Not ISO numbering: the last days of 2024 stay in 2024.
        assert_eq!(week_of_year(&us, 2024, 12, 30, Weekday::Mon), 53);
        // 1 Jan 2021 (Friday) belongs to the last week of 2020.
        assert_eq!(week_of_year(&us, 2021, 1, 1, Weekday::Mon), 52);
    }

    #[test]
    fn test_week_of_year_is_monotonic_within_year() {
        let us = Locale::default();
        for fdw in ALL_WEEKDAYS {
            let mut last = 0;
            for month in 1..=12 {
                for day in 1..=days_in_month(&us, 2025, month) {
                    let week = week_of_year(&us, 2025, month, day, fdw);
                    if month == 1 && week > 50 {
                        continue;
                    }
                    assert!(week >= last && week <= last + 1, "{}-{}", month, day);
                    last = week;
                }
            }
        }
    }
}
