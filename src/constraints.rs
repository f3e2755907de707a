//! constraints.rs
//!
//! Decides whether a day, month or year may be selected under optional
//! minimum/maximum bounds, and whether month, year or year-range stepping
//! may proceed in a given direction. Everything here is a pure function of
//! its arguments.
//!
//! Bounds are expressed in the locale's calendar system (see
//! `DateBounds::from_dates`), so comparisons never mix a Gregorian bound with
//! a Persian display year.

use chrono::NaiveDate;

use crate::calendar::CalendarDate;
use crate::locale::Locale;
use crate::YEAR_RANGE_SPAN;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// `-1` for `Previous`, `1` for `Next`.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Optional inclusive minimum and maximum date.
///
/// If both are set the minimum is expected not to exceed the maximum; this
/// is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateBounds {
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        DateBounds { min, max }
    }

    /// No bound on either side.
    pub fn unbounded() -> Self {
        DateBounds::default()
    }

    /// Converts absolute bounds into the locale's calendar.
    pub fn from_dates(min: Option<NaiveDate>, max: Option<NaiveDate>, locale: &Locale) -> Self {
        let calendar = locale.calendar();
        DateBounds {
            min: min.map(|d| calendar.from_date(d)),
            max: max.map(|d| calendar.from_date(d)),
        }
    }

    /// Moves `date` into the bounds if it lies outside them.
    ///
    /// ```
    /// # use datepicker_core::calendar::CalendarDate;
    /// # use datepicker_core::constraints::DateBounds;
    /// let bounds = DateBounds::new(Some(CalendarDate::new(2024, 6, 15)), None);
    /// assert_eq!(bounds.clamp(CalendarDate::new(2024, 1, 1)), CalendarDate::new(2024, 6, 15));
    /// assert_eq!(bounds.clamp(CalendarDate::new(2025, 1, 1)), CalendarDate::new(2025, 1, 1));
    /// ```
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        match (self.min, self.max) {
            (Some(min), _) if date < min => min,
            (_, Some(max)) if date > max => max,
            _ => date,
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        is_day_selectable(date.year, date.month, date.day, self)
    }
}

/// `true` unless the date is strictly before the minimum or strictly after
/// the maximum.
///
/// ```
/// # use datepicker_core::calendar::CalendarDate;
/// # use datepicker_core::constraints::{is_day_selectable, DateBounds};
/// let bounds = DateBounds::new(Some(CalendarDate::new(2024, 6, 15)), None);
/// assert!(!is_day_selectable(2024, 6, 14, &bounds));
/// assert!(is_day_selectable(2024, 6, 15, &bounds));
/// assert!(is_day_selectable(2199, 1, 1, &bounds));
/// ```
pub fn is_day_selectable(year: i32, month: u32, day: u32, bounds: &DateBounds) -> bool {
    let date = CalendarDate::new(year, month, day);
    if bounds.min.is_some_and(|min| date < min) {
        return false;
    }
    if bounds.max.is_some_and(|max| date > max) {
        return false;
    }
    true
}

/// `true` unless `(year, month)` lies entirely before the minimum's month or
/// entirely after the maximum's month.
pub fn is_month_selectable(year: i32, month: u32, bounds: &DateBounds) -> bool {
    if bounds.min.is_some_and(|min| (year, month) < (min.year, min.month)) {
        return false;
    }
    if bounds.max.is_some_and(|max| (year, month) > (max.year, max.month)) {
        return false;
    }
    true
}

/// `true` unless `year` lies before the minimum's year or after the maximum's.
pub fn is_year_selectable(year: i32, bounds: &DateBounds) -> bool {
    if bounds.min.is_some_and(|min| year < min.year) {
        return false;
    }
    if bounds.max.is_some_and(|max| year > max.year) {
        return false;
    }
    true
}

/// Whether a month step in `direction` from `(display_year, current_month)`
/// stays inside the bounds. Stepping halts on the bound's own month.
///
/// ```
/// # use datepicker_core::calendar::CalendarDate;
/// # use datepicker_core::constraints::{can_step_month, DateBounds, Direction};
/// let bounds = DateBounds::new(Some(CalendarDate::new(2024, 6, 15)), None);
/// assert!(!can_step_month(Direction::Previous, 2024, 6, &bounds));
/// assert!(can_step_month(Direction::Previous, 2024, 7, &bounds));
/// assert!(can_step_month(Direction::Next, 2024, 6, &bounds));
/// ```
pub fn can_step_month(
    direction: Direction,
    display_year: i32,
    current_month: u32,
    bounds: &DateBounds,
) -> bool {
    let shown = (display_year, current_month);
    match direction {
        Direction::Next => !bounds.max.is_some_and(|max| shown >= (max.year, max.month)),
        Direction::Previous => !bounds.min.is_some_and(|min| shown <= (min.year, min.month)),
    }
}

/// Whether the display year may move one year in `direction`.
pub fn can_step_year(direction: Direction, display_year: i32, bounds: &DateBounds) -> bool {
    match direction {
        Direction::Next => !bounds.max.is_some_and(|max| display_year >= max.year),
        Direction::Previous => !bounds.min.is_some_and(|min| display_year <= min.year),
    }
}

/// Whether the year window starting at `year_range_from` may move by a
/// whole window in `direction`: the next window must contain at least one
/// year on the permitted side of the bound.
pub fn can_step_year_range(direction: Direction, year_range_from: i32, bounds: &DateBounds) -> bool {
    match direction {
        Direction::Next => !bounds
            .max
            .is_some_and(|max| max.year < year_range_from + YEAR_RANGE_SPAN),
        Direction::Previous => !bounds.min.is_some_and(|min| min.year >= year_range_from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: (i32, u32, u32), max: (i32, u32, u32)) -> DateBounds {
        DateBounds::new(
            Some(CalendarDate::new(min.0, min.1, min.2)),
            Some(CalendarDate::new(max.0, max.1, max.2)),
        )
    }

    #[test]
    fn test_unbounded_allows_everything() {
        let b = DateBounds::unbounded();
        assert!(is_day_selectable(1, 1, 1, &b));
        assert!(is_month_selectable(9999, 12, &b));
        assert!(is_year_selectable(-40, &b));
        for direction in [Direction::Previous, Direction::Next] {
            assert!(can_step_month(direction, 2024, 1, &b));
            assert!(can_step_year(direction, 2024, &b));
            assert!(can_step_year_range(direction, 2023, &b));
        }
    }

    #[test]
    fn test_day_bounds_are_inclusive() {
        let b = bounds((2024, 6, 15), (2024, 8, 10));
        assert!(is_day_selectable(2024, 6, 15, &b));
        assert!(is_day_selectable(2024, 8, 10, &b));
        assert!(!is_day_selectable(2024, 6, 10, &b));
        assert!(!is_day_selectable(2024, 8, 11, &b));
        assert!(!is_day_selectable(2023, 12, 31, &b));
        assert!(!is_day_selectable(2025, 1, 1, &b));
    }

    #[test]
    fn test_month_bounds() {
        let b = bounds((2024, 6, 15), (2024, 8, 10));
        // Partially covered months are selectable.
        assert!(is_month_selectable(2024, 6, &b));
        assert!(is_month_selectable(2024, 8, &b));
        assert!(!is_month_selectable(2024, 5, &b));
        assert!(!is_month_selectable(2024, 9, &b));
        assert!(!is_month_selectable(2023, 7, &b));
    }

    #[test]
    fn test_year_bounds() {
        let b = bounds((2020, 6, 15), (2030, 1, 1));
        assert!(!is_year_selectable(2019, &b));
        assert!(is_year_selectable(2020, &b));
        assert!(is_year_selectable(2030, &b));
        assert!(!is_year_selectable(2031, &b));
    }

    #[test]
    fn test_month_step_halts_at_bound() {
        let b = bounds((2024, 6, 15), (2024, 8, 10));
        assert!(!can_step_month(Direction::Previous, 2024, 6, &b));
        assert!(can_step_month(Direction::Next, 2024, 6, &b));
        assert!(!can_step_month(Direction::Next, 2024, 8, &b));
        assert!(can_step_month(Direction::Previous, 2024, 8, &b));
        // Already beyond the bound: never step further out.
        assert!(!can_step_month(Direction::Previous, 2023, 2, &b));
    }

    #[test]
    fn test_year_step_halts_at_bound() {
        let b = bounds((2020, 6, 15), (2030, 1, 1));
        assert!(!can_step_year(Direction::Previous, 2020, &b));
        assert!(can_step_year(Direction::Previous, 2021, &b));
        assert!(!can_step_year(Direction::Next, 2030, &b));
        assert!(can_step_year(Direction::Next, 2029, &b));
    }

    #[test]
    fn test_year_range_step() {
        let b = bounds((2020, 6, 15), (2030, 1, 1));
        // Window 2019..=2030: the previous window would end at 2018.
        assert!(!can_step_year_range(Direction::Previous, 2019, &b));
        assert!(can_step_year_range(Direction::Previous, 2021, &b));
        // Next window would start at 2031, past the maximum.
        assert!(!can_step_year_range(Direction::Next, 2019, &b));
        assert!(can_step_year_range(Direction::Next, 2018, &b));
    }

    #[test]
    fn test_clamp_to_max() {
        let b = bounds((2020, 6, 15), (2030, 1, 1));
        assert_eq!(b.clamp(CalendarDate::new(2031, 3, 3)), CalendarDate::new(2030, 1, 1));
        assert!(b.contains(CalendarDate::new(2025, 5, 5)));
    }
}
