//! The calendar core of a date picker: everything a picker needs to know,
//! nothing about how it is drawn.
//!
//! 1. **`grid::build(locale, year, month)`**: lays a month out as a fixed
//!    6×7 grid of day cells aligned to the locale's first day of week, with
//!    the neighbouring months' days filling the gaps.
//! 2. **`NavigationController`**: the state machine behind the picker's
//!    buttons. It steps months, years and year windows, picks from the
//!    month and year pickers, selects days, and jumps to today, all under
//!    optional minimum/maximum bounds.
//!
//! Dates are interpreted in the locale's calendar system, either Gregorian
//! or Persian (Solar Hijri). Values going in and out of the picker are plain
//! `chrono::NaiveDate`s.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use datepicker_core::{Direction, Locale, NavigationController, PickerOptions};
//!
//! let mut picker = NavigationController::new(Locale::default(), PickerOptions::default());
//! let value = NaiveDate::from_ymd_opt(2024, 6, 20);
//! let min = NaiveDate::from_ymd_opt(2024, 6, 15);
//! picker.open(value, min, None, Locale::default());
//! assert_eq!(picker.grid().title(), "June 2024");
//!
//! // Nothing before the minimum's month.
//! assert!(!picker.step_month(Direction::Previous));
//! assert!(picker.step_month(Direction::Next));
//! assert_eq!(picker.grid().title(), "July 2024");
//! ```

pub mod calendar;
pub mod constraints;
pub mod date;
pub mod error;
pub mod grid;
pub mod locale;
pub mod navigation;
pub mod options;
pub mod selection;

pub use calendar::{CalendarDate, CalendarSystem};
pub use constraints::{DateBounds, Direction};
pub use error::{LocaleError, OptionsError};
pub use grid::{CalendarCell, CellKind, MonthGrid};
pub use locale::Locale;
pub use navigation::{ActiveView, Clock, FixedClock, NavigationController, NavigationState, SystemClock};
pub use options::PickerOptions;
pub use selection::SelectedMarker;

/// Columns of the day grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Rows of the day grid; enough for a 31-day month starting in the last column.
pub const WEEKS_PER_GRID: usize = 6;

/// Cells of the day grid.
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// Every supported calendar system has twelve months.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Years shown at once by the year picker.
pub const YEAR_RANGE_SPAN: i32 = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fits_longest_month() {
        // 31 days starting in the last column need six rows.
        assert!(DAYS_PER_WEEK - 1 + 31 <= GRID_CELLS);
        assert!(DAYS_PER_WEEK - 1 + 31 > GRID_CELLS - DAYS_PER_WEEK);
        assert_eq!(GRID_CELLS, 42);
    }
}
