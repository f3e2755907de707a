//! selection.rs
//!
//! Maps a selected date onto grid coordinates and grid coordinates back onto
//! real dates.
//!
//! - **`locate(grid, selected)`**: the `(week, day)` cell of `selected`, only
//!   when it falls in the grid's own month. A previous- or next-month cell is
//!   never marked even if its day number matches.
//! - **`resolve_cell_date(grid, week, day)`**: the actual date behind a cell,
//!   rolling the month (and the year across December/January) for overflow
//!   cells.
//!
//! For every day `D` of the displayed month,
//! `resolve_cell_date(grid, locate(grid, D))` is `D`.

use crate::calendar::CalendarDate;
use crate::date::add_months;
use crate::grid::{CellKind, MonthGrid};
use crate::DAYS_PER_WEEK;

/// Grid coordinate of the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedMarker {
    /// Row, 0..6.
    pub week: usize,
    /// Column in locale weekday order, 0..7.
    pub day: usize,
}

/// Finds `selected` in `grid`.
///
/// Returns `None` if `selected` is in a different year or month than the
/// grid, or names a day the month does not have.
///
/// ```
/// # use datepicker_core::{calendar::CalendarDate, grid::build, locale::Locale};
/// # use datepicker_core::selection::{locate, SelectedMarker};
/// let grid = build(&Locale::default(), 2024, 6);
/// // Saturday 1 June 2024 sits in the last column of the first row.
/// assert_eq!(
///     locate(&grid, CalendarDate::new(2024, 6, 1)),
///     Some(SelectedMarker { week: 0, day: 6 })
/// );
/// // 31 May is visible in row 0 but is not part of June.
/// assert_eq!(locate(&grid, CalendarDate::new(2024, 5, 31)), None);
/// ```
pub fn locate(grid: &MonthGrid, selected: CalendarDate) -> Option<SelectedMarker> {
    if selected.year != grid.year() || selected.month != grid.month() {
        return None;
    }
    if selected.day == 0 || selected.day > grid.month_length() {
        return None;
    }
    let index = grid.leading() + selected.day as usize - 1;
    Some(SelectedMarker {
        week: index / DAYS_PER_WEEK,
        day: index % DAYS_PER_WEEK,
    })
}

/// Date behind the cell at `(week, day)`, or `None` for empty cells and
/// coordinates outside the grid.
///
/// ```
/// # use datepicker_core::{calendar::CalendarDate, grid::build, locale::Locale};
/// # use datepicker_core::selection::resolve_cell_date;
/// // December 2023 ends on a Sunday; the rest of that row is January 2024.
/// let grid = build(&Locale::default(), 2023, 12);
/// assert_eq!(resolve_cell_date(&grid, 5, 1), Some(CalendarDate::new(2024, 1, 1)));
/// ```
pub fn resolve_cell_date(grid: &MonthGrid, week: usize, day: usize) -> Option<CalendarDate> {
    let cell = grid.cell(week, day)?;
    let delta = match cell.kind {
        CellKind::PreviousMonth => -1,
        CellKind::CurrentMonth => 0,
        CellKind::NextMonth => 1,
        CellKind::Empty => return None,
    };
    let (year, month) = add_months(grid.year(), grid.month(), delta);
    Some(CalendarDate::new(year, month, cell.day))
}
