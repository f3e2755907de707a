//! grid.rs
//!
//! Builds the fixed 6×7 day grid for one displayed month.
//!
//! The grid is row-major: rows are weeks and columns are weekdays in locale
//! order, starting at the locale's first day of week. Row 0 is padded at the
//! front with the tail of the previous month, the month's own days follow,
//! and the last populated row is completed with the head of the next month.
//! Rows after that stay empty (day 0). The grid always has 42 cells.
//!
//! Each cell records which month it belongs to when it is built, so no
//! later lookup has to guess from the day number whether a `30` in row 0 is
//! the previous month's or the current one's.
//!
//! A `MonthGrid` is never patched: every navigation builds a new one.

use crate::date::{add_months, days_in_month, first_weekday_of_month, leading_cells, week_of_year};
use crate::locale::Locale;
use crate::selection::resolve_cell_date;
use crate::{DAYS_PER_WEEK, WEEKS_PER_GRID};

/// Which month a grid cell belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellKind {
    /// Tail of the previous month, shown in row 0.
    PreviousMonth,
    /// A day of the displayed month.
    CurrentMonth,
    /// Head of the next month, completing the last populated row.
    NextMonth,
    /// Unused cell below the last populated row.
    #[default]
    Empty,
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarCell {
    /// Day of month, or 0 for an empty cell.
    pub day: u32,
    pub kind: CellKind,
}

impl CalendarCell {
    /// `true` if the cell is a day of the displayed month.
    pub fn in_month(&self) -> bool {
        self.kind == CellKind::CurrentMonth
    }

    pub fn is_empty(&self) -> bool {
        self.kind == CellKind::Empty
    }
}

type Rows = [[CalendarCell; DAYS_PER_WEEK]; WEEKS_PER_GRID];

/// The day grid of one month, together with the facts it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    title: String,
    month_length: u32,
    leading: usize,
    rows: Rows,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// `"<month name> <year>"` in the locale the grid was built for.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of days in the displayed month.
    pub fn month_length(&self) -> u32 {
        self.month_length
    }

    /// Number of previous-month cells at the start of row 0.
    pub fn leading(&self) -> usize {
        self.leading
    }

    pub fn rows(&self) -> &[[CalendarCell; DAYS_PER_WEEK]; WEEKS_PER_GRID] {
        &self.rows
    }

    /// Cell at `(week, day)`, or `None` outside the 6×7 grid.
    pub fn cell(&self, week: usize, day: usize) -> Option<&CalendarCell> {
        self.rows.get(week).and_then(|row| row.get(day))
    }

    /// All 42 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Number of rows holding at least one day.
    pub fn populated_rows(&self) -> usize {
        self.rows
            .iter()
            .take_while(|row| !row[0].is_empty())
            .count()
    }
}

/// Builds the grid for `month` of `year` in `locale`.
///
/// ```
/// # use datepicker_core::{grid::build, locale::Locale};
/// // January 2023 starts on a Sunday, the en-US week start.
/// let grid = build(&Locale::default(), 2023, 1);
/// let first_row: Vec<u32> = grid.rows()[0].iter().map(|c| c.day).collect();
/// assert_eq!(first_row, vec![1, 2, 3, 4, 5, 6, 7]);
/// assert!(grid.rows()[0].iter().all(|c| c.in_month()));
/// assert_eq!(grid.title(), "January 2023");
/// ```
pub fn build(locale: &Locale, year: i32, month: u32) -> MonthGrid {
    let first_weekday = first_weekday_of_month(locale, year, month);
    let leading = leading_cells(first_weekday, locale.first_day_of_week());
    let month_length = days_in_month(locale, year, month);
    let (previous_year, previous_month) = add_months(year, month, -1);
    let previous_length = days_in_month(locale, previous_year, previous_month);

    let mut rows: Rows = Default::default();
    let mut place = |index: usize, cell: CalendarCell| {
        rows[index / DAYS_PER_WEEK][index % DAYS_PER_WEEK] = cell;
    };

    for index in 0..leading {
        place(
            index,
            CalendarCell {
                day: previous_length + 1 + index as u32 - leading as u32,
                kind: CellKind::PreviousMonth,
            },
        );
    }

    for day in 1..=month_length {
        place(
            leading + day as usize - 1,
            CalendarCell {
                day,
                kind: CellKind::CurrentMonth,
            },
        );
    }

    // Complete the row holding the month's last day.
    if month_length > 0 {
        let last_index = leading + month_length as usize - 1;
        let row_end = (last_index / DAYS_PER_WEEK + 1) * DAYS_PER_WEEK;
        for index in last_index + 1..row_end {
            place(
                index,
                CalendarCell {
                    day: (index - last_index) as u32,
                    kind: CellKind::NextMonth,
                },
            );
        }
    }

    tracing::trace!(year, month, leading, month_length, "built month grid");

    MonthGrid {
        year,
        month,
        title: format!("{} {}", locale.month_name(month), year),
        month_length,
        leading,
        rows,
    }
}

/// Week number of every populated row, computed from the row's first cell.
///
/// ```
/// # use datepicker_core::{grid::{build, week_numbers}, locale::Locale};
/// let us = Locale::default();
/// let grid = build(&us, 2023, 1);
/// assert_eq!(week_numbers(&grid, &us), vec![1, 2, 3, 4, 5]);
/// ```
pub fn week_numbers(grid: &MonthGrid, locale: &Locale) -> Vec<u32> {
    (0..grid.populated_rows())
        .filter_map(|week| resolve_cell_date(grid, week, 0))
        .map(|date| {
            week_of_year(
                locale,
                date.year,
                date.month,
                date.day,
                locale.first_day_of_week(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GRID_CELLS;
    use chrono::Weekday;

    fn days(grid: &MonthGrid, week: usize) -> Vec<u32> {
        grid.rows()[week].iter().map(|c| c.day).collect()
    }

    fn in_month_count(grid: &MonthGrid) -> usize {
        grid.cells().filter(|c| c.in_month()).count()
    }

    #[test]
    fn test_always_42_cells() {
        for locale in [
            Locale::default(),
            Locale::from_tag("de-DE").unwrap(),
            Locale::default().with_first_day_of_week(Weekday::Sat),
            Locale::from_tag("fa-IR").unwrap(),
        ] {
            let years = if locale.calendar().name() == "persian" {
                1395..1410
            } else {
                2015..2035
            };
            for year in years {
                for month in 1..=12 {
                    let grid = build(&locale, year, month);
                    assert_eq!(grid.cells().count(), GRID_CELLS);
                    assert_eq!(grid.rows().len(), WEEKS_PER_GRID);
                    assert_eq!(in_month_count(&grid), grid.month_length() as usize);
                }
            }
        }
    }

    #[test]
    fn test_leap_february() {
        let us = Locale::default();
        assert_eq!(in_month_count(&build(&us, 2024, 2)), 29);
        assert_eq!(in_month_count(&build(&us, 2023, 2)), 28);
    }

    #[test]
    fn test_first_of_month_lands_in_its_weekday_column() {
        for fdw in [Weekday::Sun, Weekday::Mon, Weekday::Thu, Weekday::Sat] {
            let locale = Locale::default().with_first_day_of_week(fdw);
            for month in 1..=12 {
                let grid = build(&locale, 2024, month);
                let column = locale.column_of(first_weekday_of_month(&locale, 2024, month));
                let cell = grid.cell(0, column).unwrap();
                assert_eq!(cell.day, 1);
                assert!(cell.in_month());
                assert_eq!(grid.leading(), column);
            }
        }
    }

    #[test]
    fn test_leading_and_trailing_overflow() {
        // June 2024 starts on a Saturday; Sunday week start.
        let grid = build(&Locale::default(), 2024, 6);
        assert_eq!(days(&grid, 0), vec![26, 27, 28, 29, 30, 31, 1]);
        assert!(grid.rows()[0][..6]
            .iter()
            .all(|c| c.kind == CellKind::PreviousMonth));
        // June 30 is a Sunday, alone in row 5 with six July days.
        assert_eq!(days(&grid, 5), vec![30, 1, 2, 3, 4, 5, 6]);
        assert!(grid.rows()[5][1..]
            .iter()
            .all(|c| c.kind == CellKind::NextMonth));
        assert_eq!(grid.populated_rows(), 6);
    }

    #[test]
    fn test_rows_after_last_week_stay_empty() {
        // February 2026 starts on a Sunday and fills exactly four rows.
        let grid = build(&Locale::default(), 2026, 2);
        assert_eq!(grid.populated_rows(), 4);
        assert_eq!(days(&grid, 3), vec![22, 23, 24, 25, 26, 27, 28]);
        assert!(grid.rows()[4].iter().chain(grid.rows()[5].iter()).all(|c| c.is_empty() && c.day == 0));
    }

    #[test]
    fn test_previous_month_tail_across_year() {
        // January 2025 starts on a Wednesday; Monday week start.
        let grid = build(&Locale::from_tag("en-GB").unwrap(), 2025, 1);
        assert_eq!(days(&grid, 0), vec![30, 31, 1, 2, 3, 4, 5]);
        assert_eq!(grid.title(), "January 2025");
    }

    #[test]
    fn test_persian_month() {
        let fa = Locale::from_tag("fa-IR").unwrap();
        // 1 Mehr 1403 (2024-09-22) is a Sunday; weeks start on Saturday.
        let grid = build(&fa, 1403, 7);
        assert_eq!(grid.leading(), 1);
        assert_eq!(grid.cell(0, 0).unwrap().day, 31);
        assert_eq!(grid.cell(0, 1).unwrap().day, 1);
        assert_eq!(grid.month_length(), 30);
        assert_eq!(grid.title(), "مهر 1403");
    }

    #[test]
    fn test_week_numbers_cross_year() {
        let us = Locale::default();
        // Row 0 of January 2022 starts on Sunday 26 December 2021.
        let grid = build(&us, 2022, 1);
        let weeks = week_numbers(&grid, &us);
        assert_eq!(weeks.len(), grid.populated_rows());
        assert_eq!(weeks[0], 52);
        assert_eq!(weeks[1], 1);
    }
}
