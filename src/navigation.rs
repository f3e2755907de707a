//! navigation.rs
//!
//! The picker's navigation state machine.
//!
//! A `NavigationController` owns the navigation state of one picker instance
//! (displayed month, browsing year, year window, active view), the current
//! `MonthGrid` and the selected-cell marker. Actions come in through the
//! handler methods. Each handler either applies completely, rebuilding the
//! grid and the marker from scratch, or is rejected and leaves everything
//! as it was.
//!
//! # Overview
//!
//! - **`open(value, min, max, locale)`**: (re)initializes from the bound value.
//! - **`step_month` / `step_year` / `step_year_range`**: browse without
//!   committing a selection.
//! - **`pick_month` / `pick_year`**: choose from the month and year pickers.
//! - **`select_day(week, day)`**: commits a grid cell as the new bound value.
//! - **`toggle_month_year_view` / `toggle_month_picker_overlay`**: switch views.
//! - **`go_to_today()`**: jumps to the month containing today.
//! - **`toggle_popup` / `close_popup`**: popup visibility.
//!
//! Every handler returns `true` when it changed state and `false` when it
//! was rejected (picker disabled, target outside the bounds, ...). Rejections
//! are logged at debug level.
//!
//! The controller is not reentrant: finish one action before issuing the next.

use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::calendar::CalendarDate;
use crate::constraints::{
    can_step_month, can_step_year, can_step_year_range, is_day_selectable, is_month_selectable,
    is_year_selectable, DateBounds, Direction,
};
use crate::date::add_months;
use crate::grid::{build, week_numbers, CellKind, MonthGrid};
use crate::locale::Locale;
use crate::options::PickerOptions;
use crate::selection::{locate, resolve_cell_date, SelectedMarker};
use crate::YEAR_RANGE_SPAN;

/// Years shown before the current year in a freshly centered year window.
const YEAR_RANGE_LEAD: i32 = 1;

/// Source of "today".
pub trait Clock: fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stopped at a given date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Which picker panel is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    DayGrid,
    MonthPicker,
    YearPicker,
}

/// Snapshot of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Year of the displayed month.
    pub current_year: i32,
    /// Displayed month, 1..=12.
    pub current_month: u32,
    /// Year shown in the month picker header; may differ from
    /// `current_year` while browsing.
    pub display_year: i32,
    /// First year of the year-picker window.
    pub year_range_from: i32,
    /// Last year of the year-picker window (inclusive).
    pub year_range_to: i32,
    pub active_view: ActiveView,
}

/// Everything a renderer needs to know about one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    pub day: u32,
    pub kind: CellKind,
    /// The date behind the cell; `None` for empty cells.
    pub date: Option<CalendarDate>,
    /// A day of the displayed month that is today.
    pub is_today: bool,
    /// The cell carries the selection marker.
    pub is_selected: bool,
    /// The cell's date lies inside the bounds.
    pub is_selectable: bool,
}

/// State of one entry of the month picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCellState {
    /// Today's month, when `highlight_current_month` is on.
    pub is_current: bool,
    /// The displayed month, when `highlight_selected_month` is on.
    pub is_selected: bool,
    pub is_selectable: bool,
}

/// Navigation state machine of one picker instance.
#[derive(Debug)]
pub struct NavigationController {
    locale: Locale,
    options: PickerOptions,
    bounds: DateBounds,
    value: Option<NaiveDate>,
    state: NavigationState,
    grid: MonthGrid,
    selected: Option<SelectedMarker>,
    popup_open: bool,
    clock: Box<dyn Clock>,
}

impl NavigationController {
    /// Creates a controller showing the current month, using the system clock.
    pub fn new(locale: Locale, options: PickerOptions) -> Self {
        Self::with_clock(locale, options, SystemClock)
    }

    /// Creates a controller showing the current month of `clock`.
    pub fn with_clock(locale: Locale, options: PickerOptions, clock: impl Clock + 'static) -> Self {
        let locale = apply_week_start(locale, &options);
        let today = locale.calendar().from_date(clock.today());
        let state = centered_state(today);
        let grid = build(&locale, state.current_year, state.current_month);
        NavigationController {
            locale,
            options,
            bounds: DateBounds::unbounded(),
            value: None,
            state,
            grid,
            selected: None,
            popup_open: false,
            clock: Box::new(clock),
        }
    }

    /// Initializes from the bound value (or today if unset) under new bounds
    /// and locale.
    ///
    /// A value outside the bounds is clamped for display: the grid shows the
    /// month of the nearest bound, while the bound value itself is kept.
    pub fn open(
        &mut self,
        value: Option<NaiveDate>,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
        locale: Locale,
    ) {
        self.locale = apply_week_start(locale, &self.options);
        self.bounds = DateBounds::from_dates(min_date, max_date, &self.locale);
        self.value = value;
        self.initialize();
    }

    /// Replaces the bound value from outside and re-initializes with the
    /// current bounds and locale.
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
        self.initialize();
    }

    fn initialize(&mut self) {
        let calendar = self.locale.calendar();
        let wanted = calendar.from_date(self.value.unwrap_or_else(|| self.clock.today()));
        let shown = self.bounds.clamp(wanted);
        if shown != wanted {
            debug!(%wanted, %shown, "bound value outside bounds, clamped for display");
        }
        let active_view = ActiveView::default();
        self.state = NavigationState {
            active_view,
            ..centered_state(shown)
        };
        self.refresh();
    }

    /// Rebuilds the grid and the selection marker from the current state.
    /// A bound value outside the bounds is never marked.
    fn refresh(&mut self) {
        self.grid = build(&self.locale, self.state.current_year, self.state.current_month);
        self.selected = self
            .value
            .map(|v| self.locale.calendar().from_date(v))
            .filter(|date| self.bounds.contains(*date))
            .and_then(|date| locate(&self.grid, date));
    }

    fn set_year_range(&mut self, from: i32) {
        self.state.year_range_from = from;
        self.state.year_range_to = from + YEAR_RANGE_SPAN - 1;
    }

    /// `true` if every month of `year` converts to an absolute date.
    fn is_year_supported(&self, year: i32) -> bool {
        let calendar = self.locale.calendar();
        calendar.to_date(year, 1, 1).is_some() && calendar.to_date(year, 12, 1).is_some()
    }

    fn reject_if_disabled(&self, action: &str) -> bool {
        if !self.options.enabled {
            debug!(action, "picker disabled, action ignored");
            return true;
        }
        false
    }

    /// Flips popup visibility. Opening re-syncs the displayed month with the
    /// bound value and returns the browsing year to the displayed year.
    pub fn toggle_popup(&mut self) -> bool {
        if self.reject_if_disabled("toggle_popup") {
            return false;
        }
        self.popup_open = !self.popup_open;
        if self.popup_open {
            if self.options.month_picker_as_overlay {
                self.state.active_view = ActiveView::DayGrid;
            }
            if let Some(value) = self.value {
                let date = self.locale.calendar().from_date(value);
                if (date.year, date.month) != (self.state.current_year, self.state.current_month) {
                    self.state.current_year = date.year;
                    self.state.current_month = date.month;
                    self.refresh();
                }
            }
        }
        self.state.display_year = self.state.current_year;
        true
    }

    pub fn close_popup(&mut self) -> bool {
        if !self.popup_open {
            return false;
        }
        self.popup_open = false;
        true
    }

    /// Commits the cell at `(week, day)` as the bound value and closes the
    /// popup. Overflow cells select a day of the adjacent month.
    pub fn select_day(&mut self, week: usize, day: usize) -> bool {
        if self.reject_if_disabled("select_day") {
            return false;
        }
        let Some(date) = resolve_cell_date(&self.grid, week, day) else {
            debug!(week, day, "no date behind cell");
            return false;
        };
        if !is_day_selectable(date.year, date.month, date.day, &self.bounds) {
            debug!(%date, "day outside bounds");
            return false;
        }
        let Some(value) = self.locale.calendar().to_date(date.year, date.month, date.day) else {
            debug!(%date, "day cannot be converted to an absolute date");
            return false;
        };

        self.value = Some(value);
        self.state.current_year = date.year;
        self.state.current_month = date.month;
        self.state.display_year = date.year;
        self.popup_open = false;
        self.refresh();
        true
    }

    /// Shows the previous or next month, rolling the year over.
    pub fn step_month(&mut self, direction: Direction) -> bool {
        if self.reject_if_disabled("step_month") {
            return false;
        }
        // The browsing year may have moved away from the shown month; both
        // must stay clear of the bound in the step direction.
        let month = self.state.current_month;
        if !can_step_month(direction, self.state.display_year, month, &self.bounds)
            || !can_step_month(direction, self.state.current_year, month, &self.bounds)
        {
            debug!(?direction, "month step would leave bounds");
            return false;
        }
        let (year, month) = add_months(self.state.current_year, month, direction.sign());
        if !self.is_year_supported(year) {
            debug!(year, "month step leaves the supported date range");
            return false;
        }
        self.state.current_year = year;
        self.state.current_month = month;
        self.state.display_year = year;
        self.refresh();
        true
    }

    /// Moves the browsing year of the month picker.
    pub fn step_year(&mut self, direction: Direction) -> bool {
        if self.reject_if_disabled("step_year") {
            return false;
        }
        if !can_step_year(direction, self.state.display_year, &self.bounds) {
            debug!(?direction, "year step would leave bounds");
            return false;
        }
        let year = self.state.display_year + direction.sign();
        if !self.is_year_supported(year) {
            debug!(year, "year step leaves the supported date range");
            return false;
        }
        self.state.display_year = year;
        self.refresh();
        true
    }

    /// Moves the year-picker window by a whole window.
    pub fn step_year_range(&mut self, direction: Direction) -> bool {
        if self.reject_if_disabled("step_year_range") {
            return false;
        }
        if !can_step_year_range(direction, self.state.year_range_from, &self.bounds) {
            debug!(?direction, "year range step would leave bounds");
            return false;
        }
        let from = self.state.year_range_from + direction.sign() * YEAR_RANGE_SPAN;
        if !self.is_year_supported(from) || !self.is_year_supported(from + YEAR_RANGE_SPAN - 1) {
            debug!(from, "year range leaves the supported date range");
            return false;
        }
        self.set_year_range(from);
        true
    }

    /// Shows `month` of the browsing year. Closes an overlay month picker.
    pub fn pick_month(&mut self, month: u32) -> bool {
        if self.reject_if_disabled("pick_month") {
            return false;
        }
        if !(1..=12).contains(&month) || !is_month_selectable(self.state.display_year, month, &self.bounds) {
            debug!(year = self.state.display_year, month, "month not selectable");
            return false;
        }
        self.state.current_month = month;
        self.state.current_year = self.state.display_year;
        self.refresh();
        if self.options.month_picker_as_overlay && self.state.active_view == ActiveView::MonthPicker {
            self.state.active_view = ActiveView::DayGrid;
        }
        true
    }

    /// Shows `year`, recenters the year window on it and returns from the
    /// year picker to the month picker.
    pub fn pick_year(&mut self, year: i32) -> bool {
        if self.reject_if_disabled("pick_year") {
            return false;
        }
        if !is_year_selectable(year, &self.bounds) {
            debug!(year, "year not selectable");
            return false;
        }
        if !self.is_year_supported(year) {
            debug!(year, "year outside the supported date range");
            return false;
        }
        self.state.current_year = year;
        self.state.display_year = year;
        self.set_year_range(year - YEAR_RANGE_LEAD);
        self.refresh();
        if self.state.active_view == ActiveView::YearPicker {
            self.state.active_view = ActiveView::MonthPicker;
        }
        true
    }

    /// Switches between the month picker and the year picker. From the day
    /// grid it opens the year picker.
    pub fn toggle_month_year_view(&mut self) -> bool {
        if self.reject_if_disabled("toggle_month_year_view") {
            return false;
        }
        self.state.active_view = match self.state.active_view {
            ActiveView::YearPicker => ActiveView::MonthPicker,
            ActiveView::DayGrid | ActiveView::MonthPicker => ActiveView::YearPicker,
        };
        true
    }

    /// Shows or hides the month picker drawn over the day grid.
    pub fn toggle_month_picker_overlay(&mut self) -> bool {
        if self.reject_if_disabled("toggle_month_picker_overlay") {
            return false;
        }
        self.state.active_view = match self.state.active_view {
            ActiveView::DayGrid => ActiveView::MonthPicker,
            ActiveView::MonthPicker | ActiveView::YearPicker => ActiveView::DayGrid,
        };
        true
    }

    /// Shows the month containing today and recenters the year window.
    /// Not clamped to the bounds; see `is_go_to_today_disabled`.
    pub fn go_to_today(&mut self) -> bool {
        if self.reject_if_disabled("go_to_today") {
            return false;
        }
        let active_view = self.state.active_view;
        self.state = NavigationState {
            active_view,
            ..centered_state(self.today())
        };
        self.refresh();
        true
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn selected(&self) -> Option<SelectedMarker> {
        self.selected
    }

    /// The bound value.
    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    /// Today in the locale's calendar.
    pub fn today(&self) -> CalendarDate {
        self.locale.calendar().from_date(self.clock.today())
    }

    /// Week number of every populated grid row, when enabled in the options.
    pub fn week_numbers(&self) -> Option<Vec<u32>> {
        if !self.options.show_week_numbers {
            return None;
        }
        Some(week_numbers(&self.grid, &self.locale))
    }

    /// State of the grid cell at `(week, day)`, or `None` outside the grid.
    pub fn cell_state(&self, week: usize, day: usize) -> Option<CellState> {
        let cell = *self.grid.cell(week, day)?;
        let date = resolve_cell_date(&self.grid, week, day);
        Some(CellState {
            day: cell.day,
            kind: cell.kind,
            date,
            is_today: cell.in_month() && date == Some(self.today()),
            is_selected: self.selected == Some(SelectedMarker { week, day }),
            is_selectable: date.is_some_and(|d| self.bounds.contains(d)),
        })
    }

    /// State of `month` in the month picker for the browsing year.
    pub fn month_cell_state(&self, month: u32) -> MonthCellState {
        let today = self.today();
        let year = self.state.display_year;
        MonthCellState {
            is_current: self.options.highlight_current_month
                && (today.year, today.month) == (year, month),
            is_selected: self.options.highlight_selected_month
                && (self.state.current_year, self.state.current_month) == (year, month),
            is_selectable: is_month_selectable(year, month, &self.bounds),
        }
    }

    pub fn is_year_selected(&self, year: i32) -> bool {
        year == self.state.current_year
    }

    /// `true` when "go to today" would change nothing visible, or is hidden.
    ///
    /// With the overlay month picker the year window must also already be
    /// centered on today's year.
    pub fn is_go_to_today_disabled(&self) -> bool {
        if !self.options.show_go_to_today {
            return true;
        }
        let today = self.today();
        let shows_today_month = (today.year, today.month)
            == (self.state.current_year, self.state.current_month);
        if self.options.month_picker_as_overlay {
            let centered = centered_state(today);
            return shows_today_month
                && self.state.year_range_from == centered.year_range_from
                && self.state.year_range_to == centered.year_range_to;
        }
        shows_today_month
    }
}

fn apply_week_start(locale: Locale, options: &PickerOptions) -> Locale {
    match options.first_day_of_week {
        Some(weekday) => locale.with_first_day_of_week(weekday),
        None => locale,
    }
}

/// State showing the month of `date` with the year window centered on it.
fn centered_state(date: CalendarDate) -> NavigationState {
    let from = date.year - YEAR_RANGE_LEAD;
    NavigationState {
        current_year: date.year,
        current_month: date.month,
        display_year: date.year,
        year_range_from: from,
        year_range_to: from + YEAR_RANGE_SPAN - 1,
        active_view: ActiveView::DayGrid,
    }
}
