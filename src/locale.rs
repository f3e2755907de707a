//! locale.rs
//!
//! The locale a picker is rendered for: which calendar system drives the
//! grid, which weekday starts a week and what the months are called.
//!
//! There is no process-wide "current locale". Every calendar
//! computation in this crate takes a `&Locale` argument.
//!
//! Locales can be built by hand with `Locale::new`, or looked up by tag in
//! a small built-in registry with `Locale::from_tag`:
//!
//! | tag     | calendar  | week starts |
//! |---------|-----------|-------------|
//! | `en-US` | Gregorian | Sunday      |
//! | `en-GB` | Gregorian | Monday      |
//! | `de-DE` | Gregorian | Monday      |
//! | `fr-FR` | Gregorian | Monday      |
//! | `fa-IR` | Persian   | Saturday    |

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::Weekday;
use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::calendar::{CalendarSystem, Gregorian, Persian};
use crate::error::LocaleError;
use crate::DAYS_PER_WEEK;

static ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

static FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

static PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

#[derive(Debug, Clone, Copy)]
enum CalendarKind {
    Gregorian,
    Persian,
}

/// One row of the built-in registry.
#[derive(Debug, Clone, Copy)]
struct LocaleData {
    first_day_of_week: Weekday,
    month_names: &'static [&'static str; 12],
    calendar: CalendarKind,
}

/// Registered locales. For a bare language tag the first entry with that
/// language wins, so keep the primary region first.
static REGISTRY: [(&str, LocaleData); 5] = [
    (
        "en-US",
        LocaleData {
            first_day_of_week: Weekday::Sun,
            month_names: &ENGLISH_MONTHS,
            calendar: CalendarKind::Gregorian,
        },
    ),
    (
        "en-GB",
        LocaleData {
            first_day_of_week: Weekday::Mon,
            month_names: &ENGLISH_MONTHS,
            calendar: CalendarKind::Gregorian,
        },
    ),
    (
        "de-DE",
        LocaleData {
            first_day_of_week: Weekday::Mon,
            month_names: &GERMAN_MONTHS,
            calendar: CalendarKind::Gregorian,
        },
    ),
    (
        "fr-FR",
        LocaleData {
            first_day_of_week: Weekday::Mon,
            month_names: &FRENCH_MONTHS,
            calendar: CalendarKind::Gregorian,
        },
    ),
    (
        "fa-IR",
        LocaleData {
            first_day_of_week: Weekday::Sat,
            month_names: &PERSIAN_MONTHS,
            calendar: CalendarKind::Persian,
        },
    ),
];

static BY_TAG: Lazy<HashMap<&'static str, LocaleData>> =
    Lazy::new(|| REGISTRY.iter().copied().collect());

lazy_static! {
    /// `ll`, `lll`, `ll-RR` or `ll_RR`, case-insensitive.
    static ref TAG_RE: Regex = Regex::new(r"^([A-Za-z]{2,3})(?:[-_]([A-Za-z]{2}))?$").unwrap();
}

/// Calendar system, week start and month names for a picker.
#[derive(Clone)]
pub struct Locale {
    tag: String,
    first_day_of_week: Weekday,
    month_names: [String; 12],
    calendar: Arc<dyn CalendarSystem>,
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale")
            .field("tag", &self.tag)
            .field("first_day_of_week", &self.first_day_of_week)
            .field("calendar", &self.calendar.name())
            .finish()
    }
}

impl Default for Locale {
    /// `en-US`: Gregorian, weeks start on Sunday.
    fn default() -> Self {
        Locale::from_data("en-US", &REGISTRY[0].1)
    }
}

impl Locale {
    /// Builds a locale from explicit parts.
    pub fn new(
        tag: impl Into<String>,
        first_day_of_week: Weekday,
        month_names: [String; 12],
        calendar: Arc<dyn CalendarSystem>,
    ) -> Self {
        Locale {
            tag: tag.into(),
            first_day_of_week,
            month_names,
            calendar,
        }
    }

    /// Looks a locale up in the built-in registry.
    ///
    /// ```
    /// # use datepicker_core::locale::Locale;
    /// # use chrono::Weekday;
    /// let de = Locale::from_tag("de_de").unwrap();
    /// assert_eq!(de.tag(), "de-DE");
    /// assert_eq!(de.first_day_of_week(), Weekday::Mon);
    /// assert_eq!(de.month_name(3), "März");
    ///
    /// // A bare language resolves to its primary region.
    /// assert_eq!(Locale::from_tag("en").unwrap().tag(), "en-US");
    /// assert!(Locale::from_tag("english").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> Result<Locale, LocaleError> {
        let caps = TAG_RE
            .captures(tag.trim())
            .ok_or_else(|| LocaleError::MalformedTag(tag.to_string()))?;
        let language = caps[1].to_ascii_lowercase();

        match caps.get(2) {
            Some(region) => {
                let canonical = format!("{}-{}", language, region.as_str().to_ascii_uppercase());
                let data = BY_TAG
                    .get(canonical.as_str())
                    .ok_or_else(|| LocaleError::UnknownLocale(canonical.clone()))?;
                Ok(Locale::from_data(&canonical, data))
            }
            None => {
                let prefix = format!("{}-", language);
                REGISTRY
                    .iter()
                    .find(|(t, _)| t.starts_with(&prefix))
                    .map(|(t, data)| Locale::from_data(t, data))
                    .ok_or(LocaleError::UnknownLocale(language))
            }
        }
    }

    fn from_data(tag: &str, data: &LocaleData) -> Locale {
        let calendar: Arc<dyn CalendarSystem> = match data.calendar {
            CalendarKind::Gregorian => Arc::new(Gregorian),
            CalendarKind::Persian => Arc::new(Persian),
        };
        Locale {
            tag: tag.to_string(),
            first_day_of_week: data.first_day_of_week,
            month_names: (*data.month_names).map(String::from),
            calendar,
        }
    }

    /// Returns a copy of this locale whose weeks start on `weekday`.
    pub fn with_first_day_of_week(mut self, weekday: Weekday) -> Self {
        self.first_day_of_week = weekday;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn calendar(&self) -> &dyn CalendarSystem {
        self.calendar.as_ref()
    }

    /// Name of `month` (1..=12), or an empty string for anything else.
    pub fn month_name(&self, month: u32) -> &str {
        match month {
            1..=12 => &self.month_names[month as usize - 1],
            _ => "",
        }
    }

    /// The weekday shown in grid column `column` (0 = first day of week).
    ///
    /// ```
    /// # use datepicker_core::locale::Locale;
    /// # use chrono::Weekday;
    /// let fa = Locale::from_tag("fa-IR").unwrap();
    /// assert_eq!(fa.weekday_at(0), Weekday::Sat);
    /// assert_eq!(fa.weekday_at(6), Weekday::Fri);
    /// ```
    pub fn weekday_at(&self, column: usize) -> Weekday {
        (0..column % DAYS_PER_WEEK).fold(self.first_day_of_week, |w, _| w.succ())
    }

    /// Grid column (0..7) in which `weekday` is shown.
    pub fn column_of(&self, weekday: Weekday) -> usize {
        weekday_offset(weekday, self.first_day_of_week) as usize
    }
}

/// How many days `weekday` comes after `first_day_of_week`, in `0..7`.
///
/// ```
/// # use datepicker_core::locale::weekday_offset;
/// # use chrono::Weekday;
/// assert_eq!(weekday_offset(Weekday::Sun, Weekday::Sun), 0);
/// assert_eq!(weekday_offset(Weekday::Sun, Weekday::Mon), 6);
/// assert_eq!(weekday_offset(Weekday::Mon, Weekday::Sat), 2);
/// ```
pub fn weekday_offset(weekday: Weekday, first_day_of_week: Weekday) -> u32 {
    (weekday.num_days_from_sunday() + 7 - first_day_of_week.num_days_from_sunday()) % 7
}
