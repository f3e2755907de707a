//! options.rs
//!
//! Behavior switches of a picker instance, and their persisted string form.
//!
//! The persisted form is a list of `key=value` entries separated by `;;`,
//! for example:
//!
//! ```text
//! enabled=true;;show_week_numbers=true;;first_day_of_week=Mon
//! ```
//!
//! Keys not mentioned keep their default. Booleans accept `true`, `false`,
//! `1` and `0`; weekdays accept English names or three-letter abbreviations.

use std::str::FromStr;

use chrono::Weekday;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::OptionsError;

lazy_static! {
    static ref ENTRY_RE: Regex = Regex::new(r"^\s*([a-z_]+)\s*=\s*(.*?)\s*$").unwrap();
}

const ENTRY_SEPARATOR: &str = ";;";

/// Switches that change how the controller behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// When `false` every action is rejected.
    pub enabled: bool,
    /// Expose a week number for each grid row.
    pub show_week_numbers: bool,
    /// Offer the "go to today" action.
    pub show_go_to_today: bool,
    /// The month picker covers the day grid instead of sitting beside it.
    pub month_picker_as_overlay: bool,
    /// Mark today's month in the month picker.
    pub highlight_current_month: bool,
    /// Mark the displayed month in the month picker.
    pub highlight_selected_month: bool,
    /// Overrides the locale's first day of week.
    pub first_day_of_week: Option<Weekday>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        PickerOptions {
            enabled: true,
            show_week_numbers: false,
            show_go_to_today: true,
            month_picker_as_overlay: false,
            highlight_current_month: false,
            highlight_selected_month: false,
            first_day_of_week: None,
        }
    }
}

impl PickerOptions {
    /// Parses a persisted option string on top of the defaults.
    ///
    /// ```
    /// # use datepicker_core::options::PickerOptions;
    /// # use chrono::Weekday;
    /// let options = PickerOptions::load_from_str("show_week_numbers=1;; first_day_of_week = monday").unwrap();
    /// assert!(options.show_week_numbers);
    /// assert_eq!(options.first_day_of_week, Some(Weekday::Mon));
    /// assert!(options.enabled);
    /// ```
    pub fn load_from_str(s: &str) -> Result<PickerOptions, OptionsError> {
        let mut options = PickerOptions::default();
        for entry in s.split(ENTRY_SEPARATOR).filter(|e| !e.trim().is_empty()) {
            let caps = ENTRY_RE
                .captures(entry)
                .ok_or_else(|| OptionsError::MalformedEntry(entry.to_string()))?;
            options.set(&caps[1], &caps[2])?;
        }
        Ok(options)
    }

    /// Sets one option from its persisted key and value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let flag = match key {
            "enabled" => &mut self.enabled,
            "show_week_numbers" => &mut self.show_week_numbers,
            "show_go_to_today" => &mut self.show_go_to_today,
            "month_picker_as_overlay" => &mut self.month_picker_as_overlay,
            "highlight_current_month" => &mut self.highlight_current_month,
            "highlight_selected_month" => &mut self.highlight_selected_month,
            "first_day_of_week" => {
                self.first_day_of_week = match value {
                    "" | "default" => None,
                    _ => Some(Weekday::from_str(value).map_err(|_| invalid())?),
                };
                return Ok(());
            }
            _ => return Err(OptionsError::UnknownKey(key.to_string())),
        };
        *flag = parse_bool(value).ok_or_else(invalid)?;
        Ok(())
    }

    /// Serializes all options; `load_from_str` reads the result back.
    pub fn save_to_string(&self) -> String {
        let first_day = self
            .first_day_of_week
            .map(|w| w.to_string())
            .unwrap_or_else(|| "default".to_string());
        [
            format!("enabled={}", self.enabled),
            format!("show_week_numbers={}", self.show_week_numbers),
            format!("show_go_to_today={}", self.show_go_to_today),
            format!("month_picker_as_overlay={}", self.month_picker_as_overlay),
            format!("highlight_current_month={}", self.highlight_current_month),
            format!("highlight_selected_month={}", self.highlight_selected_month),
            format!("first_day_of_week={}", first_day),
        ]
        .join(ENTRY_SEPARATOR)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_gives_defaults() {
        assert_eq!(PickerOptions::load_from_str("").unwrap(), PickerOptions::default());
        assert_eq!(PickerOptions::load_from_str(" ;; ").unwrap(), PickerOptions::default());
    }

    #[test]
    fn test_save_then_load() {
        let options = PickerOptions {
            enabled: false,
            month_picker_as_overlay: true,
            highlight_selected_month: true,
            first_day_of_week: Some(Weekday::Sat),
            ..PickerOptions::default()
        };
        let saved = options.save_to_string();
        assert!(saved.contains("first_day_of_week=Sat"));
        assert_eq!(PickerOptions::load_from_str(&saved).unwrap(), options);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            PickerOptions::load_from_str("enabled"),
            Err(OptionsError::MalformedEntry("enabled".to_string()))
        );
        assert_eq!(
            PickerOptions::load_from_str("colour=red"),
            Err(OptionsError::UnknownKey("colour".to_string()))
        );
        assert_eq!(
            PickerOptions::load_from_str("enabled=yes"),
            Err(OptionsError::InvalidValue {
                key: "enabled".to_string(),
                value: "yes".to_string()
            })
        );
        assert!(PickerOptions::load_from_str("first_day_of_week=someday").is_err());
    }
}
