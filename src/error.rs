//! error.rs
//!
//! Errors for the construction and configuration paths. Navigation itself
//! never fails: rejected actions are reported as a `false` return instead.

use thiserror::Error;

/// Failure to resolve a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("malformed locale tag {0:?}, expected e.g. \"en\" or \"en-US\"")]
    MalformedTag(String),
    #[error("no calendar data registered for locale {0:?}")]
    UnknownLocale(String),
}

/// Failure to parse a persisted option string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("option entry {0:?} is not of the form key=value")]
    MalformedEntry(String),
    #[error("unknown option {0:?}")]
    UnknownKey(String),
    #[error("invalid value {value:?} for option {key}")]
    InvalidValue { key: String, value: String },
}
