// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! Every failure belongs to one of two kinds:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | [`ErrorKind::InvalidTimeFormat`] | the data does not describe a real calendar date / local time |
//! | [`ErrorKind::InvalidArgument`] | the caller passed something malformed (wrong arity, unknown unit, bad pattern) |

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building instants or evaluating differences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Calendar data errors
    #[error("invalid time format: {day:02}-{month:02}-{year:04} is not a Gregorian date")]
    InvalidTimeFormat { day: u32, month: u32, year: i32 },

    #[error("invalid time format: {civil} does not exist in the {calendar} calendar")]
    NonexistentLocalTime {
        civil: chrono::NaiveDateTime,
        calendar: &'static str,
    },

    // Caller errors
    #[error("invalid argument: expected {expected} date fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("invalid argument: field value {0} is out of range")]
    FieldOutOfRange(i64),

    #[error("invalid argument: unknown time unit `{0}`")]
    UnknownUnit(String),

    #[error("invalid argument: unsupported format pattern `{0}`")]
    UnsupportedFormat(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidTimeFormat,
    InvalidArgument,
}

impl ErrorKind {
    /// Canonical upper-case name (`INVALID_TIME_FORMAT`, `INVALID_ARGUMENT`).
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidTimeFormat => "INVALID_TIME_FORMAT",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidTimeFormat { .. } | Error::NonexistentLocalTime { .. } => {
                ErrorKind::InvalidTimeFormat
            }
            Error::FieldCount { .. }
            | Error::FieldOutOfRange(_)
            | Error::UnknownUnit(_)
            | Error::UnsupportedFormat(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_use_canonical_names() {
        let err = Error::InvalidTimeFormat {
            day: 31,
            month: 2,
            year: 2024,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidTimeFormat);
        assert_eq!(err.kind().as_str(), "INVALID_TIME_FORMAT");

        let err = Error::UnknownUnit("fortnights".into());
        assert_eq!(err.kind().to_string(), "INVALID_ARGUMENT");
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::InvalidTimeFormat {
            day: 31,
            month: 2,
            year: 2024,
        };
        assert_eq!(
            err.to_string(),
            "invalid time format: 31-02-2024 is not a Gregorian date"
        );

        let err = Error::FieldCount {
            expected: 3,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: expected 3 date fields, got 0"
        );
    }
}
