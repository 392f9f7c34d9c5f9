// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The seven units a difference can be expressed in.

use crate::error::Error;
use qtty::Seconds;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of a difference between two instants.
///
/// | Unit | Seconds per unit | Relative field |
/// |------|------------------|----------------|
/// | `Seconds` | 1 | second of minute |
/// | `Minutes` | 60 | minute of hour |
/// | `Hours` | 3 600 | hour of day |
/// | `Days` | 86 400 | day of month |
/// | `Weeks` | 604 800 | ISO-8601 week |
/// | `Months` | 2 592 000 (30 days) | month |
/// | `Years` | 31 536 000 (365 days) | year |
///
/// Months and years are fixed-length approximations: they ignore month
/// lengths and leap days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// Units from shortest to longest.
    pub const ASCENDING: [TimeUnit; 7] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// Order in which a full set of differences is reported.
    pub const REPORT_ORDER: [TimeUnit; 7] = [
        TimeUnit::Seconds,
        TimeUnit::Years,
        TimeUnit::Months,
        TimeUnit::Weeks,
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
    ];

    /// Lower-case plural name (`"seconds"`, `"minutes"`, …).
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }

    /// Fixed number of seconds in one unit.
    pub const fn seconds_per_unit(self) -> i64 {
        const DAY: i64 = 86_400;
        match self {
            TimeUnit::Seconds => 1,
            TimeUnit::Minutes => 60,
            TimeUnit::Hours => 3_600,
            TimeUnit::Days => DAY,
            TimeUnit::Weeks => 7 * DAY,
            TimeUnit::Months => 30 * DAY,
            TimeUnit::Years => 365 * DAY,
        }
    }

    /// Length of one unit as a typed quantity.
    #[inline]
    pub fn length(self) -> Seconds {
        Seconds::new(self.seconds_per_unit() as f64)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    /// Accepts exactly the seven lower-case plural names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::ASCENDING
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| {
                tracing::debug!(unit = s, "rejected unknown time unit");
                Error::UnknownUnit(s.to_owned())
            })
    }
}
