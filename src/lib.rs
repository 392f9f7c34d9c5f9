// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar instants and the differences between them.
//!
//! # Core types
//!
//! - [`Instant<C>`] — seconds since the Unix epoch, read through a [`Calendar`] marker.
//! - [`Calendar`] — trait mapping epoch seconds to civil fields and back.
//! - [`UtcInstant`] / [`LocalInstant`] — aliases for `Instant<UTC>` / `Instant<HostLocal>`.
//! - [`DifferenceEngine`] — relative and absolute differences in seven [`TimeUnit`]s.
//! - [`DifferenceRequest`] — a difference query as received from a caller.
//! - [`CivilDate`] — an unchecked day/month/year triple.
//!
//! # Calendars
//!
//! | Marker | Civil time |
//! |--------|------------|
//! | [`UTC`] | Coordinated Universal Time |
//! | [`HostLocal`] | host local offset |
//!
//! # Differences
//!
//! ```
//! use bluetime::{DifferenceMode, TimeUnit, UtcInstant};
//!
//! let a = UtcInstant::from_epoch(1_770_126_169);
//! let b = UtcInstant::from_epoch(1_770_126_169 + 100_000_000);
//!
//! let all = a.differences(&b, DifferenceMode::Absolute);
//! assert_eq!(all.get(TimeUnit::Seconds).whole(), Some(100_000_000));
//! assert_eq!(all.get(TimeUnit::Years).as_f64(), 3.17098);
//!
//! // The later instant looking back sees negative values.
//! let back = b.difference(&a, TimeUnit::Days, DifferenceMode::Absolute);
//! assert_eq!(back.as_f64(), -1157.40741);
//! ```

pub mod calendar;
mod difference;
mod error;
pub(crate) mod instant;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    days_in_month, is_leap_year, is_valid_date, months_of_year, Calendar, CivilDate, HostLocal,
    UTC,
};
pub use difference::{
    Delta, DifferenceEngine, DifferenceMode, DifferenceRequest, DifferenceResult, Differences,
    RelativeSign,
};
pub use error::{Error, ErrorKind, Result};
pub use instant::Instant;
pub use unit::TimeUnit;

// ── Type aliases ──────────────────────────────────────────────────────────

/// Instant whose fields are read in UTC.
pub type UtcInstant = Instant<UTC>;

/// Instant whose fields are read with the host's local offset.
///
/// Field values depend on the machine's zone settings.
pub type LocalInstant = Instant<HostLocal>;
