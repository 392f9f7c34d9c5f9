// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Differences between two instants.
//!
//! A difference is read from the point of view of the **left** instant
//! (the receiver) looking at the **right** one:
//!
//! - left earlier than right → positive,
//! - left later than right → negative,
//! - identical epochs → exactly zero in every unit and mode.
//!
//! # Modes
//!
//! [`DifferenceMode::Absolute`] divides the true elapsed seconds by the
//! fixed length of the unit (see [`TimeUnit`]) and rounds to five decimal
//! places. Months are 30 days and years 365 days; neither follows the
//! calendar.
//!
//! [`DifferenceMode::Relative`] subtracts the same calendar field of both
//! instants (`second`, `minute`, `hour`, day of month, ISO week, `month`,
//! `year`) without carrying between fields, so 13:59 vs 14:01 is two hours
//! apart in relative hours but minus 58 in relative minutes. How that raw
//! subtraction is signed is set by [`RelativeSign`].
//!
//! `seconds` is always a whole number; every other unit is fractional.

use crate::calendar::Calendar;
use crate::error::Result;
use crate::instant::Instant;
use crate::unit::TimeUnit;
use chrono::{Datelike, NaiveDateTime, Timelike};
use qtty::{Seconds, Simplify};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, Neg};

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Decimal places kept by absolute differences.
const DECIMALS: i32 = 5;

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

/// How a difference is measured.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DifferenceMode {
    /// Elapsed seconds divided by a fixed unit length.
    #[default]
    Absolute,
    /// Field-by-field subtraction of calendar values.
    Relative,
}

impl DifferenceMode {
    /// `Relative` when `relative` is set, `Absolute` otherwise.
    #[inline]
    pub const fn from_relative_flag(relative: bool) -> Self {
        if relative {
            DifferenceMode::Relative
        } else {
            DifferenceMode::Absolute
        }
    }
}

/// Sign policy for relative differences.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RelativeSign {
    /// Magnitude of `left.field − right.field`, signed by which instant is
    /// earlier, exactly as absolute differences are.
    #[default]
    Chronological,
    /// Plain `left.field − right.field`. Later field values on the left give
    /// positive results even when the left instant is earlier overall.
    /// Seconds still take the chronological sign.
    FieldOrder,
}

/// Stateless difference calculator.
///
/// The only setting is the [`RelativeSign`] policy; absolute differences
/// are unaffected by it.
///
/// ```
/// use bluetime::{DifferenceEngine, DifferenceMode, RelativeSign, TimeUnit, UtcInstant};
///
/// let left = UtcInstant::from_epoch(1_770_126_169); // 13:42:49
/// let right = UtcInstant::from_epoch(1_770_127_169); // 13:59:29
///
/// let engine = DifferenceEngine::new();
/// let minutes = engine.difference(&left, &right, TimeUnit::Minutes, DifferenceMode::Relative);
/// assert_eq!(minutes.as_f64(), 17.0);
///
/// let raw = DifferenceEngine::new().with_relative_sign(RelativeSign::FieldOrder);
/// let minutes = raw.difference(&left, &right, TimeUnit::Minutes, DifferenceMode::Relative);
/// assert_eq!(minutes.as_f64(), -17.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct DifferenceEngine {
    relative_sign: RelativeSign,
}

// ═══════════════════════════════════════════════════════════════════════════
// Results
// ═══════════════════════════════════════════════════════════════════════════

/// One signed difference.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delta {
    /// Whole seconds.
    Whole(i64),
    Fractional(f64),
}

impl Delta {
    pub fn as_f64(self) -> f64 {
        match self {
            Delta::Whole(v) => v as f64,
            Delta::Fractional(v) => v,
        }
    }

    pub fn whole(self) -> Option<i64> {
        match self {
            Delta::Whole(v) => Some(v),
            Delta::Fractional(_) => None,
        }
    }

    pub fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }

    /// Fractional value with negative zero folded to zero.
    fn fractional(value: f64) -> Self {
        Delta::Fractional(if value == 0.0 { 0.0 } else { value })
    }
}

impl Neg for Delta {
    type Output = Self;
    fn neg(self) -> Self::Output {
        match self {
            Delta::Whole(v) => Delta::Whole(v.saturating_neg()),
            Delta::Fractional(v) => Delta::fractional(-v),
        }
    }
}

impl From<Delta> for f64 {
    #[inline]
    fn from(delta: Delta) -> Self {
        delta.as_f64()
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delta::Whole(v) => write!(f, "{v}"),
            Delta::Fractional(v) => write!(f, "{v}"),
        }
    }
}

/// Differences in all seven units, in [`TimeUnit::REPORT_ORDER`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Differences {
    entries: [(TimeUnit, Delta); 7],
}

impl Differences {
    pub fn get(&self, unit: TimeUnit) -> Delta {
        self[unit]
    }

    /// `(unit, delta)` pairs: seconds, years, months, weeks, days, hours, minutes.
    pub fn iter(&self) -> impl Iterator<Item = (TimeUnit, Delta)> + '_ {
        self.entries.iter().copied()
    }
}

impl Index<TimeUnit> for Differences {
    type Output = Delta;

    fn index(&self, unit: TimeUnit) -> &Delta {
        // REPORT_ORDER lists every unit, so the search always succeeds.
        let slot = TimeUnit::REPORT_ORDER
            .iter()
            .position(|u| *u == unit)
            .unwrap_or_default();
        &self.entries[slot].1
    }
}

impl<'a> IntoIterator for &'a Differences {
    type Item = (TimeUnit, Delta);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (TimeUnit, Delta)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

impl fmt::Display for Differences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (unit, delta)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{unit}: {delta}")?;
        }
        Ok(())
    }
}

/// Outcome of a [`DifferenceRequest`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DifferenceResult {
    Single(Delta),
    All(Differences),
}

impl DifferenceResult {
    pub fn single(&self) -> Option<Delta> {
        match self {
            DifferenceResult::Single(delta) => Some(*delta),
            DifferenceResult::All(_) => None,
        }
    }

    pub fn all(&self) -> Option<&Differences> {
        match self {
            DifferenceResult::Single(_) => None,
            DifferenceResult::All(all) => Some(all),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Delta {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Delta::Whole(v) => serializer.serialize_i64(*v),
            Delta::Fractional(v) => serializer.serialize_f64(*v),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Differences {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (unit, delta) in self.iter() {
            map.serialize_entry(unit.name(), &delta)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for DifferenceResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DifferenceResult::Single(delta) => delta.serialize(serializer),
            DifferenceResult::All(all) => all.serialize(serializer),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Engine
// ═══════════════════════════════════════════════════════════════════════════

impl DifferenceEngine {
    /// Engine with [`RelativeSign::Chronological`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            relative_sign: RelativeSign::Chronological,
        }
    }

    #[inline]
    pub const fn with_relative_sign(self, relative_sign: RelativeSign) -> Self {
        Self { relative_sign }
    }

    #[inline]
    pub const fn relative_sign(&self) -> RelativeSign {
        self.relative_sign
    }

    /// Difference from `left` to `right` in one unit.
    pub fn difference<C: Calendar>(
        &self,
        left: &Instant<C>,
        right: &Instant<C>,
        unit: TimeUnit,
        mode: DifferenceMode,
    ) -> Delta {
        let (l, r) = (left.epoch_seconds(), right.epoch_seconds());
        match mode {
            DifferenceMode::Absolute => absolute(l, r, unit),
            DifferenceMode::Relative => {
                self.relative(l.cmp(&r), &left.civil(), &right.civil(), unit)
            }
        }
    }

    /// Differences from `left` to `right` in all seven units.
    pub fn differences<C: Calendar>(
        &self,
        left: &Instant<C>,
        right: &Instant<C>,
        mode: DifferenceMode,
    ) -> Differences {
        let (l, r) = (left.epoch_seconds(), right.epoch_seconds());
        let entries = match mode {
            DifferenceMode::Absolute => TimeUnit::REPORT_ORDER.map(|unit| (unit, absolute(l, r, unit))),
            DifferenceMode::Relative => {
                let (lc, rc) = (left.civil(), right.civil());
                let ordering = l.cmp(&r);
                TimeUnit::REPORT_ORDER.map(|unit| (unit, self.relative(ordering, &lc, &rc, unit)))
            }
        };
        Differences { entries }
    }

    fn relative(
        &self,
        ordering: Ordering,
        left: &NaiveDateTime,
        right: &NaiveDateTime,
        unit: TimeUnit,
    ) -> Delta {
        let raw = calendar_field(left, unit) - calendar_field(right, unit);
        let value = match self.relative_sign {
            RelativeSign::Chronological => signed(ordering, raw.abs()),
            RelativeSign::FieldOrder if unit == TimeUnit::Seconds => {
                signed(ordering, raw.abs())
            }
            RelativeSign::FieldOrder => raw,
        };
        match unit {
            TimeUnit::Seconds => Delta::Whole(value),
            _ => Delta::fractional(value as f64),
        }
    }
}

fn absolute(left: i64, right: i64, unit: TimeUnit) -> Delta {
    let ordering = left.cmp(&right);
    let elapsed = left.abs_diff(right);
    match unit {
        TimeUnit::Seconds => {
            Delta::Whole(signed(ordering, i64::try_from(elapsed).unwrap_or(i64::MAX)))
        }
        _ => {
            let units = (Seconds::new(elapsed as f64) / unit.length()).simplify().value();
            Delta::fractional(signed(ordering, round_decimals(units)))
        }
    }
}

/// Apply the receiver-relative sign to a non-negative magnitude.
fn signed<T>(ordering: Ordering, magnitude: T) -> T
where
    T: Neg<Output = T> + Default,
{
    match ordering {
        Ordering::Equal => T::default(),
        Ordering::Less => magnitude,
        Ordering::Greater => -magnitude,
    }
}

/// Round half away from zero to [`DECIMALS`] places.
fn round_decimals(value: f64) -> f64 {
    let scale = 10_f64.powi(DECIMALS);
    (value * scale).round() / scale
}

fn calendar_field(civil: &NaiveDateTime, unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Seconds => i64::from(civil.second()),
        TimeUnit::Minutes => i64::from(civil.minute()),
        TimeUnit::Hours => i64::from(civil.hour()),
        TimeUnit::Days => i64::from(civil.day()),
        TimeUnit::Weeks => i64::from(civil.iso_week().week()),
        TimeUnit::Months => i64::from(civil.month()),
        TimeUnit::Years => i64::from(civil.year()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Request
// ═══════════════════════════════════════════════════════════════════════════

/// A pair of instants plus what to measure between them.
///
/// `unit: None` asks for all seven units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DifferenceRequest<'a, C: Calendar> {
    pub left: &'a Instant<C>,
    pub right: &'a Instant<C>,
    pub unit: Option<TimeUnit>,
    pub mode: DifferenceMode,
}

impl<'a, C: Calendar> DifferenceRequest<'a, C> {
    /// All units, absolute mode.
    pub fn new(left: &'a Instant<C>, right: &'a Instant<C>) -> Self {
        Self {
            left,
            right,
            unit: None,
            mode: DifferenceMode::Absolute,
        }
    }

    pub fn unit(mut self, unit: TimeUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn mode(mut self, mode: DifferenceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build from a unit name as received at an API boundary.
    ///
    /// `None` selects all units; an unrecognised name is an error, never a
    /// fallback to all units.
    pub fn parse(
        left: &'a Instant<C>,
        right: &'a Instant<C>,
        unit: Option<&str>,
        relative: bool,
    ) -> Result<Self> {
        let unit = unit.map(str::parse::<TimeUnit>).transpose()?;
        Ok(Self {
            left,
            right,
            unit,
            mode: DifferenceMode::from_relative_flag(relative),
        })
    }

    pub fn evaluate(&self, engine: &DifferenceEngine) -> DifferenceResult {
        tracing::trace!(
            left = self.left.epoch_seconds(),
            right = self.right.epoch_seconds(),
            unit = ?self.unit,
            mode = ?self.mode,
            "evaluating difference"
        );
        match self.unit {
            Some(unit) => {
                DifferenceResult::Single(engine.difference(self.left, self.right, unit, self.mode))
            }
            None => DifferenceResult::All(engine.differences(self.left, self.right, self.mode)),
        }
    }
}
