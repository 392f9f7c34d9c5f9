// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-parameterised instant.
//!
//! [`Instant<C>`] stores a single count of seconds since the Unix epoch.
//! The compile-time marker `C: Calendar` decides how that count is split
//! into civil fields, so every accessor is a pure function of the stored
//! value. Construction from civil fields validates the day/month/year
//! triple first and reports [`Error::InvalidTimeFormat`] instead of
//! handing back a half-built value.
//!
//! An `Instant` is `Copy` and may be shared freely between threads. The
//! one mutator, [`Instant::set_epoch`], needs `&mut self`, so concurrent
//! mutation requires the caller's own synchronisation.

use crate::calendar::{self, field_to_i32, field_to_u32, Calendar, CivilDate};
use crate::difference::{Delta, DifferenceEngine, DifferenceMode, Differences};
use crate::error::{Error, Result};
use crate::unit::TimeUnit;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use qtty::{Days, Second, Seconds};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rendering used by [`Instant::formatted_timestamp`] and `Display`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d - %H:%M:%S";

/// A point in time, read through calendar `C`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant<C: Calendar> {
    epoch_seconds: i64,
    _calendar: PhantomData<C>,
}

impl<C: Calendar> Instant<C> {
    // ── constructors ──────────────────────────────────────────────────

    /// Wrap an epoch-seconds value. Every `i64` is accepted.
    #[inline]
    pub const fn from_epoch(epoch_seconds: i64) -> Self {
        Self {
            epoch_seconds,
            _calendar: PhantomData,
        }
    }

    /// The host's current wall-clock time.
    #[inline]
    pub fn now() -> Self {
        Self::from_epoch(C::now())
    }

    /// Build from civil fields in calendar `C`.
    ///
    /// Only the day/month/year triple is validated. The time of day is
    /// added on top of midnight, so `hour = 25` carries into the next day.
    ///
    /// ```
    /// use bluetime::{ErrorKind, UtcInstant};
    ///
    /// let instant = UtcInstant::from_fields(15, 0, 0, 24, 9, 2011).unwrap();
    /// assert_eq!(instant.epoch_seconds(), 1_316_876_400);
    ///
    /// let err = UtcInstant::from_fields(0, 0, 0, 31, 2, 2024).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidTimeFormat);
    /// ```
    pub fn from_fields(
        hour: u32,
        minute: u32,
        second: u32,
        day: u32,
        month: u32,
        year: i32,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            tracing::debug!(day, month, year, "rejected invalid calendar date");
            Error::InvalidTimeFormat { day, month, year }
        })?;
        let time_of_day = chrono::Duration::seconds(
            i64::from(hour) * 3_600 + i64::from(minute) * 60 + i64::from(second),
        );
        let civil = date
            .and_time(NaiveTime::MIN)
            .checked_add_signed(time_of_day)
            .ok_or(Error::InvalidTimeFormat { day, month, year })?;

        C::from_civil(civil).map(Self::from_epoch).ok_or_else(|| {
            tracing::debug!(%civil, calendar = C::LABEL, "rejected nonexistent local time");
            Error::NonexistentLocalTime {
                civil,
                calendar: C::LABEL,
            }
        })
    }

    /// Build from `[hour, minute, second, day, month, year]`.
    pub fn from_field_slice(fields: &[i64]) -> Result<Self> {
        match *fields {
            [hour, minute, second, day, month, year] => Self::from_fields(
                field_to_u32(hour)?,
                field_to_u32(minute)?,
                field_to_u32(second)?,
                field_to_u32(day)?,
                field_to_u32(month)?,
                field_to_i32(year)?,
            ),
            _ => Err(Error::FieldCount {
                expected: 6,
                actual: fields.len(),
            }),
        }
    }

    /// Midnight at the start of `date`.
    #[inline]
    pub fn from_civil_date(date: CivilDate) -> Result<Self> {
        Self::from_fields(0, 0, 0, date.day, date.month, date.year)
    }

    // ── raw value ─────────────────────────────────────────────────────

    #[inline]
    pub const fn epoch_seconds(&self) -> i64 {
        self.epoch_seconds
    }

    /// Replace the stored value.
    #[inline]
    pub fn set_epoch(&mut self, epoch_seconds: i64) -> &mut Self {
        self.epoch_seconds = epoch_seconds;
        self
    }

    /// Civil date and time in calendar `C`.
    #[inline]
    pub fn civil(&self) -> NaiveDateTime {
        C::to_civil(self.epoch_seconds)
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    #[inline]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.epoch_seconds, 0)
    }

    // ── calendar fields ───────────────────────────────────────────────

    pub fn year(&self) -> i32 {
        self.civil().year()
    }

    /// Month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.civil().month()
    }

    /// Day of the month, `1..=31`.
    pub fn day(&self) -> u32 {
        self.civil().day()
    }

    pub fn hour(&self) -> u32 {
        self.civil().hour()
    }

    pub fn minute(&self) -> u32 {
        self.civil().minute()
    }

    pub fn second(&self) -> u32 {
        self.civil().second()
    }

    /// ISO-8601 week number.
    pub fn week_of_year(&self) -> u32 {
        self.civil().iso_week().week()
    }

    /// 1-based day of the year.
    pub fn day_of_year(&self) -> u32 {
        self.civil().ordinal()
    }

    pub fn day_name(&self) -> &'static str {
        calendar::weekday_name(self.civil().weekday(), false)
    }

    pub fn day_name_short(&self) -> &'static str {
        calendar::weekday_name(self.civil().weekday(), true)
    }

    pub fn month_name(&self) -> &'static str {
        calendar::month_name(self.month(), false).unwrap_or_default()
    }

    pub fn month_name_short(&self) -> &'static str {
        calendar::month_name(self.month(), true).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        let civil = self.civil();
        calendar::days_in_month(civil.year(), civil.month())
    }

    pub fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year())
    }

    /// Day counts for every month of this instant's year, keyed `1..=12`.
    pub fn months_in_year(&self) -> BTreeMap<u32, u32> {
        calendar::months_of_year(self.year())
    }

    /// Whether this instant's civil date passes the calendar validity check.
    pub fn is_valid_date(&self) -> bool {
        let civil = self.civil();
        calendar::is_valid_date(civil.year(), civil.month(), civil.day())
    }

    // ── rendering ─────────────────────────────────────────────────────

    /// `YYYY-MM-DD - HH:MM:SS`.
    pub fn formatted_timestamp(&self) -> String {
        self.civil().format(TIMESTAMP_FORMAT).to_string()
    }

    /// `YYYY-MM-DD`, or `DD-MM-YYYY` when `year_last` is set.
    pub fn date_string(&self, year_last: bool) -> String {
        let pattern = if year_last { "%d-%m-%Y" } else { "%Y-%m-%d" };
        self.civil().format(pattern).to_string()
    }

    /// `HH:MM:SS`.
    pub fn time_string(&self) -> String {
        self.civil().format("%H:%M:%S").to_string()
    }

    /// Render with a strftime-style pattern.
    ///
    /// Zone directives (`%Z`, `%z`) and malformed directives are rejected
    /// with [`Error::UnsupportedFormat`].
    pub fn format(&self, pattern: &str) -> Result<String> {
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(Error::UnsupportedFormat(pattern.to_owned()));
        }
        let mut out = String::new();
        write!(out, "{}", self.civil().format_with_items(items.iter()))
            .map_err(|_| Error::UnsupportedFormat(pattern.to_owned()))?;
        Ok(out)
    }

    // ── differences ───────────────────────────────────────────────────

    /// Difference to `other` in one unit, with the default engine.
    ///
    /// Positive when `self` is the earlier instant.
    #[inline]
    pub fn difference(&self, other: &Self, unit: TimeUnit, mode: DifferenceMode) -> Delta {
        DifferenceEngine::new().difference(self, other, unit, mode)
    }

    /// Differences to `other` in all seven units, with the default engine.
    #[inline]
    pub fn differences(&self, other: &Self, mode: DifferenceMode) -> Differences {
        DifferenceEngine::new().differences(self, other, mode)
    }
}

fn whole_seconds(quantity: Seconds) -> i64 {
    quantity.value().round() as i64
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl<C: Calendar> std::fmt::Display for Instant<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.civil().format(TIMESTAMP_FORMAT))
    }
}

impl<C: Calendar> From<DateTime<Utc>> for Instant<C> {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_epoch(datetime.timestamp())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for Instant<C> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i64(self.epoch_seconds)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: Calendar> Deserialize<'de> for Instant<C> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i64::deserialize(deserializer)?;
        Ok(Self::from_epoch(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────
// Quantities are rounded to whole seconds; results saturate at the i64 range.

impl<C: Calendar> Add<Seconds> for Instant<C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Seconds) -> Self::Output {
        Self::from_epoch(self.epoch_seconds.saturating_add(whole_seconds(rhs)))
    }
}

impl<C: Calendar> AddAssign<Seconds> for Instant<C> {
    #[inline]
    fn add_assign(&mut self, rhs: Seconds) {
        *self = *self + rhs;
    }
}

impl<C: Calendar> Sub<Seconds> for Instant<C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Seconds) -> Self::Output {
        Self::from_epoch(self.epoch_seconds.saturating_sub(whole_seconds(rhs)))
    }
}

impl<C: Calendar> SubAssign<Seconds> for Instant<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Seconds) {
        *self = *self - rhs;
    }
}

impl<C: Calendar> Add<Days> for Instant<C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        self + rhs.to::<Second>()
    }
}

impl<C: Calendar> Sub<Days> for Instant<C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        self - rhs.to::<Second>()
    }
}

/// Signed elapsed time `self − rhs`.
impl<C: Calendar> Sub for Instant<C> {
    type Output = Seconds;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Seconds::new((i128::from(self.epoch_seconds) - i128::from(rhs.epoch_seconds)) as f64)
    }
}
