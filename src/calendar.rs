// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar markers and proleptic Gregorian helpers.
//!
//! A [`Calendar`] decides how an epoch-seconds value maps onto civil
//! (wall-clock) fields and back. Each marker is zero-sized, so an
//! [`Instant<C>`](crate::Instant) is layout-identical to an `i64`.
//!
//! | Marker | Civil time |
//! |--------|------------|
//! | [`UTC`] | Coordinated Universal Time, no offset |
//! | [`HostLocal`] | the host's local offset, as reported by the OS |
//!
//! The free functions ([`is_leap_year`], [`days_in_month`], [`is_valid_date`],
//! [`months_of_year`]) and [`CivilDate`] work on plain day/month/year values
//! and need no calendar at all.

use crate::error::{Error, Result};
use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc, Weekday,
};
use std::collections::BTreeMap;

// ═══════════════════════════════════════════════════════════════════════════
// Calendar trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for calendars.
///
/// A **calendar** defines:
///
/// 1. A human-readable **label** (e.g. `"UTC"`, `"local"`).
/// 2. The mapping from epoch seconds to civil fields, and its inverse.
///
/// `to_civil` never fails: epochs beyond chrono's representable range
/// saturate to the first/last representable datetime. `from_civil` fails
/// only when the wall-clock time does not exist in the calendar (a DST gap).
pub trait Calendar:
    Copy + Clone + std::fmt::Debug + PartialEq + Eq + PartialOrd + Ord + std::hash::Hash + 'static
{
    /// Display label used in error messages.
    const LABEL: &'static str;

    /// Civil date and time for an epoch-seconds value.
    fn to_civil(epoch_seconds: i64) -> NaiveDateTime;

    /// Epoch seconds for a civil date and time, or `None` if it never occurs.
    fn from_civil(civil: NaiveDateTime) -> Option<i64>;

    /// Current host wall-clock time as epoch seconds.
    #[inline]
    fn now() -> i64 {
        Utc::now().timestamp()
    }
}

/// Coordinated Universal Time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UTC;

impl Calendar for UTC {
    const LABEL: &'static str = "UTC";

    #[inline]
    fn to_civil(epoch_seconds: i64) -> NaiveDateTime {
        utc_datetime(epoch_seconds).naive_utc()
    }

    #[inline]
    fn from_civil(civil: NaiveDateTime) -> Option<i64> {
        Some(DateTime::<Utc>::from_naive_utc_and_offset(civil, Utc).timestamp())
    }
}

/// The host's local time.
///
/// Conversions use whatever offset the operating system reports for the
/// instant in question, so results depend on the machine's zone settings.
/// Ambiguous wall-clock times (the repeated hour when clocks go back)
/// resolve to the earliest instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostLocal;

impl Calendar for HostLocal {
    const LABEL: &'static str = "local";

    #[inline]
    fn to_civil(epoch_seconds: i64) -> NaiveDateTime {
        let utc = utc_datetime(epoch_seconds).naive_utc();
        let offset = Local.offset_from_utc_datetime(&utc).fix();
        utc.checked_add_offset(offset)
            .unwrap_or(if epoch_seconds < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            })
    }

    #[inline]
    fn from_civil(civil: NaiveDateTime) -> Option<i64> {
        Local
            .from_local_datetime(&civil)
            .earliest()
            .map(|dt| dt.timestamp())
    }
}

fn utc_datetime(epoch_seconds: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(epoch_seconds, 0).unwrap_or(if epoch_seconds < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Gregorian helpers
// ═══════════════════════════════════════════════════════════════════════════

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
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

/// English name of a weekday; `short` gives the three-letter form.
pub fn weekday_name(weekday: Weekday, short: bool) -> &'static str {
    let name = DAY_NAMES[weekday.num_days_from_monday() as usize];
    if short {
        &name[..3]
    } else {
        name
    }
}

/// English name of a month (`1..=12`); `None` for any other number.
pub fn month_name(month: u32, short: bool) -> Option<&'static str> {
    let name = MONTH_NAMES.get(month.checked_sub(1)? as usize)?;
    Some(if short { &name[..3] } else { name })
}

/// Gregorian leap-year rule.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; `0` when `month` is not in `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// `true` if the triple names a real proleptic Gregorian date.
#[inline]
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Day counts for every month of `year`, keyed `1..=12`.
pub fn months_of_year(year: i32) -> BTreeMap<u32, u32> {
    (1..=12)
        .map(|month| (month, days_in_month(year, month)))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// CivilDate
// ═══════════════════════════════════════════════════════════════════════════

/// A day/month/year triple that has not been checked for validity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CivilDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CivilDate {
    #[inline]
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Build from `[day, month, year]`.
    ///
    /// Any other length is a caller error.
    ///
    /// ```
    /// use bluetime::CivilDate;
    ///
    /// let date = CivilDate::from_slice(&[12, 12, 1983]).unwrap();
    /// assert_eq!(date.month_name(false), Some("December"));
    /// assert!(CivilDate::from_slice(&[]).is_err());
    /// ```
    pub fn from_slice(fields: &[i64]) -> Result<Self> {
        match *fields {
            [day, month, year] => Ok(Self::new(
                field_to_u32(day)?,
                field_to_u32(month)?,
                field_to_i32(year)?,
            )),
            _ => Err(Error::FieldCount {
                expected: 3,
                actual: fields.len(),
            }),
        }
    }

    /// Build the first day of a month from `[month, year]`.
    pub fn from_month_year(fields: &[i64]) -> Result<Self> {
        match *fields {
            [month, year] => Ok(Self::new(1, field_to_u32(month)?, field_to_i32(year)?)),
            _ => Err(Error::FieldCount {
                expected: 2,
                actual: fields.len(),
            }),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }

    /// The matching chrono date, if the triple is valid.
    #[inline]
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Weekday name, if the triple is valid.
    pub fn day_name(&self, short: bool) -> Option<&'static str> {
        self.to_naive().map(|date| weekday_name(date.weekday(), short))
    }

    /// Month name, if the month is in `1..=12`.
    pub fn month_name(&self, short: bool) -> Option<&'static str> {
        month_name(self.month, short)
    }

    /// 1-based day of the year, if the triple is valid.
    pub fn day_of_year(&self) -> Option<u32> {
        self.to_naive().map(|date| date.ordinal())
    }

    /// Days in this date's month. Only the month and year are consulted.
    #[inline]
    pub const fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }
}

impl TryFrom<&[i64]> for CivilDate {
    type Error = Error;

    fn try_from(fields: &[i64]) -> Result<Self> {
        Self::from_slice(fields)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub(crate) fn field_to_u32(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::FieldOutOfRange(value))
}

pub(crate) fn field_to_i32(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::FieldOutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::{Datelike, Timelike};

    #[test]
    fn leap_years_follow_gregorian_rule() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(2021));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2011, 9), 30);
        assert_eq!(days_in_month(2011, 12), 31);
        assert_eq!(days_in_month(2011, 0), 0);
        assert_eq!(days_in_month(2011, 13), 0);
    }

    #[test]
    fn validity() {
        assert!(is_valid_date(2024, 2, 28));
        assert!(is_valid_date(2024, 2, 29));
        assert!(!is_valid_date(2023, 2, 29));
        assert!(!is_valid_date(2024, 2, 31));
        assert!(!is_valid_date(2024, 2, 34));
        assert!(!is_valid_date(2024, 13, 1));
        assert!(!is_valid_date(1, 9, 2011));
    }

    #[test]
    fn months_of_non_leap_year() {
        let months = months_of_year(2017);
        let expected: BTreeMap<u32, u32> = [
            (1, 31),
            (2, 28),
            (3, 31),
            (4, 30),
            (5, 31),
            (6, 30),
            (7, 31),
            (8, 31),
            (9, 30),
            (10, 31),
            (11, 30),
            (12, 31),
        ]
        .into_iter()
        .collect();
        assert_eq!(months, expected);
        assert_eq!(months_of_year(2024)[&2], 29);
    }

    #[test]
    fn names() {
        assert_eq!(weekday_name(Weekday::Tue, false), "Tuesday");
        assert_eq!(weekday_name(Weekday::Tue, true), "Tue");
        assert_eq!(month_name(2, false), Some("February"));
        assert_eq!(month_name(2, true), Some("Feb"));
        assert_eq!(month_name(0, false), None);
        assert_eq!(month_name(13, true), None);
    }

    #[test]
    fn civil_date_lookups() {
        let date = CivilDate::from_slice(&[27, 6, 2017]).unwrap();
        assert_eq!(date.day_name(false), Some("Tuesday"));
        assert_eq!(date.to_string(), "2017-06-27");

        let date = CivilDate::new(24, 9, 1986);
        assert_eq!(date.day_of_year(), Some(267));

        let date = CivilDate::from_month_year(&[9, 2011]).unwrap();
        assert_eq!(date.days_in_month(), 30);

        let bogus = CivilDate::new(31, 2, 2024);
        assert!(!bogus.is_valid());
        assert_eq!(bogus.day_name(true), None);
        assert_eq!(bogus.day_of_year(), None);
    }

    #[test]
    fn civil_date_rejects_wrong_arity() {
        let err = CivilDate::from_slice(&[]).unwrap_err();
        assert_eq!(
            err,
            Error::FieldCount {
                expected: 3,
                actual: 0
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert!(CivilDate::from_slice(&[1, 2]).is_err());
        assert!(CivilDate::from_month_year(&[1, 2, 3]).is_err());
        assert!(CivilDate::try_from(&[1_i64, 2, 2000][..]).is_ok());
    }

    #[test]
    fn civil_date_rejects_out_of_range_fields() {
        assert_eq!(
            CivilDate::from_slice(&[-1, 2, 2000]),
            Err(Error::FieldOutOfRange(-1))
        );
        assert_eq!(
            CivilDate::from_slice(&[1, 2, i64::MAX]),
            Err(Error::FieldOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn utc_civil_roundtrip() {
        let civil = UTC::to_civil(1_770_126_169);
        assert_eq!(civil.year(), 2026);
        assert_eq!(civil.month(), 2);
        assert_eq!(civil.day(), 3);
        assert_eq!(civil.hour(), 13);
        assert_eq!(civil.minute(), 42);
        assert_eq!(civil.second(), 49);
        assert_eq!(UTC::from_civil(civil), Some(1_770_126_169));
    }

    #[test]
    fn utc_saturates_outside_chrono_range() {
        assert_eq!(UTC::to_civil(i64::MAX), DateTime::<Utc>::MAX_UTC.naive_utc());
        assert_eq!(UTC::to_civil(i64::MIN), DateTime::<Utc>::MIN_UTC.naive_utc());
    }

    #[test]
    fn host_local_saturates_outside_chrono_range() {
        let last = HostLocal::to_civil(i64::MAX);
        let first = HostLocal::to_civil(i64::MIN);
        assert!(last >= DateTime::<Utc>::MAX_UTC.naive_utc() - chrono::Duration::days(1));
        assert!(first <= DateTime::<Utc>::MIN_UTC.naive_utc() + chrono::Duration::days(1));
        assert!(first < last);
    }

    #[test]
    fn host_local_roundtrips_through_os_offset() {
        let epoch = 1_770_126_169;
        let civil = HostLocal::to_civil(epoch);
        assert_eq!(HostLocal::from_civil(civil), Some(epoch));
    }
}
