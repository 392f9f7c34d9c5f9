// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for instants: construction from civil fields and field
//! breakdown in UTC or host-local time.

use crate::catch_panic;
use crate::error::{write_out, BluetimeStatus};
use bluetime::{Calendar, HostLocal, Instant, UTC};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Civil field breakdown of an instant for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BluetimeCivil {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// ISO-8601 week number.
    pub week: u8,
    /// 1-based day of the year.
    pub day_of_year: u16,
    pub days_in_month: u8,
    pub is_leap_year: bool,
}

impl BluetimeCivil {
    fn from_instant<C: Calendar>(at: &Instant<C>) -> Self {
        Self {
            year: at.year(),
            month: at.month() as u8,
            day: at.day() as u8,
            hour: at.hour() as u8,
            minute: at.minute() as u8,
            second: at.second() as u8,
            week: at.week_of_year() as u8,
            day_of_year: at.day_of_year() as u16,
            days_in_month: at.days_in_month() as u8,
            is_leap_year: at.is_leap_year(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════════

/// Current host time as epoch seconds.
#[no_mangle]
pub extern "C" fn bluetime_now() -> i64 {
    Instant::<UTC>::now().epoch_seconds()
}

unsafe fn from_fields<C: Calendar>(
    hour: u32,
    minute: u32,
    second: u32,
    day: u32,
    month: u32,
    year: i32,
    out: *mut i64,
) -> BluetimeStatus {
    catch_panic!(BluetimeStatus::Panicked, {
        if out.is_null() {
            return BluetimeStatus::NullPointer;
        }
        match Instant::<C>::from_fields(hour, minute, second, day, month, year) {
            Ok(instant) => unsafe { write_out(out, instant.epoch_seconds()) },
            Err(err) => BluetimeStatus::from(&err),
        }
    })
}

/// Epoch seconds for civil fields read as UTC.
///
/// Returns `InvalidTimeFormat` when `(day, month, year)` is not a calendar date.
///
/// # Safety
/// `out` must be a valid, writable pointer to `int64_t`.
#[no_mangle]
pub unsafe extern "C" fn bluetime_utc_from_fields(
    hour: u32,
    minute: u32,
    second: u32,
    day: u32,
    month: u32,
    year: i32,
    out: *mut i64,
) -> BluetimeStatus {
    unsafe { from_fields::<UTC>(hour, minute, second, day, month, year, out) }
}

/// Epoch seconds for civil fields read in the host's local time.
///
/// # Safety
/// `out` must be a valid, writable pointer to `int64_t`.
#[no_mangle]
pub unsafe extern "C" fn bluetime_local_from_fields(
    hour: u32,
    minute: u32,
    second: u32,
    day: u32,
    month: u32,
    year: i32,
    out: *mut i64,
) -> BluetimeStatus {
    unsafe { from_fields::<HostLocal>(hour, minute, second, day, month, year, out) }
}

// ═══════════════════════════════════════════════════════════════════════════
// Field breakdown
// ═══════════════════════════════════════════════════════════════════════════

/// Civil fields of `epoch` in UTC.
///
/// # Safety
/// `out` must be a valid, writable pointer to `BluetimeCivil`.
#[no_mangle]
pub unsafe extern "C" fn bluetime_utc_civil(epoch: i64, out: *mut BluetimeCivil) -> BluetimeStatus {
    catch_panic!(BluetimeStatus::Panicked, {
        let civil = BluetimeCivil::from_instant(&Instant::<UTC>::from_epoch(epoch));
        unsafe { write_out(out, civil) }
    })
}

/// Civil fields of `epoch` in the host's local time.
///
/// # Safety
/// `out` must be a valid, writable pointer to `BluetimeCivil`.
#[no_mangle]
pub unsafe extern "C" fn bluetime_local_civil(
    epoch: i64,
    out: *mut BluetimeCivil,
) -> BluetimeStatus {
    catch_panic!(BluetimeStatus::Panicked, {
        let civil = BluetimeCivil::from_instant(&Instant::<HostLocal>::from_epoch(epoch));
        unsafe { write_out(out, civil) }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Calendar helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Gregorian leap-year test.
#[no_mangle]
pub extern "C" fn bluetime_is_leap_year(year: i32) -> bool {
    bluetime::is_leap_year(year)
}

/// Whether `(year, month, day)` is a real Gregorian date.
#[no_mangle]
pub extern "C" fn bluetime_is_valid_date(year: i32, month: u32, day: u32) -> bool {
    bluetime::is_valid_date(year, month, day)
}

/// Days in `month` of `year`; 0 for a month outside 1..=12.
#[no_mangle]
pub extern "C" fn bluetime_days_in_month(year: i32, month: u32) -> u32 {
    bluetime::days_in_month(year, month)
}
