// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the difference engine.
//!
//! Relative differences read calendar fields in UTC.

use crate::catch_panic;
use crate::error::{write_out, BluetimeStatus};
use bluetime::{Delta, DifferenceEngine, DifferenceMode, TimeUnit, UtcInstant};
use std::ffi::{c_char, CStr};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Unit codes accepted by [`bluetime_difference`].
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BluetimeUnit {
    Seconds = 0,
    Minutes = 1,
    Hours = 2,
    Days = 3,
    Weeks = 4,
    Months = 5,
    Years = 6,
}

impl BluetimeUnit {
    fn from_code(code: i32) -> Option<Self> {
        [
            BluetimeUnit::Seconds,
            BluetimeUnit::Minutes,
            BluetimeUnit::Hours,
            BluetimeUnit::Days,
            BluetimeUnit::Weeks,
            BluetimeUnit::Months,
            BluetimeUnit::Years,
        ]
        .into_iter()
        .find(|unit| *unit as i32 == code)
    }
}

impl From<BluetimeUnit> for TimeUnit {
    fn from(unit: BluetimeUnit) -> Self {
        match unit {
            BluetimeUnit::Seconds => TimeUnit::Seconds,
            BluetimeUnit::Minutes => TimeUnit::Minutes,
            BluetimeUnit::Hours => TimeUnit::Hours,
            BluetimeUnit::Days => TimeUnit::Days,
            BluetimeUnit::Weeks => TimeUnit::Weeks,
            BluetimeUnit::Months => TimeUnit::Months,
            BluetimeUnit::Years => TimeUnit::Years,
        }
    }
}

impl From<TimeUnit> for BluetimeUnit {
    fn from(unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Seconds => BluetimeUnit::Seconds,
            TimeUnit::Minutes => BluetimeUnit::Minutes,
            TimeUnit::Hours => BluetimeUnit::Hours,
            TimeUnit::Days => BluetimeUnit::Days,
            TimeUnit::Weeks => BluetimeUnit::Weeks,
            TimeUnit::Months => BluetimeUnit::Months,
            TimeUnit::Years => BluetimeUnit::Years,
        }
    }
}

/// All seven differences, fields in report order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BluetimeDifferences {
    pub seconds: i64,
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
}

// ═══════════════════════════════════════════════════════════════════════════
// Functions
// ═══════════════════════════════════════════════════════════════════════════

/// Resolve a unit name (`"seconds"` … `"years"`) to its code.
///
/// Returns `InvalidArgument` for any other name, including `"all"`.
///
/// # Safety
/// `name` must be null or a valid NUL-terminated string; `out` must be a
/// valid, writable pointer to `BluetimeUnit`.
#[no_mangle]
pub unsafe extern "C" fn bluetime_unit_from_name(
    name: *const c_char,
    out: *mut BluetimeUnit,
) -> BluetimeStatus {
    catch_panic!(BluetimeStatus::Panicked, {
        if name.is_null() || out.is_null() {
            return BluetimeStatus::NullPointer;
        }
        // SAFETY: `name` is non-null and the caller guarantees NUL termination.
        let name = unsafe { CStr::from_ptr(name) };
        let Ok(name) = name.to_str() else {
            return BluetimeStatus::InvalidArgument;
        };
        match name.parse::<TimeUnit>() {
            Ok(unit) => unsafe { write_out(out, BluetimeUnit::from(unit)) },
            Err(err) => BluetimeStatus::from(&err),
        }
    })
}

/// Difference from `left` to `right` (epoch seconds) in one unit.
///
/// Positive when `left` is earlier. `unit` is a [`BluetimeUnit`] code; an
/// unknown code is `InvalidArgument`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `double`.
#[no_mangle]
pub unsafe extern "C" fn bluetime_difference(
    left: i64,
    right: i64,
    unit: i32,
    relative: bool,
    out: *mut f64,
) -> BluetimeStatus {
    catch_panic!(BluetimeStatus::Panicked, {
        if out.is_null() {
            return BluetimeStatus::NullPointer;
        }
        let Some(unit) = BluetimeUnit::from_code(unit) else {
            return BluetimeStatus::InvalidArgument;
        };
        let delta = DifferenceEngine::new().difference(
            &UtcInstant::from_epoch(left),
            &UtcInstant::from_epoch(right),
            unit.into(),
            DifferenceMode::from_relative_flag(relative),
        );
        unsafe { write_out(out, delta.as_f64()) }
    })
}

/// Differences from `left` to `right` (epoch seconds) in all seven units.
///
/// # Safety
/// `out` must be a valid, writable pointer to `BluetimeDifferences`.
#[no_mangle]
pub unsafe extern "C" fn bluetime_differences(
    left: i64,
    right: i64,
    relative: bool,
    out: *mut BluetimeDifferences,
) -> BluetimeStatus {
    catch_panic!(BluetimeStatus::Panicked, {
        let all = DifferenceEngine::new().differences(
            &UtcInstant::from_epoch(left),
            &UtcInstant::from_epoch(right),
            DifferenceMode::from_relative_flag(relative),
        );
        let seconds = match all.get(TimeUnit::Seconds) {
            Delta::Whole(v) => v,
            Delta::Fractional(v) => v as i64,
        };
        let flat = BluetimeDifferences {
            seconds,
            years: all.get(TimeUnit::Years).as_f64(),
            months: all.get(TimeUnit::Months).as_f64(),
            weeks: all.get(TimeUnit::Weeks).as_f64(),
            days: all.get(TimeUnit::Days).as_f64(),
            hours: all.get(TimeUnit::Hours).as_f64(),
            minutes: all.get(TimeUnit::Minutes).as_f64(),
        };
        unsafe { write_out(out, flat) }
    })
}
