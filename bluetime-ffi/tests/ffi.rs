// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI boundary tests — exercises every exported C function through Rust.

use bluetime_ffi::*;
use std::ffi::CString;
use std::mem::MaybeUninit;

const STAMP: i64 = 1_770_126_169;

// ─── Null-pointer guards ──────────────────────────────────────────────────

#[test]
fn from_fields_null_pointer() {
    let status = unsafe { bluetime_utc_from_fields(15, 0, 0, 24, 9, 2011, std::ptr::null_mut()) };
    assert_eq!(status, BluetimeStatus::NullPointer);
}

#[test]
fn civil_null_pointer() {
    let status = unsafe { bluetime_utc_civil(STAMP, std::ptr::null_mut()) };
    assert_eq!(status, BluetimeStatus::NullPointer);
    let status = unsafe { bluetime_local_civil(STAMP, std::ptr::null_mut()) };
    assert_eq!(status, BluetimeStatus::NullPointer);
}

#[test]
fn difference_null_pointer() {
    let status = unsafe { bluetime_difference(0, 1, 0, false, std::ptr::null_mut()) };
    assert_eq!(status, BluetimeStatus::NullPointer);
    let status = unsafe { bluetime_differences(0, 1, false, std::ptr::null_mut()) };
    assert_eq!(status, BluetimeStatus::NullPointer);
}

#[test]
fn unit_from_name_null_pointers() {
    let mut out = MaybeUninit::<BluetimeUnit>::uninit();
    let status = unsafe { bluetime_unit_from_name(std::ptr::null(), out.as_mut_ptr()) };
    assert_eq!(status, BluetimeStatus::NullPointer);
    let status = unsafe { bluetime_unit_from_name(CString::new("days").unwrap().as_ptr(), std::ptr::null_mut()) };
    assert_eq!(status, BluetimeStatus::NullPointer);
}

// ─── Invalid input ────────────────────────────────────────────────────────

#[test]
fn from_fields_invalid_date() {
    let mut out: i64 = -1;
    let status = unsafe { bluetime_utc_from_fields(0, 0, 0, 31, 2, 2024, &mut out) };
    assert_eq!(status, BluetimeStatus::InvalidTimeFormat);
    assert_eq!(out, -1);
}

#[test]
fn unknown_unit_name() {
    let mut out = MaybeUninit::<BluetimeUnit>::uninit();
    let status = unsafe { bluetime_unit_from_name(CString::new("all").unwrap().as_ptr(), out.as_mut_ptr()) };
    assert_eq!(status, BluetimeStatus::InvalidArgument);
}

#[test]
fn unknown_unit_code() {
    let mut out = 0.0;
    let status = unsafe { bluetime_difference(0, 1, 7, false, &mut out) };
    assert_eq!(status, BluetimeStatus::InvalidArgument);
    let status = unsafe { bluetime_difference(0, 1, -1, false, &mut out) };
    assert_eq!(status, BluetimeStatus::InvalidArgument);
}

// ─── Construction and fields ──────────────────────────────────────────────

#[test]
fn utc_from_fields_ok() {
    let mut out: i64 = 0;
    let status = unsafe { bluetime_utc_from_fields(15, 0, 0, 24, 9, 2011, &mut out) };
    assert_eq!(status, BluetimeStatus::Ok);
    assert_eq!(out, 1_316_876_400);
}

#[test]
fn local_roundtrips_through_civil() {
    let mut civil = MaybeUninit::<BluetimeCivil>::uninit();
    let status = unsafe { bluetime_local_civil(STAMP, civil.as_mut_ptr()) };
    assert_eq!(status, BluetimeStatus::Ok);
    let c = unsafe { civil.assume_init() };

    let mut epoch: i64 = 0;
    let status = unsafe {
        bluetime_local_from_fields(
            c.hour.into(),
            c.minute.into(),
            c.second.into(),
            c.day.into(),
            c.month.into(),
            c.year,
            &mut epoch,
        )
    };
    assert_eq!(status, BluetimeStatus::Ok);
    assert_eq!(epoch, STAMP);
}

#[test]
fn utc_civil_breakdown() {
    let mut out = MaybeUninit::<BluetimeCivil>::uninit();
    let status = unsafe { bluetime_utc_civil(STAMP, out.as_mut_ptr()) };
    assert_eq!(status, BluetimeStatus::Ok);
    let civil = unsafe { out.assume_init() };
    assert_eq!(
        civil,
        BluetimeCivil {
            year: 2026,
            month: 2,
            day: 3,
            hour: 13,
            minute: 42,
            second: 49,
            week: 6,
            day_of_year: 34,
            days_in_month: 28,
            is_leap_year: false,
        }
    );
}

#[test]
fn calendar_helpers() {
    assert!(bluetime_is_leap_year(2000));
    assert!(!bluetime_is_leap_year(1900));
    assert!(bluetime_is_valid_date(2024, 2, 29));
    assert!(!bluetime_is_valid_date(2024, 2, 31));
    assert_eq!(bluetime_days_in_month(2024, 2), 29);
    assert_eq!(bluetime_days_in_month(2024, 13), 0);
}

#[test]
fn now_is_recent() {
    assert!(bluetime_now() > STAMP - 365 * 86_400);
}

// ─── Differences ──────────────────────────────────────────────────────────

#[test]
fn unit_names_resolve() {
    let mut out = MaybeUninit::<BluetimeUnit>::uninit();
    let status = unsafe { bluetime_unit_from_name(CString::new("weeks").unwrap().as_ptr(), out.as_mut_ptr()) };
    assert_eq!(status, BluetimeStatus::Ok);
    assert_eq!(unsafe { out.assume_init() }, BluetimeUnit::Weeks);
}

#[test]
fn single_unit_difference() {
    let mut out = 0.0;
    let status = unsafe {
        bluetime_difference(STAMP, STAMP + 1000, BluetimeUnit::Minutes as i32, false, &mut out)
    };
    assert_eq!(status, BluetimeStatus::Ok);
    assert_eq!(out, 16.66667);

    let status = unsafe {
        bluetime_difference(STAMP + 1000, STAMP, BluetimeUnit::Minutes as i32, true, &mut out)
    };
    assert_eq!(status, BluetimeStatus::Ok);
    assert_eq!(out, -17.0);
}

#[test]
fn all_units_difference() {
    let mut out = MaybeUninit::<BluetimeDifferences>::uninit();
    let status = unsafe { bluetime_differences(STAMP, STAMP + 100_000_000, false, out.as_mut_ptr()) };
    assert_eq!(status, BluetimeStatus::Ok);
    let all = unsafe { out.assume_init() };
    assert_eq!(
        all,
        BluetimeDifferences {
            seconds: 100_000_000,
            years: 3.17098,
            months: 38.58025,
            weeks: 165.34392,
            days: 1157.40741,
            hours: 27777.77778,
            minutes: 1666666.66667,
        }
    );
}

#[test]
fn version() {
    assert_eq!(bluetime_ffi_version(), 100);
}
