// SPDX-License-Identifier: AGPL-3.0-or-later

use bluetime::{Error, ErrorKind};

/// Status codes returned by bluetime-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BluetimeStatus {
    /// Success.
    Ok = 0,
    /// A required pointer argument was null.
    NullPointer = 1,
    /// The day/month/year triple is not a calendar date, or the local time does not exist.
    InvalidTimeFormat = 2,
    /// Unknown unit, non-UTF-8 name, or another malformed argument.
    InvalidArgument = 3,
    /// The call panicked internally.
    Panicked = 4,
}

impl From<&Error> for BluetimeStatus {
    fn from(err: &Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidTimeFormat => BluetimeStatus::InvalidTimeFormat,
            ErrorKind::InvalidArgument => BluetimeStatus::InvalidArgument,
        }
    }
}

/// Write `value` through `out`, reporting a null pointer instead of writing.
///
/// # Safety
/// A non-null `out` must be valid for writes of `T`.
pub(crate) unsafe fn write_out<T>(out: *mut T, value: T) -> BluetimeStatus {
    if out.is_null() {
        return BluetimeStatus::NullPointer;
    }
    // SAFETY: `out` was checked for null and the caller guarantees it points to writable memory.
    unsafe { out.write(value) };
    BluetimeStatus::Ok
}
