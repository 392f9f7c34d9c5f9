// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **bluetime** — calendar instants and their differences.
//!
//! Instants cross the boundary as plain `int64_t` epoch seconds. Fallible
//! functions return a [`BluetimeStatus`] and write their result through an
//! out-pointer; a null out-pointer is reported, never dereferenced.

mod difference;
mod error;
mod instant;

pub use difference::*;
pub use error::*;
pub use instant::*;

/// Run an FFI body, turning a panic into the given fallback status.
#[doc(hidden)]
#[macro_export]
macro_rules! catch_panic {
    ($fallback:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $fallback,
        }
    };
}

/// Returns the bluetime-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn bluetime_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
