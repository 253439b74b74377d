// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Foreign Function Interface (FFI) for Neighborhood Queries
//!
//! ## Usage Lifecycle
//!
//! ```c
//! double width = vicinity_smallest_neighborhood("road.txt");
//! if (width < 0.0) { /* not found */ }
//!
//! char *city = vicinity_city_with_smallest_neighborhood("road.txt");
//! if (city != NULL) {
//!     puts(city);
//!     vicinity_string_free(city);
//! }
//! ```
//!
//! Each call loads the file independently; no state is kept between calls.

use libc::c_char;
use std::ffi::{CStr, CString};
use vicinity_analysis::{city_with_smallest_neighborhood, smallest_neighborhood};

/// Width returned by `vicinity_smallest_neighborhood` when no neighborhood was found.
pub const VICINITY_NOT_FOUND: f64 = -1.0;

/// Borrows `path` as UTF-8, or `None` if it is not valid UTF-8.
unsafe fn path_str<'a>(path: *const c_char) -> Option<&'a str> {
    match CStr::from_ptr(path).to_str() {
        Ok(s) => Some(s),
        Err(e) => {
            log::debug!("rejected path that is not valid UTF-8: {e}");
            None
        }
    }
}

/// Returns the width of the smallest neighborhood on the road stored at `path`,
/// or `-1.0` if the file cannot be read or does not describe a valid road.
///
/// # Panics
///
/// This function will panic if `path` is a null pointer. The panic cannot
/// unwind across the C boundary, so the process aborts.
///
/// # Safety
///
/// The caller must ensure that `path` points to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn vicinity_smallest_neighborhood(path: *const c_char) -> f64 {
    assert!(
        !path.is_null(),
        "called `vicinity_smallest_neighborhood` with null pointer"
    );

    path_str(path)
        .and_then(|p| smallest_neighborhood(p).ok())
        .unwrap_or(VICINITY_NOT_FOUND)
}

/// Returns the name of the city with the smallest neighborhood on the road
/// stored at `path`, or `NULL` if the file cannot be read or does not describe
/// a valid road.
///
/// The returned string is owned by the caller and must be released with
/// `vicinity_string_free`.
///
/// # Panics
///
/// This function will panic if `path` is a null pointer. The panic cannot
/// unwind across the C boundary, so the process aborts.
///
/// # Safety
///
/// The caller must ensure that `path` points to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn vicinity_city_with_smallest_neighborhood(
    path: *const c_char,
) -> *mut c_char {
    assert!(
        !path.is_null(),
        "called `vicinity_city_with_smallest_neighborhood` with null pointer"
    );

    path_str(path)
        .and_then(|p| city_with_smallest_neighborhood(p).ok())
        // City names never contain NUL.
        .and_then(|name| CString::new(name).ok())
        .map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Releases a string returned by `vicinity_city_with_smallest_neighborhood`.
/// Passing `NULL` is a no-op.
///
/// # Safety
///
/// The caller must ensure that `ptr` was returned by this library and has
/// not been freed before.
#[no_mangle]
pub unsafe extern "C" fn vicinity_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
