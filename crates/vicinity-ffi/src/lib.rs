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

//! # Vicinity FFI
//!
//! **C-Compatible Bindings for the Vicinity Neighborhood Analysis.**
//!
//! This crate exposes the two path-based entry points of `vicinity_analysis`
//! to C, C++, Python and any other host able to call a C ABI.
//!
//! ## Core Design Principles
//!
//! 1.  **Sentinels, not error codes**: Every load or analysis failure collapses to a single
//!     sentinel per function (`-1.0` for widths, `NULL` for names), matching the
//!     "not found" contract of the Rust API.
//! 2.  **Explicit Lifecycle**: Strings returned by this crate are owned by the caller and
//!     must be released with `vicinity_string_free`.
//! 3.  **Fail-Fast Safety**: Passing a `NULL` path is a caller bug and results in an
//!     immediate process abort (panic) rather than undefined behavior.

pub mod neighborhood;
