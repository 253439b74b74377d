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

//! # Vicinity Model
//!
//! **The data model for a straight road dotted with named cities.**
//!
//! A `Road` has an integer length `T` and owns between two and ten thousand
//! `City` records, each sitting at a distinct integer position strictly
//! inside `(0, T)`. This crate is the boundary between raw text and the
//! analysis engine (`vicinity_analysis`): everything it hands out is already
//! validated.
//!
//! ## Architecture
//!
//! * **`index`**: Typed wrappers (`CityIndex`, `RankIndex`) that keep file order and position order apart.
//! * **`name`**: `CityName`, a bounded, single-line text type.
//! * **`limits`**: `RoadLimits`, the numeric bounds a road must respect.
//! * **`model`**: The immutable `Road` and `City`, and the validating `RoadBuilder`.
//! * **`loading`**: `RoadLoader`, which turns whitespace-delimited text into a `Road`.
//!
//! ## Design Philosophy
//!
//! 1.  **All or nothing**: A `Road` either satisfies every invariant or is never constructed.
//! 2.  **File order is preserved**: The model stores cities exactly as read; ordering by position is the analyzer's job.
//! 3.  **Typed failures**: Each rejection names the record and the rule it broke, even though callers of the analyzer only see "not found".

pub mod index;
pub mod limits;
pub mod loading;
pub mod model;
pub mod name;
