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

//! # Vicinity Analysis
//!
//! **Which city on the road owns the smallest stretch of it?**
//!
//! Every city on a straight road claims the part of the road that is closer to
//! it than to any other city. This crate computes those claims for a `Road`
//! loaded by `vicinity_model` and reports the smallest one.
//!
//! ## Architecture
//!
//! * **`order`**: `PositionOrder` strategies that line the cities up west to east.
//! * **`neighborhood`**: The midpoint rule turning sorted positions into `[left, right)` neighborhoods.
//! * **`report`**: `NeighborhoodReport`, the ranked neighborhoods and their minimum.
//! * **`analyzer`**: `NeighborhoodAnalyzer`, the load-sort-scan pipeline behind the public entry points.
//!
//! ## Usage
//!
//! ```no_run
//! use vicinity_analysis::{city_with_smallest_neighborhood, smallest_neighborhood};
//!
//! let width = smallest_neighborhood("road.txt").unwrap_or(-1.0);
//! let city = city_with_smallest_neighborhood("road.txt").ok();
//! println!("{width} {city:?}");
//! ```

pub mod analyzer;
pub mod neighborhood;
pub mod order;
pub mod report;

use analyzer::{NeighborhoodAnalyzer, NotFound};
use std::path::Path;

/// Returns the width of the smallest neighborhood on the road at `path`,
/// using the default analyzer.
pub fn smallest_neighborhood<P: AsRef<Path>>(path: P) -> Result<f64, NotFound> {
    NeighborhoodAnalyzer::new().smallest_neighborhood(path)
}

/// Returns the name of the city with the smallest neighborhood on the road at
/// `path`, using the default analyzer.
pub fn city_with_smallest_neighborhood<P: AsRef<Path>>(path: P) -> Result<String, NotFound> {
    NeighborhoodAnalyzer::new().city_with_smallest_neighborhood(path)
}
