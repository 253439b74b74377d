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

//! # Neighborhoods
//!
//! A city's neighborhood is the stretch of road closer to it than to any other
//! city. On a line that stretch is bounded by the midpoints to the neighboring
//! cities, or by the road's ends for the westernmost and easternmost cities:
//!
//! ```raw
//! 0 ----- A ----- | ----- B ----- | ----- C ----- T
//!        [0, (A+B)/2)  [(A+B)/2, (B+C)/2)  [(B+C)/2, T)
//! ```
//!
//! Bounds are computed in `f64`. Positions and `T` are integers well below
//! 2^53, so every midpoint is a multiple of one half and is represented
//! exactly; in particular the widths of all neighborhoods sum to exactly `T`.

use vicinity_core::math::{interval::HalfOpenInterval, midpoint::midpoint};
use vicinity_model::{
    index::{CityIndex, RankIndex},
    model::Road,
};

/// The stretch of road owned by one city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    city: CityIndex,
    rank: RankIndex,
    position: u32,
    interval: HalfOpenInterval<f64>,
}

impl Neighborhood {
    /// Returns the file-order index of the owning city.
    #[inline]
    pub fn city(&self) -> CityIndex {
        self.city
    }

    /// Returns the owning city's place in west-to-east order.
    #[inline]
    pub fn rank(&self) -> RankIndex {
        self.rank
    }

    /// Returns the owning city's position.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Returns the `[left, right)` bounds of the neighborhood.
    #[inline]
    pub fn interval(&self) -> HalfOpenInterval<f64> {
        self.interval
    }

    /// Returns the length of the neighborhood.
    #[inline]
    pub fn width(&self) -> f64 {
        self.interval.width()
    }
}

impl std::fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {}: {} (width {})",
            self.city,
            self.position,
            self.interval,
            self.width()
        )
    }
}

/// Computes the neighborhood bounds of a city at `position`.
///
/// `previous` and `next` are the positions of the adjacent cities to the west
/// and east, or `None` at either end of the road.
///
/// # Examples
///
/// ```rust
/// # use vicinity_analysis::neighborhood::neighborhood_bounds;
///
/// let iv = neighborhood_bounds(Some(10), 50, Some(90), 100);
/// assert_eq!((iv.start(), iv.end()), (30.0, 70.0));
///
/// let first = neighborhood_bounds(None, 10, Some(50), 100);
/// assert_eq!(first.width(), 30.0);
/// ```
pub fn neighborhood_bounds(
    previous: Option<u32>,
    position: u32,
    next: Option<u32>,
    length: u32,
) -> HalfOpenInterval<f64> {
    let left = previous.map_or(0.0, |p| midpoint(p, position));
    let right = next.map_or(f64::from(length), |n| midpoint(position, n));
    HalfOpenInterval::new(left, right)
}

/// Computes every city's neighborhood.
///
/// `order` must list each city of `road` once, sorted by ascending position
/// (as produced by a `PositionOrder`). The result is in the same order, so the
/// element at index `r` belongs to `RankIndex::new(r)`.
///
/// # Panics
///
/// Panics if `order` is not sorted by position or refers to a city outside `road`.
pub fn neighborhoods(road: &Road, order: &[CityIndex]) -> Vec<Neighborhood> {
    let length = road.length();
    let position_at = |rank: usize| road.city(order[rank]).position();

    (0..order.len())
        .map(|rank| {
            let position = position_at(rank);
            let previous = rank.checked_sub(1).map(position_at);
            let next = (rank + 1 < order.len()).then(|| position_at(rank + 1));

            assert!(
                previous.is_none_or(|p| p <= position),
                "called `neighborhoods` with an order that is not sorted by position at rank {}",
                rank
            );

            Neighborhood {
                city: order[rank],
                rank: RankIndex::new(rank),
                position,
                interval: neighborhood_bounds(previous, position, next, length),
            }
        })
        .collect()
}
