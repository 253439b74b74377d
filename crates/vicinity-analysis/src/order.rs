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

//! # Position Orderings
//!
//! Neighborhoods only make sense once the cities are lined up west to east.
//! A `PositionOrder` produces that line-up as a permutation of file-order
//! indices, leaving the `Road` itself untouched.
//!
//! Two strategies are provided:
//!
//! - `StableOrder`: the standard library's stable merge sort. This is the default.
//! - `BubbleOrder`: a plain adjacent-swap bubble sort. Quadratic, but trivially
//!   auditable, which makes it the reference the other strategy is tested against.
//!
//! Both are stable: should two cities ever share a position (a `Road` forbids
//! this), they keep their file order.

use vicinity_model::{index::CityIndex, model::Road};

/// A strategy that lines a road's cities up by ascending position.
pub trait PositionOrder {
    /// Returns a short name for logs.
    fn name(&self) -> &str;

    /// Returns every city index of `road` exactly once, sorted by position.
    fn order(&self, road: &Road) -> Vec<CityIndex>;
}

/// Sorts with `slice::sort_by_key`, which is stable and `O(N log N)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StableOrder;

impl PositionOrder for StableOrder {
    fn name(&self) -> &str {
        "StableOrder"
    }

    fn order(&self, road: &Road) -> Vec<CityIndex> {
        let mut indices: Vec<CityIndex> = road.iter().map(|(i, _)| i).collect();
        indices.sort_by_key(|&i| road.city(i).position());
        indices
    }
}

/// Sorts by repeatedly swapping adjacent out-of-order cities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleOrder;

impl PositionOrder for BubbleOrder {
    fn name(&self) -> &str {
        "BubbleOrder"
    }

    fn order(&self, road: &Road) -> Vec<CityIndex> {
        let mut indices: Vec<CityIndex> = road.iter().map(|(i, _)| i).collect();
        let position = |i: CityIndex| road.city(i).position();

        let n = indices.len();
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                // Strictly greater keeps equal keys in place.
                if position(indices[j]) > position(indices[j + 1]) {
                    indices.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
        indices
    }
}

impl std::fmt::Display for StableOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for BubbleOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vicinity_model::{model::RoadBuilder, name::CityName};

    fn road(length: u32, positions: &[u32]) -> Road {
        let mut b = RoadBuilder::new(length);
        for (i, &p) in positions.iter().enumerate() {
            b.add_city(p, CityName::new(format!("C{i}")).unwrap())
                .unwrap();
        }
        b.build().unwrap()
    }

    fn as_usize(order: Vec<CityIndex>) -> Vec<usize> {
        order.into_iter().map(|i| i.get()).collect()
    }

    #[test]
    fn test_stable_order_sorts_by_position() {
        let r = road(100, &[90, 10, 50]);
        assert_eq!(as_usize(StableOrder.order(&r)), vec![1, 2, 0]);
    }

    #[test]
    fn test_bubble_order_sorts_by_position() {
        let r = road(100, &[90, 10, 50]);
        assert_eq!(as_usize(BubbleOrder.order(&r)), vec![1, 2, 0]);
    }

    #[test]
    fn test_already_sorted_and_reversed() {
        let sorted = road(20, &[1, 2, 3, 4, 5, 6]);
        let reversed = road(20, &[6, 5, 4, 3, 2, 1]);
        for strategy in [&StableOrder as &dyn PositionOrder, &BubbleOrder] {
            assert_eq!(as_usize(strategy.order(&sorted)), vec![0, 1, 2, 3, 4, 5]);
            assert_eq!(as_usize(strategy.order(&reversed)), vec![5, 4, 3, 2, 1, 0]);
        }
    }

    #[test]
    fn test_strategies_agree() {
        let r = road(1000, &[500, 3, 999, 250, 1, 750, 42, 998, 600, 17]);
        assert_eq!(StableOrder.order(&r), BubbleOrder.order(&r));
    }

    #[test]
    fn test_names() {
        assert_eq!(StableOrder.to_string(), "StableOrder");
        assert_eq!(BubbleOrder.to_string(), "BubbleOrder");
    }
}
