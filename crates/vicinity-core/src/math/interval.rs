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

use num_traits::Float;

/// A real-valued half-open interval `[start, end)`.
///
/// This is the shape of a city's neighborhood: it owns every point from its
/// left bound up to, but not including, its right bound, so consecutive
/// neighborhoods tile the road without overlapping.
///
/// # Invariants
/// `start` must always be less than or equal to `end`. Neither bound is NaN.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct HalfOpenInterval<F>
where
    F: Float,
{
    start: F,
    end: F,
}

impl<F> HalfOpenInterval<F>
where
    F: Float,
{
    /// Creates a new `HalfOpenInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or if either bound is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use vicinity_core::math::interval::HalfOpenInterval;
    ///
    /// let iv = HalfOpenInterval::new(0.0, 5.0);
    /// assert_eq!(iv.width(), 5.0);
    /// ```
    #[inline]
    pub fn new(start: F, end: F) -> Self {
        assert!(
            !start.is_nan() && !end.is_nan() && start <= end,
            "called `HalfOpenInterval::new` with invalid bounds: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `HalfOpenInterval`, or `None` if the bounds are reversed or NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use vicinity_core::math::interval::HalfOpenInterval;
    ///
    /// assert!(HalfOpenInterval::try_new(1.0, 2.0).is_some());
    /// assert!(HalfOpenInterval::try_new(2.0, 1.0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: F, end: F) -> Option<Self> {
        if start.is_nan() || end.is_nan() || start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Returns the inclusive left bound.
    #[inline]
    pub fn start(&self) -> F {
        self.start
    }

    /// Returns the exclusive right bound.
    #[inline]
    pub fn end(&self) -> F {
        self.end
    }

    /// Returns the length of the interval, `end - start`.
    #[inline]
    pub fn width(&self) -> F {
        self.end - self.start
    }

    /// Returns `true` if the interval contains no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `start <= x < end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use vicinity_core::math::interval::HalfOpenInterval;
    ///
    /// let iv = HalfOpenInterval::new(30.0, 70.0);
    /// assert!(iv.contains_point(30.0));
    /// assert!(!iv.contains_point(70.0));
    /// ```
    #[inline]
    pub fn contains_point(&self, x: F) -> bool {
        self.start <= x && x < self.end
    }

    /// Returns `true` if the two intervals touch without overlapping.
    #[inline]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }
}

impl<F> std::fmt::Debug for HalfOpenInterval<F>
where
    F: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HalfOpenInterval[{:?}, {:?})", self.start, self.end)
    }
}

impl<F> std::fmt::Display for HalfOpenInterval<F>
where
    F: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
