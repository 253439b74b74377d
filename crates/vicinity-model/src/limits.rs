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

//! Numeric bounds a road has to respect.
//!
//! The defaults are the ones the input format is defined with: a road length
//! in `[3, 1_000_000]` and between `2` and `10_000` cities. Tests and tools
//! that need other bounds can narrow or widen them, but both ranges must stay
//! non-empty and a road must always hold at least one city.

use std::ops::RangeInclusive;

/// The accepted ranges for a road's length and its number of cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadLimits {
    min_length: u32,
    max_length: u32,
    min_cities: usize,
    max_cities: usize,
}

impl RoadLimits {
    /// The smallest road length accepted by default.
    pub const DEFAULT_MIN_LENGTH: u32 = 3;
    /// The largest road length accepted by default.
    pub const DEFAULT_MAX_LENGTH: u32 = 1_000_000;
    /// The fewest cities accepted by default.
    pub const DEFAULT_MIN_CITIES: usize = 2;
    /// The most cities accepted by default.
    pub const DEFAULT_MAX_CITIES: usize = 10_000;

    /// Creates the default limits.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the accepted road length range.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    #[inline]
    pub fn with_length_range(mut self, range: RangeInclusive<u32>) -> Self {
        assert!(
            range.start() <= range.end(),
            "called `RoadLimits::with_length_range` with an empty range: {:?}",
            range
        );
        self.min_length = *range.start();
        self.max_length = *range.end();
        self
    }

    /// Replaces the accepted city count range.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty or admits a road without cities.
    #[inline]
    pub fn with_city_range(mut self, range: RangeInclusive<usize>) -> Self {
        assert!(
            *range.start() >= 1 && range.start() <= range.end(),
            "called `RoadLimits::with_city_range` with an invalid range: {:?}",
            range
        );
        self.min_cities = *range.start();
        self.max_cities = *range.end();
        self
    }

    /// Returns the accepted road length range.
    #[inline]
    pub fn length_range(&self) -> RangeInclusive<u32> {
        self.min_length..=self.max_length
    }

    /// Returns the accepted city count range.
    #[inline]
    pub fn city_range(&self) -> RangeInclusive<usize> {
        self.min_cities..=self.max_cities
    }

    /// Returns `true` if `length` is an acceptable road length.
    #[inline]
    pub fn accepts_length(&self, length: u32) -> bool {
        self.length_range().contains(&length)
    }

    /// Returns `true` if a road may hold `count` cities.
    #[inline]
    pub fn accepts_city_count(&self, count: usize) -> bool {
        self.city_range().contains(&count)
    }
}

impl Default for RoadLimits {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
            min_cities: Self::DEFAULT_MIN_CITIES,
            max_cities: Self::DEFAULT_MAX_CITIES,
        }
    }
}

impl std::fmt::Display for RoadLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoadLimits(length: {}..={}, cities: {}..={})",
            self.min_length, self.max_length, self.min_cities, self.max_cities
        )
    }
}
