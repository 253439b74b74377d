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

use crate::{index::CityIndex, limits::RoadLimits, name::CityName};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// A rule broken while assembling a `Road`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadError {
    /// The road length is outside the configured range.
    #[error("road length {length} is outside the accepted range {min}..={max}")]
    LengthOutOfRange { length: u32, min: u32, max: u32 },
    /// The road holds too few or too many cities.
    #[error("road holds {count} cities, the accepted range is {min}..={max}")]
    CityCountOutOfRange { count: usize, min: usize, max: usize },
    /// A city sits on or beyond one of the road's ends.
    #[error("{city} at position {position} is not strictly inside the road (0, {length})")]
    PositionOutOfRange {
        city: CityIndex,
        position: i64,
        length: u32,
    },
    /// Two cities share a position.
    #[error("{city} repeats position {position}, already taken by {first}")]
    DuplicatePosition {
        city: CityIndex,
        first: CityIndex,
        position: u32,
    },
}

/// A named point on the road.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct City {
    position: u32,
    name: CityName,
}

impl City {
    /// Returns the distance of the city from the western end of the road.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Returns the city's name.
    #[inline]
    pub fn name(&self) -> &CityName {
        &self.name
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.name, self.position)
    }
}

/// A validated road and the cities along it.
///
/// Invariants:
/// - The length lies within the `RoadLimits` it was built with.
/// - The number of cities lies within those limits, and is never zero.
/// - Every position satisfies `0 < position < length`.
/// - No two cities share a position.
///
/// Cities are kept in the order they were added. Use `RoadBuilder` to obtain a `Road`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    length: u32,
    cities: Vec<City>,
}

impl Road {
    /// Returns the total length `T` of the road.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use vicinity_model::model::RoadBuilder;
    /// # use vicinity_model::name::CityName;
    ///
    /// let mut builder = RoadBuilder::new(10);
    /// builder.add_city(2, CityName::new("A").unwrap()).unwrap();
    /// builder.add_city(8, CityName::new("B").unwrap()).unwrap();
    /// let road = builder.build().unwrap();
    /// assert_eq!(road.length(), 10);
    /// ```
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the number of cities on the road.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Returns all cities in insertion order.
    #[inline]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Returns the city at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..num_cities()`.
    #[inline]
    pub fn city(&self, index: CityIndex) -> &City {
        let i = index.get();
        assert!(
            i < self.cities.len(),
            "called `Road::city` with index out of bounds: the len is {} but the index is {}",
            self.cities.len(),
            i
        );
        &self.cities[i]
    }

    /// Returns the city at `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get_city(&self, index: CityIndex) -> Option<&City> {
        self.cities.get(index.get())
    }

    /// Iterates over the cities in insertion order, paired with their index.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (CityIndex, &City)> + '_ {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, c)| (CityIndex::new(i), c))
    }
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Road(length: {}, cities: {})",
            self.length,
            self.cities.len()
        )
    }
}

/// Collects cities for a `Road`, rejecting each one the moment it breaks a rule.
///
/// Position checks happen in `add_city`, so the first offending city is
/// reported even if later ones are also wrong. Length and city count are
/// checked by `build`, which consumes the builder: a failed build leaves
/// nothing behind.
#[derive(Debug, Clone)]
pub struct RoadBuilder {
    length: u32,
    limits: RoadLimits,
    cities: Vec<City>,
    taken: FxHashMap<u32, CityIndex>,
}

impl RoadBuilder {
    /// Creates a builder for a road of the given length with the default `RoadLimits`.
    #[inline]
    pub fn new(length: u32) -> Self {
        Self::with_limits(length, RoadLimits::default())
    }

    /// Creates a builder for a road of the given length with custom limits.
    #[inline]
    pub fn with_limits(length: u32, limits: RoadLimits) -> Self {
        Self {
            length,
            limits,
            cities: Vec::new(),
            taken: FxHashMap::default(),
        }
    }

    /// Creates a builder with room for `capacity` cities.
    #[inline]
    pub fn preallocated(length: u32, limits: RoadLimits, capacity: usize) -> Self {
        let mut builder = Self::with_limits(length, limits);
        builder.cities.reserve_exact(capacity);
        builder.taken.reserve(capacity);
        builder
    }

    /// Returns the length of the road being built.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the number of cities accepted so far.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Appends a city, returning its index.
    ///
    /// Fails if the position is not strictly inside `(0, length)` or is
    /// already taken by an earlier city. A rejected city is not added.
    pub fn add_city(&mut self, position: u32, name: CityName) -> Result<CityIndex, RoadError> {
        let index = CityIndex::new(self.cities.len());
        self.check_position(index, i64::from(position))?;
        self.taken.insert(position, index);
        self.cities.push(City { position, name });
        Ok(index)
    }

    /// Checks a raw position against the range and distinctness rules without adding it.
    ///
    /// Accepts any `i64` so that callers holding unparsed-width values can
    /// validate them before narrowing.
    pub fn check_position(&self, index: CityIndex, position: i64) -> Result<(), RoadError> {
        if position <= 0 || position >= i64::from(self.length) {
            return Err(RoadError::PositionOutOfRange {
                city: index,
                position,
                length: self.length,
            });
        }

        // In range, so it fits in u32.
        let position = position as u32;
        if let Some(&first) = self.taken.get(&position) {
            return Err(RoadError::DuplicatePosition {
                city: index,
                first,
                position,
            });
        }
        Ok(())
    }

    /// Validates the length and city count and produces the `Road`.
    pub fn build(self) -> Result<Road, RoadError> {
        if !self.limits.accepts_length(self.length) {
            let range = self.limits.length_range();
            return Err(RoadError::LengthOutOfRange {
                length: self.length,
                min: *range.start(),
                max: *range.end(),
            });
        }

        if !self.limits.accepts_city_count(self.cities.len()) {
            let range = self.limits.city_range();
            return Err(RoadError::CityCountOutOfRange {
                count: self.cities.len(),
                min: *range.start(),
                max: *range.end(),
            });
        }

        Ok(Road {
            length: self.length,
            cities: self.cities,
        })
    }
}

impl std::fmt::Display for RoadBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoadBuilder(length: {}, cities: {})",
            self.length,
            self.cities.len()
        )
    }
}
