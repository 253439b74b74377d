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

use crate::neighborhood::Neighborhood;
use vicinity_model::{index::CityIndex, model::Road, name::CityName};

/// The neighborhoods of every city on a road, and which one is smallest.
///
/// Neighborhoods are stored west to east. The smallest one is the first in
/// that order whose width is strictly below every earlier width, so ties go
/// to the westernmost city.
#[derive(Debug, Clone)]
pub struct NeighborhoodReport {
    road: Road,
    neighborhoods: Vec<Neighborhood>,
    smallest: usize,
}

impl NeighborhoodReport {
    /// Builds a report from a road and its neighborhoods in rank order.
    ///
    /// Returns `None` if there are no neighborhoods.
    pub fn new(road: Road, neighborhoods: Vec<Neighborhood>) -> Option<Self> {
        let smallest = smallest_rank(&neighborhoods)?;
        Some(Self {
            road,
            neighborhoods,
            smallest,
        })
    }

    /// Returns the analyzed road.
    #[inline]
    pub fn road(&self) -> &Road {
        &self.road
    }

    /// Returns all neighborhoods, west to east.
    #[inline]
    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    /// Iterates over the neighborhoods, west to east.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Neighborhood> {
        self.neighborhoods.iter()
    }

    /// Returns the number of neighborhoods, one per city.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighborhoods.len()
    }

    /// Returns `true` if the report holds no neighborhood. A constructed report never does.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighborhoods.is_empty()
    }

    /// Returns the smallest neighborhood.
    #[inline]
    pub fn smallest(&self) -> &Neighborhood {
        &self.neighborhoods[self.smallest]
    }

    /// Returns the width of the smallest neighborhood.
    #[inline]
    pub fn smallest_width(&self) -> f64 {
        self.smallest().width()
    }

    /// Returns the name of the city owning the smallest neighborhood.
    #[inline]
    pub fn city_with_smallest(&self) -> &CityName {
        self.road.city(self.smallest().city()).name()
    }

    /// Returns the neighborhood of the city read at `city`, if any.
    pub fn neighborhood_of(&self, city: CityIndex) -> Option<&Neighborhood> {
        self.neighborhoods.iter().find(|n| n.city() == city)
    }

    /// Returns the sum of all widths. Equals the road length.
    pub fn total_width(&self) -> f64 {
        self.neighborhoods.iter().map(Neighborhood::width).sum()
    }
}

impl std::fmt::Display for NeighborhoodReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Neighborhood Report:")?;
        writeln!(f, "  Road Length: {}", self.road.length())?;
        writeln!(f, "  Cities: {}", self.neighborhoods.len())?;
        writeln!(f, "  Smallest Width: {}", self.smallest_width())?;
        writeln!(f, "  Smallest City: {}", self.city_with_smallest())
    }
}

/// Index of the first neighborhood with the minimum width.
fn smallest_rank(neighborhoods: &[Neighborhood]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (rank, n) in neighborhoods.iter().enumerate() {
        let width = n.width();
        match best {
            Some((_, w)) if width >= w => {}
            _ => best = Some((rank, width)),
        }
    }
    best.map(|(rank, _)| rank)
}
