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

//! # Neighborhood Analyzer
//!
//! Loads a road, lines its cities up by position, computes every
//! neighborhood, and reports the smallest one.
//!
//! Each call runs the whole pipeline from scratch: nothing is cached between
//! calls, and the road is dropped as soon as the answer has been extracted.
//!
//! ## Entry points
//!
//! - `smallest_neighborhood` / `city_with_smallest_neighborhood`: the narrow
//!   surface. Every failure, whatever its cause, collapses into `NotFound`.
//! - `analyze_path` / `analyze`: the full `NeighborhoodReport`, with the
//!   underlying `RoadLoaderError` kept for diagnostics.

use crate::{
    neighborhood::neighborhoods,
    order::{PositionOrder, StableOrder},
    report::NeighborhoodReport,
};
use std::path::Path;
use thiserror::Error;
use vicinity_model::{
    loading::{RoadLoader, RoadLoaderError},
    model::Road,
};

/// Why an analysis produced no report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The road could not be loaded.
    #[error("failed to load road: {0}")]
    Load(#[from] RoadLoaderError),
    /// The road has no city, so no neighborhood exists.
    #[error("road has no cities")]
    EmptyRoad,
}

/// The single failure signal of the narrow entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[error("no neighborhood found")]
pub struct NotFound;

impl From<AnalysisError> for NotFound {
    fn from(_: AnalysisError) -> Self {
        NotFound
    }
}

/// Computes city neighborhoods with a configurable loader and ordering strategy.
///
/// # Examples
///
/// ```rust
/// # use vicinity_analysis::analyzer::NeighborhoodAnalyzer;
/// # use vicinity_model::loading::RoadLoader;
///
/// let analyzer = NeighborhoodAnalyzer::new();
/// let road = RoadLoader::new().from_str("100 3\n10 X\n50 Y\n90 Z\n").unwrap();
/// let report = analyzer.analyze(road).unwrap();
/// assert_eq!(report.smallest_width(), 30.0);
/// assert_eq!(report.city_with_smallest().as_str(), "X");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodAnalyzer<O = StableOrder> {
    loader: RoadLoader,
    order: O,
}

impl NeighborhoodAnalyzer<StableOrder> {
    /// Creates an analyzer with the default loader and `StableOrder`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O> NeighborhoodAnalyzer<O>
where
    O: PositionOrder,
{
    /// Creates an analyzer with the default loader and the given ordering strategy.
    #[inline]
    pub fn with_order(order: O) -> Self {
        Self {
            loader: RoadLoader::new(),
            order,
        }
    }

    /// Replaces the loader used by the path-based entry points.
    #[inline]
    pub fn with_loader(mut self, loader: RoadLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Returns the ordering strategy.
    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Computes the neighborhoods of an already loaded road.
    pub fn analyze(&self, road: Road) -> Result<NeighborhoodReport, AnalysisError> {
        if road.num_cities() == 0 {
            return Err(AnalysisError::EmptyRoad);
        }

        let order = self.order.order(&road);
        let ranked = neighborhoods(&road, &order);
        let report = NeighborhoodReport::new(road, ranked).ok_or(AnalysisError::EmptyRoad)?;

        log::debug!(
            "analyzed {} cities with {}: smallest neighborhood belongs to {} ({} wide)",
            report.len(),
            self.order.name(),
            report.city_with_smallest(),
            report.smallest_width()
        );
        Ok(report)
    }

    /// Loads the road at `path` and computes its neighborhoods.
    pub fn analyze_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<NeighborhoodReport, AnalysisError> {
        let road = self.loader.from_path(path)?;
        self.analyze(road)
    }

    /// Returns the width of the smallest neighborhood on the road at `path`.
    pub fn smallest_neighborhood<P: AsRef<Path>>(&self, path: P) -> Result<f64, NotFound> {
        let path = path.as_ref();
        self.analyze_path(path)
            .map(|report| report.smallest_width())
            .map_err(|e| collapse(path, e))
    }

    /// Returns the name of the city with the smallest neighborhood on the road at `path`.
    ///
    /// Ties go to the westernmost of the tied cities.
    pub fn city_with_smallest_neighborhood<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<String, NotFound> {
        let path = path.as_ref();
        self.analyze_path(path)
            .map(|report| report.city_with_smallest().as_str().to_owned())
            .map_err(|e| collapse(path, e))
    }
}

fn collapse(path: &Path, e: AnalysisError) -> NotFound {
    log::debug!("neighborhood analysis of {} failed: {e}", path.display());
    e.into()
}
