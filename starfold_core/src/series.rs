// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ascending point series.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::point::PhotPoint;

/// Errors returned when building a [`PointSeries`] from data that claims to be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// The point at `index` has a smaller timestamp than its predecessor.
    Unsorted {
        /// Index of the first out-of-order point.
        index: usize,
    },
    /// The point at `index` has a `NaN` or infinite timestamp.
    NonFiniteTimestamp {
        /// Index of the offending point.
        index: usize,
    },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsorted { index } => {
                write!(f, "point {index} is earlier than the point before it")
            }
            Self::NonFiniteTimestamp { index } => {
                write!(f, "point {index} has a non-finite timestamp")
            }
        }
    }
}

impl core::error::Error for SeriesError {}

/// Points sorted ascending by timestamp.
///
/// Sortedness is established once, on construction or merge, and the downsampler and the
/// range-bounding helpers rely on it without re-checking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSeries {
    points: Vec<PhotPoint>,
}

impl PointSeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from points in any order.
    ///
    /// The sort is stable, so points sharing a timestamp keep their relative order.
    pub fn from_unsorted(mut points: Vec<PhotPoint>) -> Self {
        sort_by_jd(&mut points);
        Self { points }
    }

    /// Builds a series from points the caller already sorted.
    ///
    /// Returns an error naming the first point that breaks the ordering or has a non-finite
    /// timestamp.
    pub fn from_sorted(points: Vec<PhotPoint>) -> Result<Self, SeriesError> {
        let mut prev = f64::NEG_INFINITY;
        for (index, p) in points.iter().enumerate() {
            if !p.jd.is_finite() {
                return Err(SeriesError::NonFiniteTimestamp { index });
            }
            if p.jd < prev {
                return Err(SeriesError::Unsorted { index });
            }
            prev = p.jd;
        }
        Ok(Self { points })
    }

    /// Appends a batch (e.g. one page of catalog results) and restores the ordering.
    pub fn merge_batch(&mut self, batch: impl IntoIterator<Item = PhotPoint>) {
        let before = self.points.len();
        self.points.extend(batch);
        if self.points.len() != before {
            sort_by_jd(&mut self.points);
        }
        log::trace!(
            "merged {} points into series of {before}",
            self.points.len() - before
        );
    }

    /// Replaces every point of `catalog` with `batch`.
    pub fn replace_catalog(
        &mut self,
        catalog: &str,
        batch: impl IntoIterator<Item = PhotPoint>,
    ) {
        self.points.retain(|p| p.catalog != catalog);
        self.merge_batch(batch);
    }

    /// Returns the points as a slice.
    pub fn as_slice(&self) -> &[PhotPoint] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `row`.
    pub fn get(&self, row: usize) -> Option<&PhotPoint> {
        self.points.get(row)
    }

    /// Iterates points in ascending timestamp order.
    pub fn iter(&self) -> core::slice::Iter<'_, PhotPoint> {
        self.points.iter()
    }

    /// Returns the first and last timestamps.
    pub fn jd_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.jd, last.jd))
    }

    /// Returns the index range of points with `min <= jd <= max`.
    ///
    /// Uses binary search. An inverted or `NaN` interval yields an empty range.
    pub fn index_range(&self, min: f64, max: f64) -> Range<usize> {
        let start = self.points.partition_point(|p| p.jd < min);
        let end = self.points.partition_point(|p| p.jd <= max);
        if end < start { start..start } else { start..end }
    }

    /// Returns the points with `min <= jd <= max`.
    pub fn window(&self, min: f64, max: f64) -> &[PhotPoint] {
        &self.points[self.index_range(min, max)]
    }

    /// Consumes the series, returning its points.
    pub fn into_points(self) -> Vec<PhotPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PointSeries {
    type Item = &'a PhotPoint;
    type IntoIter = core::slice::Iter<'a, PhotPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn sort_by_jd(points: &mut [PhotPoint]) {
    points.sort_by(|a, b| a.jd.total_cmp(&b.jd));
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn p(catalog: &str, jd: f64) -> PhotPoint {
        PhotPoint::new(catalog, jd, 12.0, 0.01)
    }

    #[test]
    fn from_sorted_reports_first_out_of_order_point() {
        let err = PointSeries::from_sorted(vec![p("a", 1.0), p("a", 3.0), p("a", 2.0)]);
        assert_eq!(err, Err(SeriesError::Unsorted { index: 2 }));

        let err = PointSeries::from_sorted(vec![p("a", 1.0), p("a", f64::NAN)]);
        assert_eq!(err, Err(SeriesError::NonFiniteTimestamp { index: 1 }));
    }

    #[test]
    fn merge_batch_keeps_series_sorted_and_stable() {
        let mut s = PointSeries::from_unsorted(vec![p("a", 5.0), p("a", 1.0)]);
        s.merge_batch(vec![p("b", 3.0), p("b", 5.0)]);

        let jds: Vec<f64> = s.iter().map(|p| p.jd).collect();
        assert_eq!(jds, vec![1.0, 3.0, 5.0, 5.0]);
        // Equal timestamps keep arrival order: "a" was present before "b" arrived.
        assert_eq!(s.get(2).unwrap().catalog, "a");
        assert_eq!(s.get(3).unwrap().catalog, "b");
    }

    #[test]
    fn replace_catalog_swaps_only_that_catalog() {
        let mut s = PointSeries::from_unsorted(vec![p("a", 1.0), p("b", 2.0), p("a", 3.0)]);
        s.replace_catalog("a", vec![p("a", 10.0)]);

        let got: Vec<(&str, f64)> = s.iter().map(|p| (p.catalog.as_str(), p.jd)).collect();
        assert_eq!(got, vec![("b", 2.0), ("a", 10.0)]);
    }

    #[test]
    fn index_range_matches_linear_scan() {
        let s = PointSeries::from_unsorted(
            [0.0, 1.0, 1.0, 2.5, 4.0, 4.0, 7.0, 9.5]
                .into_iter()
                .map(|jd| p("a", jd))
                .collect(),
        );
        let bounds = [
            (-1.0, 0.0),
            (1.0, 1.0),
            (1.0, 4.0),
            (2.0, 8.0),
            (9.5, 20.0),
            (5.0, 3.0),
            (10.0, 11.0),
        ];
        for (min, max) in bounds {
            let fast: Vec<f64> = s.window(min, max).iter().map(|p| p.jd).collect();
            let slow: Vec<f64> = s
                .iter()
                .map(|p| p.jd)
                .filter(|&jd| min <= jd && jd <= max)
                .collect();
            assert_eq!(fast, slow, "window [{min}, {max}]");
        }
    }

    #[test]
    fn jd_bounds_of_empty_series_is_none() {
        assert_eq!(PointSeries::new().jd_bounds(), None);
        let s = PointSeries::from_unsorted(vec![p("a", 4.0), p("a", 2.0)]);
        assert_eq!(s.jd_bounds(), Some((2.0, 4.0)));
    }
}
