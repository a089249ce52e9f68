// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Largest-Triangle-Three-Buckets decimation.
//!
//! Reduces an x-ordered series to a bounded number of points while keeping its visual shape,
//! following Steinarsson, "Downsampling Time Series for Visual Representation" (2013).
//!
//! The first and last points of the range are always kept. The points between them are split
//! into `threshold - 2` equal-width index buckets, and each bucket contributes the point forming
//! the largest triangle with the previously kept point and the centroid of the next bucket.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Range;

use starfold_core::{PhotPoint, PlotPoint};

/// A point with x/y coordinates that can be decimated.
pub trait SeriesPoint {
    /// X coordinate; a series must be ascending in x.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;
}

impl SeriesPoint for PlotPoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl SeriesPoint for PhotPoint {
    fn x(&self) -> f64 {
        self.jd
    }

    fn y(&self) -> f64 {
        self.mag
    }
}

impl SeriesPoint for kurbo::Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl SeriesPoint for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl<T: SeriesPoint + ?Sized> SeriesPoint for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

/// Decimates `series[start..end]` to at most `threshold` points.
///
/// When `threshold` is zero or not smaller than the range, the range is returned unchanged.
/// Otherwise exactly `threshold` points are returned, in input order. Out-of-bounds indices are
/// clamped to the series.
pub fn downsample<T: SeriesPoint + Clone>(
    series: &[T],
    start: usize,
    end: usize,
    threshold: usize,
) -> Vec<T> {
    let window = &series[clamp_range(series.len(), start, end)];
    let out: Vec<T> = select_indices(window, threshold)
        .into_iter()
        .map(|i| window[i].clone())
        .collect();
    log::trace!("lttb: {} points reduced to {}", window.len(), out.len());
    out
}

/// Decimates the whole series to at most `threshold` points.
pub fn downsample_all<T: SeriesPoint + Clone>(series: &[T], threshold: usize) -> Vec<T> {
    downsample(series, 0, series.len(), threshold)
}

/// Returns the indices (into `series`) of the points kept by [`downsample`].
pub fn downsample_indices<T: SeriesPoint>(
    series: &[T],
    start: usize,
    end: usize,
    threshold: usize,
) -> Vec<usize> {
    let range = clamp_range(series.len(), start, end);
    let base = range.start;
    select_indices(&series[range], threshold)
        .into_iter()
        .map(|i| base + i)
        .collect()
}

fn clamp_range(len: usize, start: usize, end: usize) -> Range<usize> {
    let end = end.min(len);
    start.min(end)..end
}

fn select_indices<T: SeriesPoint>(data: &[T], threshold: usize) -> Vec<usize> {
    let n = data.len();
    if threshold == 0 || threshold >= n {
        return (0..n).collect();
    }
    match threshold {
        1 => return alloc::vec![0],
        2 => return alloc::vec![0, n - 1],
        _ => {}
    }

    let mut out = Vec::with_capacity(threshold);
    out.push(0);

    // Bucket width in points, excluding the two anchors.
    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let mut a = 0;

    for i in 0..threshold - 2 {
        let next = bucket_bounds(i + 1, every, n);
        let (avg_x, avg_y) = centroid(&data[next]);

        let current = bucket_bounds(i, every, n);
        let (ax, ay) = (data[a].x(), data[a].y());
        let mut max_area = -1.0;
        let mut chosen = current.start;
        for j in current {
            let (bx, by) = (data[j].x(), data[j].y());
            // Twice the triangle area; the factor does not change the argmax.
            let area = ((ax - avg_x) * (by - ay) - (ax - bx) * (avg_y - ay)).abs();
            if area > max_area {
                max_area = area;
                chosen = j;
            }
        }

        out.push(chosen);
        a = chosen;
    }

    out.push(n - 1);
    out
}

/// Index range of bucket `i`, offset past the leading anchor and capped at `n`.
fn bucket_bounds(i: usize, every: f64, n: usize) -> Range<usize> {
    let start = floor_index(i as f64 * every) + 1;
    let end = (floor_index((i + 1) as f64 * every) + 1).min(n);
    start.min(end)..end
}

fn floor_index(v: f64) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "bucket positions are non-negative and bounded by the series length"
    )]
    {
        v as usize
    }
}

fn centroid<T: SeriesPoint>(points: &[T]) -> (f64, f64) {
    let count = points.len().max(1) as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
    (sx / count, sy / count)
}
