// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! X-axis modes and projection of a series into plot points.

extern crate alloc;

use alloc::vec::Vec;

use starfold_core::{PhotPoint, PlotPoint, PointSeries};

use crate::phase::PhaseFold;

/// What the x coordinate of a plotted point means.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum XAxis {
    /// Raw Julian Date.
    #[default]
    Jd,
    /// Julian Date minus a fixed offset (e.g. `2_400_000.5` for MJD).
    Offset(f64),
    /// Orbital phase.
    Phase(PhaseFold),
}

impl XAxis {
    /// Returns the x value of `point` on this axis.
    pub fn value(&self, point: &PhotPoint) -> f64 {
        match self {
            Self::Jd => point.jd,
            Self::Offset(offset) => point.jd - offset,
            Self::Phase(fold) => fold.phase(point.jd),
        }
    }

    /// Returns `true` if x grows with the timestamp, so a sorted series stays sorted.
    pub fn preserves_order(&self) -> bool {
        !matches!(self, Self::Phase(_))
    }

    /// Projects one source point.
    pub fn project(&self, point: &PhotPoint, row: usize) -> PlotPoint {
        PlotPoint::new(self.value(point), point.mag, point.mag_err, row)
    }
}

/// Projects every point of `series` onto `axis`.
///
/// Points whose x or magnitude is not finite (for example under a zero-period fold) are dropped.
/// The output is sorted ascending by x; phase folds are re-sorted.
pub fn project(series: &PointSeries, axis: &XAxis) -> Vec<PlotPoint> {
    reproject(
        series,
        series
            .iter()
            .enumerate()
            .map(|(row, p)| PlotPoint::new(p.jd, p.mag, p.mag_err, row)),
        axis,
    )
}

/// Recomputes x for already projected points from their source rows.
///
/// Rows missing from `series` are dropped along with non-finite points.
pub fn reproject(
    series: &PointSeries,
    points: impl IntoIterator<Item = PlotPoint>,
    axis: &XAxis,
) -> Vec<PlotPoint> {
    let mut out: Vec<PlotPoint> = points
        .into_iter()
        .filter_map(|p| {
            let source = series.get(p.row)?;
            let projected = axis.project(source, p.row);
            (projected.x.is_finite() && projected.y.is_finite()).then_some(projected)
        })
        .collect();
    if !axis.preserves_order() {
        sort_by_x(&mut out);
    }
    out
}

/// Stable sort by x.
pub(crate) fn sort_by_x(points: &mut [PlotPoint]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}
