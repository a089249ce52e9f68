// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Photometric samples and their projected plot form.

extern crate alloc;

use alloc::string::String;

/// A single photometric sample reported by a catalog.
///
/// Points are never mutated after creation. Batches arriving from a catalog are merged into a
/// [`crate::PointSeries`] or replace that catalog's points wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotPoint {
    /// Opaque identifier of the source catalog.
    pub catalog: String,
    /// Timestamp as a Julian Date (any continuous JD-like convention, e.g. `BJD_TDB`).
    pub jd: f64,
    /// Magnitude; smaller is brighter.
    pub mag: f64,
    /// Magnitude uncertainty (non-negative).
    pub mag_err: f64,
    /// Photometric band or filter label, if the catalog reports one.
    pub band: Option<String>,
}

impl PhotPoint {
    /// Creates a point without a band label.
    pub fn new(catalog: impl Into<String>, jd: f64, mag: f64, mag_err: f64) -> Self {
        Self {
            catalog: catalog.into(),
            jd,
            mag,
            mag_err,
            band: None,
        }
    }

    /// Sets the band label.
    pub fn with_band(mut self, band: impl Into<String>) -> Self {
        self.band = Some(band.into());
        self
    }
}

/// A point projected into plot coordinates.
///
/// `row` indexes the source [`PhotPoint`] in the series the projection was made from, so the
/// renderer can look up catalog, band or tooltip data without carrying them per point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    /// X coordinate (JD, JD offset or phase, depending on the axis).
    pub x: f64,
    /// Y coordinate (magnitude).
    pub y: f64,
    /// Magnitude uncertainty.
    pub err: f64,
    /// Index of the source point in its series.
    pub row: usize,
}

impl PlotPoint {
    /// Creates a plot point.
    pub fn new(x: f64, y: f64, err: f64, row: usize) -> Self {
        Self { x, y, err, row }
    }

    /// Returns the point position as a `kurbo::Point`.
    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}
