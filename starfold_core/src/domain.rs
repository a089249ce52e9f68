// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-space bounding domain.

use kurbo::Rect;

/// Axis-aligned bounds of the enabled points in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    /// Minimum x (JD, JD offset or phase).
    pub x_min: f64,
    /// Maximum x.
    pub x_max: f64,
    /// Minimum magnitude.
    pub y_min: f64,
    /// Maximum magnitude.
    pub y_max: f64,
    /// Largest magnitude uncertainty.
    pub err_max: f64,
}

impl Domain {
    /// The domain used before any non-empty domain has been computed.
    pub const FALLBACK: Self = Self {
        x_min: 0.0,
        x_max: 100.0,
        y_min: -10.0,
        y_max: 0.0,
        err_max: 0.0,
    };

    /// Creates a domain without an error bound.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            err_max: 0.0,
        }
    }

    /// Width of the x extent.
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the y extent.
    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Grows the y extent by `err_max` on both sides so error bars stay visible.
    pub fn with_error_bars(self) -> Self {
        Self {
            y_min: self.y_min - self.err_max,
            y_max: self.y_max + self.err_max,
            ..self
        }
    }

    /// Returns the domain as a rectangle (`x0 = x_min`, `y0 = y_min`).
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }

    /// Creates a domain from a data-space rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.x1, rect.y0, rect.y1)
    }
}
