// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot surface geometry: the outer size and the padded inner rectangle.
//!
//! All pixel coordinates are relative to the top-left corner of the plot surface, with y
//! growing downward.

use kurbo::{Point, Rect, Size};

/// Per-side padding between the surface edge and the inner plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    /// Left inset in pixels.
    pub left: f64,
    /// Top inset in pixels.
    pub top: f64,
    /// Right inset in pixels.
    pub right: f64,
    /// Bottom inset in pixels.
    pub bottom: f64,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The same inset on every side.
    pub const fn uniform(inset: f64) -> Self {
        Self {
            left: inset,
            top: inset,
            right: inset,
            bottom: inset,
        }
    }
}

impl Default for Padding {
    /// Room for y tick labels on the left and x tick labels at the bottom.
    fn default() -> Self {
        Self {
            left: 56.0,
            top: 12.0,
            right: 16.0,
            bottom: 36.0,
        }
    }
}

/// Size and padding of one plot surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    /// Outer size of the surface.
    pub size: Size,
    /// Insets of the inner rectangle.
    pub padding: Padding,
}

impl PlotLayout {
    /// Creates a layout with the default padding.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Padding::default(),
        }
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// The rectangle points are drawn into.
    ///
    /// Collapses to a zero-size rectangle when the padding exceeds the surface.
    pub fn inner(&self) -> Rect {
        let x0 = self.padding.left;
        let y0 = self.padding.top;
        let x1 = (self.size.width - self.padding.right).max(x0);
        let y1 = (self.size.height - self.padding.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }

    /// Size of [`PlotLayout::inner`].
    pub fn inner_size(&self) -> Size {
        self.inner().size()
    }

    /// Whether the inner rectangle has a positive width and height.
    pub fn has_area(&self) -> bool {
        let size = self.inner_size();
        size.width > 0.0 && size.height > 0.0
    }

    /// Clamps a surface position into the inner rectangle.
    pub fn clamp_point(&self, p: Point) -> Point {
        let inner = self.inner();
        Point::new(p.x.clamp(inner.x0, inner.x1), p.y.clamp(inner.y0, inner.y1))
    }

    /// Normalizes `rect` and clamps both of its corners into the inner rectangle.
    ///
    /// A rectangle entirely outside the inner one collapses onto its edge.
    pub fn clamp_rect(&self, rect: Rect) -> Rect {
        let rect = rect.abs();
        Rect::from_points(
            self.clamp_point(Point::new(rect.x0, rect.y0)),
            self.clamp_point(Point::new(rect.x1, rect.y1)),
        )
    }
}
