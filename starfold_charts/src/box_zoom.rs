// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular brush zoom.

use kurbo::Rect;
use starfold_core::Camera;

use crate::camera::CameraProjection;
use crate::layout::PlotLayout;

/// Converts a pixel drag rectangle into the data box to zoom to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxZoom {
    /// Minimum width and height, in pixels, of a drag that counts as a zoom.
    pub min_drag_px: f64,
}

impl Default for BoxZoom {
    fn default() -> Self {
        Self { min_drag_px: 4.0 }
    }
}

impl BoxZoom {
    /// Creates the default brush (4 px minimum).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum drag size.
    pub fn with_min_drag_px(mut self, min_drag_px: f64) -> Self {
        self.min_drag_px = min_drag_px;
        self
    }

    /// Returns the data box selected by `drag`, or `None` for click-sized drags.
    ///
    /// The drag is clamped to the layout's inner rectangle before its size is checked.
    pub fn resolve(&self, camera: Camera, layout: &PlotLayout, drag: Rect) -> Option<Rect> {
        let clamped = layout.clamp_rect(drag);
        if clamped.width() < self.min_drag_px || clamped.height() < self.min_drag_px {
            log::debug!(
                "ignoring {:.1}x{:.1} px drag",
                clamped.width(),
                clamped.height()
            );
            return None;
        }
        Some(unproject_box(camera, layout.inner(), clamped))
    }
}

/// Maps a pixel rectangle to data space through the inverse of `camera`.
///
/// Each corner is unprojected on its own and the result takes per-axis min/max, so the
/// returned rectangle is normalized whichever way the drag went.
pub fn unproject_box(camera: Camera, inner: Rect, pixels: Rect) -> Rect {
    CameraProjection::new(camera, inner).unproject_rect(pixels)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Point, Size, Vec2};

    use super::*;
    use crate::layout::Padding;

    fn layout() -> PlotLayout {
        PlotLayout::new(Size::new(520.0, 220.0)).with_padding(Padding::uniform(10.0))
    }

    #[test]
    fn click_sized_drags_are_rejected() {
        let cam = Camera::new(Point::new(0.0, 0.0), Vec2::ZERO);
        let zoom = BoxZoom::new();
        assert_eq!(zoom.resolve(cam, &layout(), Rect::new(100.0, 100.0, 102.0, 102.0)), None);
        assert_eq!(zoom.resolve(cam, &layout(), Rect::new(100.0, 100.0, 300.0, 103.9)), None);
        // Large in pixels but almost entirely outside the plot.
        assert_eq!(zoom.resolve(cam, &layout(), Rect::new(508.0, 50.0, 900.0, 150.0)), None);
    }

    #[test]
    fn reversed_drag_gives_normalized_box() {
        let inner = layout().inner();
        let cam = Camera::new(Point::new(50.0, 5.0), Vec2::new(2.0, 3.0));
        let a = unproject_box(cam, inner, Rect::new(300.0, 150.0, 100.0, 50.0));
        let b = unproject_box(cam, inner, Rect::new(100.0, 50.0, 300.0, 150.0));
        assert_eq!(a, b);
        assert!(a.x0 < a.x1 && a.y0 < a.y1);
        assert_eq!(a.width(), 200.0 / 4.0);
        assert_eq!(a.height(), 100.0 / 8.0);
    }

    #[test]
    fn accepted_drag_is_clamped_to_inner_rect() {
        let layout = layout();
        let cam = Camera::new(Point::new(0.0, 0.0), Vec2::ZERO);
        let rect = BoxZoom::new()
            .resolve(cam, &layout, Rect::new(-100.0, -100.0, 60.0, 60.0))
            .unwrap();
        let inner = layout.inner();
        let proj = CameraProjection::new(cam, inner);
        assert_eq!(rect.origin(), proj.unproject(inner.origin()));
    }
}
