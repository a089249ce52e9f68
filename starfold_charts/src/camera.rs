// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera projection and fit-to-box.
//!
//! A [`Camera`] maps data space into the plot's inner rectangle with independent per-axis
//! scales. The pixel position of a data point `d` is
//!
//! ```text
//! center(inner) + (d - target) * 2^zoom
//! ```
//!
//! with pixel y growing downward, so larger magnitudes (fainter sources) end up lower.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use starfold_core::Camera;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A camera bound to an inner plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraProjection {
    camera: Camera,
    inner: Rect,
    transform: Affine,
}

impl CameraProjection {
    /// Builds the data-to-pixel transform for `camera` drawn into `inner`.
    pub fn new(camera: Camera, inner: Rect) -> Self {
        let transform = Affine::translate(inner.center().to_vec2())
            * Affine::scale_non_uniform(camera.zoom.x.exp2(), camera.zoom.y.exp2())
            * Affine::translate(-camera.target.to_vec2());
        Self {
            camera,
            inner,
            transform,
        }
    }

    /// The camera.
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The inner rectangle.
    pub fn inner(&self) -> Rect {
        self.inner
    }

    /// The data-to-pixel transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Pixels per data unit on x.
    pub fn x_scale(&self) -> f64 {
        self.camera.zoom.x.exp2()
    }

    /// Pixels per data unit on y.
    pub fn y_scale(&self) -> f64 {
        self.camera.zoom.y.exp2()
    }

    /// Maps a data point to pixels.
    pub fn project(&self, data: Point) -> Point {
        self.transform * data
    }

    /// Maps a pixel position back to data space.
    pub fn unproject(&self, pixel: Point) -> Point {
        self.transform.inverse() * pixel
    }

    /// The data-space rectangle currently covered by the inner rectangle.
    pub fn visible_data_rect(&self) -> Rect {
        self.unproject_rect(self.inner)
    }

    /// Unprojects both corners of `pixels` independently and returns their data-space bounds.
    pub fn unproject_rect(&self, pixels: Rect) -> Rect {
        let inverse = self.transform.inverse();
        Rect::from_points(
            inverse * Point::new(pixels.x0, pixels.y0),
            inverse * Point::new(pixels.x1, pixels.y1),
        )
    }
}

/// Parameters for fitting a data box into a pixel box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitSpec {
    /// Fraction of the inner size the fitted box occupies.
    pub margin: f64,
    /// Smallest data span used as a divisor, so zero-width boxes still fit.
    pub epsilon: f64,
}

impl Default for FitSpec {
    fn default() -> Self {
        Self {
            margin: 0.95,
            epsilon: 1e-9,
        }
    }
}

impl FitSpec {
    /// Creates the default fit (95% margin).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the margin fraction.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the minimum data span.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns a camera centered on `data` that scales it to `margin` of `inner`.
    pub fn fit(&self, inner: Size, data: Rect) -> Camera {
        let data = data.abs();
        let span_x = data.width().max(self.epsilon);
        let span_y = data.height().max(self.epsilon);
        let zoom = Vec2::new(
            (self.margin * inner.width / span_x).log2(),
            (self.margin * inner.height / span_y).log2(),
        );
        Camera::new(data.center(), zoom)
    }
}

/// Fits `[x_min, x_max] x [y_min, y_max]` into an inner rectangle of the given size with the
/// default [`FitSpec`].
pub fn fit_view(
    inner_width: f64,
    inner_height: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) -> Camera {
    FitSpec::default().fit(
        Size::new(inner_width, inner_height),
        Rect::new(x_min, y_min, x_max, y_max),
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn fit_leaves_five_percent_margin() {
        let cam = fit_view(500.0, 100.0, 0.0, 100.0, 0.0, 10.0);
        assert_eq!(cam.target, Point::new(50.0, 5.0));
        assert!(close(cam.zoom.x.exp2(), 4.75));
        assert!(close(cam.zoom.y.exp2(), 9.5));
    }

    #[test]
    fn fit_survives_zero_span() {
        let cam = FitSpec::new().fit(Size::new(200.0, 100.0), Rect::new(3.0, 12.0, 3.0, 12.0));
        assert!(cam.zoom.x.is_finite());
        assert!(cam.zoom.y.is_finite());
        assert_eq!(cam.target, Point::new(3.0, 12.0));
    }

    #[test]
    fn projection_centers_target_and_puts_faint_points_lower() {
        let inner = Rect::new(10.0, 20.0, 510.0, 120.0);
        let cam = FitSpec::new()
            .with_margin(1.0)
            .fit(inner.size(), Rect::new(0.0, 10.0, 100.0, 14.0));
        let proj = CameraProjection::new(cam, inner);

        let center = proj.project(cam.target);
        assert!(close(center.x, inner.center().x));
        assert!(close(center.y, inner.center().y));

        let bright = proj.project(Point::new(50.0, 10.0));
        let faint = proj.project(Point::new(50.0, 14.0));
        assert!(close(bright.y, inner.y0));
        assert!(close(faint.y, inner.y1));
    }

    #[test]
    fn unproject_inverts_project() {
        let inner = Rect::new(0.0, 0.0, 400.0, 300.0);
        let cam = Camera::new(Point::new(2_460_000.0, 13.0), Vec2::new(3.5, 6.0));
        let proj = CameraProjection::new(cam, inner);
        let p = Point::new(2_460_010.25, 12.5);
        let back = proj.unproject(proj.project(p));
        assert!(close(back.x, p.x));
        assert!(close(back.y, p.y));

        let visible = proj.visible_data_rect();
        assert!(close(visible.width(), 400.0 / proj.x_scale()));
        assert!(close(visible.center().y, 13.0));
    }
}
