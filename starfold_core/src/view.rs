// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera, visible range and the view state shared with the rendering surface.

use kurbo::{Point, Rect, Vec2};

/// Offset between Julian Date and Modified Julian Date (`MJD = JD - MJD_OFFSET`).
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// Orthographic camera over the data plane.
///
/// `zoom` holds independent per-axis log2 scale factors: one data unit on x spans
/// `2^zoom.x` pixels. The two axes carry unrelated units (time and magnitude), so they never
/// share a scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Data-space point shown at the center of the plot's inner rectangle.
    pub target: Point,
    /// Per-axis log2 pixels-per-data-unit.
    pub zoom: Vec2,
}

impl Camera {
    /// Creates a camera.
    pub fn new(target: Point, zoom: Vec2) -> Self {
        Self { target, zoom }
    }
}

/// The x interval the user is currently looking at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRange {
    /// Left edge of the visible x interval.
    pub current_min: f64,
    /// Right edge of the visible x interval.
    pub current_max: f64,
}

impl VisibleRange {
    /// Creates a range, swapping the bounds if needed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self {
                current_min: a,
                current_max: b,
            }
        } else {
            Self {
                current_min: b,
                current_max: a,
            }
        }
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.current_max - self.current_min
    }

    /// Returns `true` if `x` is inside the range (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.current_min <= x && x <= self.current_max
    }

    /// Converts a Julian Date range into Modified Julian Date.
    pub fn to_mjd(self) -> Self {
        Self {
            current_min: self.current_min - MJD_OFFSET,
            current_max: self.current_max - MJD_OFFSET,
        }
    }
}

/// What triggered an explicit camera replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomKind {
    /// First fit after data became available, or a re-fit after a resize.
    AutoFit,
    /// Rectangular brush zoom.
    BoxZoom,
    /// User-requested reset to the full domain.
    Reset,
    /// "Zoom to coordinates" request from another panel.
    External,
}

/// The data-space box of the last explicit zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTarget {
    /// Data-space rectangle that was fitted into the plot.
    pub rect: Rect,
    /// Trigger of the zoom.
    pub kind: ZoomKind,
}

/// Camera, visible range and last explicit zoom for one plot surface.
///
/// Every change replaces a whole value and bumps [`ViewState::revision`], so observers can
/// detect updates cheaply. Pan and scroll are handled by the renderer's own camera controller;
/// they only reach this state through [`ViewState::set_visible_range`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    camera: Option<Camera>,
    visible: Option<VisibleRange>,
    last_zoom: Option<ZoomTarget>,
    revision: u64,
}

impl ViewState {
    /// Creates an empty state with no camera yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last explicitly set camera, if any.
    pub fn camera(&self) -> Option<Camera> {
        self.camera
    }

    /// The visible range last reported by the renderer.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.visible
    }

    /// The last explicit zoom target.
    pub fn last_zoom(&self) -> Option<ZoomTarget> {
        self.last_zoom
    }

    /// Monotonic change counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` once a camera has been set.
    pub fn is_initialized(&self) -> bool {
        self.camera.is_some()
    }

    /// Replaces the camera for an explicit zoom action.
    pub fn apply_zoom(&mut self, camera: Camera, target: ZoomTarget) {
        log::debug!(
            "{:?} zoom to x=[{}, {}] y=[{}, {}]",
            target.kind,
            target.rect.x0,
            target.rect.x1,
            target.rect.y0,
            target.rect.y1
        );
        self.camera = Some(camera);
        self.last_zoom = Some(target);
        self.bump();
    }

    /// Records the x interval reported by a viewport interaction.
    ///
    /// Leaves the camera untouched. Returns `false` if the range did not change.
    pub fn set_visible_range(&mut self, range: VisibleRange) -> bool {
        if self.visible == Some(range) {
            return false;
        }
        self.visible = Some(range);
        self.bump();
        true
    }

    /// Forgets the camera, visible range and zoom history.
    pub fn clear(&mut self) {
        self.camera = None;
        self.visible = None;
        self.last_zoom = None;
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn visible_range_orders_bounds_and_converts_to_mjd() {
        let r = VisibleRange::new(2_460_001.5, 2_460_000.5);
        assert_eq!(r.current_min, 2_460_000.5);
        let mjd = r.to_mjd();
        assert_eq!(mjd.current_min, 60_000.0);
        assert_eq!(mjd.current_max, 60_001.0);
    }

    #[test]
    fn zoom_replaces_camera_and_bumps_revision() {
        let mut s = ViewState::new();
        assert!(!s.is_initialized());

        let cam = Camera::new(Point::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let target = ZoomTarget {
            rect: Rect::new(0.0, 0.0, 2.0, 4.0),
            kind: ZoomKind::BoxZoom,
        };
        s.apply_zoom(cam, target);

        assert_eq!(s.camera(), Some(cam));
        assert_eq!(s.last_zoom(), Some(target));
        assert_eq!(s.revision(), 1);
    }

    #[test]
    fn unchanged_visible_range_does_not_bump() {
        let mut s = ViewState::new();
        assert!(s.set_visible_range(VisibleRange::new(0.0, 1.0)));
        let rev = s.revision();
        assert!(!s.set_visible_range(VisibleRange::new(0.0, 1.0)));
        assert_eq!(s.revision(), rev);
        assert_eq!(s.camera(), None);
    }
}
