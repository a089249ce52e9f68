// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View controller for one plot surface.

use kurbo::Rect;
use starfold_core::{Camera, Domain, ViewState, VisibleRange, ZoomKind, ZoomTarget};

use crate::box_zoom::BoxZoom;
use crate::camera::{CameraProjection, FitSpec};
use crate::domain::DomainTracker;
use crate::layout::PlotLayout;

/// Ties domain tracking, camera fitting and box zoom to a [`ViewState`].
///
/// Explicit actions (auto-fit, box zoom, reset, external zoom) replace the stored camera and
/// record a [`ZoomTarget`]. Pan and scroll stay with the renderer, which reports its camera
/// back through [`PlotController::on_relayout`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlotController {
    layout: PlotLayout,
    fit: FitSpec,
    box_zoom: BoxZoom,
    domains: DomainTracker,
    view: ViewState,
    live: Option<Camera>,
    error_bars: bool,
}

impl PlotController {
    /// Creates a controller with no camera yet.
    pub fn new(layout: PlotLayout) -> Self {
        Self {
            layout,
            fit: FitSpec::default(),
            box_zoom: BoxZoom::default(),
            domains: DomainTracker::new(),
            view: ViewState::new(),
            live: None,
            error_bars: false,
        }
    }

    /// Sets the fit parameters.
    pub fn with_fit(mut self, fit: FitSpec) -> Self {
        self.fit = fit;
        self
    }

    /// Sets the box-zoom parameters.
    pub fn with_box_zoom(mut self, box_zoom: BoxZoom) -> Self {
        self.box_zoom = box_zoom;
        self
    }

    /// Whether fits widen the magnitude range by the largest uncertainty.
    pub fn with_error_bars(mut self, error_bars: bool) -> Self {
        self.error_bars = error_bars;
        self
    }

    /// The current layout.
    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    /// The view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The domain the plot is framed on.
    pub fn domain(&self) -> Domain {
        self.domains.current()
    }

    /// The camera the renderer should use: the last reported one, else the stored one.
    pub fn camera(&self) -> Option<Camera> {
        self.live.or(self.view.camera())
    }

    /// [`PlotController::camera`] bound to the current inner rectangle.
    pub fn projection(&self) -> Option<CameraProjection> {
        self.camera()
            .map(|camera| CameraProjection::new(camera, self.layout.inner()))
    }

    /// Records a freshly computed domain and returns the one to frame.
    ///
    /// The first non-empty domain triggers an auto-fit. Later domains are only recorded, so
    /// toggling categories does not yank the view around. While the inner rectangle has no
    /// area the fit waits for [`PlotController::set_layout`].
    pub fn update_domain(&mut self, computed: Option<Domain>) -> Domain {
        let domain = self.domains.resolve(computed);
        if computed.is_some() && !self.view.is_initialized() {
            self.apply(self.frame(domain), ZoomKind::AutoFit);
        }
        domain
    }

    /// Replaces the layout.
    ///
    /// When the inner size changes the last zoom target is fitted again, keeping its kind. If
    /// the auto-fit was deferred by an empty inner rectangle, it happens here. Returns `true`
    /// if the camera changed.
    pub fn set_layout(&mut self, layout: PlotLayout) -> bool {
        let resized = layout.inner_size() != self.layout.inner_size();
        self.layout = layout;
        if !resized {
            return false;
        }
        let (rect, kind) = match (self.view.last_zoom(), self.domains.last()) {
            (Some(target), _) => (target.rect, target.kind),
            (None, Some(domain)) => (self.frame(domain), ZoomKind::AutoFit),
            (None, None) => return false,
        };
        log::debug!(
            "inner size now {}x{}, refitting",
            layout.inner_size().width,
            layout.inner_size().height
        );
        self.apply(rect, kind)
    }

    /// Zooms to the data box under a pixel drag.
    ///
    /// Returns `false`, leaving everything untouched, when there is no camera yet or the drag
    /// is too small.
    pub fn box_zoom(&mut self, drag: Rect) -> bool {
        let Some(camera) = self.camera() else {
            return false;
        };
        match self.box_zoom.resolve(camera, &self.layout, drag) {
            Some(rect) => self.apply(rect, ZoomKind::BoxZoom),
            None => false,
        }
    }

    /// Fits the current domain.
    ///
    /// Returns `false`, leaving everything untouched, while the inner rectangle has no area.
    pub fn reset(&mut self) -> bool {
        let rect = self.frame(self.domains.current());
        self.apply(rect, ZoomKind::Reset)
    }

    /// Fits an arbitrary data box, e.g. one requested by another panel.
    ///
    /// Returns `false`, leaving everything untouched, while the inner rectangle has no area.
    pub fn zoom_to(&mut self, rect: Rect) -> bool {
        self.apply(rect.abs(), ZoomKind::External)
    }

    /// Records the camera the renderer ended up with after a pan, scroll or resize.
    ///
    /// The stored camera is kept; only the visible x range is updated. Returns `true` if the
    /// visible range changed. Cameras with non-finite components, and any camera while the
    /// inner rectangle has no area, are ignored.
    pub fn on_relayout(&mut self, camera: Camera) -> bool {
        if !self.layout.has_area() || !camera_is_finite(camera) {
            return false;
        }
        self.live = Some(camera);
        self.sync_visible_range(camera)
    }

    fn frame(&self, domain: Domain) -> Rect {
        if self.error_bars {
            domain.with_error_bars().to_rect()
        } else {
            domain.to_rect()
        }
    }

    fn apply(&mut self, rect: Rect, kind: ZoomKind) -> bool {
        if !self.layout.has_area() {
            log::debug!("inner rectangle has no area, deferring {kind:?} fit");
            return false;
        }
        let camera = self.fit.fit(self.layout.inner_size(), rect);
        if !camera_is_finite(camera) {
            log::warn!("non-finite fit for {rect:?}, keeping the current camera");
            return false;
        }
        self.live = None;
        self.view.apply_zoom(camera, ZoomTarget { rect, kind });
        self.sync_visible_range(camera);
        true
    }

    fn sync_visible_range(&mut self, camera: Camera) -> bool {
        let visible = CameraProjection::new(camera, self.layout.inner()).visible_data_rect();
        self.view
            .set_visible_range(VisibleRange::new(visible.x0, visible.x1))
    }
}

fn camera_is_finite(camera: Camera) -> bool {
    camera.target.is_finite() && camera.zoom.is_finite()
}
