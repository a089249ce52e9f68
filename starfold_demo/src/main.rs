// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a synthetic two-catalog light curve to SVG.
//!
//! The output stacks three panels: the full time series, a box zoom into one season, and the
//! phase-folded curve colored by band. Pass an output path as the first argument; the default
//! is `starfold_demo.svg`. Logging is configured from `RUST_LOG`.

mod svg;

use anyhow::Context as _;
use flexi_logger::Logger;
use kurbo::{Point, Rect, Size, Vec2};
use peniko::color::palette::css;
use starfold_charts::{
    CameraProjection, CategoryColors, HeuristicTextMeasurer, LegendSpec, Palette, PlotController,
    PlotLayout, ScaleLinear, TextMeasurer, axis_domain,
};
use starfold_core::{CategoryFilter, GroupingMode, MJD_OFFSET, PhotPoint, PointSeries};
use starfold_transforms::{PhaseFold, Program, Transform, XAxis, group_plot_points, group_points};

use crate::svg::{Anchor, SvgDocument};

const PANEL: Size = Size::new(760.0, 300.0);
const EPOCH: f64 = 2_459_000.25;
const PERIOD: f64 = 2.718_3;
const MAX_POINTS: usize = 600;
const FONT_SIZE: f64 = 11.0;

#[derive(Clone, Copy, Debug)]
enum Coloring {
    Palette,
    Hash,
}

#[derive(Debug)]
struct Panel {
    title: &'static str,
    x_label: &'static str,
    axis: XAxis,
    mode: GroupingMode,
    coloring: Coloring,
    /// Pixel drag to replay after the initial fit.
    drag: Option<Rect>,
}

fn main() -> anyhow::Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("starfold_demo.svg"));

    let series = synthetic_series();
    log::info!("generated {} points", series.len());

    let mjd = XAxis::Offset(MJD_OFFSET);
    let panels = [
        Panel {
            title: "All catalogs",
            x_label: "MJD",
            axis: mjd,
            mode: GroupingMode::Catalog,
            coloring: Coloring::Palette,
            drag: None,
        },
        Panel {
            title: "Box zoom",
            x_label: "MJD",
            axis: mjd,
            mode: GroupingMode::Catalog,
            coloring: Coloring::Palette,
            drag: Some(Rect::new(300.0, 20.0, 360.0, 250.0)),
        },
        Panel {
            title: "Folded by band",
            x_label: "Phase",
            axis: XAxis::Phase(PhaseFold::new(EPOCH, PERIOD)),
            mode: GroupingMode::Band,
            coloring: Coloring::Hash,
            drag: None,
        },
    ];

    let mut doc = SvgDocument::new(Size::new(PANEL.width, PANEL.height * panels.len() as f64));
    for (i, panel) in panels.iter().enumerate() {
        doc.begin_group(Vec2::new(0.0, PANEL.height * i as f64));
        render_panel(&mut doc, &series, panel)
            .with_context(|| format!("rendering panel {:?}", panel.title))?;
        doc.end_group();
    }

    std::fs::write(&path, doc.finish()).with_context(|| format!("writing {path}"))?;
    log::info!("wrote {path}");
    Ok(())
}

fn render_panel(doc: &mut SvgDocument, series: &PointSeries, panel: &Panel) -> anyhow::Result<()> {
    let layout = PlotLayout::new(PANEL);
    let inner = layout.inner();

    let mut filter = CategoryFilter::new();
    filter.sync_keys(series.iter().map(|p| panel.mode.key(p)));

    let mut controller = PlotController::new(layout).with_error_bars(true);
    controller.update_domain(axis_domain(series, panel.mode, &filter, &panel.axis));
    if let Some(drag) = panel.drag
        && !controller.box_zoom(drag)
    {
        log::warn!("{}: drag {drag:?} did not zoom", panel.title);
    }
    let projection = controller
        .projection()
        .context("controller has no camera after fitting")?;
    let visible = projection.visible_data_rect();

    let program = Program::new()
        .with(Transform::Filter {
            mode: panel.mode,
            enabled: filter.clone(),
        })
        .with(Transform::Project(panel.axis))
        .with(Transform::Window {
            min: visible.x0,
            max: visible.x1,
        })
        .with(Transform::Downsample {
            threshold: MAX_POINTS,
        });
    let out = program.execute(series)?;
    log::info!(
        "{}: drawing {} points, visible x [{:.3}, {:.3}]",
        panel.title,
        out.points.len(),
        visible.x0,
        visible.x1
    );

    // Colors and legend follow every category in the series; only drawing sees the
    // filtered, decimated points.
    let categories = group_points(series.as_slice(), panel.mode);
    let keys = categories.sorted_keys();
    let colors = match panel.coloring {
        Coloring::Palette => Palette::default().assign(keys.iter().copied()),
        Coloring::Hash => CategoryColors::hashed(keys.iter().copied()),
    };
    let grouping = group_plot_points(&out.points, series, panel.mode);

    doc.rect(inner, css::WHITE, Some(css::DARK_GRAY));
    doc.text(
        Point::new(inner.x0, inner.y0 * 0.5),
        panel.title,
        FONT_SIZE,
        Anchor::Start,
    );
    draw_axes(doc, &projection, panel.x_label);

    for group in &grouping {
        let color = colors.color_or_neutral(&group.key);
        for p in &group.items {
            let pos = projection.project(p.position());
            if !inner.contains(pos) {
                continue;
            }
            if p.err > 0.0 {
                let top = projection.project(Point::new(p.x, p.y - p.err));
                let bottom = projection.project(Point::new(p.x, p.y + p.err));
                doc.line(
                    layout.clamp_point(top),
                    layout.clamp_point(bottom),
                    color.multiply_alpha(0.35),
                    0.8,
                );
            }
            doc.circle(pos, 1.8, color);
        }
    }

    let legend_spec = LegendSpec::from_grouping(&categories, &colors, &filter);
    let size = legend_spec.measure(&HeuristicTextMeasurer);
    let legend = legend_spec.layout(
        Point::new(inner.x1 - size.width - 10.0, inner.y0 + 10.0),
        &HeuristicTextMeasurer,
    );
    doc.rect(legend.bounds().inflate(4.0, 4.0), css::WHITE, Some(css::LIGHT_GRAY));
    for slot in legend.slots() {
        doc.rect(slot.swatch, slot.color, None);
        doc.text(slot.label_origin, &slot.label, FONT_SIZE, Anchor::Start);
    }
    Ok(())
}

fn draw_axes(doc: &mut SvgDocument, projection: &CameraProjection, x_label: &str) {
    let inner = projection.inner();
    let visible = projection.visible_data_rect();
    let tick = css::DIM_GRAY;

    let x = ScaleLinear::new((visible.x0, visible.x1), (inner.x0, inner.x1));
    let x_ticks = x.ticks(8);
    let x_step = tick_step(&x_ticks);
    for t in x_ticks {
        let px = x.map(t);
        doc.line(Point::new(px, inner.y1), Point::new(px, inner.y1 + 5.0), tick, 1.0);
        doc.text(
            Point::new(px, inner.y1 + 13.0),
            &tick_label(t, x_step),
            FONT_SIZE,
            Anchor::Middle,
        );
    }
    doc.text(
        Point::new(inner.center().x, inner.y1 + 28.0),
        x_label,
        FONT_SIZE,
        Anchor::Middle,
    );

    // Magnitudes grow downward, matching the camera.
    let y = ScaleLinear::new((visible.y0, visible.y1), (inner.y0, inner.y1));
    let y_ticks = y.ticks(5);
    let y_step = tick_step(&y_ticks);
    for t in y_ticks {
        let py = y.map(t);
        doc.line(Point::new(inner.x0 - 5.0, py), Point::new(inner.x0, py), tick, 1.0);
        doc.text(
            Point::new(inner.x0 - 8.0, py),
            &tick_label(t, y_step),
            FONT_SIZE,
            Anchor::End,
        );
    }
    let (label_w, _) = HeuristicTextMeasurer.measure("mag", FONT_SIZE);
    doc.text(
        Point::new(inner.x0 - 40.0 - label_w * 0.5, inner.y0),
        "mag",
        FONT_SIZE,
        Anchor::Middle,
    );
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn tick_label(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "step is in (0, 1), so the digit count is small and positive"
        )]
        {
            (-step.log10() - 1e-9).ceil() as usize
        }
    } else {
        0
    };
    format!("{value:.decimals$}")
}

/// Deterministic generator for demo noise.
#[derive(Debug)]
struct Lcg(u64);

impl Lcg {
    /// Uniform in `[0, 1)`.
    fn uniform(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    /// Uniform in `[-1, 1)`.
    fn signed(&mut self) -> f64 {
        2.0 * self.uniform() - 1.0
    }
}

/// A detached eclipsing binary: flat out of eclipse with a deep primary and shallow secondary.
fn light_curve(jd: f64) -> f64 {
    let cycles = (jd - EPOCH) / PERIOD;
    let phase = cycles - cycles.floor();
    13.2 + eclipse(phase, 0.0, 0.8) + eclipse(phase, 0.5, 0.3)
}

fn eclipse(phase: f64, center: f64, depth: f64) -> f64 {
    const HALF_WIDTH: f64 = 0.045;
    let d = (phase - center).abs();
    let d = d.min(1.0 - d);
    if d < HALF_WIDTH {
        depth * (1.0 - (d / HALF_WIDTH).powi(2))
    } else {
        0.0
    }
}

/// ZTF `g`/`r` pages at a dense cadence plus a sparser, noisier ASAS-SN `V` batch.
fn synthetic_series() -> PointSeries {
    let mut noise = Lcg(0x5747_4641_4c44);
    let mut series = PointSeries::new();

    let ztf: Vec<PhotPoint> = (0..1_800)
        .map(|i| {
            let jd = EPOCH + 0.37 * f64::from(i) + 0.05 * noise.uniform();
            let (band, offset) = if i % 2 == 0 { ("g", 0.0) } else { ("r", -0.35) };
            let mag = light_curve(jd) + offset + 0.02 * noise.signed();
            PhotPoint::new("ztf", jd, mag, 0.015 + 0.01 * noise.uniform()).with_band(band)
        })
        .collect();
    for page in ztf.chunks(250) {
        series.merge_batch(page.iter().cloned());
    }

    let asas: Vec<PhotPoint> = (0..500)
        .map(|i| {
            let jd = EPOCH + 20.0 + 1.3 * f64::from(i) + 0.2 * noise.uniform();
            let mag = light_curve(jd) + 0.1 + 0.06 * noise.signed();
            PhotPoint::new("asas-sn", jd, mag, 0.04 + 0.02 * noise.uniform()).with_band("V")
        })
        .collect();
    series.merge_batch(asas);
    series
}
