// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use starfold_core::{CategoryFilter, Domain, GroupingMode, PhotPoint, PointSeries, ZoomKind};
use starfold_transforms::{
    PhaseFold, Program, Transform, XAxis, downsample_all, group_plot_points, group_points, phase,
};

use crate::{
    CameraProjection, HeuristicTextMeasurer, LegendSpec, Padding, Palette, PlotController,
    PlotLayout, axis_domain, fit_view, hash_color,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Two catalogs arriving in separate pages, interleaved in time.
fn paged_series() -> PointSeries {
    let mut series = PointSeries::new();
    for (catalog, offset) in [("ztf", 0.0), ("asas-sn", 0.5)] {
        let page: Vec<PhotPoint> = (0..200)
            .map(|i| {
                let jd = 2_460_000.0 + f64::from(i) + offset;
                let mag = 12.0 + f64::from(i % 10) * 0.1;
                PhotPoint::new(catalog, jd, mag, 0.02)
            })
            .collect();
        series.merge_batch(page);
    }
    series
}

#[test]
fn program_output_groups_into_a_partition() {
    let series = paged_series();
    let program = Program::new()
        .with(Transform::Project(XAxis::Phase(PhaseFold::new(
            2_460_000.0,
            7.25,
        ))))
        .with(Transform::Downsample { threshold: 120 });
    let out = program.execute(&series).unwrap();
    assert_eq!(out.points.len(), 120);

    let grouping = group_plot_points(&out.points, &series, GroupingMode::Catalog);
    assert_eq!(grouping.item_count(), out.points.len());

    let mut rows: Vec<usize> = grouping
        .iter()
        .flat_map(|g| g.items.iter().map(|p| p.row))
        .collect();
    let mut expected: Vec<usize> = out.points.iter().map(|p| p.row).collect();
    rows.sort_unstable();
    expected.sort_unstable();
    assert_eq!(rows, expected);

    for group in &grouping {
        assert!(group.items.windows(2).all(|w| w[0].x <= w[1].x));
        assert!(
            group
                .items
                .iter()
                .all(|p| series.get(p.row).unwrap().catalog == group.key)
        );
    }
}

#[test]
fn lttb_bounds_and_no_op() {
    let series = paged_series();
    let points = series.as_slice();
    for threshold in [2, 3, 50, points.len() - 1] {
        let out = downsample_all(points, threshold);
        assert_eq!(out.len(), threshold);
        assert_eq!(out[0], points[0]);
        assert_eq!(out[threshold - 1], points[points.len() - 1]);
        assert!(out.windows(2).all(|w| w[0].jd <= w[1].jd));
    }
    assert_eq!(downsample_all(points, points.len()), points);
    assert_eq!(downsample_all(points, points.len() + 10), points);
}

#[test]
fn domain_survives_disabling_its_only_category() {
    let points = vec![
        PhotPoint::new("A", 1.0, 5.0, 0.0),
        PhotPoint::new("A", 2.0, 7.0, 0.0),
    ];
    let mut filter = CategoryFilter::new();
    filter.sync_keys(["A"]);

    let mut controller = PlotController::new(PlotLayout::new(Size::new(400.0, 300.0)));
    let d = controller.update_domain(axis_domain(
        &points,
        GroupingMode::Catalog,
        &filter,
        &XAxis::Jd,
    ));
    assert_eq!(d, Domain::new(1.0, 2.0, 5.0, 7.0));

    filter.toggle("A");
    let d = controller.update_domain(axis_domain(
        &points,
        GroupingMode::Catalog,
        &filter,
        &XAxis::Jd,
    ));
    assert_eq!(d, Domain::new(1.0, 2.0, 5.0, 7.0));
}

#[test]
fn colors_are_deterministic() {
    let keys = ["ztf", "asas-sn", "gaia"];
    let palette = Palette::default();
    assert_eq!(palette.assign(keys), palette.assign(keys));
    assert_eq!(palette.assign(keys).get("gaia"), Some(palette.color(2)));
    for key in keys {
        assert_eq!(hash_color(key), hash_color(&String::from(key)));
    }
}

#[test]
fn fit_view_margin() {
    let cam = fit_view(500.0, 100.0, 0.0, 100.0, 0.0, 10.0);
    assert!(close(cam.zoom.x.exp2(), 4.75));
    assert!(close(cam.zoom.y.exp2(), 9.5));
}

#[test]
fn tiny_drag_leaves_camera_unchanged() {
    let mut controller = PlotController::new(PlotLayout::new(Size::new(500.0, 300.0)));
    controller.update_domain(Some(Domain::new(0.0, 100.0, 0.0, 10.0)));
    let camera = controller.camera();
    let revision = controller.view().revision();

    assert!(!controller.box_zoom(Rect::new(200.0, 100.0, 202.0, 102.0)));
    assert_eq!(controller.camera(), camera);
    assert_eq!(controller.view().revision(), revision);
    assert_eq!(controller.view().last_zoom().unwrap().kind, ZoomKind::AutoFit);
}

#[test]
fn legacy_phase() {
    assert_eq!(phase(99.0, 100.0, 10.0), 0.1);
}

#[test]
fn box_zoom_round_trips_a_data_box() {
    let layout = PlotLayout::new(Size::new(640.0, 360.0)).with_padding(Padding {
        left: 60.0,
        top: 10.0,
        right: 20.0,
        bottom: 40.0,
    });
    let mut controller = PlotController::new(layout);
    controller.update_domain(Some(Domain::new(2_460_000.0, 2_460_100.0, 11.0, 14.0)));

    let data = Rect::new(2_460_020.0, 11.5, 2_460_045.0, 12.75);
    let proj = controller.projection().unwrap();
    let pixels = Rect::from_points(
        proj.project(Point::new(data.x0, data.y0)),
        proj.project(Point::new(data.x1, data.y1)),
    );
    assert!(controller.box_zoom(pixels));

    let zoomed = controller.view().last_zoom().unwrap().rect;
    assert!(close(zoomed.x0, data.x0) && close(zoomed.x1, data.x1));
    assert!(close(zoomed.y0, data.y0) && close(zoomed.y1, data.y1));

    // The new camera shows the box with the fit margin around it.
    let visible = CameraProjection::new(controller.camera().unwrap(), layout.inner())
        .visible_data_rect();
    assert!(close(visible.width() * 0.95, data.width()));
    assert!(close(visible.center().x, data.center().x));
}

#[test]
fn index_range_matches_linear_scan() {
    let series = paged_series();
    for (min, max) in [
        (2_460_010.0, 2_460_020.0),
        (2_460_010.25, 2_460_010.75),
        (0.0, 1.0),
        (2_460_150.5, 2_470_000.0),
        (2_460_030.0, 2_460_020.0),
    ] {
        let expected: Vec<usize> = (0..series.len())
            .filter(|&i| {
                let jd = series.get(i).unwrap().jd;
                min <= jd && jd <= max
            })
            .collect();
        let range = series.index_range(min, max);
        assert_eq!(range.collect::<Vec<_>>(), expected, "[{min}, {max}]");
    }
}

#[test]
fn new_categories_appear_and_hidden_ones_stay_hidden() {
    let mut filter = CategoryFilter::new();
    assert_eq!(filter.sync_keys(["ztf", "asas-sn"]), 2);
    filter.disable("ztf");
    assert_eq!(filter.sync_keys(["ztf", "asas-sn", "gaia"]), 1);
    assert!(!filter.is_enabled("ztf"));
    assert!(filter.is_enabled("asas-sn"));
    assert!(filter.is_enabled("gaia"));
}

#[test]
fn filtered_window_feeds_drawing_but_not_legend() {
    let series = paged_series();
    let mut filter = CategoryFilter::new();
    filter.sync_keys(series.iter().map(|p| p.catalog.as_str()));

    let categories = group_points(series.as_slice(), GroupingMode::Catalog);
    let palette = Palette::default();
    let before = palette.assign(categories.sorted_keys());
    filter.disable("asas-sn");
    let colors = palette.assign(categories.sorted_keys());
    assert_eq!(colors.get("ztf"), before.get("ztf"));

    let program = Program::new()
        .with(Transform::Filter {
            mode: GroupingMode::Catalog,
            enabled: filter.clone(),
        })
        .with(Transform::Window {
            min: 2_460_050.0,
            max: 2_460_149.0,
        })
        .with(Transform::Downsample { threshold: 40 });
    let out = program.execute(&series).unwrap();
    assert_eq!(out.points.len(), 40);

    let drawn = group_plot_points(&out.points, &series, GroupingMode::Catalog);
    assert_eq!(drawn.keys().collect::<Vec<_>>(), ["ztf"]);

    let legend = LegendSpec::from_grouping(&categories, &colors, &filter)
        .layout(Point::new(8.0, 8.0), &HeuristicTextMeasurer);
    let slots = legend.slots();
    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].key.as_str(), slots[0].enabled), ("asas-sn", false));
    assert_eq!((slots[1].key.as_str(), slots[1].enabled), ("ztf", true));
    assert_eq!(slots[1].label, "ztf (200)");
    assert_eq!(Some(slots[1].color), colors.get("ztf"));

    let domain = axis_domain(&series, GroupingMode::Catalog, &filter, &XAxis::Jd).unwrap();
    assert_eq!((domain.x_min, domain.x_max), (2_460_000.0, 2_460_199.0));
}

#[test]
fn state_types_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PointSeries>();
    assert_send_sync::<CategoryFilter>();
    assert_send_sync::<starfold_core::ViewState>();
    assert_send_sync::<Program>();
    assert_send_sync::<PlotController>();
    assert_send_sync::<crate::CategoryColors>();
    assert_send_sync::<crate::Legend>();
}
