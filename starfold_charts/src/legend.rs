// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category legend layout and hit-testing.
//!
//! A legend is a column list of color swatches with labels, one row per category. Clicking a
//! row toggles its category in the [`CategoryFilter`]; disabled rows keep their slot and are
//! drawn dimmed.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use starfold_core::CategoryFilter;
use starfold_transforms::Grouping;

use crate::color::CategoryColors;
use crate::measure::TextMeasurer;

/// Alpha multiplier for disabled entries.
const DISABLED_ALPHA: f32 = 0.3;

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Category key.
    pub key: String,
    /// Swatch color.
    pub color: Color,
    /// Number of points counted for the category in the grouping the entry was built from.
    pub count: usize,
    /// Whether the category is currently shown.
    pub enabled: bool,
}

impl LegendEntry {
    /// Creates an enabled entry.
    pub fn new(key: impl Into<String>, color: Color, count: usize) -> Self {
        Self {
            key: key.into(),
            color,
            count,
            enabled: true,
        }
    }

    /// The text shown next to the swatch.
    pub fn label(&self) -> String {
        format!("{} ({})", self.key, self.count)
    }

    /// The swatch color, dimmed when the entry is disabled.
    pub fn display_color(&self) -> Color {
        if self.enabled {
            self.color
        } else {
            self.color.multiply_alpha(DISABLED_ALPHA)
        }
    }
}

/// An unpositioned legend.
///
/// Use [`LegendSpec::measure`] to reserve space, then [`LegendSpec::layout`] once the origin is
/// known.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSpec {
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns.
    ///
    /// Entries are laid out top-to-bottom, then left-to-right into columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Entries in display order.
    pub entries: Vec<LegendEntry>,
}

impl LegendSpec {
    /// Creates a legend with default styling.
    pub fn new(entries: Vec<LegendEntry>) -> Self {
        Self {
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            columns: 1,
            column_gap: 12.0,
            font_size: 11.0,
            entries,
        }
    }

    /// Builds one entry per group, in sorted key order.
    ///
    /// Pass the grouping of the whole series so disabled categories keep their entry and counts
    /// are not affected by filtering or decimation.
    pub fn from_grouping<T>(
        grouping: &Grouping<T>,
        colors: &CategoryColors,
        filter: &CategoryFilter,
    ) -> Self {
        let entries = grouping
            .sorted_keys()
            .into_iter()
            .map(|key| {
                let count = grouping.get(key).map_or(0, |g| g.items.len());
                LegendEntry {
                    enabled: filter.is_enabled(key),
                    ..LegendEntry::new(key, colors.color_or_neutral(key), count)
                }
            })
            .collect();
        Self::new(entries)
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the gap between columns.
    pub fn with_column_gap(mut self, column_gap: f64) -> Self {
        self.column_gap = column_gap.max(0.0);
        self
    }

    /// Measures the legend's desired size.
    pub fn measure(&self, measurer: &impl TextMeasurer) -> Size {
        self.layout(Point::ZERO, measurer).bounds().size()
    }

    /// Positions every entry with its top-left corner at `origin`.
    pub fn layout(&self, origin: Point, measurer: &impl TextMeasurer) -> Legend {
        let columns = self.columns.max(1);
        let rows_per_col = self.entries.len().div_ceil(columns).max(1);
        let row_height = self.swatch_size.max(self.font_size);

        let labels: Vec<(String, f64)> = self
            .entries
            .iter()
            .map(|e| {
                let label = e.label();
                let (w, _) = measurer.measure(&label, self.font_size);
                (label, w)
            })
            .collect();

        // Columns are as wide as their widest label.
        let mut col_widths = alloc::vec![0.0_f64; self.entries.len().div_ceil(rows_per_col)];
        for (i, (_, w)) in labels.iter().enumerate() {
            let col = i / rows_per_col;
            let width = self.swatch_size + self.label_dx + w;
            col_widths[col] = col_widths[col].max(width);
        }

        let mut slots = Vec::with_capacity(self.entries.len());
        let mut col_x = origin.x;
        for (i, (entry, (label, label_w))) in self.entries.iter().zip(labels).enumerate() {
            let col = i / rows_per_col;
            let row = i % rows_per_col;
            if row == 0 && col > 0 {
                col_x += col_widths[col - 1] + self.column_gap;
            }
            let y = origin.y + row as f64 * (row_height + self.row_gap);
            let swatch_y = y + (row_height - self.swatch_size) * 0.5;
            let swatch = Rect::new(
                col_x,
                swatch_y,
                col_x + self.swatch_size,
                swatch_y + self.swatch_size,
            );
            let label_x = swatch.x1 + self.label_dx;
            slots.push(LegendSlot {
                key: entry.key.clone(),
                color: entry.display_color(),
                enabled: entry.enabled,
                label,
                swatch,
                label_origin: Point::new(label_x, y + row_height * 0.5),
                bounds: Rect::new(col_x, y, label_x + label_w, y + row_height),
            });
        }

        Legend { origin, slots }
    }
}

/// A positioned legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSlot {
    /// Category key.
    pub key: String,
    /// Color to paint the swatch with.
    pub color: Color,
    /// Whether the category is shown.
    pub enabled: bool,
    /// Label text.
    pub label: String,
    /// Swatch rectangle.
    pub swatch: Rect,
    /// Label anchor: left edge, vertical middle.
    pub label_origin: Point,
    /// Clickable area of the row.
    pub bounds: Rect,
}

/// A positioned legend.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    origin: Point,
    slots: Vec<LegendSlot>,
}

impl Legend {
    /// The rows, in display order.
    pub fn slots(&self) -> &[LegendSlot] {
        &self.slots
    }

    /// Union of every row, or an empty rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        self.slots
            .iter()
            .map(|s| s.bounds)
            .reduce(|a, b| a.union(b))
            .unwrap_or_else(|| Rect::from_origin_size(self.origin, Size::ZERO))
    }

    /// The key of the row under `pos`.
    pub fn hit_test(&self, pos: Point) -> Option<&str> {
        self.slots
            .iter()
            .find(|s| s.bounds.contains(pos))
            .map(|s| s.key.as_str())
    }

    /// Toggles the category under `pos` in `filter`.
    ///
    /// Returns the toggled key and whether it is now enabled.
    pub fn toggle_at<'a>(
        &'a self,
        pos: Point,
        filter: &mut CategoryFilter,
    ) -> Option<(&'a str, bool)> {
        let key = self.hit_test(pos)?;
        Some((key, filter.toggle(key)))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;
    use starfold_core::{GroupingMode, PhotPoint};
    use starfold_transforms::group_points;

    use super::*;
    use crate::color::Palette;
    use crate::measure::HeuristicTextMeasurer;

    fn entries() -> Vec<LegendEntry> {
        vec![
            LegendEntry::new("A", css::BLACK, 1),
            LegendEntry::new("BBBB", css::BLACK, 20),
            LegendEntry::new("CC", css::BLACK, 3),
            LegendEntry::new("DDDDDD", css::BLACK, 400),
        ]
    }

    #[test]
    fn measure_accounts_for_columns() {
        let measurer = HeuristicTextMeasurer;
        let s1 = LegendSpec::new(entries()).with_columns(1).measure(&measurer);
        let s2 = LegendSpec::new(entries()).with_columns(2).measure(&measurer);
        assert!(s2.width > s1.width);
        assert!(s2.height < s1.height);
    }

    #[test]
    fn bounds_match_measure_at_origin() {
        let measurer = HeuristicTextMeasurer;
        let spec = LegendSpec::new(entries()).with_columns(2);
        let desired = spec.measure(&measurer);
        let b = spec.layout(Point::new(10.0, 20.0), &measurer).bounds();
        assert_eq!((b.x0, b.y0), (10.0, 20.0));
        assert!((b.width() - desired.width).abs() < 1e-6);
        assert!((b.height() - desired.height).abs() < 1e-6);
    }

    #[test]
    fn click_toggles_the_row_under_the_cursor() {
        let spec = LegendSpec::new(entries());
        let legend = spec.layout(Point::new(0.0, 0.0), &HeuristicTextMeasurer);
        let mut filter = CategoryFilter::with_enabled(["A", "BBBB", "CC", "DDDDDD"]);

        let second = legend.slots()[1].swatch.center();
        assert_eq!(legend.toggle_at(second, &mut filter), Some(("BBBB", false)));
        assert!(!filter.is_enabled("BBBB"));
        assert_eq!(legend.hit_test(Point::new(-5.0, -5.0)), None);
    }

    #[test]
    fn disabled_entries_keep_their_slot() {
        let points = vec![
            PhotPoint::new("ztf", 1.0, 10.0, 0.1),
            PhotPoint::new("asas", 2.0, 10.0, 0.1),
            PhotPoint::new("ztf", 3.0, 10.0, 0.1),
        ];
        let grouping = group_points(&points, GroupingMode::Catalog);
        let colors = Palette::default().assign(grouping.sorted_keys());
        let filter = CategoryFilter::with_enabled(["asas"]);

        let spec = LegendSpec::from_grouping(&grouping, &colors, &filter);
        let keys: Vec<&str> = spec.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["asas", "ztf"]);
        assert_eq!(spec.entries[1].count, 2);
        assert_eq!(spec.entries[1].label(), "ztf (2)");

        let legend = spec.layout(Point::ZERO, &HeuristicTextMeasurer);
        assert_eq!(legend.slots().len(), 2);
        assert!(!legend.slots()[1].enabled);
        assert_ne!(legend.slots()[1].color, colors.color_or_neutral("ztf"));
    }

    #[test]
    fn closures_measure_text() {
        let fixed = |_: &str, size: f64| (50.0, size);
        let size = LegendSpec::new(entries()).measure(&fixed);
        assert_eq!(size.width, 10.0 + 6.0 + 50.0);
    }
}
