// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for legend layout.
//!
//! Shaping stays with the renderer, so layout takes a measurer callback for rough label bounds.

/// A minimal text measurement interface used by the legend.
///
/// Callers can plug in a real shaping backend, or use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` in pixels.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Assumes an average glyph width of 0.6em and a line height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

impl<F: Fn(&str, f64) -> (f64, f64)> TextMeasurer for F {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        self(text, font_size)
    }
}
