// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot math for Starfold light curves.
//!
//! This crate sits between the data model in `starfold_core` and a rendering surface:
//! - **Domains**: bounds of the enabled categories, with a sticky fallback ([`DomainTracker`]).
//! - **Colors**: deterministic category colors ([`Palette`], [`hash_color`]).
//! - **Camera**: fit-to-box ([`FitSpec`]), projection ([`CameraProjection`]) and rectangular
//!   brush zoom ([`BoxZoom`]).
//! - **Guides**: a category [`LegendSpec`] and a tick-producing [`ScaleLinear`].
//!
//! [`PlotController`] combines these for one plot surface. Drawing, text shaping and input
//! handling are left to the host.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod box_zoom;
mod camera;
mod color;
mod controller;
mod domain;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod legend;
mod measure;
#[cfg(test)]
mod pipeline_tests;
mod scale;

pub use box_zoom::{BoxZoom, unproject_box};
pub use camera::{CameraProjection, FitSpec, fit_view};
pub use color::{CategoryColors, NEUTRAL, Palette, fnv1a_32, hash_color};
pub use controller::PlotController;
pub use domain::{DomainTracker, axis_domain, compute_domain};
pub use layout::{Padding, PlotLayout};
pub use legend::{Legend, LegendEntry, LegendSlot, LegendSpec};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use scale::ScaleLinear;
