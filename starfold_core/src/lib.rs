// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data model and view state for Starfold light-curve plots.
//!
//! This crate holds the values every other Starfold crate passes around:
//! - **Points**: immutable photometric samples ([`PhotPoint`]) merged into an
//!   ascending [`PointSeries`], and their projected plot form ([`PlotPoint`]).
//! - **Categories**: the [`GroupingMode`] key functions and the [`CategoryFilter`] of enabled keys.
//! - **View state**: the [`Domain`], [`Camera`], [`VisibleRange`] and [`ViewState`] values
//!   that a host UI exchanges with the rendering surface.
//!
//! Nothing here performs I/O or rendering. All state types are plain values that are replaced
//! wholesale rather than mutated piecemeal.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod category;
mod domain;
mod point;
mod series;
mod view;

pub use category::{CategoryFilter, GroupingMode, UNKNOWN_BAND};
pub use domain::Domain;
pub use point::{PhotPoint, PlotPoint};
pub use series::{PointSeries, SeriesError};
pub use view::{Camera, MJD_OFFSET, ViewState, VisibleRange, ZoomKind, ZoomTarget};
