// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series transforms for Starfold light curves.
//!
//! This crate provides:
//! - the phase transformer and x-axis projection ([`phase`], [`XAxis`], [`project`]),
//! - an order-preserving category grouper ([`Grouping`], [`group_points`]),
//! - LTTB decimation ([`downsample`]), and
//! - a small transform IR ([`Transform`]) with a full-recompute executor ([`Program`]).
//!
//! Every transform expects its input ascending in x and keeps it that way. None of them mutate
//! the source [`starfold_core::PointSeries`], so export paths can always read the full data.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod group;
mod lttb;
mod phase;
mod program;
mod transform;

pub use axis::{XAxis, project, reproject};
pub use group::{Group, Grouping, group_plot_points, group_points};
pub use lttb::{SeriesPoint, downsample, downsample_all, downsample_indices};
pub use phase::{PhaseConvention, PhaseFold, phase};
pub use program::{ExecutionError, Program, ProgramOutput};
pub use transform::Transform;
