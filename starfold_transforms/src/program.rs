// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-recompute executor for transform programs.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;
use starfold_core::{PlotPoint, PointSeries};

use crate::axis::{self, XAxis};
use crate::lttb;
use crate::transform::Transform;

/// Errors returned by [`Program::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// A [`Transform::Window`] has non-finite or inverted bounds.
    InvalidWindow {
        /// Index of the offending transform.
        step: usize,
    },
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindow { step } => {
                write!(f, "transform {step}: window bounds must be finite and ordered")
            }
        }
    }
}

impl core::error::Error for ExecutionError {}

/// The result of running a [`Program`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgramOutput {
    /// Plot points, ascending in x.
    pub points: Vec<PlotPoint>,
    /// Points dropped because a projection made them non-finite.
    pub dropped_non_finite: usize,
}

/// An ordered list of transforms run against a [`PointSeries`].
///
/// Execution starts from the JD projection of every point and applies each transform in order.
/// Nothing is cached; callers memoize on their inputs if they need to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    transforms: SmallVec<[Transform; 4]>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform.
    pub fn push(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    /// Appends a transform, builder style.
    pub fn with(mut self, transform: Transform) -> Self {
        self.push(transform);
        self
    }

    /// Returns the transforms in execution order.
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Runs the program.
    pub fn execute(&self, series: &PointSeries) -> Result<ProgramOutput, ExecutionError> {
        let mut points = axis::project(series, &XAxis::Jd);
        let mut dropped = series.len() - points.len();

        for (step, transform) in self.transforms.iter().enumerate() {
            match transform {
                Transform::Window { min, max } => {
                    let (min, max) = (*min, *max);
                    if !min.is_finite() || !max.is_finite() || min > max {
                        return Err(ExecutionError::InvalidWindow { step });
                    }
                    let start = points.partition_point(|p| p.x < min);
                    let end = points.partition_point(|p| p.x <= max);
                    points.truncate(end);
                    points.drain(..start.min(end));
                }
                Transform::Filter { mode, enabled } => {
                    points.retain(|p| {
                        series
                            .get(p.row)
                            .is_some_and(|src| enabled.is_enabled(mode.key(src)))
                    });
                }
                Transform::Project(x_axis) => {
                    let before = points.len();
                    points = axis::reproject(series, points, x_axis);
                    dropped += before - points.len();
                }
                Transform::Downsample { threshold } => {
                    points = lttb::downsample_all(&points, *threshold);
                }
            }
        }

        if dropped > 0 {
            log::debug!("dropped {dropped} points with non-finite coordinates");
        }
        Ok(ProgramOutput {
            points,
            dropped_non_finite: dropped,
        })
    }
}
