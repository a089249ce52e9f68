// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform IR types.

use starfold_core::{CategoryFilter, GroupingMode};

use crate::axis::XAxis;

/// A step applied to the working set of plot points.
///
/// The working set always stays sorted ascending by x: the initial set is the JD projection of
/// the series, and [`Transform::Project`] re-sorts when the new axis does not preserve order.
#[derive(Clone, Debug, PartialEq)]
pub enum Transform {
    /// Keep points whose current x lies in `[min, max]`.
    ///
    /// Typically fed from the visible range so decimation only spends its budget on what the
    /// user is looking at.
    Window {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Keep points whose category is enabled.
    Filter {
        /// Which category key to test.
        mode: GroupingMode,
        /// Enabled keys.
        enabled: CategoryFilter,
    },
    /// Recompute x from the source points.
    ///
    /// Points with a non-finite result are dropped.
    Project(XAxis),
    /// Decimate with LTTB to at most `threshold` points.
    Downsample {
        /// Maximum number of output points; `0` disables decimation.
        threshold: usize,
    },
}
