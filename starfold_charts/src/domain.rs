// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain computation over the enabled categories.

use starfold_core::{CategoryFilter, Domain, GroupingMode, PhotPoint};
use starfold_transforms::XAxis;

/// Computes the bounds of the points whose category is enabled.
///
/// `key` names each point's category and `x` gives its x value. Points with a non-finite x or
/// magnitude are skipped; a non-finite uncertainty only leaves `err_max` alone. Returns `None`
/// when no point counts.
pub fn compute_domain<'a, I, K, X>(
    points: I,
    key: K,
    enabled: &CategoryFilter,
    x: X,
) -> Option<Domain>
where
    I: IntoIterator<Item = &'a PhotPoint>,
    K: Fn(&PhotPoint) -> &str,
    X: Fn(&PhotPoint) -> f64,
{
    let mut out: Option<Domain> = None;
    for p in points {
        if !enabled.is_enabled(key(p)) {
            continue;
        }
        let px = x(p);
        if !px.is_finite() || !p.mag.is_finite() {
            continue;
        }
        let err = if p.mag_err.is_finite() {
            p.mag_err.abs()
        } else {
            0.0
        };
        out = Some(match out {
            None => Domain {
                err_max: err,
                ..Domain::new(px, px, p.mag, p.mag)
            },
            Some(d) => Domain {
                x_min: d.x_min.min(px),
                x_max: d.x_max.max(px),
                y_min: d.y_min.min(p.mag),
                y_max: d.y_max.max(p.mag),
                err_max: d.err_max.max(err),
            },
        });
    }
    out
}

/// [`compute_domain`] keyed by `mode` with x taken from `axis`.
pub fn axis_domain<'a>(
    points: impl IntoIterator<Item = &'a PhotPoint>,
    mode: GroupingMode,
    enabled: &CategoryFilter,
    axis: &XAxis,
) -> Option<Domain> {
    compute_domain(points, |p| mode.key(p), enabled, |p| axis.value(p))
}

/// Remembers the last non-empty domain.
///
/// Disabling every category, or waiting on the first data batch, keeps the plot framed on
/// what was last shown instead of collapsing it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DomainTracker {
    last: Option<Domain>,
}

impl DomainTracker {
    /// Creates a tracker with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `computed` if present (and remembers it), else the last non-empty domain, else
    /// [`Domain::FALLBACK`].
    pub fn resolve(&mut self, computed: Option<Domain>) -> Domain {
        match computed {
            Some(d) => {
                self.last = Some(d);
                d
            }
            None => {
                if self.last.is_none() {
                    log::debug!("no enabled points yet, using the fallback domain");
                }
                self.current()
            }
        }
    }

    /// The last non-empty domain seen.
    pub fn last(&self) -> Option<Domain> {
        self.last
    }

    /// What [`DomainTracker::resolve`] would return for an empty computation.
    pub fn current(&self) -> Domain {
        self.last.unwrap_or(Domain::FALLBACK)
    }

    /// Forgets the history.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
