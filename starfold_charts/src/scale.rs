// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scale and "nice" tick generation for axis labels.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a data interval to a pixel interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a data value into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a range value back into data space.
    pub fn invert(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (v - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the data interval.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the pixel interval.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice-ish" tick values covering the domain.
    ///
    /// Ticks are multiples of 1, 2 or 5 times a power of ten, and only those inside the domain
    /// are returned.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut min, mut max) = self.domain;
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        nice_ticks(min, max, count)
            .into_iter()
            .filter(|t| *t >= min && *t <= max)
            .collect()
    }
}

fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn invert_undoes_map() {
        // Magnitudes grow downward on screen.
        let s = ScaleLinear::new((12.0, 14.0), (0.0, 200.0));
        assert_eq!(s.map(13.0), 100.0);
        assert_eq!(s.invert(s.map(13.5)), 13.5);
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let s = ScaleLinear::new((2_460_000.3, 2_460_009.7), (0.0, 500.0));
        let ticks = s.ticks(5);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| (2_460_000.3..=2_460_009.7).contains(t)));
        assert_eq!(ticks[0], 2_460_002.0);
    }

    #[test]
    fn degenerate_scale_maps_to_range_start() {
        let s = ScaleLinear::new((1.0, 1.0), (10.0, 20.0));
        assert_eq!(s.map(5.0), 10.0);
        assert_eq!(s.ticks(4), [1.0]);
    }
}
