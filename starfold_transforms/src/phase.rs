// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbital phase of a timestamp.
//!
//! The default convention keeps the decimal digits after the point of the quotient
//! `(t - epoch) / period`, exactly as existing phase plots were produced. For negative
//! quotients this differs from `x - floor(x)`: `-0.1` folds to `0.1`, not `0.9`. Callers that
//! want true wraparound opt into [`PhaseConvention::Wrapped`].

use core::fmt::{self, Write as _};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// How the fractional part of the cycle count is taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PhaseConvention {
    /// Digits after the decimal point of the quotient's decimal form (sign dropped).
    #[default]
    Legacy,
    /// `x - floor(x)`, always in `[0, 1)`.
    Wrapped,
}

impl PhaseConvention {
    /// Folds a cycle count into a phase.
    pub fn fraction(self, cycles: f64) -> f64 {
        match self {
            Self::Legacy => legacy_fraction(cycles),
            Self::Wrapped => wrapped_fraction(cycles),
        }
    }
}

/// Period and reference epoch of a phase fold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseFold {
    /// Reference epoch (phase zero), same time scale as the points.
    pub epoch: f64,
    /// Period in days. Must be non-zero; a zero period yields non-finite phases.
    pub period: f64,
    /// Fractional-part convention.
    pub convention: PhaseConvention,
}

impl PhaseFold {
    /// Creates a fold with the legacy convention.
    pub fn new(epoch: f64, period: f64) -> Self {
        Self {
            epoch,
            period,
            convention: PhaseConvention::Legacy,
        }
    }

    /// Sets the fractional-part convention.
    pub fn with_convention(mut self, convention: PhaseConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Returns the phase of `timestamp`.
    pub fn phase(&self, timestamp: f64) -> f64 {
        self.convention
            .fraction((timestamp - self.epoch) / self.period)
    }
}

/// Returns the legacy phase of `timestamp` for the given epoch and period.
///
/// A zero period propagates as a non-finite result; it never panics.
pub fn phase(timestamp: f64, epoch: f64, period: f64) -> f64 {
    PhaseFold::new(epoch, period).phase(timestamp)
}

/// Fits the `Display` form of any finite `f64`; the longest is the negated smallest subnormal.
const DECIMAL_CAPACITY: usize = 352;

/// Stack buffer for formatting one `f64`.
struct DecimalBuf {
    bytes: [u8; DECIMAL_CAPACITY],
    len: usize,
}

impl fmt::Write for DecimalBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let dst = self.bytes.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn legacy_fraction(cycles: f64) -> f64 {
    if !cycles.is_finite() {
        return cycles;
    }
    // Shortest round-trip decimal form, never exponent notation.
    let mut buf = DecimalBuf {
        bytes: [0; DECIMAL_CAPACITY],
        len: 0,
    };
    if write!(buf, "{cycles}").is_err() {
        return f64::NAN;
    }
    let text = &mut buf.bytes[..buf.len];
    let Some(dot) = text.iter().position(|&b| b == b'.') else {
        return 0.0;
    };
    // At least one digit precedes the point; overwrite the last one to read "0.<digits>".
    text[dot - 1] = b'0';
    core::str::from_utf8(&text[dot - 1..])
        .ok()
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(f64::NAN)
}

fn wrapped_fraction(cycles: f64) -> f64 {
    let f = cycles - cycles.floor();
    // Tiny negative inputs round up to exactly 1.0.
    if f >= 1.0 { 0.0 } else { f }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn legacy_phase_drops_sign_of_negative_cycles() {
        // (99 - 100) / 10 = -0.1; legacy keeps the digits "1" -> 0.1 rather than wrapping to 0.9.
        assert_eq!(phase(99.0, 100.0, 10.0), 0.1);
    }

    #[test]
    fn legacy_phase_of_positive_cycles_is_fractional_part() {
        assert_eq!(phase(112.5, 100.0, 10.0), 0.25);
        assert_eq!(phase(130.0, 100.0, 10.0), 0.0);
    }

    #[test]
    fn legacy_fraction_handles_extreme_magnitudes() {
        let legacy = PhaseConvention::Legacy;
        assert_eq!(legacy.fraction(-12.345), 0.345);
        assert_eq!(legacy.fraction(1e300), 0.0);
        assert_eq!(legacy.fraction(-f64::MAX), 0.0);
        assert_eq!(legacy.fraction(-5e-324), 5e-324);
        assert_eq!(legacy.fraction(123_456_789.125), 0.125);
        assert!(legacy.fraction(f64::NAN).is_nan());
    }

    #[test]
    fn wrapped_phase_is_true_modulo() {
        let fold = PhaseFold::new(100.0, 10.0).with_convention(PhaseConvention::Wrapped);
        assert!((fold.phase(99.0) - 0.9).abs() < 1e-12);
        assert_eq!(fold.phase(112.5), 0.25);
        let tiny = PhaseConvention::Wrapped.fraction(-1e-18);
        assert!((0.0..1.0).contains(&tiny));
    }

    #[test]
    fn zero_period_is_non_finite() {
        assert!(!phase(101.0, 100.0, 0.0).is_finite());
        assert!(phase(100.0, 100.0, 0.0).is_nan());
        let fold = PhaseFold::new(100.0, 0.0).with_convention(PhaseConvention::Wrapped);
        assert!(!fold.phase(101.0).is_finite());
    }
}
