//! Hazard functions.

use crate::error::{BocpdError, Result};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Prior probability that a change point occurs at step `t`.
///
/// Any `Fn(usize) -> f64` is a hazard, so ad-hoc hazards can be passed as
/// closures. Returned values must lie in `[0, 1]`; the detector rejects
/// anything else with [`BocpdError::InvalidConfiguration`].
pub trait Hazard {
    /// Probability of a change point at step `t`.
    fn hazard(&self, t: usize) -> f64;
}

impl<F> Hazard for F
where
    F: Fn(usize) -> f64,
{
    fn hazard(&self, t: usize) -> f64 {
        self(t)
    }
}

/// A constant hazard function.
/// This is the hazard function that corresponds to a geometric prior on
/// segment lengths with mean `1 / rate`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct ConstantHazard {
    rate: f64,
}

impl ConstantHazard {
    /// Create a constant hazard with probability `rate` at every step.
    ///
    /// # Errors
    /// `rate` must be a finite value in `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        if rate.is_finite() && (0.0..=1.0).contains(&rate) {
            Ok(Self { rate })
        } else {
            Err(BocpdError::InvalidConfiguration(format!(
                "hazard rate must be in [0, 1], got {rate}"
            )))
        }
    }

    /// Create a constant hazard without checking `rate`.
    #[must_use]
    pub const fn new_unchecked(rate: f64) -> Self {
        Self { rate }
    }

    /// Create a constant hazard from its timescale `lambda`, the expected
    /// segment length, so that `H = 1 / lambda`.
    ///
    /// # Errors
    /// `lambda` must be finite and at least 1.
    pub fn from_timescale(lambda: f64) -> Result<Self> {
        if lambda.is_finite() && lambda >= 1.0 {
            Ok(Self {
                rate: lambda.recip(),
            })
        } else {
            Err(BocpdError::InvalidConfiguration(format!(
                "hazard timescale must be at least 1, got {lambda}"
            )))
        }
    }

    /// The per-step change point probability.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Hazard for ConstantHazard {
    fn hazard(&self, _: usize) -> f64 {
        self.rate
    }
}

/// Logistic Hazard parameters
///
/// LH(t, h, a, b) = logistic(h) * logistic(a * t + b)
///
/// Always lies strictly within `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct LogisticHazard {
    /// Logit scaled factor for the whole curve (increasing increases hazard
    /// over the whole space).
    h: f64,
    /// Scale term (higher means a steeper logistic).
    a: f64,
    /// Translation term (increasing moves the logistic to the left).
    b: f64,
}

impl LogisticHazard {
    /// Create a new `LogisticHazard`
    #[must_use]
    pub fn new(h: f64, a: f64, b: f64) -> Self {
        Self { h, a, b }
    }
}

impl Hazard for LogisticHazard {
    fn hazard(&self, t: usize) -> f64 {
        logistic(self.h) * logistic(self.a.mul_add(t as f64, self.b))
    }
}

#[inline]
fn logistic(x: f64) -> f64 {
    (1.0 + (-x).exp()).recip()
}
