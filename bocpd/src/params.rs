//! Normal-Gamma posterior parameters for a single run-length hypothesis.

use crate::error::{BocpdError, Result};
use crate::predictive::StudentT;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Normal-Gamma posterior over the unknown mean and precision of the
/// current segment.
///
/// `kappa` and `alpha` only ever grow under [`observe`](Self::observe), so a
/// record built from positive values stays valid for the whole run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct NormalGammaParams {
    /// Posterior mean of the segment mean.
    pub mu: f64,
    /// Precision scale (pseudo-observation count) of the mean.
    pub kappa: f64,
    /// Gamma shape of the precision.
    pub alpha: f64,
    /// Gamma rate of the precision.
    pub beta: f64,
}

impl Default for NormalGammaParams {
    fn default() -> Self {
        Self::new_unchecked(0.0, 1.0, 1.0, 1.0)
    }
}

impl NormalGammaParams {
    /// Create a new set of parameters.
    ///
    /// # Errors
    /// `mu` must be finite; `kappa`, `alpha` and `beta` must be finite and
    /// strictly positive.
    pub fn new(mu: f64, kappa: f64, alpha: f64, beta: f64) -> Result<Self> {
        if !mu.is_finite() {
            return Err(invalid("mu0", mu));
        }
        for (name, value) in [("kappa0", kappa), ("alpha0", alpha), ("beta0", beta)]
        {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(name, value));
            }
        }
        Ok(Self::new_unchecked(mu, kappa, alpha, beta))
    }

    /// Create a new set of parameters without checking them.
    #[must_use]
    pub fn new_unchecked(mu: f64, kappa: f64, alpha: f64, beta: f64) -> Self {
        Self {
            mu,
            kappa,
            alpha,
            beta,
        }
    }

    /// Posterior after observing `x`.
    #[must_use]
    pub fn observe(&self, x: f64) -> Self {
        let kappa = self.kappa + 1.0;
        let dx = x - self.mu;
        Self {
            mu: self.kappa.mul_add(self.mu, x) / kappa,
            kappa,
            alpha: self.alpha + 0.5,
            beta: self.beta + self.kappa * dx * dx / (2.0 * kappa),
        }
    }

    /// Student-t posterior predictive for the next observation.
    #[must_use]
    pub fn predictive(&self) -> StudentT {
        StudentT::new(
            self.mu,
            self.beta * (self.kappa + 1.0) / (self.alpha * self.kappa),
            2.0 * self.alpha,
        )
    }
}

fn invalid(name: &str, value: f64) -> BocpdError {
    let requirement = if name == "mu0" {
        "be finite"
    } else {
        "be finite and positive"
    };
    BocpdError::InvalidConfiguration(format!(
        "{name} must {requirement}, got {value}"
    ))
}
