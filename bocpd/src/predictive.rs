//! Student-t posterior predictive densities.

use std::f64::consts::PI;

use rv::prelude::{Rv, StudentsT as RvStudentsT};
use special::Gamma;

use crate::error::{BocpdError, Result};
use crate::params::NormalGammaParams;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Location/scale Student-t distribution.
///
/// `var` is the squared scale, not the variance of the distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct StudentT {
    mu: f64,
    var: f64,
    nu: f64,
}

impl StudentT {
    /// Create a new `StudentT` distribution
    #[must_use]
    pub fn new(mu: f64, var: f64, nu: f64) -> Self {
        Self { mu, var, nu }
    }

    /// Location
    #[must_use]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Squared scale
    #[must_use]
    pub fn var(&self) -> f64 {
        self.var
    }

    /// Degrees of freedom
    #[must_use]
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Log density at `x`.
    ///
    /// The normalising constant is computed from log-gamma terms so large
    /// degrees of freedom do not overflow.
    #[must_use]
    pub fn ln_pdf(&self, x: f64) -> f64 {
        let half_nu = self.nu / 2.0;
        let ln_c = Gamma::ln_gamma(half_nu + 0.5).0
            - Gamma::ln_gamma(half_nu).0
            - 0.5 * (self.nu * PI * self.var).ln();
        let dx = x - self.mu;
        ln_c - (half_nu + 0.5) * (dx * dx / (self.nu * self.var)).ln_1p()
    }

    /// Density at `x`.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }
}

impl Rv<f64> for StudentT {
    fn ln_f(&self, x: &f64) -> f64 {
        self.ln_pdf(*x)
    }

    fn draw<R: rand::Rng>(&self, rng: &mut R) -> f64 {
        let s: f64 = RvStudentsT::new_unchecked(self.nu).draw(rng);
        s.mul_add(self.var.sqrt(), self.mu)
    }
}

/// Student-t densities of `x`, elementwise over parallel parameter slices.
///
/// # Errors
/// The three slices must have the same length.
pub fn student_t_pdf(
    x: f64,
    mu: &[f64],
    var: &[f64],
    nu: &[f64],
) -> Result<Vec<f64>> {
    if mu.len() != var.len() || mu.len() != nu.len() {
        return Err(BocpdError::InvalidConfiguration(format!(
            "parameter lengths differ: mu={}, var={}, nu={}",
            mu.len(),
            var.len(),
            nu.len()
        )));
    }
    Ok(mu
        .iter()
        .zip(var)
        .zip(nu)
        .map(|((&m, &v), &n)| StudentT::new(m, v, n).pdf(x))
        .collect())
}

/// Predictive density of `x` under each run-length hypothesis.
#[must_use]
pub fn predictive_densities(x: f64, params: &[NormalGammaParams]) -> Vec<f64> {
    params.iter().map(|p| p.predictive().pdf(x)).collect()
}
