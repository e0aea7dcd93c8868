//! Errors raised while configuring or running the detector.

use thiserror::Error;

/// Result type alias for detector operations.
pub type Result<T> = std::result::Result<T, BocpdError>;

/// Errors that can occur while building or running [`Bocpd`](crate::Bocpd).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BocpdError {
    /// A hyperparameter or hazard value is out of its valid domain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Too few observations to perform a single update step.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData {
        /// Minimum number of observations required.
        needed: usize,
        /// Number of observations supplied.
        got: usize,
    },

    /// The run-length column at `step` could not be renormalised.
    #[error("numerical degeneracy at step {step}: run-length mass sums to {sum}")]
    NumericalDegeneracy {
        /// Column index at which the degeneracy occurred.
        step: usize,
        /// Unnormalised column sum (zero or non-finite). NaN when the first
        /// observation is not finite.
        sum: f64,
    },
}
