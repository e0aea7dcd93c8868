//! Bayesian Online Change Point Detection (BOCPD) over a batch of scalar
//! observations with a conjugate Normal-Gamma model.
//!
//! [`Bocpd::infer`] returns the full run-length posterior for every step
//! together with the maximum a posteriori run lengths; the helpers in
//! [`utils`] turn those into change point locations.
//!
//! ```rust
//! use bocpd::BocpdConfig;
//!
//! let cpd = BocpdConfig::default().with_hazard_rate(0.01).build().unwrap();
//! let data = [0.1, -0.2, 0.0, 0.3, 9.8, 10.1, 10.3, 9.9];
//! let inference = cpd.infer(&data).unwrap();
//! assert_eq!(inference.run_length_posterior().dim(), (9, 8));
//! ```
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

mod bocpd;
pub use bocpd::*;

mod error;
pub use error::{BocpdError, Result};

mod hazard;
pub use hazard::*;

mod params;
pub use params::NormalGammaParams;

pub mod predictive;
pub use predictive::StudentT;

pub mod generators;

pub mod utils;

pub use rv;
