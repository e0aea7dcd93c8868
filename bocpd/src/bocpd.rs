//! Batch Bayesian Online Change Point Detection
//!
//! This code is derived from
//! "Bayesian Online Changepoint Detection"; Ryan Adams, David `MacKay`; arXiv:0710.3742
//! Which can be found [here](https://arxiv.org/pdf/0710.3742.pdf).
//!
//! Column `j` of the run-length matrix is the posterior after observation
//! `j`. The first observation marks the initial change point, so column 0
//! is the boundary condition `R[0, 0] = 1`; every later observation is
//! weighed against the hypotheses accumulated so far. The first observation
//! is never weighed and never enters any segment's sufficient statistics;
//! it only has to be finite.

use log::{debug, trace, warn};
use ndarray::Array2;
use rayon::prelude::*;

use crate::error::{BocpdError, Result};
use crate::hazard::{ConstantHazard, Hazard};
use crate::params::NormalGammaParams;
use crate::predictive::predictive_densities;
use crate::utils::{map_changepoints, map_indices};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Default per-step change point probability.
pub const DEFAULT_HAZARD_RATE: f64 = 0.0005;

/// Minimum number of observations `infer` accepts.
pub const MIN_OBSERVATIONS: usize = 2;

/// Hyperparameters of a detector with a constant hazard.
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BocpdConfig {
    /// Per-step change point probability.
    pub hazard_rate: f64,
    /// Prior mean.
    pub mu0: f64,
    /// Prior precision scale.
    pub kappa0: f64,
    /// Prior Gamma shape.
    pub alpha0: f64,
    /// Prior Gamma rate.
    pub beta0: f64,
}

impl Default for BocpdConfig {
    fn default() -> Self {
        Self {
            hazard_rate: DEFAULT_HAZARD_RATE,
            mu0: 0.0,
            kappa0: 1.0,
            alpha0: 1.0,
            beta0: 1.0,
        }
    }
}

impl BocpdConfig {
    /// Replace the hazard rate.
    #[must_use]
    pub fn with_hazard_rate(self, hazard_rate: f64) -> Self {
        Self {
            hazard_rate,
            ..self
        }
    }

    /// Replace the Normal-Gamma prior.
    #[must_use]
    pub fn with_prior(self, mu0: f64, kappa0: f64, alpha0: f64, beta0: f64) -> Self {
        Self {
            mu0,
            kappa0,
            alpha0,
            beta0,
            ..self
        }
    }

    /// Check every hyperparameter.
    ///
    /// # Errors
    /// Returns [`BocpdError::InvalidConfiguration`] naming the first
    /// offending value.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Build the detector.
    ///
    /// # Errors
    /// Returns [`BocpdError::InvalidConfiguration`] if any hyperparameter is
    /// out of its domain.
    pub fn build(&self) -> Result<Bocpd<ConstantHazard>> {
        let hazard = ConstantHazard::new(self.hazard_rate)?;
        let prior =
            NormalGammaParams::new(self.mu0, self.kappa0, self.alpha0, self.beta0)?;
        Bocpd::new(hazard, prior)
    }
}

/// Batch run-length inference with a Normal-Gamma observation model.
///
/// The detector holds only its hyperparameters; every call to
/// [`infer`](Self::infer) starts from scratch.
#[derive(Clone, Debug, PartialEq)]
pub struct Bocpd<H = ConstantHazard> {
    hazard: H,
    prior: NormalGammaParams,
}

impl Default for Bocpd<ConstantHazard> {
    fn default() -> Self {
        Self {
            hazard: ConstantHazard::new_unchecked(DEFAULT_HAZARD_RATE),
            prior: NormalGammaParams::default(),
        }
    }
}

impl<H: Hazard> Bocpd<H> {
    /// Create a new detector
    ///
    /// # Parameters
    /// * `hazard` - Prior probability of a change point at each step.
    /// * `prior` - Normal-Gamma prior every new segment starts from.
    ///
    /// # Example
    /// ```rust
    /// use bocpd::{Bocpd, ConstantHazard, NormalGammaParams};
    ///
    /// let cpd = Bocpd::new(
    ///     ConstantHazard::from_timescale(250.0).unwrap(),
    ///     NormalGammaParams::new(0.0, 1.0, 1.0, 1.0).unwrap(),
    /// ).unwrap();
    /// let inference = cpd.infer(&[0.1, -0.3, 0.2, 8.1, 7.9]).unwrap();
    /// assert_eq!(inference.len(), 5);
    /// ```
    ///
    /// # Errors
    /// The prior must have a finite mean and finite positive `kappa`,
    /// `alpha` and `beta`; the hazard must return a probability.
    pub fn new(hazard: H, prior: NormalGammaParams) -> Result<Self> {
        let prior =
            NormalGammaParams::new(prior.mu, prior.kappa, prior.alpha, prior.beta)?;
        check_hazard(hazard.hazard(1), 1)?;
        Ok(Self { hazard, prior })
    }

    /// The hazard function.
    #[must_use]
    pub fn hazard(&self) -> &H {
        &self.hazard
    }

    /// The prior each new run-length hypothesis starts from.
    #[must_use]
    pub fn prior(&self) -> &NormalGammaParams {
        &self.prior
    }

    /// Compute the run-length posterior for every observation in `data`.
    ///
    /// # Errors
    /// * [`BocpdError::InsufficientData`] with fewer than two observations.
    /// * [`BocpdError::InvalidConfiguration`] if the hazard leaves `[0, 1]`.
    /// * [`BocpdError::NumericalDegeneracy`] if a column cannot be
    ///   renormalised, or if the first observation is not finite (reported
    ///   at step 0 with a NaN sum).
    pub fn infer(&self, data: &[f64]) -> Result<Inference> {
        let n = data.len();
        if n < MIN_OBSERVATIONS {
            return Err(BocpdError::InsufficientData {
                needed: MIN_OBSERVATIONS,
                got: n,
            });
        }
        debug!(
            "Running BOCPD over {n} observations, hazard {:e} at step 1 and {:e} at step {}",
            self.hazard.hazard(1),
            self.hazard.hazard(n - 1),
            n - 1
        );

        let mut run_lengths = Array2::<f64>::zeros((n + 1, n));
        let mut map_run_lengths = Vec::with_capacity(n);
        let mut filter = RunLengthFilter::new(&self.hazard, self.prior, n);

        for (t, x) in data.iter().enumerate() {
            let r = if t == 0 {
                filter.boundary(*x)?
            } else {
                filter.step(t, *x)?
            };
            for (i, p) in r.iter().enumerate() {
                run_lengths[[i, t]] = *p;
            }
            map_run_lengths.push(map_indices(r));
        }

        debug!(
            "Finished BOCPD; final MAP run length(s): {:?}",
            map_run_lengths.last()
        );

        Ok(Inference {
            run_lengths,
            map_run_lengths,
        })
    }
}

impl<H: Hazard + Sync> Bocpd<H> {
    /// Run [`infer`](Self::infer) over several independent series in parallel.
    #[must_use]
    pub fn infer_many(&self, series: &[Vec<f64>]) -> Vec<Result<Inference>> {
        series.par_iter().map(|data| self.infer(data)).collect()
    }
}

fn check_hazard(h: f64, t: usize) -> Result<f64> {
    if (0.0..=1.0).contains(&h) {
        Ok(h)
    } else {
        warn!("Hazard function returned {h} at step {t}");
        Err(BocpdError::InvalidConfiguration(format!(
            "hazard at step {t} must be in [0, 1], got {h}"
        )))
    }
}

/// Run-length state for a single pass over a batch.
///
/// `params[i]` is the posterior for run length `i`; both buffers are
/// allocated for the whole batch up front and only their active length
/// grows.
struct RunLengthFilter<'a, H> {
    hazard: &'a H,
    prior: NormalGammaParams,
    params: Vec<NormalGammaParams>,
    /// Run-length probabilities of the latest step.
    r: Vec<f64>,
}

impl<'a, H: Hazard> RunLengthFilter<'a, H> {
    fn new(hazard: &'a H, prior: NormalGammaParams, capacity: usize) -> Self {
        Self {
            hazard,
            prior,
            params: Vec::with_capacity(capacity),
            r: Vec::with_capacity(capacity),
        }
    }

    /// The initial point is, by definition, a change point.
    ///
    /// `x` is not weighed, but a non-finite value is still rejected.
    fn boundary(&mut self, x: f64) -> Result<&[f64]> {
        if !x.is_finite() {
            warn!("Non-finite first observation {x}");
            return Err(BocpdError::NumericalDegeneracy {
                step: 0,
                sum: f64::NAN,
            });
        }
        self.params.clear();
        self.params.push(self.prior);
        self.r.clear();
        self.r.push(1.0);
        Ok(self.r.as_slice())
    }

    /// Weigh observation `x` at step `t` and return the new run-length
    /// distribution.
    fn step(&mut self, t: usize, x: f64) -> Result<&[f64]> {
        let h = check_hazard(self.hazard.hazard(t), t)?;
        let predprobs = predictive_densities(x, &self.params);

        // Shift the mass down one run length, scaled by the predictive
        // probabilities, and accumulate the change point mass at r = 0.
        let n = self.r.len();
        self.r.push(0.0);
        let mut r0 = 0.0;
        for i in (0..n).rev() {
            let mass = self.r[i] * predprobs[i];
            self.r[i + 1] = mass * (1.0 - h);
            r0 += mass * h;
        }
        self.r[0] = r0;

        let r_sum: f64 = self.r.iter().sum();
        trace!("step {t}: change point mass {r0:e}, column sum {r_sum:e}");
        if !(r_sum.is_finite() && r_sum > 0.0) {
            warn!("Run-length distribution degenerated at step {t} (sum = {r_sum})");
            return Err(BocpdError::NumericalDegeneracy { step: t, sum: r_sum });
        }
        self.r.iter_mut().for_each(|p| *p /= r_sum);

        // Age every hypothesis with `x` and open a new one at the prior.
        self.params.push(self.prior);
        for i in (1..self.params.len()).rev() {
            self.params[i] = self.params[i - 1].observe(x);
        }
        self.params[0] = self.prior;

        Ok(self.r.as_slice())
    }

    #[cfg(test)]
    fn n_hypotheses(&self) -> usize {
        self.params.len()
    }
}

/// Output of [`Bocpd::infer`].
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Inference {
    /// `(N + 1) x N` matrix; entry `[r, t]` is `P(run length = r | x_0..=x_t)`.
    run_lengths: Array2<f64>,
    /// Run lengths attaining the maximum posterior at each step.
    map_run_lengths: Vec<Vec<usize>>,
}

impl Inference {
    /// Run-length posterior matrix, rows are run lengths and columns steps.
    #[must_use]
    pub fn run_length_posterior(&self) -> &Array2<f64> {
        &self.run_lengths
    }

    /// All maximum a posteriori run lengths per step, ties included.
    #[must_use]
    pub fn map_run_lengths(&self) -> &[Vec<usize>] {
        &self.map_run_lengths
    }

    /// The most likely run length per step, the shortest one among ties.
    #[must_use]
    pub fn most_likely_run_lengths(&self) -> Vec<usize> {
        self.map_run_lengths
            .iter()
            .map(|ixs| ixs.first().copied().unwrap_or(0))
            .collect()
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map_run_lengths.len()
    }

    /// Whether no steps were computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map_run_lengths.is_empty()
    }

    /// Run-length distribution of each step, truncated to the run lengths
    /// reachable at that step.
    #[must_use]
    pub fn columns(&self) -> Vec<Vec<f64>> {
        self.run_lengths
            .columns()
            .into_iter()
            .enumerate()
            .map(|(t, col)| col.iter().take(t + 1).copied().collect())
            .collect()
    }

    /// Maximum a posteriori change point locations.
    #[must_use]
    pub fn change_points(&self) -> Vec<usize> {
        map_changepoints(&self.columns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;
    use crate::hazard::LogisticHazard;
    use crate::utils::{infer_changepoints, max_error};
    use rand::{rngs::SmallRng, SeedableRng};

    fn two_regimes(seed: u64) -> Vec<f64> {
        let mut rng = SmallRng::seed_from_u64(seed);
        generators::discontinuous_jump(&mut rng, 0.0, 1.0, 10.0, 1.0, 50, 100)
    }

    #[test]
    fn each_column_is_a_probability_dist() {
        let mut rng = SmallRng::seed_from_u64(0xABCD);
        let data = generators::discontinuous_jump(
            &mut rng, 0.0, 1.0, 10.0, 5.0, 200, 400,
        );
        let cpd = BocpdConfig::default()
            .with_hazard_rate(1.0 / 250.0)
            .build()
            .unwrap();
        let inference = cpd.infer(&data).unwrap();
        let r = inference.run_length_posterior();

        assert_eq!(r.dim(), (401, 400));
        for col in r.columns() {
            assert::close(col.sum(), 1.0, 1E-9);
            assert!(col.iter().all(|p| *p >= 0.0));
        }
        // Row N is never reachable
        assert!(r.row(400).iter().all(|p| *p == 0.0));
    }

    #[test]
    fn initial_condition() {
        let cpd = BocpdConfig::default().build().unwrap();
        let inference = cpd.infer(&[3.0, 1.0, 2.0]).unwrap();
        let r = inference.run_length_posterior();
        assert_eq!(r[[0, 0]], 1.0);
        assert!(r.column(0).iter().skip(1).all(|p| *p == 0.0));
        assert_eq!(inference.map_run_lengths()[0], vec![0]);
    }

    #[test]
    fn hypothesis_count_matches_step() {
        let hazard = ConstantHazard::new(0.01).unwrap();
        let mut filter =
            RunLengthFilter::new(&hazard, NormalGammaParams::default(), 10);
        filter.boundary(0.0).unwrap();
        let capacity = filter.params.capacity();
        assert_eq!(filter.n_hypotheses(), 1);
        for (t, x) in [0.5, 0.1, -0.2, 0.3, 0.0].iter().enumerate().skip(1) {
            let len = filter.step(t, *x).unwrap().len();
            assert_eq!(len, t + 1);
            assert_eq!(filter.n_hypotheses(), t + 1);
        }
        assert_eq!(filter.params.capacity(), capacity);
    }

    #[test]
    fn parameters_follow_conjugate_update() {
        let hazard = ConstantHazard::new(0.01).unwrap();
        let prior = NormalGammaParams::default();
        let mut filter = RunLengthFilter::new(&hazard, prior, 3);
        filter.boundary(0.0).unwrap();
        filter.step(1, 2.0).unwrap();
        assert_eq!(filter.params[0], prior);
        assert_eq!(
            filter.params[1],
            NormalGammaParams::new_unchecked(1.0, 2.0, 1.5, 2.0)
        );
        filter.step(2, 4.0).unwrap();
        assert_eq!(filter.params[1], prior.observe(4.0));
        assert_eq!(filter.params[2], prior.observe(2.0).observe(4.0));
    }

    #[test]
    fn two_observations_give_one_update() {
        let h = 0.2;
        let cpd = BocpdConfig::default().with_hazard_rate(h).build().unwrap();
        let inference = cpd.infer(&[0.0, 1.0]).unwrap();
        let r = inference.run_length_posterior();
        // A single hypothesis cancels the predictive density.
        assert::close(r[[0, 1]], h, 1E-12);
        assert::close(r[[1, 1]], 1.0 - h, 1E-12);
        assert_eq!(inference.most_likely_run_lengths(), vec![0, 1]);
    }

    #[test]
    fn three_observations_match_hand_computation() {
        use std::f64::consts::PI;

        let h = 0.1;
        let cpd = BocpdConfig::default().with_hazard_rate(h).build().unwrap();
        let inference = cpd.infer(&[5.0, 1.0, 2.0]).unwrap();
        let r = inference.run_length_posterior();

        // x = 2 under the prior: t(nu = 2, mu = 0, scale^2 = 2)
        let p_new = 0.25 * 2.0_f64.powf(-1.5);
        // x = 2 after observing 1: t(nu = 3, mu = 0.5, scale^2 = 1.25)
        let p_grown = 2.0 / (PI * 3.75_f64.sqrt()) / 2.56;

        let r0 = (h * p_new + (1.0 - h) * p_grown) * h;
        let r1 = h * p_new * (1.0 - h);
        let r2 = (1.0 - h) * p_grown * (1.0 - h);
        let total = r0 + r1 + r2;

        assert::close(r[[0, 2]], r0 / total, 1E-12);
        assert::close(r[[1, 2]], r1 / total, 1E-12);
        assert::close(r[[2, 2]], r2 / total, 1E-12);
        assert::close(r[[0, 2]], h, 1E-12);
        assert_eq!(r[[3, 2]], 0.0);
        assert_eq!(inference.most_likely_run_lengths(), vec![0, 1, 2]);
    }

    #[test]
    fn default_detector_matches_default_config() {
        let cpd: Bocpd = Bocpd::default();
        assert_eq!(cpd, BocpdConfig::default().build().unwrap());
        assert_eq!(cpd.hazard().rate(), DEFAULT_HAZARD_RATE);
        assert_eq!(*cpd.prior(), NormalGammaParams::new_unchecked(0.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn insufficient_data() {
        let cpd = BocpdConfig::default().build().unwrap();
        assert_eq!(
            cpd.infer(&[]),
            Err(BocpdError::InsufficientData { needed: 2, got: 0 })
        );
        assert_eq!(
            cpd.infer(&[1.0]),
            Err(BocpdError::InsufficientData { needed: 2, got: 1 })
        );
    }

    #[test]
    fn invalid_configuration_fails_at_construction() {
        for config in [
            BocpdConfig::default().with_hazard_rate(-0.1),
            BocpdConfig::default().with_hazard_rate(1.1),
            BocpdConfig::default().with_prior(0.0, 0.0, 1.0, 1.0),
            BocpdConfig::default().with_prior(0.0, 1.0, -1.0, 1.0),
            BocpdConfig::default().with_prior(0.0, 1.0, 1.0, 0.0),
        ] {
            assert!(matches!(
                config.validate(),
                Err(BocpdError::InvalidConfiguration(_))
            ));
        }
        assert!(Bocpd::new(|_: usize| 2.0, NormalGammaParams::default()).is_err());
        assert!(Bocpd::new(
            ConstantHazard::new(0.1).unwrap(),
            NormalGammaParams::new_unchecked(0.0, -1.0, 1.0, 1.0)
        )
        .is_err());
    }

    #[test]
    fn hazard_leaving_unit_interval_is_reported() {
        let cpd = Bocpd::new(
            |t: usize| if t < 5 { 0.1 } else { -0.5 },
            NormalGammaParams::default(),
        )
        .unwrap();
        let res = cpd.infer(&[0.0; 10]);
        assert!(matches!(res, Err(BocpdError::InvalidConfiguration(_))));
    }

    #[test]
    fn degeneracy_is_reported() {
        let cpd = BocpdConfig::default()
            .with_prior(0.0, 1.0, 1.0, 1E-300)
            .build()
            .unwrap();
        assert_eq!(
            cpd.infer(&[0.0, 1E10, 0.0]),
            Err(BocpdError::NumericalDegeneracy { step: 1, sum: 0.0 })
        );
    }

    #[test]
    fn non_finite_observation_is_reported() {
        let cpd = BocpdConfig::default().build().unwrap();
        let res = cpd.infer(&[0.0, 1.0, f64::NAN, 2.0]);
        assert!(matches!(
            res,
            Err(BocpdError::NumericalDegeneracy { step: 2, .. })
        ));
    }

    #[test]
    fn non_finite_first_observation_is_reported() {
        let cpd = BocpdConfig::default().build().unwrap();
        for x0 in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                cpd.infer(&[x0, 1.0, 2.0]),
                Err(BocpdError::NumericalDegeneracy { step: 0, sum }) if sum.is_nan()
            ));
        }
        // Any finite first observation leaves the posterior unchanged.
        assert_eq!(
            cpd.infer(&[-40.0, 1.0, 2.0]).unwrap(),
            cpd.infer(&[7.5, 1.0, 2.0]).unwrap()
        );
    }

    #[test]
    fn tiny_hazard_never_resets() {
        let cpd = BocpdConfig::default().with_hazard_rate(1E-12).build().unwrap();
        let data = two_regimes(0x1234);
        let inference = cpd.infer(&data[..50]).unwrap();
        let expected: Vec<usize> = (0..50).collect();
        assert_eq!(inference.most_likely_run_lengths(), expected);
    }

    #[test]
    fn zero_hazard_keeps_all_mass_on_full_run() {
        let cpd = BocpdConfig::default().with_hazard_rate(0.0).build().unwrap();
        let inference = cpd.infer(&two_regimes(0x1234)[..50]).unwrap();
        let r = inference.run_length_posterior();
        for t in 0..50 {
            assert::close(r[[t, t]], 1.0, 1E-12);
        }
    }

    #[test]
    fn near_certain_hazard_resets_every_step() {
        let cpd = BocpdConfig::default()
            .with_hazard_rate(1.0 - 1E-9)
            .build()
            .unwrap();
        let inference = cpd.infer(&two_regimes(0x1234)).unwrap();
        let r = inference.run_length_posterior();
        for t in 0..100 {
            assert!(r[[0, t]] > 0.99);
        }
        assert!(inference.most_likely_run_lengths().iter().all(|r| *r == 0));
    }

    #[test]
    fn detect_obvious_switch() {
        let cpd = BocpdConfig::default().with_hazard_rate(0.01).build().unwrap();
        let inference = cpd.infer(&two_regimes(0xABCD)).unwrap();
        let map = inference.most_likely_run_lengths();

        // Short run lengths appear within a few steps of the switch.
        let reset = (50..56).any(|t| map[t] <= 5);
        assert!(reset, "no reset near the switch: {:?}", &map[45..60]);
        assert!(map[99] <= 50);
        assert!(map[49] >= 40);

        let error = max_error(&inference.change_points(), &[0, 50]);
        assert!(error <= 2);
    }

    #[test]
    fn detect_obvious_switch_p_cp() {
        let mut rng = SmallRng::seed_from_u64(0xABCD);
        let cpd = BocpdConfig::default().with_hazard_rate(0.01).build().unwrap();
        let inference = cpd.infer(&two_regimes(0xABCD)).unwrap();
        let p_cp = infer_changepoints(&inference.columns(), 100, &mut rng).unwrap();
        let near_switch: f64 = p_cp[49..=51].iter().sum();
        assert!(near_switch > 0.5);
    }

    #[test]
    fn logistic_hazard_detects_switch() {
        let cpd = Bocpd::new(
            LogisticHazard::new(-4.0, 0.05, -2.0),
            NormalGammaParams::default(),
        )
        .unwrap();
        let inference = cpd.infer(&two_regimes(0xABCD)).unwrap();
        let error = max_error(&inference.change_points(), &[0, 50]);
        assert!(error <= 2);
    }

    #[test]
    fn deterministic_and_parallel_batches_agree() {
        let cpd = BocpdConfig::default().with_hazard_rate(0.01).build().unwrap();
        let series: Vec<Vec<f64>> = (0..4).map(|s| two_regimes(s)).collect();
        let parallel = cpd.infer_many(&series);
        for (data, res) in series.iter().zip(parallel) {
            assert_eq!(res.unwrap(), cpd.infer(data).unwrap());
        }
        assert!(cpd.infer_many(&[vec![1.0]])[0].is_err());
    }

    #[test]
    fn columns_are_truncated() {
        let cpd = BocpdConfig::default().build().unwrap();
        let inference = cpd.infer(&[0.0, 0.1, 0.2, 0.3]).unwrap();
        let cols = inference.columns();
        assert_eq!(cols.len(), 4);
        for (t, col) in cols.iter().enumerate() {
            assert_eq!(col.len(), t + 1);
        }
        assert_eq!(inference.len(), 4);
        assert!(!inference.is_empty());
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn config_from_json() {
        let config: BocpdConfig = serde_json::from_str(
            r#"{"hazard_rate":0.01,"mu0":0.0,"kappa0":1.0,"alpha0":1.0,"beta0":1.0}"#,
        )
        .unwrap();
        assert_eq!(config, BocpdConfig::default().with_hazard_rate(0.01));
        let inference = config.build().unwrap().infer(&[0.0, 1.0, 2.0]).unwrap();
        let json = serde_json::to_string(&inference).unwrap();
        let back: Inference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inference);
    }
}
