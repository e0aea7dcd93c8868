//! Functions to generate random sequences
use rand::Rng;
use rv::dist::Gaussian;
use rv::traits::Rv;

/// Concatenate draws from a sequence of Gaussian regimes.
///
/// Each regime is `(mean, standard deviation, length)`; standard deviations
/// must be positive.
pub fn piecewise_gaussian<R: Rng>(
    rng: &mut R,
    regimes: &[(f64, f64, usize)],
) -> Vec<f64> {
    regimes
        .iter()
        .flat_map(|&(mu, sigma, len)| {
            Gaussian::new_unchecked(mu, sigma).sample(len, rng)
        })
        .collect()
}

/// Generate a series of draws from two Gaussian process that switches
/// at `switch` into the sequence.
///
/// # Example
/// ```rust
/// use bocpd::generators::discontinuous_jump;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// let mut rng: StdRng = StdRng::seed_from_u64(0x12345);
/// // Generate a sequence of 100 numbers from two Gaussian, G(0, 1) and G(10, 5),
/// // switching from the first to the second at 50 steps.
/// let seq: Vec<f64> = discontinuous_jump(
///     &mut rng,
///     0.0,
///     1.0,
///     10.0,
///     5.0,
///     50,
///     100
/// );
/// assert_eq!(seq.len(), 100);
/// ```
pub fn discontinuous_jump<R: Rng>(
    rng: &mut R,
    mu_1: f64,
    sigma_1: f64,
    mu_2: f64,
    sigma_2: f64,
    switch: usize,
    size: usize,
) -> Vec<f64> {
    piecewise_gaussian(
        rng,
        &[
            (mu_1, sigma_1, switch),
            (mu_2, sigma_2, size.saturating_sub(switch)),
        ],
    )
}
