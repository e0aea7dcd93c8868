//! Detect the switch between two Gaussian regimes and print the MAP
//! run lengths around it.
//!
//! Run with `RUST_LOG=debug cargo run --example two_regimes` to see the
//! detector's log output.

use bocpd::generators::piecewise_gaussian;
use bocpd::utils::infer_changepoints;
use bocpd::BocpdConfig;
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    env_logger::init();
    let mut rng = SmallRng::seed_from_u64(0xABCD);

    println!("Generating sequence");
    let seq = piecewise_gaussian(
        &mut rng,
        &[(0.0, 1.0, 50), (8.0, 1.0, 50), (3.0, 0.5, 50)],
    );

    let cpd = BocpdConfig::default().with_hazard_rate(0.01).build()?;
    let inference = cpd.infer(&seq)?;

    println!("MAP change points: {:?}", inference.change_points());

    let map = inference.most_likely_run_lengths();
    for (t, (x, r)) in seq.iter().zip(&map).enumerate().skip(45).take(15) {
        println!("t = {t:3}  x = {x:7.3}  MAP run length = {r}");
    }

    let p_cp = infer_changepoints(&inference.columns(), 1000, &mut rng)?;
    let likely: Vec<(usize, f64)> = p_cp
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, p)| *p > 0.25)
        .collect();
    println!("Indices with P(change point) > 0.25: {likely:?}");

    Ok(())
}
