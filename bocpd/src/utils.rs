//! General Utilities

use rand::Rng;
use rv::{
    misc::argmax, prelude::Categorical, prelude::CategoricalError, prelude::Rv,
};

/// Indices of every entry attaining the maximum of `column`.
///
/// Ties are all returned, in increasing order; an empty column gives an
/// empty set.
#[must_use]
pub fn map_indices(column: &[f64]) -> Vec<usize> {
    argmax(column)
}

/// Compute the locations in a sequence of distributions where the total
/// probability from 1 to window is above threshold.
#[must_use]
pub fn window_over_threshold(
    r: &[Vec<f64>],
    window: usize,
    threshold: f64,
) -> Vec<usize> {
    r.iter()
        .enumerate()
        .filter(|(_, rs)| rs.iter().skip(1).take(window).sum::<f64>() >= threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Infer change-point locations from the run-length distributions
///
/// This method works by walking backwards through the run-length distributions jumping back to
/// past distributions until the process ends at the first step.
///
/// # Parameters
/// * `rs` - Run lengths probability distributions for each step observed
/// * `sample_size` - Number of monte-carlo draws from the rl distribution
/// * `rng` - Random number generator
///
/// # Returns
/// The return value is the proportion of samples which show a change-point at the given index.
/// Each sample marks an index at most once, so every entry lies in `[0, 1]`.
///
/// # Errors
/// If the values in `rs` are cannot be converted to categorical weights, this will return an
/// error.
pub fn infer_changepoints<R: Rng>(
    rs: &[Vec<f64>],
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, CategoricalError> {
    let n = rs.len();
    if n == 0 {
        return Ok(vec![]);
    }
    let dists: Vec<Categorical> = rs
        .iter()
        .map(|r| Categorical::new(r))
        .collect::<Result<Vec<Categorical>, CategoricalError>>()?;

    let counts: Vec<usize> =
        (0..sample_size).fold(vec![0_usize; n], |mut acc, _| {
            let mut s: usize = n.saturating_sub(1);
            while s != 0 {
                let cur_run_length: usize = dists[s].draw(rng);
                match segment_start(s, cur_run_length) {
                    Some(start) if start > s => {
                        if start < n {
                            acc[start] += 1;
                        }
                        s -= 1;
                    }
                    Some(start) => {
                        acc[start] += 1;
                        s = start - 2;
                    }
                    None => s = 0,
                }
            }
            acc[0] += 1;
            acc
        });

    Ok(counts
        .into_iter()
        .map(|c| (c as f64) / (sample_size as f64))
        .collect())
}

/// Creates a pseudo cmf distribution for change-point locations.
///
/// This calculates the cumulative sum of the `infer_changepoints` return value mod 1.0.
///
/// See [`infer_changepoints`](fn.infer_changepoints.html) for more detail.
///
/// # Errors
/// If `infer_changepoints` returns an error, this will as well.
pub fn infer_pseudo_cmf_changepoints<R: Rng>(
    rs: &[Vec<f64>],
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, CategoricalError> {
    let ps = infer_changepoints(rs, sample_size, rng)?;
    Ok(ps
        .into_iter()
        .scan(0.0, |acc, x| {
            *acc = (*acc + x).rem_euclid(1.0);
            Some(*acc)
        })
        .collect())
}

/// First index of the segment that run length `run_length` at step `s`
/// describes, or `None` when the segment reaches back to the first
/// observation.
///
/// Run length `r` at step `s` covers observations `s - r + 1..=s`, so a run
/// length of zero opens a segment at `s + 1`.
///
/// A segment starting at `start >= 2` means step `start - 1` reset, so the
/// walk resumes at step `start - 2`, whose run length plus one is the length
/// of the previous segment.
fn segment_start(s: usize, run_length: usize) -> Option<usize> {
    (run_length < s).then(|| s + 1 - run_length)
}

//    0 1 2 3 4 5 6 7 8
// 0 [1]                    | DONE, CPs: [8, 4, 0]
// 1 [0 1]                  |
// 2 [0 0 1]                | s = 2, argmax = 2, reaches the start, s -> 0
// 3 [1 0 0 0]  - Reset     |
// 4 [0 1]                  |
// 5 [0 0 1]                |
// 6 [0 0 0 1]              | s = 6, argmax = 3, start = 4, s -> 2, CPs: [8, 4]
// 7 [1 0 0 0 0 0 0 0]      |
// 8 [0 1]                  | s = 8, argmax = 1, start = 8, s -> 6, CPs: [8]

/// Maximum a posteriori change points
///
/// This reverse walks through the run-length distribution sequence and only takes the most likely
/// set of change-points. Ties resolve to the shortest run length. The first
/// index of a non-empty sequence is always a change point.
#[must_use]
pub fn map_changepoints(r: &[Vec<f64>]) -> Vec<usize> {
    if r.is_empty() {
        return vec![];
    }
    let mut s = r.len().saturating_sub(1);
    let mut change_points: Vec<usize> = vec![];
    while s != 0 {
        let most_likely_runlength =
            map_indices(&r[s]).first().copied().unwrap_or(0);

        match segment_start(s, most_likely_runlength) {
            Some(start) if start > s => {
                if start < r.len() {
                    change_points.push(start);
                }
                s -= 1;
            }
            Some(start) => {
                change_points.push(start);
                s = start - 2;
            }
            None => s = 0,
        }
    }
    change_points.push(0);
    change_points.reverse();
    change_points
}

/// The max-norm or max-error between two sequences of indices.
///
/// # Panics
/// If the input slices are not of equal length, this will panic.
#[must_use]
pub fn max_error(predicted: &[usize], expected: &[usize]) -> usize {
    assert_eq!(
        predicted.len(),
        expected.len(),
        "predicted and expected must be the same size."
    );
    predicted
        .iter()
        .zip(expected)
        .map(|(a, b)| a.abs_diff(*b))
        .max()
        .unwrap_or(0)
}
