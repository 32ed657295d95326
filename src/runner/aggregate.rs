//! Aggregation helpers for batch output
//!
//! Produces the arrays the reporting/plotting layer consumes: per-timestep
//! mean distance, terminal positions, and coarse coordinate histograms.

use crate::core::types::Position;
use crate::runner::trial::Trial;

/// Mean distance-from-start at each time step across trials.
///
/// All trials in a batch share the same step count; the result has one entry
/// per time step including t=0. Empty input yields an empty vector.
pub fn mean_distances(trials: &[Trial]) -> Vec<f64> {
    let Some(first) = trials.first() else {
        return Vec::new();
    };
    let len = first.distances.len();
    let mut means = vec![0.0; len];
    for trial in trials {
        for (slot, d) in means.iter_mut().zip(&trial.distances) {
            *slot += d;
        }
    }
    let n = trials.len() as f64;
    for slot in &mut means {
        *slot /= n;
    }
    means
}

/// Each trial's terminal position, in trial order (scatter-plot input)
pub fn final_positions(trials: &[Trial]) -> Vec<Position> {
    trials.iter().map(Trial::final_position).collect()
}

/// Histogram of scalar samples over `bins` equal-width buckets spanning
/// [min, max]. Returns the bucket edges' lower bounds and the counts. Used
/// for the distribution of final N-S or E-W coordinates.
pub fn coordinate_histogram(values: &[f64], bins: usize) -> (Vec<f64>, Vec<u32>) {
    if values.is_empty() || bins == 0 {
        return (Vec::new(), Vec::new());
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min {
        (max - min) / bins as f64
    } else {
        1.0
    };

    let mut counts = vec![0u32; bins];
    for &v in values {
        let mut idx = ((v - min) / width) as usize;
        if idx >= bins {
            idx = bins - 1; // max lands in the last bucket
        }
        counts[idx] += 1;
    }
    let edges = (0..bins).map(|i| min + i as f64 * width).collect();
    (edges, counts)
}
