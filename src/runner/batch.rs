//! Batch runner: many independent trials under one shared configuration

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Position, WalkerId};
use crate::field::{BoundaryRule, Field};
use crate::policy::{PolicyConfig, Walker};
use crate::runner::aggregate;
use crate::runner::trial::{run_trial, Trial};

/// Configuration shared by every trial in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Time steps per trial
    pub steps: u32,
    /// Number of independent trials
    pub trials: u32,
    /// Movement policy applied to every walker in the batch
    pub policy: PolicyConfig,
    /// Field boundary behavior
    pub boundary: BoundaryRule,
    /// Seed for the deterministic random stream
    pub seed: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            steps: 500,
            trials: 500,
            policy: PolicyConfig::Uniform,
            boundary: BoundaryRule::Standard,
            seed: 12345,
        }
    }
}

/// Complete batch output: raw per-trial series plus summary statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    pub trials: Vec<Trial>,
    pub stats: BatchStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStats {
    pub steps: u32,
    pub trials: u32,
    pub policy: String,
    pub simulation_time_ms: u64,
    pub mean_final_distance: f64,
}

impl BatchOutput {
    fn new(trials: Vec<Trial>, config: &BatchConfig, elapsed: std::time::Duration) -> Self {
        let mean_final_distance = if trials.is_empty() {
            0.0
        } else {
            trials.iter().map(Trial::final_distance).sum::<f64>() / trials.len() as f64
        };
        let stats = BatchStats {
            steps: config.steps,
            trials: config.trials,
            policy: format!("{:?}", config.policy),
            simulation_time_ms: elapsed.as_millis() as u64,
            mean_final_distance,
        };
        Self { trials, stats }
    }

    /// Mean distance-from-start at each time step, across all trials
    pub fn mean_distances(&self) -> Vec<f64> {
        aggregate::mean_distances(&self.trials)
    }

    /// Each trial's terminal position, in trial order
    pub fn final_positions(&self) -> Vec<Position> {
        aggregate::final_positions(&self.trials)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} trials x {} steps ({}) in {}ms\nmean final distance: {:.3}",
            self.stats.trials,
            self.stats.steps,
            self.stats.policy,
            self.stats.simulation_time_ms,
            self.stats.mean_final_distance,
        )
    }
}

fn run_one_trial(config: &BatchConfig, index: u32, rng: &mut ChaCha8Rng) -> Result<Trial> {
    let policy = config.policy.build()?;
    let walker = Walker::new(WalkerId::new(index), format!("walker-{}", index), policy);
    let mut field = Field::new(walker.id(), Position::ORIGIN, config.boundary);
    run_trial(config.steps, &walker, &mut field, rng)
}

/// Run the batch sequentially on one shared random stream.
///
/// A fresh walker and field are constructed per trial; trial N+1 does not
/// start until trial N completes, so a given seed always reproduces the same
/// series. A configuration error fails the whole batch, since every trial
/// shares the policy configuration.
pub fn run_batch(config: &BatchConfig) -> Result<BatchOutput> {
    let start = std::time::Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let mut trials = Vec::with_capacity(config.trials as usize);
    for index in 0..config.trials {
        trials.push(run_one_trial(config, index, &mut rng)?);
        tracing::debug!(trial = index, "trial complete");
    }

    let elapsed = start.elapsed();
    tracing::info!(
        trials = config.trials,
        steps = config.steps,
        elapsed_ms = elapsed.as_millis() as u64,
        "batch complete"
    );
    Ok(BatchOutput::new(trials, config, elapsed))
}

/// Run the batch across threads, one ChaCha stream per trial.
///
/// Trials are embarrassingly independent; giving trial i stream i of the
/// seeded generator keeps the output deterministic regardless of thread
/// scheduling. The series differ from `run_batch` for the same seed because
/// the streams differ.
pub fn run_batch_parallel(config: &BatchConfig) -> Result<BatchOutput> {
    let start = std::time::Instant::now();

    let trials: Vec<Trial> = (0..config.trials)
        .into_par_iter()
        .map(|index| {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            rng.set_stream(u64::from(index));
            run_one_trial(config, index, &mut rng)
        })
        .collect::<Result<_>>()?;

    let elapsed = start.elapsed();
    tracing::info!(
        trials = config.trials,
        steps = config.steps,
        elapsed_ms = elapsed.as_millis() as u64,
        "parallel batch complete"
    );
    Ok(BatchOutput::new(trials, config, elapsed))
}
