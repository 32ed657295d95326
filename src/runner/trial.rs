//! Single-trial runner: one walker, a fixed number of time steps

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Position;
use crate::field::Field;
use crate::policy::Walker;

/// One walker's complete trajectory.
///
/// Both series have length `steps + 1`: entry 0 is the starting point with
/// distance 0, entry t is the state after time step t. Distances are measured
/// from the trial's start position, which coincides with distance-from-origin
/// in the standard setup where every trial starts at (0, 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trial {
    pub distances: Vec<f64>,
    pub path: Vec<Position>,
}

impl Trial {
    pub fn final_position(&self) -> Position {
        *self.path.last().expect("trial path is never empty")
    }

    pub fn final_distance(&self) -> f64 {
        *self.distances.last().expect("trial distances are never empty")
    }
}

/// Run one walker on `field` for `steps` discrete time steps.
///
/// No early termination: the trial always records exactly `steps + 1`
/// entries. Each step is one policy decision, which may apply several unit
/// sub-steps internally (the cold walker's double South).
pub fn run_trial(
    steps: u32,
    walker: &Walker,
    field: &mut Field,
    rng: &mut ChaCha8Rng,
) -> Result<Trial> {
    let start = field.location();
    let capacity = steps as usize + 1;
    let mut distances = Vec::with_capacity(capacity);
    let mut path = Vec::with_capacity(capacity);
    distances.push(0.0);
    path.push(start);

    for t in 1..=steps {
        walker.advance(field, rng, 1)?;
        let loc = field.location();
        distances.push(loc.distance_to(&start));
        path.push(loc);
        tracing::trace!(walker = walker.label(), step = t, x = loc.x, y = loc.y);
    }

    Ok(Trial { distances, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WalkerId;
    use crate::policy::PolicyConfig;
    use rand::SeedableRng;

    fn uniform_walker(id: u32) -> Walker {
        let policy = PolicyConfig::Uniform.build().unwrap();
        Walker::new(WalkerId::new(id), format!("walker-{}", id), policy)
    }

    #[test]
    fn test_series_lengths_and_first_entry() {
        let walker = uniform_walker(0);
        let mut field = Field::standard(walker.id());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let trial = run_trial(50, &walker, &mut field, &mut rng).unwrap();
        assert_eq!(trial.distances.len(), 51);
        assert_eq!(trial.path.len(), 51);
        assert_eq!(trial.distances[0], 0.0);
        assert_eq!(trial.path[0], Position::ORIGIN);
    }

    #[test]
    fn test_zero_steps_records_only_the_start() {
        let walker = uniform_walker(0);
        let mut field = Field::standard(walker.id());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let trial = run_trial(0, &walker, &mut field, &mut rng).unwrap();
        assert_eq!(trial.distances, vec![0.0]);
        assert_eq!(trial.final_position(), Position::ORIGIN);
    }

    #[test]
    fn test_distance_is_from_trial_start_not_origin() {
        let walker = uniform_walker(0);
        let start = Position::new(10.0, -3.0);
        let mut field = Field::new(walker.id(), start, crate::field::BoundaryRule::Standard);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let trial = run_trial(1, &walker, &mut field, &mut rng).unwrap();
        assert_eq!(
            trial.distances[1], 1.0,
            "one unit step puts the walker at distance 1 from its start"
        );
    }

    #[test]
    fn test_each_step_moves_exactly_one_unit_for_uniform() {
        let walker = uniform_walker(0);
        let mut field = Field::standard(walker.id());
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let trial = run_trial(20, &walker, &mut field, &mut rng).unwrap();
        for pair in trial.path.windows(2) {
            assert_eq!(pair[0].distance_to(&pair[1]), 1.0);
        }
    }
}
