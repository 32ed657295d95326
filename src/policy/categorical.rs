//! Categorical4 - multinomial draw over the four cardinals

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WalkError};
use crate::core::types::Direction;
use crate::policy::MovementPolicy;

/// Probabilities for (North, South, East, West). Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoricalParams {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl CategoricalParams {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    fn validate(&self) -> Result<()> {
        let entries = [self.north, self.south, self.east, self.west];
        if entries.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(WalkError::MisconfiguredPolicy(format!(
                "categorical probabilities must be finite and non-negative, got {:?}",
                entries
            )));
        }
        let sum: f64 = entries.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(WalkError::MisconfiguredPolicy(format!(
                "categorical probabilities sum to {}, expected 1",
                sum
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Categorical4 {
    params: CategoricalParams,
}

impl Categorical4 {
    pub fn new(params: CategoricalParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }
}

impl MovementPolicy for Categorical4 {
    fn choose(&self, rng: &mut ChaCha8Rng) -> (Direction, u32) {
        let u: f64 = rng.gen();
        // Cumulative scan in the fixed order N, S, E, W. Upper bounds are
        // inclusive and the first match wins, so a draw landing exactly on a
        // threshold resolves to the lower interval.
        let p = &self.params;
        let dir = if u <= p.north {
            Direction::North
        } else if u <= p.north + p.south {
            Direction::South
        } else if u <= p.north + p.south + p.east {
            Direction::East
        } else {
            Direction::West
        };
        (dir, 1)
    }

    fn name(&self) -> &'static str {
        "categorical"
    }
}
