//! Gaussian-directional policy
//!
//! Draws from a zero-mean normal and maps the value onto the cardinal cycle
//! around a configured center: the center owns the band [-spread/2, spread/2],
//! its counter-clockwise and clockwise neighbors own the adjacent bands of
//! the same width, and both tails fall to the opposite direction. `spread`
//! places the band edges; `std_dev` controls how much mass reaches the tails.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WalkError};
use crate::core::types::Direction;
use crate::policy::MovementPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianParams {
    pub center: Direction,
    pub spread: f64,
    pub std_dev: f64,
}

impl GaussianParams {
    pub fn new(center: Direction, spread: f64, std_dev: f64) -> Self {
        Self {
            center,
            spread,
            std_dev,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.spread.is_finite() || self.spread <= 0.0 {
            return Err(WalkError::MisconfiguredPolicy(format!(
                "gaussian spread must be positive and finite, got {}",
                self.spread
            )));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(WalkError::MisconfiguredPolicy(format!(
                "gaussian std_dev must be positive and finite, got {}",
                self.std_dev
            )));
        }
        Ok(())
    }
}

pub struct Gaussian {
    params: GaussianParams,
}

impl Gaussian {
    pub fn new(params: GaussianParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    fn classify(&self, g: f64) -> Direction {
        let center = self.params.center;
        let half = self.params.spread / 2.0;
        if (-half..=half).contains(&g) {
            center
        } else if (-3.0 * half..-half).contains(&g) {
            center.left()
        } else if g > half && g <= 3.0 * half {
            center.right()
        } else {
            center.opposite()
        }
    }
}

impl MovementPolicy for Gaussian {
    fn choose(&self, rng: &mut ChaCha8Rng) -> (Direction, u32) {
        let g: f64 = rng.sample::<f64, _>(StandardNormal) * self.params.std_dev;
        (self.classify(g), 1)
    }

    fn name(&self) -> &'static str {
        "gaussian"
    }
}
