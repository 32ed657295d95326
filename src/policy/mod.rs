//! Movement policies - the stochastic rule behind each walker's steps
//!
//! Each policy variant is one walker "personality": it decides, per time
//! unit, which cardinal direction to take and how many unit steps to apply.
//! The variants form a closed strategy set behind one trait; configuration
//! travels in an explicit [`PolicyConfig`] rather than process-wide globals.

pub mod axis;
pub mod categorical;
pub mod cold;
pub mod gaussian;
pub mod uniform;

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Direction, WalkerId};
use crate::field::Field;

pub use axis::AxisOnly;
pub use categorical::{Categorical4, CategoricalParams};
pub use cold::ColdBiased;
pub use gaussian::{Gaussian, GaussianParams};
pub use uniform::Uniform4;

/// Per-time-unit movement decision.
///
/// Returns the chosen direction and the number of independent unit steps to
/// apply in it (1 for every policy except the double-South cold bias).
pub trait MovementPolicy {
    fn choose(&self, rng: &mut ChaCha8Rng) -> (Direction, u32);

    /// Human-readable policy name for logs and reports
    fn name(&self) -> &'static str;
}

/// Declarative policy selection plus per-variant parameters.
///
/// One config is shared by every trial in a batch; `build` is called once per
/// trial to get a fresh policy instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolicyConfig {
    /// Uniform over the four cardinals
    Uniform,
    /// Uniform draw, but South is applied at double step count
    ColdBiased,
    /// East/West only, via rejection sampling of the 4-way uniform
    AxisOnly,
    /// Multinomial over (N, S, E, W)
    Categorical(CategoricalParams),
    /// Normal draw mapped onto the cardinal cycle around a center direction
    Gaussian(GaussianParams),
}

impl PolicyConfig {
    /// Construct the policy, validating parameters eagerly. Invalid
    /// categorical probabilities or degenerate Gaussian parameters fail here
    /// with `MisconfiguredPolicy` instead of silently skewing the sampling.
    pub fn build(&self) -> Result<Box<dyn MovementPolicy>> {
        Ok(match self {
            PolicyConfig::Uniform => Box::new(Uniform4),
            PolicyConfig::ColdBiased => Box::new(ColdBiased),
            PolicyConfig::AxisOnly => Box::new(AxisOnly),
            PolicyConfig::Categorical(params) => Box::new(Categorical4::new(params.clone())?),
            PolicyConfig::Gaussian(params) => Box::new(Gaussian::new(params.clone())?),
        })
    }
}

/// A walker: identity plus the policy steering it.
///
/// The id is a label for the field ownership guard; all behavior lives in the
/// boxed policy.
pub struct Walker {
    id: WalkerId,
    label: String,
    policy: Box<dyn MovementPolicy>,
}

impl Walker {
    pub fn new(id: WalkerId, label: impl Into<String>, policy: Box<dyn MovementPolicy>) -> Self {
        Self {
            id,
            label: label.into(),
            policy,
        }
    }

    pub fn id(&self) -> WalkerId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Advance the walker by `distance` time units on `field`.
    ///
    /// One policy decision covers the whole call; the resulting direction is
    /// applied as `distance * count` independent unit steps, so intermediate
    /// positions are visible to the field's boundary rule.
    pub fn advance(&self, field: &mut Field, rng: &mut ChaCha8Rng, distance: u32) -> Result<()> {
        let (direction, count) = self.policy.choose(rng);
        for _ in 0..distance * count {
            field.step(self.id, direction, 1.0)?;
        }
        Ok(())
    }
}
