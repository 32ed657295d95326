//! AxisOnly - a one-dimensional walk embedded in the plane
//!
//! Resamples the 4-way uniform draw until it lands on East or West. The
//! rejection loop keeps the same draw-count behavior as a caller that shares
//! the random stream with other policies; the marginal is uniform over
//! {East, West}.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Direction;
use crate::policy::MovementPolicy;

pub struct AxisOnly;

impl MovementPolicy for AxisOnly {
    fn choose(&self, rng: &mut ChaCha8Rng) -> (Direction, u32) {
        loop {
            let dir = Direction::ALL[rng.gen_range(0..4)];
            if dir == Direction::East || dir == Direction::West {
                return (dir, 1);
            }
        }
    }

    fn name(&self) -> &'static str {
        "axis-only"
    }
}
