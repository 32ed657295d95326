//! The baseline walker: uniform over the four cardinals

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Direction;
use crate::policy::MovementPolicy;

pub struct Uniform4;

impl MovementPolicy for Uniform4 {
    fn choose(&self, rng: &mut ChaCha8Rng) -> (Direction, u32) {
        let dir = Direction::ALL[rng.gen_range(0..4)];
        (dir, 1)
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}
