//! ColdBiased - dislikes cold, rushes through it
//!
//! Uniform draw over the cardinals, but a South result is applied as two unit
//! steps instead of one, producing a net southward drift.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Direction;
use crate::policy::MovementPolicy;

pub struct ColdBiased;

impl MovementPolicy for ColdBiased {
    fn choose(&self, rng: &mut ChaCha8Rng) -> (Direction, u32) {
        let dir = Direction::ALL[rng.gen_range(0..4)];
        let count = if dir == Direction::South { 2 } else { 1 };
        (dir, count)
    }

    fn name(&self) -> &'static str {
        "cold-biased"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_south_doubles_step_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let policy = ColdBiased;
        let mut saw_double_south = false;
        for _ in 0..100 {
            let (dir, count) = policy.choose(&mut rng);
            if dir == Direction::South {
                assert_eq!(count, 2);
                saw_double_south = true;
            } else {
                assert_eq!(count, 1, "{} must be a single step", dir);
            }
        }
        assert!(saw_double_south);
    }
}
