//! Property tests for the geometric leaves

use proptest::prelude::*;

use drunkwalk::core::types::{Direction, Position};

proptest! {
    #[test]
    fn displacement_magnitude_matches_step_length(
        step in 0.0f64..1000.0,
        dir_idx in 0usize..4,
    ) {
        let dir = Direction::ALL[dir_idx];
        let (dx, dy) = dir.displacement(step);
        prop_assert_eq!(dx.abs() + dy.abs(), step);
        prop_assert!(dx == 0.0 || dy == 0.0, "step must be axis-aligned");
    }

    #[test]
    fn step_then_opposite_returns_to_start(
        // integer-valued coordinates keep the +1/-1 arithmetic exact
        x in -1_000_000i32..1_000_000,
        y in -1_000_000i32..1_000_000,
        dir_idx in 0usize..4,
    ) {
        let start = Position::new(f64::from(x), f64::from(y));
        let dir = Direction::ALL[dir_idx];
        let (dx, dy) = dir.displacement(1.0);
        let (ox, oy) = dir.opposite().displacement(1.0);
        let back = start.offset(dx, dy).offset(ox, oy);
        prop_assert_eq!(back, start);
    }

    #[test]
    fn distance_is_symmetric_and_nonnegative(
        ax in -1e3f64..1e3, ay in -1e3f64..1e3,
        bx in -1e3f64..1e3, by in -1e3f64..1e3,
    ) {
        let a = Position::new(ax, ay);
        let b = Position::new(bx, by);
        prop_assert!(a.distance_to(&b) >= 0.0);
        prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
        prop_assert_eq!(a.distance_to(&a), 0.0);
    }
}
