//! Field - the spatial context binding one walker to a mutable position
//!
//! A field owns exactly one walker's current position and applies an optional
//! boundary rule after every unit step. The "odd" variant teleports the walker
//! back to the origin whenever it lands exactly on the y = x or y = -x lines.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WalkError};
use crate::core::types::{Direction, Position, WalkerId};

/// Boundary behavior applied after every move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryRule {
    /// No boundary; the plane is unbounded
    Standard,
    /// Absorbing diagonals: landing exactly on y = x or y = -x resets the
    /// walker to the origin. Exact floating comparison, no epsilon; with
    /// integer step lengths this only triggers when |x| == |y|.
    DiagonalReset,
}

impl BoundaryRule {
    fn apply(&self, loc: Position) -> Position {
        match self {
            BoundaryRule::Standard => loc,
            BoundaryRule::DiagonalReset => {
                if loc.x.abs() - loc.y.abs() == 0.0 {
                    Position::ORIGIN
                } else {
                    loc
                }
            }
        }
    }
}

/// One walker's spatial context
#[derive(Debug, Clone)]
pub struct Field {
    bound: WalkerId,
    loc: Position,
    boundary: BoundaryRule,
}

impl Field {
    pub fn new(walker: WalkerId, start: Position, boundary: BoundaryRule) -> Self {
        Self {
            bound: walker,
            loc: start,
            boundary,
        }
    }

    pub fn standard(walker: WalkerId) -> Self {
        Self::new(walker, Position::ORIGIN, BoundaryRule::Standard)
    }

    pub fn with_diagonal_reset(walker: WalkerId) -> Self {
        Self::new(walker, Position::ORIGIN, BoundaryRule::DiagonalReset)
    }

    pub fn location(&self) -> Position {
        self.loc
    }

    pub fn bound_walker(&self) -> WalkerId {
        self.bound
    }

    /// Apply one step on behalf of `walker`. Only the bound walker may move
    /// this field; the guard catches wiring mistakes, it is not a security
    /// boundary.
    pub fn step(&mut self, walker: WalkerId, direction: Direction, step_len: f64) -> Result<()> {
        if walker != self.bound {
            return Err(WalkError::OwnershipViolation {
                walker,
                bound: self.bound,
            });
        }
        let (dx, dy) = direction.displacement(step_len);
        self.loc = self.boundary.apply(self.loc.offset(dx, dy));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_field_never_resets() {
        let id = WalkerId::new(0);
        let mut field = Field::standard(id);
        field.step(id, Direction::North, 1.0).unwrap();
        field.step(id, Direction::East, 1.0).unwrap();
        // (1, 1) is on y = x but the standard field leaves it alone
        assert_eq!(field.location(), Position::new(1.0, 1.0));
    }

    #[test]
    fn test_diagonal_reset_on_y_equals_x() {
        let id = WalkerId::new(0);
        let mut field = Field::with_diagonal_reset(id);
        field.step(id, Direction::North, 1.0).unwrap();
        assert_eq!(field.location(), Position::new(0.0, 1.0));
        // stepping East lands on (1, 1), which teleports home
        field.step(id, Direction::East, 1.0).unwrap();
        assert_eq!(field.location(), Position::ORIGIN);
    }

    #[test]
    fn test_diagonal_reset_on_y_equals_minus_x() {
        let id = WalkerId::new(0);
        let mut field = Field::with_diagonal_reset(id);
        field.step(id, Direction::South, 1.0).unwrap();
        field.step(id, Direction::East, 1.0).unwrap();
        // (1, -1) lies on y = -x
        assert_eq!(field.location(), Position::ORIGIN);
    }

    #[test]
    fn test_diagonal_reset_leaves_off_line_positions_unchanged() {
        let id = WalkerId::new(0);
        let mut field = Field::new(id, Position::new(2.0, 0.0), BoundaryRule::DiagonalReset);
        field.step(id, Direction::East, 1.0).unwrap();
        assert_eq!(field.location(), Position::new(3.0, 0.0));
    }

    #[test]
    fn test_reset_rule_starts_triggered_at_origin_moves() {
        // the origin itself satisfies |x| == |y|; a walker that starts there
        // only resets once a move lands back on a diagonal
        let id = WalkerId::new(7);
        let mut field = Field::with_diagonal_reset(id);
        field.step(id, Direction::West, 1.0).unwrap();
        assert_eq!(field.location(), Position::new(-1.0, 0.0));
    }

    #[test]
    fn test_ownership_guard() {
        let bound = WalkerId::new(1);
        let intruder = WalkerId::new(2);
        let mut field = Field::standard(bound);
        let err = field.step(intruder, Direction::North, 1.0).unwrap_err();
        assert!(matches!(err, WalkError::OwnershipViolation { .. }));
        assert_eq!(field.location(), Position::ORIGIN, "failed step must not move");
    }
}
