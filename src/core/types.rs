//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::WalkError;

/// Identity label for a walker, used by the field ownership guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalkerId(pub u32);

impl WalkerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Immutable 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a new position displaced by (dx, dy); never mutates in place
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Cardinal movement direction, ordered cyclically N -> E -> S -> W -> N.
///
/// The cyclic order is load-bearing: the Gaussian policy resolves its
/// "left"/"right"/"opposite" neighbors by walking this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Signed displacement for one step of the given length. Always
    /// axis-aligned; no diagonal steps.
    pub fn displacement(&self, step: f64) -> (f64, f64) {
        match self {
            Direction::North => (0.0, step),
            Direction::South => (0.0, -step),
            Direction::East => (step, 0.0),
            Direction::West => (-step, 0.0),
        }
    }

    /// Counter-clockwise neighbor in the cycle (N.left() == W)
    pub fn left(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Clockwise neighbor in the cycle (N.right() == E)
    pub fn right(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl FromStr for Direction {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "e" | "east" => Ok(Direction::East),
            "s" | "south" => Ok(Direction::South),
            "w" | "west" => Ok(Direction::West),
            other => Err(WalkError::InvalidDirection(other.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        write!(f, "{}", name)
    }
}
