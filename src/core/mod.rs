pub mod error;
pub mod types;

pub use error::{Result, WalkError};
pub use types::{Direction, Position, WalkerId};
