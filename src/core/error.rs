use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("Walker {walker:?} moved on a field bound to {bound:?}")]
    OwnershipViolation {
        walker: crate::core::types::WalkerId,
        bound: crate::core::types::WalkerId,
    },

    #[error("Misconfigured policy: {0}")]
    MisconfiguredPolicy(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WalkError>;
