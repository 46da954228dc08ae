//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("meeting duration must be positive, got {0} minutes")]
    InvalidDuration(i64),

    #[error("scan increment must be positive, got {0} minutes")]
    InvalidIncrement(i64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
