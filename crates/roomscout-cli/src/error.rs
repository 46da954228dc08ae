//! Error types for the roomscout binary.

use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum RoomscoutError {
    #[error("no config file found; create ~/.config/roomscout/config.toml or pass --config <path>")]
    ConfigNotFound,

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config error: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("calendar backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error(transparent)]
    Slots(#[from] slot_engine::SlotError),

    #[error("no bookable rooms matched the configured prefixes")]
    NoRooms,
}

impl RoomscoutError {
    /// A user interrupt at a prompt — a clean exit, not a failure.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Self::Prompt(
                inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted
            )
        )
    }
}
