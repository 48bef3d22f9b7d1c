use thiserror::Error;

use crate::bus::BusError;

/// Errors that can occur while emitting an event.
///
/// The robot service logs these and carries on.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to deliver event: {0}")]
    Bus(#[from] BusError),
}

/// Result type for publish operations.
pub type Result<T> = std::result::Result<T, PublishError>;
