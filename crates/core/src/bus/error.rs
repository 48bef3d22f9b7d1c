use thiserror::Error;

/// Errors reported by a broker backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusError {
    #[error("Exchange not found: {0}")]
    ExchangeNotFound(String),
    #[error("Queue not found: {0}")]
    QueueNotFound(String),
    #[error("Queue is full: {0}")]
    QueueFull(String),
    #[error("Queue already has a consumer: {0}")]
    AlreadyConsumed(String),
    #[error("Broker connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Broker operation failed: {0}")]
    OperationFailed(String),
    #[error("Invalid envelope: {0}")]
    Envelope(String),
}

/// Result type for broker operations.
pub type Result<T> = std::result::Result<T, BusError>;
