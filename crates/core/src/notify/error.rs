use thiserror::Error;

/// Reasons a delivery cannot be turned into a notification.
///
/// Consumers log these and drop the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Message has no content type")]
    MissingContentType,
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("Invalid robot JSON: {0}")]
    InvalidJson(String),
    #[error("Text payload is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}
