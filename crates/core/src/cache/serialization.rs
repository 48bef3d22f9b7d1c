//! Pure functions for serializing/deserializing robots to/from cache bytes.
//!
//! Cache values are the JSON snapshot of a robot, the same shape used by
//! structured events and HTTP responses.

use thiserror::Error;

use crate::robot::Robot;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a robot to JSON bytes.
pub fn serialize_robot(robot: &Robot) -> Result<Vec<u8>> {
    serde_json::to_vec(robot).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a robot.
pub fn deserialize_robot(bytes: &[u8]) -> Result<Robot> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
