use thiserror::Error;

/// Errors that can occur when validating robot requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RobotError {
    #[error("Robot name cannot be empty")]
    EmptyName,
    #[error("Robot type cannot be empty")]
    EmptyType,
}
