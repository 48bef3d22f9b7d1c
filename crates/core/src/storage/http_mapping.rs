//! Mapping of repository errors onto HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Missing robots are 404, duplicates 409, an unreachable store 503 and bad
/// stored data 400. Query and row conversion failures are 500.
///
/// # Examples
///
/// ```
/// use robosync_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::robot_not_found(7);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}
