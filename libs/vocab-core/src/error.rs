//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised by session operations.
///
/// Most misuse (navigating past the ends, deleting a missing word, guessing
/// outside check mode) is a no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}
