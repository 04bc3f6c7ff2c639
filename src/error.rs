//! Unified error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<SessionError> for MonitorError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Auth(e) => MonitorError::Auth(e),
            SessionError::Validation(e) => MonitorError::Validation(e),
            SessionError::Storage(e) => MonitorError::Storage(e),
        }
    }
}

/// Upstream fetch errors (network, timeout, non-2xx, bad payload).
#[derive(Error, Debug)]
pub enum FetchError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    #[error("Unexpected payload: {0}")]
    Decode(String),
}

/// Authentication errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,
}

/// Sign-up form validation errors, surfaced to the user verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Key-value storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors returned by session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_maps_onto_monitor_error() {
        let err: MonitorError = SessionError::from(AuthError::InvalidCredentials).into();
        assert!(matches!(err, MonitorError::Auth(AuthError::InvalidCredentials)));
        assert_eq!(err.to_string(), "Auth error: Invalid email or password");

        let err: MonitorError = SessionError::from(ValidationError::PasswordMismatch).into();
        assert!(matches!(err, MonitorError::Validation(_)));
    }
}
