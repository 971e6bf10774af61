// Centralized error handling for the guard gateway

use thiserror::Error;

/// Errors that can occur while fetching the login session from the backend.
///
/// These never reach the guard: the session provider logs them and resolves
/// the session to the anonymous user, which funnels protected routes into
/// the login redirect.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to reach session endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Session endpoint returned status {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("Backend rejected session lookup: code {code}: {message}")]
    Backend { code: i32, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_message() {
        let err = SessionError::Backend {
            code: 40100,
            message: "not logged in".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Backend rejected session lookup: code 40100: not logged in"
        );
    }
}
