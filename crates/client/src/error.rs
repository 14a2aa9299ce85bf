use reqwest::StatusCode;
use thiserror::Error;

/// A specialized `Result` for API client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures surfaced by [`crate::PmtClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client could not be constructed from the given configuration.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Connection, timeout, or body-decoding failure below the API layer.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The operation requires a logged-in user and no session is present.
    #[error("Not logged in")]
    NotLoggedIn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_render_status_and_body() {
        let err = ClientError::Api {
            status: StatusCode::NOT_FOUND,
            body: "no such project".to_owned(),
        };
        assert_eq!(err.to_string(), "API error 404 Not Found: no such project");
    }

    #[test]
    fn missing_session_has_a_terse_message() {
        assert_eq!(ClientError::NotLoggedIn.to_string(), "Not logged in");
    }
}
