//! Backend seam between the interaction flows and the HTTP client.
//!
//! # Design
//! - Browser futures are single-threaded, so the trait is `?Send`.
//! - Errors keep their cause for console diagnostics; flows treat every
//!   variant as the same "not success" outcome.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use roster_api_models::{HealthStatus, NewUser, UserRecord};

/// Path of the user collection endpoint.
pub const USERS_PATH: &str = "/api/users";
/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Reasons a backend request did not succeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendError {
    /// The request never produced a response.
    Transport {
        /// Client-reported failure text.
        message: String,
    },
    /// The server answered with a non-2xx status.
    Status {
        /// HTTP status code returned.
        status: u16,
    },
    /// The response body was not the expected JSON document.
    Decode {
        /// Decoder failure text.
        message: String,
    },
}

impl Display for BackendError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { message } => write!(formatter, "request failed: {message}"),
            Self::Status { status } => write!(formatter, "server responded with status {status}"),
            Self::Decode { message } => write!(formatter, "unexpected response body: {message}"),
        }
    }
}

impl Error for BackendError {}

/// Operations the UI performs against the Roster API.
#[async_trait(?Send)]
pub trait RosterBackend {
    /// Fetch the current user collection (`GET /api/users`).
    async fn list_users(&self) -> Result<Vec<UserRecord>, BackendError>;
    /// Submit a new user (`POST /api/users`); the response body is not read.
    async fn create_user(&self, user: &NewUser) -> Result<(), BackendError>;
    /// Fetch the health document (`GET /health`).
    ///
    /// The body is decoded whatever the response status; only a transport or
    /// decode failure is an error.
    async fn fetch_health(&self) -> Result<HealthStatus, BackendError>;
}

/// Decode a `/health` response body.
///
/// The status code is not consulted: a 503 carrying `{"status":"down"}`
/// still yields a status document.
///
/// # Errors
///
/// Returns [`BackendError::Decode`] when the body is not a health document.
pub fn decode_health(body: &str) -> Result<HealthStatus, BackendError> {
    serde_json::from_str(body).map_err(|err| BackendError::Decode {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(
            BackendError::Status { status: 400 }.to_string(),
            "server responded with status 400"
        );
        assert_eq!(
            BackendError::Transport {
                message: "offline".to_string()
            }
            .to_string(),
            "request failed: offline"
        );
        assert_eq!(
            BackendError::Decode {
                message: "expected value".to_string()
            }
            .to_string(),
            "unexpected response body: expected value"
        );
    }

    #[test]
    fn health_body_decodes_independent_of_status() {
        let health = decode_health(r#"{"status":"down"}"#).expect("status document");
        assert_eq!(health.status, "down");
    }

    #[test]
    fn malformed_health_body_is_a_decode_error() {
        let err = decode_health("<html>Service Unavailable</html>").expect_err("not json");
        assert!(matches!(err, BackendError::Decode { .. }));
    }
}
