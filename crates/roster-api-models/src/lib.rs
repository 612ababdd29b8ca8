#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Roster API.
//!
//! The browser client and the server both encode through these types so the
//! JSON contract for `/api/users` and `/health` has a single definition.

use serde::{Deserialize, Serialize};

/// Message returned by the server after a user is created.
pub const USER_CREATED_MESSAGE: &str = "User created successfully";

/// Status string reported by a healthy server.
pub const HEALTHY_STATUS: &str = "healthy";

/// RFC9457-compatible problem document surfaced on validation/runtime errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Parameters that failed validation, if applicable.
    pub invalid_params: Option<Vec<ProblemInvalidParam>>,
}

/// Invalid parameter pointer surfaced alongside a [`ProblemDetails`] payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemInvalidParam {
    /// JSON Pointer to the offending field.
    pub pointer: String,
    /// Human-readable description of the validation failure.
    pub message: String,
}

/// User entry as listed by `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Server-assigned identifier. Clients do not rely on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Account name shown emphasised in the list.
    pub username: String,
    /// Contact address shown after the username.
    pub email: String,
}

/// Request body accepted by `POST /api/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    /// Requested account name.
    pub username: String,
    /// Requested contact address.
    pub email: String,
}

impl NewUser {
    /// Build a request body from raw field values.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Response body returned by a successful `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCreated {
    /// Confirmation message.
    pub message: String,
}

impl Default for UserCreated {
    fn default() -> Self {
        Self {
            message: USER_CREATED_MESSAGE.to_string(),
        }
    }
}

/// Response body returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// Opaque status string reported by the server.
    pub status: String,
}

impl HealthStatus {
    /// Status document for a healthy server.
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
        }
    }
}
