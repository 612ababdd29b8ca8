//! User storage seam for the API layer.
//!
//! # Design
//! - Handlers depend on the `UserStore` trait only.
//! - Every backend keeps insertion order and assigns sequential ids.
//! - Usernames are unique; a collision is reported, never overwritten.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use roster_api_models::{NewUser, UserRecord};

mod memory;
mod sqlite;

pub use memory::InMemoryUserStore;
pub use sqlite::SqliteUserStore;

/// Result alias for user storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by user storage backends.
#[derive(Debug)]
pub enum StoreError {
    /// A user with the same username already exists.
    DuplicateUsername {
        /// Username that collided.
        username: String,
    },
    /// A database operation failed.
    QueryFailed {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying SQL error.
        source: sqlx::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateUsername { .. } => formatter.write_str("username is already taken"),
            Self::QueryFailed { .. } => formatter.write_str("database operation failed"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateUsername { .. } => None,
            Self::QueryFailed { source, .. } => Some(source),
        }
    }
}

/// Storage backend used by the user handlers.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return every stored user in insertion order.
    async fn list(&self) -> StoreResult<Vec<UserRecord>>;
    /// Persist a new user and return the stored record.
    async fn insert(&self, user: NewUser) -> StoreResult<UserRecord>;
}

/// Shared reference to the user storage backend.
pub type SharedUserStore = Arc<dyn UserStore>;
