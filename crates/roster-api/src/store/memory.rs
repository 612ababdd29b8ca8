//! Process-local user store.

use std::sync::Arc;

use async_trait::async_trait;
use roster_api_models::{NewUser, UserRecord};
use tokio::sync::RwLock;

use super::{SharedUserStore, StoreError, StoreResult, UserStore};

/// Process-local user store.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    next_id: u64,
    users: Vec<UserRecord>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the store for sharing across handlers.
    #[must_use]
    pub fn shared(self) -> SharedUserStore {
        Arc::new(self)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> StoreResult<Vec<UserRecord>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn insert(&self, user: NewUser) -> StoreResult<UserRecord> {
        let mut state = self.inner.write().await;
        if state
            .users
            .iter()
            .any(|existing| existing.username == user.username)
        {
            return Err(StoreError::DuplicateUsername {
                username: user.username,
            });
        }
        state.next_id += 1;
        let record = UserRecord {
            id: Some(state.next_id),
            username: user.username,
            email: user.email,
        };
        state.users.push(record.clone());
        Ok(record)
    }
}
