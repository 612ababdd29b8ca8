//! Shared state handed to every handler.

use crate::store::SharedUserStore;

/// Dependencies available to request handlers.
pub struct ApiState {
    /// User storage backend.
    pub users: SharedUserStore,
}

impl ApiState {
    /// Build handler state around a user store.
    #[must_use]
    pub fn new(users: SharedUserStore) -> Self {
        Self { users }
    }
}
