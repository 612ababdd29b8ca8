//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store so the loader, the form and the
//!   host-triggered health check all write to the same place.
//! - Reducers replace whole slices; nothing is merged incrementally.

use roster_api_models::UserRecord;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

use crate::features::health::state::{HealthLine, HealthState};
use crate::features::users::state::UsersState;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Rendered user collection.
    pub users: UsersState,
    /// Rendered health status.
    pub health: HealthState,
}

/// Dispatcher for the global store.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

/// Replace the rendered user collection.
pub fn apply_users(store: &mut AppStore, users: Vec<UserRecord>) {
    store.users.replace(users);
}

/// Replace the rendered health line.
pub fn apply_health(store: &mut AppStore, line: HealthLine) {
    store.health.line = Some(line);
}
