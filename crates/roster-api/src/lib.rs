#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! HTTP API serving the user directory and health endpoints.
//!
//! Layout: `http/` (router, handlers, problem responses), `store/` (user
//! storage seam), `state.rs` (shared handler state), `error.rs` (server errors).

/// Server bootstrap and serve errors.
pub mod error;
/// HTTP surface modules.
pub mod http;
/// Shared handler state.
pub mod state;
/// User storage abstraction with SQLite and in-memory implementations.
pub mod store;

pub use error::{ApiServerError, ApiServerResult};
pub use http::router::ApiServer;
pub use state::ApiState;
pub use store::{
    InMemoryUserStore, SharedUserStore, SqliteUserStore, StoreError, StoreResult, UserStore,
};
