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

//! Roster application bootstrap wiring.
//!
//! Layout: `config.rs` (environment loading), `bootstrap.rs` (service wiring),
//! `error.rs` (application errors).

/// Application bootstrap.
pub mod bootstrap;
/// Environment-driven configuration.
pub mod config;
/// Application error types.
pub mod error;

pub use bootstrap::run_app;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
