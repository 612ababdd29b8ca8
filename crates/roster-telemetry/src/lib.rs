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
//! Telemetry primitives shared across the Roster workspace.
//!
//! Layout: `init.rs` (subscriber install), `layers.rs` (request id middleware),
//! `error.rs` (telemetry errors).

/// Telemetry error types.
pub mod error;
/// Logging initialisation and configuration.
pub mod init;
/// Request id layers for Tower stacks.
pub mod layers;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
pub use layers::{propagate_request_id_layer, set_request_id_layer};
