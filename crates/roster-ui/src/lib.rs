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
#![allow(clippy::module_name_repetitions)]
//! Roster Web UI.
//!
//! Lists users from `/api/users`, submits new users through the same
//! endpoint, and reports `/health` when the host page asks for it. Flow and
//! state logic lives in DOM-free modules so it can be tested natively.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::{check_health, run_app};
