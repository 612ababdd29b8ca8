//! User directory feature slice.
//!
//! # Design
//! - Keep form inputs as strings and convert to the wire type only on submit.
//! - Replace the rendered list wholesale on every refresh.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
