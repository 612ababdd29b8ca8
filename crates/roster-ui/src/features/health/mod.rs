//! Health feature slice.
//!
//! # Design
//! - Read the health line from the `AppStore` only.
//! - Keep rendering logic in the view module.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
