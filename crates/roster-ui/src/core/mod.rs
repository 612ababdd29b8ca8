//! Core, DOM-free primitives for the Web UI.
pub mod backend;
pub mod flows;
pub mod store;
