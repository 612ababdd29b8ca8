//! HTTP surface modules (routers, handlers, problem responses).

/// Shared constants and header names for HTTP surfaces.
pub(crate) mod constants;
/// Problem response helpers and error types.
pub(crate) mod errors;
/// Health endpoint.
pub(crate) mod health;
/// Router construction and server host.
pub mod router;
/// User directory handlers.
pub(crate) mod users;
