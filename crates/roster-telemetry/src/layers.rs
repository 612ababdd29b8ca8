//! Request ID middleware helpers for Tower-compatible stacks.
//!
//! # Design
//! - Provides dedicated layers for generating and propagating `x-request-id`.
//! - Keeps layer construction separate from logging initialisation to simplify wiring.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Header carrying the request identifier.
pub const HEADER_REQUEST_ID: &str = "x-request-id";

/// Factory for the `x-request-id` generator layer.
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer that propagates an incoming `x-request-id` header.
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
