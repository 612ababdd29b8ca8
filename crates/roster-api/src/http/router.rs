//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, Request, Uri, header::CONTENT_TYPE},
    routing::get,
};
use roster_telemetry::{build_sha, layers::HEADER_REQUEST_ID};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{Span, info};

use crate::error::{ApiServerError, ApiServerResult};
use crate::http::errors::ApiError;
use crate::http::health::health;
use crate::http::users::{create_user, list_users};
use crate::state::ApiState;
use crate::store::SharedUserStore;

/// Axum router wrapper that hosts the Roster API services.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct a new API server around a user store.
    ///
    /// When `static_dir` is set, unmatched requests are served from that
    /// directory (`index.html` for `/`).
    #[must_use]
    pub fn new(users: SharedUserStore, static_dir: Option<PathBuf>) -> Self {
        let state = Arc::new(ApiState::new(users));
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();

                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(roster_telemetry::set_request_id_layer())
            .layer(roster_telemetry::propagate_request_id_layer())
            .layer(trace_layer);

        let router = Self::api_routes();
        let router = match static_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "serving static assets");
                router.fallback_service(ServeDir::new(dir))
            }
            None => router.fallback(not_found),
        };
        let router = router.layer(cors_layer).layer(layered).with_state(state);

        Self { router }
    }

    fn api_routes() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/health", get(health))
            .route("/api/users", get(list_users).post(create_user))
    }

    /// Serve the API using the configured router on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> ApiServerResult<()> {
        info!(addr = %addr, "starting api listener");
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }

    #[cfg(test)]
    pub(crate) const fn router(&self) -> &Router {
        &self.router
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {}", uri.path()))
}
