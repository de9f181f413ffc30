use std::sync::Arc;
use std::time::Instant;

use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, routing::get};

use super::api::api_router;
use super::multipart::MAX_UPLOAD_BYTES;
use crate::cache::Cache;
use crate::config::JwtConfig;
use crate::service::Services;
use crate::store::Store;
use crate::upload::Uploader;

/// Room for the JSON payload and multipart framing on top of the file.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

pub struct AppState {
    pub services: Services,
    pub jwt: JwtConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        cache: Arc<dyn Cache>,
        uploader: Arc<dyn Uploader>,
        jwt: JwtConfig,
    ) -> Self {
        Self {
            services: Services::new(store, cache, uploader),
            jwt,
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + BODY_OVERHEAD_BYTES))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
