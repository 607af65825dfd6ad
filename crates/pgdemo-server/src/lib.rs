//! Welcome page and PostgreSQL version lookup over HTTP.

pub mod db;
pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use pgdemo_config::DbConfig;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const ADDR: &str = "0.0.0.0:5000";

/// Read-only state shared by every request.
pub struct ServerState {
    pub db: DbConfig,
}

pub fn router(state: Arc<ServerState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/", get(handlers::index))
        .route("/data", get(handlers::data::get))
        .layer(trace_layer)
        .with_state(state)
}
