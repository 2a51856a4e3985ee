//! Router assembly: HTTP endpoints, static files, CORS, panic capture, and HTTP tracing.

use std::{any::Any, path::Path, sync::Arc};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use crate::protocol::ErrorOut;
use crate::state::AppState;

pub mod http;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred. Please try again.";

/// Build the application router with:
/// - chat endpoint `/ask` and `/health`
/// - structured API under `/api/v1/...`
/// - Static SPA from `static_dir` with index fallback
/// - CORS (allow any origin/method/headers)
/// - panics turned into a 500 JSON error
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let static_service = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/ask", post(http::http_post_ask))
        .route("/health", get(http::http_health))
        .route("/api/v1/generate", post(http::http_post_generate))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(target: "eduassist", %detail, "Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorOut { error: INTERNAL_ERROR_MESSAGE.into() }),
    )
        .into_response()
}
