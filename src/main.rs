//! EDUASSIST · "His First Flight" lesson plan & quiz assistant
//!
//! - Axum HTTP API (`/ask`, `/health`, `/api/v1/generate`)
//! - Rule-based intent classification + templated content
//! - Static SPA fallback (STATIC_DIR/index.html)
//!
//! Important env variables:
//!   PORT                  : u16 (default 5000)
//!   STATIC_DIR            : front-end directory (default "./static")
//!   ASSISTANT_CONFIG_PATH : path to TOML config (messages + optional templates)
//!   LOG_LEVEL             : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT            : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod seeds;
mod classifier;
mod generator;
mod state;
mod logic;
mod formatter;
mod protocol;
mod routes;

use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::build_router;
use crate::state::AppState;

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Immutable service object shared by every request.
  let state = Arc::new(AppState::new());

  let static_dir = std::env::var("STATIC_DIR")
    .map(PathBuf::from)
    .unwrap_or_else(|_| PathBuf::from("./static"));
  let app = build_router(state, &static_dir);

  let port = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .unwrap_or(DEFAULT_PORT);
  let addr = SocketAddr::from(([0, 0, 0, 0], port));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "eduassist", %addr, static_dir = %static_dir.display(), "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "eduassist", error = %e, "Failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  info!(target: "eduassist", "Shutdown signal received");
}
