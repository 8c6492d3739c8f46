//! LeetNext · LeetCode Problem Suggester Backend
//!
//! - Axum HTTP form endpoint over the LeetCode catalog/GraphQL API
//! - Per-request fetch + filter + random pick, no persisted state
//!
//! Important env variables:
//!   PORT                 : u16 (default 3000)
//!   LEETCODE_BASE_URL    : default "https://leetcode.com"
//!   SUGGESTER_CONFIG_PATH: path to TOML config (base URL, sample cap, timeout)
//!   LOG_LEVEL            : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT           : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use leetnext_backend::routes::build_router;
use leetnext_backend::state::AppState;
use leetnext_backend::telemetry;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (config + outbound LeetCode client).
  let state = Arc::new(AppState::new()?);

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "leetnext_backend", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if tokio::signal::ctrl_c().await.is_ok() {
    info!(target: "leetnext_backend", "Shutdown signal received");
  }
}
