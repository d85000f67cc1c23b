//! moot server assembly.
//!
//! Wires the JSON API onto an HTTP router with per-request tracing. The
//! binary in `main.rs` handles configuration and startup.

use std::{path::PathBuf, sync::Arc};

use axum::Router;
use moot_core::{Board, BoardStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// with `MOOT_`-prefixed environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: the JSON API nested under `/api`.
pub fn router<S>(board: Arc<Board<S>>) -> Router
where
  S: BoardStore + 'static,
{
  Router::new()
    .nest("/api", moot_api::api_router(board))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
