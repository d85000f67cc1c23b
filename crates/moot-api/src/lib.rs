//! JSON REST API for the moot suggestion board.
//!
//! Exposes an axum [`Router`] backed by any [`moot_core::BoardStore`],
//! wrapped in the [`Board`] engine. Session-id issuance, refresh cadence,
//! and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", moot_api::api_router(board.clone()))
//! ```

pub mod error;
pub mod suggestions;
pub mod votes;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use moot_core::{Board, BoardStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `board`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(board: Arc<Board<S>>) -> Router<()>
where
  S: BoardStore + 'static,
{
  Router::new()
    .route(
      "/suggestions",
      get(suggestions::list::<S>).post(suggestions::create::<S>),
    )
    .route("/suggestions/{id}", delete(suggestions::delete_one::<S>))
    .route("/suggestions/{id}/vote", post(votes::toggle::<S>))
    .with_state(board)
}
