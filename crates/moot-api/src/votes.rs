//! Handler for the vote-toggle endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/suggestions/:id/vote` | Body: `{"session_id":"..."}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use moot_core::{Board, BoardStore, SessionId, SuggestionId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ToggleBody {
  pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
  /// Whether the session holds a vote on the suggestion after the toggle.
  pub voted: bool,
}

/// `POST /suggestions/:id/vote` — flips the session's vote and returns the
/// new state.
///
/// Unknown ids (including a suggestion deleted under a stale view) are a
/// no-op returning `{"voted":false}`.
pub async fn toggle<S>(
  State(board): State<Arc<Board<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<ToggleBody>,
) -> Result<Json<ToggleResponse>, ApiError>
where
  S: BoardStore,
{
  let voted = board
    .toggle_vote(SuggestionId(id), &body.session_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(ToggleResponse { voted }))
}
