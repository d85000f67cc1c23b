//! Handlers for `/suggestions` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/suggestions` | `?category=food\|festival&session_id=...` |
//! | `POST`   | `/suggestions` | Body: `{"category":"food","text":"..."}` |
//! | `DELETE` | `/suggestions/:id` | Always 204; unknown ids are a no-op |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use moot_core::{
  Board, BoardStore, Category, RankedSuggestion, SessionId, Suggestion, SuggestionId,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub category:   Category,
  /// The requesting session's token; drives `voted_by_requester`.
  pub session_id: SessionId,
}

/// `GET /suggestions?category=<category>&session_id=<token>` — the ranked
/// listing. Callers poll this endpoint to approximate live updates.
pub async fn list<S>(
  State(board): State<Arc<Board<S>>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<RankedSuggestion>>, ApiError>
where
  S: BoardStore,
{
  let ranked = board
    .list_ranked(params.category, &params.session_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(ranked))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub category: Category,
  pub text:     String,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
  pub accepted:   bool,
  pub suggestion: Option<Suggestion>,
}

/// `POST /suggestions` — body: `{"category":"food","text":"pizza"}`.
///
/// Returns 201 with the stored suggestion, or 200 with `{"accepted":false}`
/// when the text trims to empty so the caller can reset its input state.
pub async fn create<S>(
  State(board): State<Arc<Board<S>>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BoardStore,
{
  let suggestion = board
    .add_suggestion(body.category, &body.text)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let status = if suggestion.is_some() {
    StatusCode::CREATED
  } else {
    StatusCode::OK
  };
  Ok((
    status,
    Json(CreateResponse {
      accepted: suggestion.is_some(),
      suggestion,
    }),
  ))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /suggestions/:id` — removes the suggestion and all its votes.
///
/// Idempotent: repeated clicks and stale views get the same 204.
pub async fn delete_one<S>(
  State(board): State<Arc<Board<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: BoardStore,
{
  board
    .delete_suggestion(SuggestionId(id))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
