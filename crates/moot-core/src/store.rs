//! The `BoardStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `moot-store-sqlite`).
//! Higher layers (the [`Board`](crate::board::Board) engine, `moot-api`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  session::SessionId,
  suggestion::{Category, RankedSuggestion, Suggestion, SuggestionId},
};

/// Abstraction over a suggestion-board storage backend.
///
/// Constraint violations caused by racing callers — a duplicate vote insert,
/// a vote against a suggestion deleted mid-flight — are absorbed by the
/// backend rather than surfaced; `Self::Error` carries genuine storage
/// failures only.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait BoardStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a suggestion with a fresh id and the current timestamp.
  ///
  /// Returns `None` without inserting when `content` trims to empty; the
  /// stored (and returned) content is the trimmed form.
  fn create_suggestion(
    &self,
    category: Category,
    content: String,
  ) -> impl Future<Output = Result<Option<Suggestion>, Self::Error>> + Send + '_;

  /// Delete a suggestion and, as part of the same atomic operation, every
  /// vote referencing it. Deleting a missing id is a no-op.
  fn delete_suggestion(
    &self,
    id: SuggestionId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Whether `session` currently holds a vote on `id`. Pure lookup.
  fn has_vote(
    &self,
    id: SuggestionId,
    session: SessionId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Insert a vote row, returning whether a row was actually inserted.
  ///
  /// A duplicate (`id`, `session`) pair and a vote against a just-deleted
  /// suggestion are both absorbed as `false`, never errors.
  fn insert_vote(
    &self,
    id: SuggestionId,
    session: SessionId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete the single vote row for (`id`, `session`), if any. Idempotent.
  fn delete_vote_for(
    &self,
    id: SuggestionId,
    session: SessionId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All suggestions in `category`, ordered by (vote count descending,
  /// creation time ascending, id ascending), each annotated with its live
  /// vote count and whether `session` holds a vote on it.
  fn list_by_category(
    &self,
    category: Category,
    session: SessionId,
  ) -> impl Future<Output = Result<Vec<RankedSuggestion>, Self::Error>> + Send + '_;
}
