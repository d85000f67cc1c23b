//! The `Board` engine — toggle/rank semantics over any [`BoardStore`].

use tokio::sync::Mutex;

use crate::{
  session::SessionId,
  store::BoardStore,
  suggestion::{Category, RankedSuggestion, Suggestion, SuggestionId},
};

/// The user-facing operations of the suggestion board.
///
/// Every mutation is serialised on a single global write gate, so the
/// toggle's check-then-act sequence never interleaves with another mutation
/// of the vote rows. Reads bypass the gate; the backend serves them from a
/// consistent snapshot.
pub struct Board<S> {
  store:      S,
  write_gate: Mutex<()>,
}

impl<S: BoardStore> Board<S> {
  pub fn new(store: S) -> Self {
    Self {
      store,
      write_gate: Mutex::new(()),
    }
  }

  /// Direct access to the underlying store.
  pub fn store(&self) -> &S { &self.store }

  /// Submit a suggestion. Returns `None` when `text` trims to empty so the
  /// caller can reset its input state; otherwise the stored suggestion.
  pub async fn add_suggestion(
    &self,
    category: Category,
    text: &str,
  ) -> Result<Option<Suggestion>, S::Error> {
    let content = text.trim();
    if content.is_empty() {
      return Ok(None);
    }

    let _gate = self.write_gate.lock().await;
    let suggestion = self
      .store
      .create_suggestion(category, content.to_owned())
      .await?;
    if let Some(s) = &suggestion {
      tracing::debug!(id = %s.suggestion_id, ?category, "suggestion added");
    }
    Ok(suggestion)
  }

  /// Flip `session`'s vote on `id` and return the new state.
  ///
  /// A (suggestion, session) pair is either VOTED or UNVOTED. The current
  /// state is read and the opposite action applied while the write gate is
  /// held, so two racing toggles cannot both observe UNVOTED and both
  /// insert. Toggling a suggestion deleted out from under a stale view is a
  /// no-op returning `false`.
  pub async fn toggle_vote(
    &self,
    id: SuggestionId,
    session: &SessionId,
  ) -> Result<bool, S::Error> {
    let _gate = self.write_gate.lock().await;
    let voted = if self.store.has_vote(id, session.clone()).await? {
      self.store.delete_vote_for(id, session.clone()).await?;
      false
    } else {
      self.store.insert_vote(id, session.clone()).await?
    };
    tracing::debug!(id = %id, voted, "vote toggled");
    Ok(voted)
  }

  /// Delete a suggestion and all votes on it. Idempotent; unknown ids are a
  /// no-op.
  pub async fn delete_suggestion(&self, id: SuggestionId) -> Result<(), S::Error> {
    let _gate = self.write_gate.lock().await;
    self.store.delete_suggestion(id).await
  }

  /// The ranked listing for `category`, annotated for `session`.
  pub async fn list_ranked(
    &self,
    category: Category,
    session: &SessionId,
  ) -> Result<Vec<RankedSuggestion>, S::Error> {
    self.store.list_by_category(category, session.clone()).await
  }
}
