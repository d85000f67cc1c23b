//! Suggestion — a categorised text item submitted by a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed category a suggestion is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Food,
  Festival,
}

/// Monotonically assigned suggestion identifier. Ids are never reused,
/// even after the suggestion is deleted.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SuggestionId(pub i64);

impl std::fmt::Display for SuggestionId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

/// A stored suggestion. `content` is always non-empty trimmed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
  pub suggestion_id: SuggestionId,
  pub category:      Category,
  pub content:       String,
  pub created_at:    DateTime<Utc>,
}

/// One row of the ranked listing — computed on read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSuggestion {
  pub suggestion_id:      SuggestionId,
  pub content:            String,
  /// Live count over the vote rows, not a cached counter.
  pub vote_count:         u64,
  pub created_at:         DateTime<Utc>,
  /// Whether the session requesting the listing currently holds a vote.
  pub voted_by_requester: bool,
}
