//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings, which order
//! lexicographically the same way they order chronologically. Categories
//! are stored as the lowercase names the schema CHECK constraint admits.

use chrono::{DateTime, Utc};
use moot_core::{Category, RankedSuggestion, SuggestionId};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Category ────────────────────────────────────────────────────────────────

pub fn encode_category(c: Category) -> &'static str {
  match c {
    Category::Food => "food",
    Category::Festival => "festival",
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read from one row of the ranked-listing aggregation query.
pub struct RawRanked {
  pub suggestion_id: i64,
  pub content:       String,
  pub vote_count:    i64,
  pub created_at:    String,
  pub voted:         bool,
}

impl RawRanked {
  pub fn into_ranked(self) -> Result<RankedSuggestion> {
    Ok(RankedSuggestion {
      suggestion_id:      SuggestionId(self.suggestion_id),
      content:            self.content,
      vote_count:         self.vote_count as u64,
      created_at:         decode_dt(&self.created_at)?,
      voted_by_requester: self.voted,
    })
  }
}
