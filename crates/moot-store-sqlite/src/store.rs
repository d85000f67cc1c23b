//! [`SqliteStore`] — the SQLite implementation of [`BoardStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use moot_core::{
  session::SessionId,
  store::BoardStore,
  suggestion::{Category, RankedSuggestion, Suggestion, SuggestionId},
};

use crate::{
  Error, Result,
  encode::{RawRanked, encode_category, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A suggestion board store backed by a single SQLite file.
///
/// All statements execute on `tokio_rusqlite`'s dedicated connection thread,
/// one `call` at a time, so every operation observes a consistent snapshot.
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path.as_ref().to_owned()).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a suggestion with a caller-chosen timestamp, bypassing the
  /// server-assigned `created_at`. Ordering fixtures use this to pin exact
  /// creation times.
  #[cfg(test)]
  pub(crate) async fn insert_suggestion_at(
    &self,
    category: Category,
    content: &str,
    created_at: chrono::DateTime<Utc>,
  ) -> Result<Suggestion> {
    let category_str = encode_category(category).to_owned();
    let content_str = content.to_owned();
    let at_str = encode_dt(created_at);

    let content_param = content_str.clone();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO suggestions (category, content, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![category_str, content_param, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Suggestion {
      suggestion_id: SuggestionId(id),
      category,
      content: content_str,
      created_at,
    })
  }
}

// ─── BoardStore impl ─────────────────────────────────────────────────────────

impl BoardStore for SqliteStore {
  type Error = Error;

  async fn create_suggestion(
    &self,
    category: Category,
    content: String,
  ) -> Result<Option<Suggestion>> {
    let content = content.trim().to_owned();
    if content.is_empty() {
      return Ok(None);
    }

    let created_at = Utc::now();
    let category_str = encode_category(category).to_owned();
    let at_str = encode_dt(created_at);

    let content_param = content.clone();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO suggestions (category, content, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![category_str, content_param, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Some(Suggestion {
      suggestion_id: SuggestionId(id),
      category,
      content,
      created_at,
    }))
  }

  async fn delete_suggestion(&self, id: SuggestionId) -> Result<()> {
    let raw_id = id.0;
    self
      .conn
      .call(move |conn| {
        // ON DELETE CASCADE removes the vote rows in the same statement.
        conn.execute(
          "DELETE FROM suggestions WHERE suggestion_id = ?1",
          rusqlite::params![raw_id],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn has_vote(&self, id: SuggestionId, session: SessionId) -> Result<bool> {
    let raw_id = id.0;
    let session_str = session.0;

    let held: bool = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM votes
               WHERE suggestion_id = ?1 AND session_id = ?2
               LIMIT 1",
              rusqlite::params![raw_id, session_str],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;

    Ok(held)
  }

  async fn insert_vote(&self, id: SuggestionId, session: SessionId) -> Result<bool> {
    let raw_id = id.0;
    let session_str = session.0;
    let at_str = encode_dt(Utc::now());

    let inserted = self
      .conn
      .call(move |conn| {
        let changed = match conn.execute(
          "INSERT OR IGNORE INTO votes (suggestion_id, session_id, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![raw_id, session_str, at_str],
        ) {
          Ok(n) => n,
          // OR IGNORE absorbs the UNIQUE pair; a vote against a suggestion
          // deleted mid-flight still trips the foreign key and lands here.
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
          {
            0
          }
          Err(e) => return Err(e.into()),
        };
        Ok(changed == 1)
      })
      .await?;

    Ok(inserted)
  }

  async fn delete_vote_for(&self, id: SuggestionId, session: SessionId) -> Result<()> {
    let raw_id = id.0;
    let session_str = session.0;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM votes WHERE suggestion_id = ?1 AND session_id = ?2",
          rusqlite::params![raw_id, session_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_by_category(
    &self,
    category: Category,
    session: SessionId,
  ) -> Result<Vec<RankedSuggestion>> {
    let category_str = encode_category(category).to_owned();
    let session_str = session.0;

    let raws: Vec<RawRanked> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT s.suggestion_id,
                  s.content,
                  COALESCE(v.vote_count, 0) AS vote_count,
                  s.created_at,
                  CASE WHEN my.suggestion_id IS NULL THEN 0 ELSE 1 END AS voted
             FROM suggestions s
             LEFT JOIN (
                   SELECT suggestion_id, COUNT(*) AS vote_count
                     FROM votes
                    GROUP BY suggestion_id
             ) v ON v.suggestion_id = s.suggestion_id
             LEFT JOIN (
                   SELECT suggestion_id
                     FROM votes
                    WHERE session_id = ?1
             ) my ON my.suggestion_id = s.suggestion_id
            WHERE s.category = ?2
            ORDER BY vote_count DESC, s.created_at ASC, s.suggestion_id ASC",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![session_str, category_str], |row| {
            Ok(RawRanked {
              suggestion_id: row.get(0)?,
              content:       row.get(1)?,
              vote_count:    row.get(2)?,
              created_at:    row.get(3)?,
              voted:         row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRanked::into_ranked).collect()
  }
}
