//! SQL schema for the moot SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA foreign_keys = ON;

-- AUTOINCREMENT keeps ids monotonic; rowids are never reused after delete.
CREATE TABLE IF NOT EXISTS suggestions (
    suggestion_id INTEGER PRIMARY KEY AUTOINCREMENT,
    category      TEXT NOT NULL CHECK (category IN ('food', 'festival')),
    content       TEXT NOT NULL,
    created_at    TEXT NOT NULL    -- RFC 3339 UTC; server-assigned
);

-- One toggleable vote per (suggestion, session) pair.
CREATE TABLE IF NOT EXISTS votes (
    vote_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    suggestion_id INTEGER NOT NULL REFERENCES suggestions(suggestion_id) ON DELETE CASCADE,
    session_id    TEXT NOT NULL,
    created_at    TEXT NOT NULL,
    UNIQUE (suggestion_id, session_id)
);

CREATE INDEX IF NOT EXISTS suggestions_category_idx ON suggestions(category);
CREATE INDEX IF NOT EXISTS votes_suggestion_idx     ON votes(suggestion_id);
CREATE INDEX IF NOT EXISTS votes_session_idx        ON votes(session_id);

PRAGMA user_version = 1;
";
