//! Core types and trait definitions for the moot suggestion board.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod board;
pub mod session;
pub mod store;
pub mod suggestion;

pub use board::Board;
pub use session::SessionId;
pub use store::BoardStore;
pub use suggestion::{Category, RankedSuggestion, Suggestion, SuggestionId};
