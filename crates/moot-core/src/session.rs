//! Session identity.
//!
//! There are no accounts. The presentation layer mints one opaque token per
//! client session and passes it on every vote and listing call; the core
//! treats it as an untrusted but stable string key and never validates it.

use serde::{Deserialize, Serialize};

/// An opaque per-session token, stable for the lifetime of one client
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for SessionId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for SessionId {
  fn from(s: String) -> Self { Self(s) }
}
