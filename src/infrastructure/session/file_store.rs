//! File-backed session store
//!
//! The file mirrors browser local storage: a JSON object whose values are
//! either JSON-encoded strings or plain JSON values, keyed by entry name.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{DomainError, SessionRecord, SessionStore};

/// Entry name the login flow stores the session under
pub const DEFAULT_SESSION_KEY: &str = "currentUser";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    key: String,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn decode_entry(&self, entry: Value) -> Option<SessionRecord> {
        let parsed = match entry {
            Value::Null => return None,
            Value::String(raw) => serde_json::from_str::<Option<SessionRecord>>(&raw),
            value @ Value::Object(_) => serde_json::from_value(value).map(Some),
            other => {
                warn!(key = %self.key, kind = ?other, "Ignoring session entry of unexpected type");
                return None;
            }
        };

        parsed.unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "Ignoring unparseable session entry");
            None
        })
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<SessionRecord>, DomainError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session file");
                return Ok(None);
            }
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read session file '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let mut entries = match serde_json::from_str::<serde_json::Map<String, Value>>(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is not a JSON object");
                return Ok(None);
            }
        };

        Ok(entries
            .remove(&self.key)
            .and_then(|entry| self.decode_entry(entry)))
    }
}
