//! In-memory session store

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{DomainError, SessionRecord, SessionStore};

/// Session store backed by process memory.
///
/// The host application fills it after login and clears it on logout; the
/// guard only reads through [`SessionStore`].
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    record: RwLock<Option<SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: SessionRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }

    pub fn replace(&self, record: Option<SessionRecord>) -> Result<(), DomainError> {
        let mut current = self
            .record
            .write()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;
        *current = record;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<SessionRecord>, DomainError> {
        let record = self
            .record
            .read()
            .map_err(|_| DomainError::storage("Failed to acquire lock"))?;
        Ok(record.clone())
    }
}
