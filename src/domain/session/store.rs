//! Persisted session store collaborator

use async_trait::async_trait;

use super::entity::SessionRecord;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the session the login flow persisted.
///
/// Creating, renewing and clearing sessions belongs to login and logout,
/// so the console only ever reads.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the current session record, `None` if nobody is logged in
    async fn load(&self) -> Result<Option<SessionRecord>, DomainError>;
}
