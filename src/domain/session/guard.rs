//! Access guard: decides whether the current session may open a protected view

use serde::Serialize;
use tracing::{debug, warn};

use super::entity::{Role, Session, SessionRecord};
use super::store::SessionStore;

/// Why access was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UnauthorizedReason {
    /// No session, or one too malformed to trust
    NoSession,
    /// Authenticated, but with a different role than the view requires
    RoleMismatch { actual: Role, required: Role },
}

/// Outcome of evaluating a session against a view's role requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum AccessDecision {
    Loading,
    Authorized(Session),
    Unauthorized(UnauthorizedReason),
}

impl AccessDecision {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authorized(session) => Some(session),
            _ => None,
        }
    }
}

/// Evaluate a persisted session record against an optional role requirement.
///
/// A missing record, a record with missing fields or a role outside
/// `admin`/`user` is always [`UnauthorizedReason::NoSession`], even when no
/// role is required. Never returns [`AccessDecision::Loading`].
pub fn resolve_access(record: Option<&SessionRecord>, required_role: Option<Role>) -> AccessDecision {
    let Some(record) = record else {
        return AccessDecision::Unauthorized(UnauthorizedReason::NoSession);
    };

    let session = match record.validate() {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "Rejecting malformed session");
            return AccessDecision::Unauthorized(UnauthorizedReason::NoSession);
        }
    };

    match required_role {
        Some(required) if session.role() != required => {
            AccessDecision::Unauthorized(UnauthorizedReason::RoleMismatch {
                actual: session.role(),
                required,
            })
        }
        _ => AccessDecision::Authorized(session),
    }
}

/// One guard instance per mount of a protected view.
///
/// Starts in [`AccessDecision::Loading`] and settles exactly once; later
/// resolve calls return the settled decision unchanged. Re-evaluating means
/// creating a new guard.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    required_role: Option<Role>,
    decision: AccessDecision,
}

impl AccessGuard {
    pub fn new(required_role: Option<Role>) -> Self {
        Self {
            required_role,
            decision: AccessDecision::Loading,
        }
    }

    pub fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    pub fn decision(&self) -> &AccessDecision {
        &self.decision
    }

    pub fn is_settled(&self) -> bool {
        !self.decision.is_loading()
    }

    /// Settle the guard from an already loaded record
    pub fn resolve(&mut self, record: Option<&SessionRecord>) -> &AccessDecision {
        if self.is_settled() {
            debug!("Access guard already settled, ignoring new session input");
            return &self.decision;
        }

        self.decision = resolve_access(record, self.required_role);
        debug!(decision = ?self.decision, "Access guard settled");
        &self.decision
    }

    /// Load the record from `store`, then settle.
    ///
    /// A store failure counts as having no session.
    pub async fn resolve_from(&mut self, store: &dyn SessionStore) -> &AccessDecision {
        if self.is_settled() {
            return &self.decision;
        }

        let record = match store.load().await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted session");
                None
            }
        };

        self.resolve(record.as_ref())
    }
}
