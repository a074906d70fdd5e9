//! Where the rendering layer sends a caller the guard turned away

use serde::Serialize;

use super::entity::Role;
use super::guard::{AccessDecision, UnauthorizedReason};

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_LANDING_PATH: &str = "/dashboard";
pub const USER_LANDING_PATH: &str = "/home";

impl Role {
    /// Default page for callers with this role
    pub fn landing_path(&self) -> &'static str {
        match self {
            Self::Admin => ADMIN_LANDING_PATH,
            Self::User => USER_LANDING_PATH,
        }
    }
}

/// Navigation target for a refused caller. Always replaces the current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Redirect {
    /// Not authenticated
    Login,
    /// Authenticated with another role: back to that role's landing page
    Landing(Role),
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Landing(role) => role.landing_path(),
        }
    }
}

impl std::fmt::Display for Redirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Redirect to perform for a decision; `None` while loading or when authorized
pub fn redirect_for(decision: &AccessDecision) -> Option<Redirect> {
    match decision {
        AccessDecision::Loading | AccessDecision::Authorized(_) => None,
        AccessDecision::Unauthorized(UnauthorizedReason::NoSession) => Some(Redirect::Login),
        AccessDecision::Unauthorized(UnauthorizedReason::RoleMismatch { actual, .. }) => {
            Some(Redirect::Landing(*actual))
        }
    }
}
