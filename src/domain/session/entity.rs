//! Session types: the loosely-shaped persisted record and its validated form

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = SessionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(SessionValidationError::UnrecognizedRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a persisted record does not form a usable session
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionValidationError {
    #[error("Session has no token")]
    MissingToken,

    #[error("Session has no user ID")]
    MissingUserId,

    #[error("Session has no role")]
    MissingRole,

    #[error("Session role '{0}' is not recognized")]
    UnrecognizedRole(String),
}

/// Session record exactly as the login flow persisted it.
///
/// Every field is optional and the role is kept as raw text: whatever is in
/// storage must deserialize, and judging it is left to [`SessionRecord::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, alias = "user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl SessionRecord {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(user_id.into()),
            role: Some(role.into()),
            username: None,
            email: None,
        }
    }

    /// Check the record's shape and turn it into a [`Session`]
    pub fn validate(&self) -> Result<Session, SessionValidationError> {
        // Role text must match exactly; padding or case variants are malformed.
        let role: Role = self
            .role
            .as_deref()
            .filter(|r| !r.is_empty())
            .ok_or(SessionValidationError::MissingRole)?
            .parse()?;
        let token = present(&self.token).ok_or(SessionValidationError::MissingToken)?;
        let user_id = present(&self.user_id).ok_or(SessionValidationError::MissingUserId)?;

        Ok(Session {
            token: token.to_string(),
            user_id: user_id.to_string(),
            role,
            username: self.username.clone(),
            email: self.email.clone(),
        })
    }
}

/// Validated session of an authenticated caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Bearer token - never exposed in serialization
    #[serde(skip_serializing)]
    token: String,
    user_id: String,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
