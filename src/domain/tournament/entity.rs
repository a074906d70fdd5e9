//! Tournament entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::identifier::{validate_identifier, IdentifierError};

/// Tournament identifier as issued by the tournament service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TournamentId(String);

impl TournamentId {
    /// Create a new TournamentId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        let id = id.into();
        validate_identifier("Tournament", &id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TournamentId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TournamentId> for String {
    fn from(id: TournamentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TournamentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl TournamentStatus {
    /// Whether the tournament still shows up on the home screen
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Ongoing => write!(f, "ongoing"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Tournament entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    id: TournamentId,
    name: String,
    status: TournamentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prize_pool: Option<u64>,
}

impl Tournament {
    pub fn new(id: TournamentId, name: impl Into<String>, status: TournamentStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            start_date: None,
            end_date: None,
            prize_pool: None,
        }
    }

    /// Set the scheduled dates (builder pattern)
    pub fn with_dates(
        mut self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Set the prize pool (builder pattern)
    pub fn with_prize_pool(mut self, prize_pool: u64) -> Self {
        self.prize_pool = Some(prize_pool);
        self
    }

    pub fn id(&self) -> &TournamentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> TournamentStatus {
        self.status
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    pub fn prize_pool(&self) -> Option<u64> {
        self.prize_pool
    }
}

/// Number of tournaments the home screen lists
pub const HOME_TOURNAMENT_LIMIT: usize = 6;

/// Tournaments that are not completed, in input order, at most `limit` of them.
///
/// The first entry is the default selection when the caller did not pick one.
pub fn active_tournaments(tournaments: &[Tournament], limit: usize) -> Vec<&Tournament> {
    tournaments
        .iter()
        .filter(|t| t.status().is_active())
        .take(limit)
        .collect()
}
