//! Match entity and related types

use serde::{Deserialize, Serialize};

use crate::domain::identifier::{validate_identifier, IdentifierError};
use crate::domain::team::TeamId;
use crate::domain::tournament::TournamentId;

/// Match identifier as issued by the tournament service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatchId(String);

impl MatchId {
    /// Create a new MatchId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        let id = id.into();
        validate_identifier("Match", &id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MatchId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Ongoing,
    Completed,
    Cancelled,
}

impl MatchStatus {
    /// Only completed matches carry a final result
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f, "scheduled"),
            Self::Ongoing => write!(f, "ongoing"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Match between two teams within a tournament
///
/// Result fields stay optional here: the service can hand back a completed
/// match with missing fields, and deciding what to do about that belongs to
/// the standings engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    id: MatchId,
    tournament_id: TournamentId,
    team_a_id: TeamId,
    team_b_id: TeamId,
    status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    score_a: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score_b: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner_team_id: Option<TeamId>,
}

impl Match {
    /// Create a scheduled match with no result
    pub fn new(
        id: MatchId,
        tournament_id: TournamentId,
        team_a_id: TeamId,
        team_b_id: TeamId,
    ) -> Self {
        Self {
            id,
            tournament_id,
            team_a_id,
            team_b_id,
            status: MatchStatus::Scheduled,
            score_a: None,
            score_b: None,
            winner_team_id: None,
        }
    }

    /// Set the status (builder pattern)
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the result fields without touching the status (builder pattern)
    pub fn with_result(
        mut self,
        score_a: Option<u32>,
        score_b: Option<u32>,
        winner_team_id: Option<TeamId>,
    ) -> Self {
        self.score_a = score_a;
        self.score_b = score_b;
        self.winner_team_id = winner_team_id;
        self
    }

    /// Mark the match completed with its final result (builder pattern)
    pub fn completed(self, score_a: u32, score_b: u32, winner_team_id: TeamId) -> Self {
        self.with_status(MatchStatus::Completed)
            .with_result(Some(score_a), Some(score_b), Some(winner_team_id))
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn tournament_id(&self) -> &TournamentId {
        &self.tournament_id
    }

    pub fn team_a_id(&self) -> &TeamId {
        &self.team_a_id
    }

    pub fn team_b_id(&self) -> &TeamId {
        &self.team_b_id
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn score_a(&self) -> Option<u32> {
        self.score_a
    }

    pub fn score_b(&self) -> Option<u32> {
        self.score_b
    }

    pub fn winner_team_id(&self) -> Option<&TeamId> {
        self.winner_team_id.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}
