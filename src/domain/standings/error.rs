//! Standings-specific errors

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::matches::MatchId;
use crate::domain::team::TeamId;

/// What is wrong with a completed match that cannot be aggregated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("winner '{winner}' is neither '{team_a}' nor '{team_b}'")]
    WinnerNotParticipant {
        winner: TeamId,
        team_a: TeamId,
        team_b: TeamId,
    },

    #[error("completed match has no winner")]
    MissingWinner,

    #[error("completed match is missing a score")]
    MissingScore,

    #[error("team '{0}' is listed on both sides")]
    SameTeamOnBothSides(TeamId),
}

/// Errors that can occur while computing standings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    #[error("Data integrity error in match '{match_id}': {violation}")]
    DataIntegrity {
        match_id: MatchId,
        violation: IntegrityViolation,
    },
}

impl StandingsError {
    pub fn data_integrity(match_id: &MatchId, violation: IntegrityViolation) -> Self {
        Self::DataIntegrity {
            match_id: match_id.clone(),
            violation,
        }
    }

    /// Id of the offending match
    pub fn match_id(&self) -> &MatchId {
        match self {
            Self::DataIntegrity { match_id, .. } => match_id,
        }
    }
}

impl From<StandingsError> for DomainError {
    fn from(err: StandingsError) -> Self {
        match err {
            StandingsError::DataIntegrity {
                match_id,
                violation,
            } => DomainError::data_integrity(match_id.as_str(), violation.to_string()),
        }
    }
}
