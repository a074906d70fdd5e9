//! Secondary ordering layered on top of computed standings

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::row::StandingsRow;

/// Criterion used to order teams that finished on equal points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreaker {
    /// Higher score difference first
    ScoreDifference,
    /// More scored first
    ScoreFor,
    /// More wins first
    Won,
    /// Fewer losses first
    Lost,
}

impl TieBreaker {
    fn compare(&self, a: &StandingsRow, b: &StandingsRow) -> Ordering {
        match self {
            Self::ScoreDifference => b.score_difference().cmp(&a.score_difference()),
            Self::ScoreFor => b.score_for.cmp(&a.score_for),
            Self::Won => b.won.cmp(&a.won),
            Self::Lost => a.lost.cmp(&b.lost),
        }
    }
}

impl FromStr for TieBreaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "score-difference" => Ok(Self::ScoreDifference),
            "score-for" => Ok(Self::ScoreFor),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            other => Err(format!(
                "unknown tie-breaker '{}', expected one of: score-difference, score-for, won, lost",
                other
            )),
        }
    }
}

/// Reorder rows by points, then by each tie-breaker in turn.
///
/// Rows still equal after every criterion keep their current relative order.
pub fn apply_tie_breakers(rows: &mut [StandingsRow], breakers: &[TieBreaker]) {
    rows.sort_by(|a, b| {
        breakers
            .iter()
            .fold(b.points.cmp(&a.points), |ord, breaker| {
                ord.then_with(|| breaker.compare(a, b))
            })
    });
}
