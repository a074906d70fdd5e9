//! Standings row

use serde::Serialize;

use crate::domain::team::TeamId;

/// Points awarded for a win; losses score nothing
pub const POINTS_PER_WIN: u64 = 3;

/// Per-team summary of completed matches
///
/// Always derived from a `(teams, matches)` snapshot and never stored.
/// Counters are 64-bit: per-match scores are `u32` and their sums must not
/// wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub matches_played: u64,
    pub won: u64,
    pub lost: u64,
    pub score_for: u64,
    pub score_against: u64,
    pub points: u64,
}

impl StandingsRow {
    /// A row for a team that has not played yet
    pub fn zeroed(team_id: TeamId) -> Self {
        Self {
            team_id,
            matches_played: 0,
            won: 0,
            lost: 0,
            score_for: 0,
            score_against: 0,
            points: 0,
        }
    }

    pub fn score_difference(&self) -> i64 {
        let diff = i128::from(self.score_for) - i128::from(self.score_against);
        i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
    }

    pub(super) fn record_win(&mut self, own_score: u32, opponent_score: u32) {
        self.record_played(own_score, opponent_score);
        self.won = self.won.saturating_add(1);
        self.points = self.points.saturating_add(POINTS_PER_WIN);
    }

    pub(super) fn record_loss(&mut self, own_score: u32, opponent_score: u32) {
        self.record_played(own_score, opponent_score);
        self.lost = self.lost.saturating_add(1);
    }

    fn record_played(&mut self, own_score: u32, opponent_score: u32) {
        self.matches_played = self.matches_played.saturating_add(1);
        self.score_for = self.score_for.saturating_add(u64::from(own_score));
        self.score_against = self.score_against.saturating_add(u64::from(opponent_score));
    }
}
