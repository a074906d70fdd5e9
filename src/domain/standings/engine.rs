//! Standings aggregation over a snapshot of teams and matches

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::error::{IntegrityViolation, StandingsError};
use super::row::StandingsRow;
use crate::domain::matches::Match;
use crate::domain::team::{Team, TeamId};

/// Result of a completed match, resolved to winner and loser sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Outcome<'a> {
    winner: &'a TeamId,
    loser: &'a TeamId,
    winner_score: u32,
    loser_score: u32,
}

/// Resolve a completed match into its winner and loser.
///
/// Fails instead of guessing when the recorded result cannot be attributed.
fn resolve_outcome(m: &Match) -> Result<Outcome<'_>, StandingsError> {
    let team_a = m.team_a_id();
    let team_b = m.team_b_id();

    if team_a == team_b {
        return Err(StandingsError::data_integrity(
            m.id(),
            IntegrityViolation::SameTeamOnBothSides(team_a.clone()),
        ));
    }

    let winner = m
        .winner_team_id()
        .ok_or_else(|| StandingsError::data_integrity(m.id(), IntegrityViolation::MissingWinner))?;

    let (Some(score_a), Some(score_b)) = (m.score_a(), m.score_b()) else {
        return Err(StandingsError::data_integrity(
            m.id(),
            IntegrityViolation::MissingScore,
        ));
    };

    if winner == team_a {
        Ok(Outcome {
            winner: team_a,
            loser: team_b,
            winner_score: score_a,
            loser_score: score_b,
        })
    } else if winner == team_b {
        Ok(Outcome {
            winner: team_b,
            loser: team_a,
            winner_score: score_b,
            loser_score: score_a,
        })
    } else {
        Err(StandingsError::data_integrity(
            m.id(),
            IntegrityViolation::WinnerNotParticipant {
                winner: winner.clone(),
                team_a: team_a.clone(),
                team_b: team_b.clone(),
            },
        ))
    }
}

/// Compute the standings table for `teams` from `matches`.
///
/// Every team gets exactly one row, in roster order before ranking. Only
/// completed matches count; a win is worth [`super::POINTS_PER_WIN`] and a
/// loss nothing. A completed match that names a team outside the roster is
/// skipped entirely. Rows are sorted by points, highest first, and equal
/// points keep roster order: no further tie-break is applied here (see
/// [`super::apply_tie_breakers`]).
///
/// Inputs are never modified and the same inputs always give the same rows.
pub fn compute_standings(
    teams: &[Team],
    matches: &[Match],
) -> Result<Vec<StandingsRow>, StandingsError> {
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(teams.len());
    let mut index: HashMap<&TeamId, usize> = HashMap::with_capacity(teams.len());

    for team in teams {
        if index.contains_key(team.id()) {
            warn!(team_id = %team.id(), "Duplicate team in roster, keeping first entry");
            continue;
        }
        index.insert(team.id(), rows.len());
        rows.push(StandingsRow::zeroed(team.id().clone()));
    }

    let mut applied = 0usize;

    for m in matches.iter().filter(|m| m.is_completed()) {
        let outcome = resolve_outcome(m)?;

        let (Some(&winner_idx), Some(&loser_idx)) =
            (index.get(outcome.winner), index.get(outcome.loser))
        else {
            debug!(match_id = %m.id(), "Skipping match with a team outside the roster");
            continue;
        };

        rows[winner_idx].record_win(outcome.winner_score, outcome.loser_score);
        rows[loser_idx].record_loss(outcome.loser_score, outcome.winner_score);
        applied += 1;
    }

    debug!(
        teams = rows.len(),
        matches = matches.len(),
        applied,
        "Computed standings"
    );

    rows.sort_by(|a, b| b.points.cmp(&a.points));

    Ok(rows)
}

/// Standings for a tournament screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum StandingsOutcome {
    /// Ranked rows, one per team
    Ranked(Vec<StandingsRow>),
    /// No roster or no match data to rank from
    InsufficientData,
}

impl StandingsOutcome {
    pub fn rows(&self) -> Option<&[StandingsRow]> {
        match self {
            Self::Ranked(rows) => Some(rows),
            Self::InsufficientData => None,
        }
    }
}

/// Standings for one tournament, or [`StandingsOutcome::InsufficientData`]
/// when either the roster or the match list is empty.
pub fn tournament_standings(
    teams: &[Team],
    matches: &[Match],
) -> Result<StandingsOutcome, StandingsError> {
    if teams.is_empty() || matches.is_empty() {
        debug!(
            teams = teams.len(),
            matches = matches.len(),
            "Not enough data to rank tournament"
        );
        return Ok(StandingsOutcome::InsufficientData);
    }

    compute_standings(teams, matches).map(StandingsOutcome::Ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matches::{MatchId, MatchStatus};
    use crate::domain::standings::POINTS_PER_WIN;
    use crate::domain::tournament::TournamentId;

    fn team_id(id: &str) -> TeamId {
        TeamId::new(id).unwrap()
    }

    fn team(id: &str) -> Team {
        Team::new(team_id(id), format!("Team {}", id)).unwrap()
    }

    fn fixture(id: &str, a: &str, b: &str) -> Match {
        Match::new(
            MatchId::new(id).unwrap(),
            TournamentId::new("t1").unwrap(),
            team_id(a),
            team_id(b),
        )
    }

    fn result(id: &str, a: &str, b: &str, score_a: u32, score_b: u32, winner: &str) -> Match {
        fixture(id, a, b).completed(score_a, score_b, team_id(winner))
    }

    fn row<'a>(rows: &'a [StandingsRow], id: &str) -> &'a StandingsRow {
        rows.iter().find(|r| r.team_id.as_str() == id).unwrap()
    }

    fn order(rows: &[StandingsRow]) -> Vec<&str> {
        rows.iter().map(|r| r.team_id.as_str()).collect()
    }

    #[test]
    fn test_single_match_example() {
        let teams = vec![team("A"), team("B"), team("C")];
        let matches = vec![result("m1", "A", "B", 2, 1, "A")];

        let rows = compute_standings(&teams, &matches).unwrap();

        assert_eq!(order(&rows), vec!["A", "B", "C"]);
        assert_eq!(
            rows[0],
            StandingsRow {
                team_id: team_id("A"),
                matches_played: 1,
                won: 1,
                lost: 0,
                score_for: 2,
                score_against: 1,
                points: 3,
            }
        );
        assert_eq!(
            rows[1],
            StandingsRow {
                team_id: team_id("B"),
                matches_played: 1,
                won: 0,
                lost: 1,
                score_for: 1,
                score_against: 2,
                points: 0,
            }
        );
        assert_eq!(rows[2], StandingsRow::zeroed(team_id("C")));
    }

    #[test]
    fn test_team_b_winner_scores_from_its_side() {
        let teams = vec![team("A"), team("B")];
        let matches = vec![result("m1", "A", "B", 0, 2, "B")];

        let rows = compute_standings(&teams, &matches).unwrap();

        assert_eq!(order(&rows), vec!["B", "A"]);
        let b = row(&rows, "B");
        assert_eq!((b.won, b.score_for, b.score_against), (1, 2, 0));
        let a = row(&rows, "A");
        assert_eq!((a.lost, a.score_for, a.score_against), (1, 0, 2));
    }

    #[test]
    fn test_every_team_appears_once() {
        let teams = vec![team("A"), team("B"), team("C"), team("D")];
        let matches = vec![
            result("m1", "A", "B", 2, 0, "A"),
            result("m2", "C", "A", 2, 1, "C"),
        ];

        let rows = compute_standings(&teams, &matches).unwrap();

        assert_eq!(rows.len(), teams.len());
        for t in &teams {
            assert_eq!(rows.iter().filter(|r| &r.team_id == t.id()).count(), 1);
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compute_standings(&[], &[]).unwrap().is_empty());

        let rows = compute_standings(&[team("A")], &[]).unwrap();
        assert_eq!(rows, vec![StandingsRow::zeroed(team_id("A"))]);
    }

    #[test]
    fn test_non_completed_matches_are_inert() {
        let teams = vec![team("A"), team("B"), team("C")];
        let completed = vec![
            result("m1", "A", "B", 2, 1, "A"),
            result("m2", "B", "C", 2, 0, "B"),
        ];

        let mut with_noise = completed.clone();
        with_noise.push(fixture("m3", "A", "C"));
        with_noise.push(fixture("m4", "C", "B").with_status(MatchStatus::Ongoing));
        // A cancelled match may carry a stale result; it still must not count.
        with_noise.push(
            fixture("m5", "C", "A")
                .with_status(MatchStatus::Cancelled)
                .with_result(Some(3), Some(0), Some(team_id("C"))),
        );
        // Not completed, so an impossible winner is never inspected.
        with_noise.push(
            fixture("m6", "A", "B")
                .with_status(MatchStatus::Ongoing)
                .with_result(None, None, Some(team_id("Z"))),
        );

        assert_eq!(
            compute_standings(&teams, &completed).unwrap(),
            compute_standings(&teams, &with_noise).unwrap()
        );
    }

    #[test]
    fn test_wins_and_points_invariants() {
        let teams = vec![team("A"), team("B"), team("C"), team("D")];
        let matches = vec![
            result("m1", "A", "B", 2, 1, "A"),
            result("m2", "C", "D", 0, 2, "D"),
            result("m3", "A", "C", 1, 2, "C"),
            result("m4", "B", "D", 2, 1, "B"),
            result("m5", "A", "D", 2, 0, "A"),
            fixture("m6", "B", "C"),
        ];

        let rows = compute_standings(&teams, &matches).unwrap();
        let completed = matches.iter().filter(|m| m.is_completed()).count() as u64;

        assert_eq!(rows.iter().map(|r| r.won).sum::<u64>(), completed);
        assert_eq!(rows.iter().map(|r| r.lost).sum::<u64>(), completed);
        for r in &rows {
            assert_eq!(r.points, POINTS_PER_WIN * r.won);
            assert_eq!(r.matches_played, r.won + r.lost);
        }
        assert_eq!(
            rows.iter().map(|r| r.score_for).sum::<u64>(),
            rows.iter().map(|r| r.score_against).sum::<u64>()
        );
    }

    #[test]
    fn test_large_scores_do_not_wrap() {
        let teams = vec![team("A"), team("B")];
        let matches = vec![
            result("m1", "A", "B", u32::MAX, 0, "A"),
            result("m2", "A", "B", 1, 0, "A"),
        ];

        let rows = compute_standings(&teams, &matches).unwrap();
        let a = row(&rows, "A");

        assert_eq!(a.score_for, u64::from(u32::MAX) + 1);
        assert_eq!(a.score_difference(), i64::from(u32::MAX) + 1);
        assert_eq!(row(&rows, "B").score_against, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let teams = vec![team("D"), team("C"), team("B"), team("A")];
        let matches = vec![
            result("m1", "A", "B", 2, 0, "A"),
            result("m2", "C", "D", 0, 2, "C"),
        ];

        let rows = compute_standings(&teams, &matches).unwrap();

        // C and A both have 3 points, D and B both have 0.
        assert_eq!(order(&rows), vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn test_sorted_by_points_descending() {
        let teams = vec![team("A"), team("B"), team("C")];
        let matches = vec![
            result("m1", "C", "A", 2, 0, "C"),
            result("m2", "C", "B", 2, 1, "C"),
            result("m3", "B", "A", 2, 1, "B"),
        ];

        let rows = compute_standings(&teams, &matches).unwrap();

        assert_eq!(order(&rows), vec!["C", "B", "A"]);
        assert!(rows.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn test_unknown_team_match_is_ignored() {
        let teams = vec![team("A"), team("B")];
        let matches = vec![
            result("m1", "A", "X", 2, 0, "A"),
            result("m2", "Y", "B", 2, 0, "Y"),
            result("m3", "A", "B", 1, 2, "B"),
        ];

        let rows = compute_standings(&teams, &matches).unwrap();

        let a = row(&rows, "A");
        assert_eq!((a.matches_played, a.won, a.lost), (1, 0, 1));
        let b = row(&rows, "B");
        assert_eq!((b.matches_played, b.won, b.lost), (1, 1, 0));
    }

    #[test]
    fn test_winner_not_participant_fails() {
        let teams = vec![team("A"), team("B"), team("C")];
        let matches = vec![
            result("m1", "A", "B", 2, 1, "A"),
            result("m2", "A", "B", 2, 1, "C"),
        ];

        let err = compute_standings(&teams, &matches).unwrap_err();

        assert_eq!(err.match_id().as_str(), "m2");
        assert!(matches!(
            err,
            StandingsError::DataIntegrity {
                violation: IntegrityViolation::WinnerNotParticipant { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_winner_check_applies_outside_roster() {
        let teams = vec![team("A")];
        let matches = vec![result("m1", "X", "Y", 1, 0, "Z")];

        assert!(compute_standings(&teams, &matches).is_err());
    }

    #[test]
    fn test_completed_match_missing_fields_fails() {
        let teams = vec![team("A"), team("B")];

        let no_winner = fixture("m1", "A", "B")
            .with_status(MatchStatus::Completed)
            .with_result(Some(1), Some(0), None);
        let err = compute_standings(&teams, &[no_winner]).unwrap_err();
        assert!(matches!(
            err,
            StandingsError::DataIntegrity {
                violation: IntegrityViolation::MissingWinner,
                ..
            }
        ));

        let no_score = fixture("m2", "A", "B")
            .with_status(MatchStatus::Completed)
            .with_result(Some(1), None, Some(team_id("A")));
        let err = compute_standings(&teams, &[no_score]).unwrap_err();
        assert!(matches!(
            err,
            StandingsError::DataIntegrity {
                violation: IntegrityViolation::MissingScore,
                ..
            }
        ));
    }

    #[test]
    fn test_same_team_on_both_sides_fails() {
        let teams = vec![team("A")];
        let matches = vec![result("m1", "A", "A", 1, 0, "A")];

        let err = compute_standings(&teams, &matches).unwrap_err();
        assert!(matches!(
            err,
            StandingsError::DataIntegrity {
                violation: IntegrityViolation::SameTeamOnBothSides(_),
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_roster_entries_collapse() {
        let teams = vec![team("A"), team("B"), team("A")];
        let matches = vec![result("m1", "A", "B", 1, 0, "A")];

        let rows = compute_standings(&teams, &matches).unwrap();

        assert_eq!(order(&rows), vec!["A", "B"]);
        assert_eq!(row(&rows, "A").won, 1);
    }

    #[test]
    fn test_idempotent_and_inputs_untouched() {
        let teams = vec![team("A"), team("B"), team("C")];
        let matches = vec![
            result("m1", "A", "B", 2, 1, "A"),
            result("m2", "B", "C", 0, 2, "C"),
        ];
        let teams_before = teams.clone();
        let matches_before = matches.clone();

        let first = compute_standings(&teams, &matches).unwrap();
        let second = compute_standings(&teams, &matches).unwrap();

        assert_eq!(first, second);
        assert_eq!(teams, teams_before);
        assert_eq!(matches, matches_before);
    }

    #[test]
    fn test_tournament_standings_insufficient_data() {
        let matches = vec![result("m1", "A", "B", 2, 1, "A")];

        assert_eq!(
            tournament_standings(&[], &matches).unwrap(),
            StandingsOutcome::InsufficientData
        );
        assert_eq!(
            tournament_standings(&[team("A")], &[]).unwrap(),
            StandingsOutcome::InsufficientData
        );
        assert!(StandingsOutcome::InsufficientData.rows().is_none());
    }

    #[test]
    fn test_tournament_standings_ranked() {
        let teams = vec![team("A"), team("B")];
        let matches = vec![result("m1", "A", "B", 0, 1, "B")];

        let outcome = tournament_standings(&teams, &matches).unwrap();
        let rows = outcome.rows().unwrap();
        assert_eq!(order(rows), vec!["B", "A"]);
    }

    #[test]
    fn test_tournament_standings_propagates_integrity_error() {
        let teams = vec![team("A"), team("B")];
        let matches = vec![result("m1", "A", "B", 0, 1, "C")];

        assert!(tournament_standings(&teams, &matches).is_err());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(StandingsOutcome::InsufficientData).unwrap();
        assert_eq!(json["kind"], "insufficient_data");
    }
}
