//! Wire shapes of the tournament service and their conversion to domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::domain::{
    DomainError, Match, MatchId, MatchStatus, Team, TeamId, Tournament, TournamentId,
    TournamentStatus,
};

/// Treat `""` like an absent optional string
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn invalid(resource: &str, id: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::validation(format!("Invalid {} '{}': {}", resource, id, err))
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(alias = "name")]
    pub team_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub logo_url: Option<String>,
}

impl TryFrom<TeamDto> for Team {
    type Error = DomainError;

    fn try_from(dto: TeamDto) -> Result<Self, Self::Error> {
        let id = TeamId::new(dto.id.clone()).map_err(|e| invalid("team", &dto.id, e))?;
        let team = Team::new(id, dto.team_name).map_err(|e| invalid("team", &dto.id, e))?;

        Ok(match dto.logo_url {
            Some(logo_url) => team.with_logo_url(logo_url),
            None => team,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub tournament_id: String,
    pub team_a_id: String,
    pub team_b_id: String,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub result_team_a_score: Option<u32>,
    #[serde(default)]
    pub result_team_b_score: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub winner_team_id: Option<String>,
}

impl TryFrom<MatchDto> for Match {
    type Error = DomainError;

    fn try_from(dto: MatchDto) -> Result<Self, Self::Error> {
        let err = |e: &dyn std::fmt::Display| invalid("match", &dto.id, e);

        let id = MatchId::new(dto.id.clone()).map_err(|e| err(&e))?;
        let tournament_id = TournamentId::new(dto.tournament_id.clone()).map_err(|e| err(&e))?;
        let team_a_id = TeamId::new(dto.team_a_id.clone()).map_err(|e| err(&e))?;
        let team_b_id = TeamId::new(dto.team_b_id.clone()).map_err(|e| err(&e))?;
        let winner_team_id = dto
            .winner_team_id
            .clone()
            .map(TeamId::new)
            .transpose()
            .map_err(|e| err(&e))?;

        Ok(Match::new(id, tournament_id, team_a_id, team_b_id)
            .with_status(dto.status)
            .with_result(dto.result_team_a_score, dto.result_team_b_score, winner_team_id))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TournamentDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: TournamentStatus,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub prize_pool: Option<f64>,
}

fn parse_date(field: &str, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => Some(date.with_timezone(&Utc)),
        Err(e) => {
            debug!(field, raw, error = %e, "Dropping unparseable tournament date");
            None
        }
    }
}

impl TryFrom<TournamentDto> for Tournament {
    type Error = DomainError;

    fn try_from(dto: TournamentDto) -> Result<Self, Self::Error> {
        let id = TournamentId::new(dto.id.clone()).map_err(|e| invalid("tournament", &dto.id, e))?;

        let tournament = Tournament::new(id, dto.name, dto.status).with_dates(
            parse_date("start_date", dto.start_date.as_deref()),
            parse_date("end_date", dto.end_date.as_deref()),
        );

        Ok(match dto.prize_pool {
            Some(pool) if pool.is_finite() && pool >= 0.0 => {
                tournament.with_prize_pool(pool.round() as u64)
            }
            _ => tournament,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_dto_conversion() {
        let dto: TeamDto = serde_json::from_value(json!({
            "_id": "665f1c2ab8e4a1d9f0c3e771",
            "team_name": "Bigetron",
            "logo_url": "",
            "members": ["p1", "p2"]
        }))
        .unwrap();

        let team = Team::try_from(dto).unwrap();
        assert_eq!(team.id().as_str(), "665f1c2ab8e4a1d9f0c3e771");
        assert_eq!(team.name(), "Bigetron");
        assert!(team.logo_url().is_none());
    }

    #[test]
    fn test_team_dto_accepts_plain_names() {
        let dto: TeamDto = serde_json::from_value(json!({
            "id": "t-1",
            "name": "Onic",
            "logo_url": "https://cdn.example.com/onic.png"
        }))
        .unwrap();

        let team = Team::try_from(dto).unwrap();
        assert_eq!(team.logo_url(), Some("https://cdn.example.com/onic.png"));
    }

    #[test]
    fn test_team_dto_invalid_id() {
        let dto: TeamDto =
            serde_json::from_value(json!({"_id": "bad id", "team_name": "X"})).unwrap();

        let err = Team::try_from(dto).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn test_completed_match_dto() {
        let dto: MatchDto = serde_json::from_value(json!({
            "_id": "m1",
            "tournament_id": "t1",
            "team_a_id": "a",
            "team_b_id": "b",
            "status": "completed",
            "result_team_a_score": 2,
            "result_team_b_score": 1,
            "winner_team_id": "a",
            "round": "Final",
            "location": "Jakarta"
        }))
        .unwrap();

        let m = Match::try_from(dto).unwrap();
        assert!(m.is_completed());
        assert_eq!(m.score_a(), Some(2));
        assert_eq!(m.score_b(), Some(1));
        assert_eq!(m.winner_team_id().map(TeamId::as_str), Some("a"));
    }

    #[test]
    fn test_scheduled_match_dto_defaults() {
        let dto: MatchDto = serde_json::from_value(json!({
            "_id": "m2",
            "tournament_id": "t1",
            "team_a_id": "a",
            "team_b_id": "b",
            "result_team_a_score": null,
            "winner_team_id": ""
        }))
        .unwrap();

        let m = Match::try_from(dto).unwrap();
        assert_eq!(m.status(), MatchStatus::Scheduled);
        assert!(m.score_a().is_none());
        assert!(m.winner_team_id().is_none());
    }

    #[test]
    fn test_match_dto_unknown_status_fails() {
        let result: Result<MatchDto, _> = serde_json::from_value(json!({
            "_id": "m3",
            "tournament_id": "t1",
            "team_a_id": "a",
            "team_b_id": "b",
            "status": "postponed"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_tournament_dto_conversion() {
        let dto: TournamentDto = serde_json::from_value(json!({
            "_id": "t1",
            "name": "MPL Season 15",
            "status": "ongoing",
            "start_date": "2025-03-01T00:00:00.000Z",
            "end_date": "not a date",
            "prize_pool": 300000000
        }))
        .unwrap();

        let t = Tournament::try_from(dto).unwrap();
        assert_eq!(t.status(), TournamentStatus::Ongoing);
        assert!(t.start_date().is_some());
        assert!(t.end_date().is_none());
        assert_eq!(t.prize_pool(), Some(300_000_000));
    }
}
