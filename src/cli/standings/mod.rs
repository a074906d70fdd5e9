//! Standings command - fetches a tournament's teams and matches and ranks them

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{
    active_tournaments, apply_tie_breakers, tournament_standings, SessionStore, StandingsOutcome,
    StandingsRow, Team, TeamId, TieBreaker, Tournament, TournamentId,
};
use crate::domain::tournament::HOME_TOURNAMENT_LIMIT;
use crate::infrastructure::tournament_api::{HttpClient, TournamentDataService};

/// Arguments for the standings command
#[derive(Args, Clone)]
pub struct StandingsArgs {
    /// Tournament to rank (defaults to the first active tournament)
    #[arg(long)]
    pub tournament: Option<String>,

    /// Criteria ordering teams on equal points, e.g. `score-difference,score-for`
    #[arg(long, value_delimiter = ',')]
    pub tie_break: Vec<TieBreaker>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Run the standings command
pub async fn run(args: StandingsArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let client = HttpClient::with_timeout(Duration::from_secs(config.api.timeout_secs))?;
    let mut service = TournamentDataService::new(Arc::new(client), &config.api.base_url);

    let store = super::session_store(&config);
    match store.load().await {
        Ok(Some(record)) => match record.validate() {
            Ok(session) => service = service.with_token(session.token()),
            Err(e) => warn!(error = %e, "Ignoring invalid session, requesting anonymously"),
        },
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Could not read session, requesting anonymously"),
    }

    let tournament = select_tournament(&service, args.tournament.as_deref()).await?;
    info!(tournament_id = %tournament.id(), name = tournament.name(), "Ranking tournament");

    // Aggregation needs both collections in full.
    let (teams, matches) = tokio::try_join!(
        service.fetch_teams(Some(tournament.id())),
        service.fetch_matches(Some(tournament.id())),
    )?;

    let mut outcome = tournament_standings(&teams, &matches)
        .with_context(|| format!("Cannot rank tournament '{}'", tournament.id()))?;

    if let StandingsOutcome::Ranked(rows) = &mut outcome {
        apply_tie_breakers(rows, &args.tie_break);
    }

    if args.json {
        let report = StandingsReport::new(&tournament, &teams, &outcome);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(&tournament, &teams, &outcome));
    }

    Ok(())
}

async fn select_tournament(
    service: &TournamentDataService,
    requested: Option<&str>,
) -> anyhow::Result<Tournament> {
    if let Some(raw) = requested {
        let id = TournamentId::new(raw)?;
        return Ok(service.get_tournament(&id).await?);
    }

    let tournaments = service.list_tournaments().await?;
    active_tournaments(&tournaments, HOME_TOURNAMENT_LIMIT)
        .first()
        .map(|t| (*t).clone())
        .context("No active tournaments to rank")
}

fn team_names(teams: &[Team]) -> HashMap<&TeamId, &str> {
    teams.iter().map(|t| (t.id(), t.name())).collect()
}

#[derive(Debug, Serialize)]
struct StandingsReport<'a> {
    tournament_id: &'a TournamentId,
    tournament: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<ReportRow<'a>>>,
    insufficient_data: bool,
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    position: usize,
    team_name: &'a str,
    #[serde(flatten)]
    row: &'a StandingsRow,
    score_difference: i64,
}

impl<'a> StandingsReport<'a> {
    fn new(tournament: &'a Tournament, teams: &'a [Team], outcome: &'a StandingsOutcome) -> Self {
        let names = team_names(teams);

        let rows = outcome.rows().map(|rows| {
            rows.iter()
                .enumerate()
                .map(|(idx, row)| ReportRow {
                    position: idx + 1,
                    team_name: names.get(&row.team_id).copied().unwrap_or(row.team_id.as_str()),
                    row,
                    score_difference: row.score_difference(),
                })
                .collect()
        });

        Self {
            tournament_id: tournament.id(),
            tournament: tournament.name(),
            insufficient_data: rows.is_none(),
            rows,
        }
    }
}

fn render_table(tournament: &Tournament, teams: &[Team], outcome: &StandingsOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", tournament.name(), tournament.status());

    let Some(rows) = outcome.rows() else {
        let _ = writeln!(out, "Insufficient data: no teams or no matches recorded yet.");
        return out;
    };

    let names = team_names(teams);
    let _ = writeln!(
        out,
        "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5} {:>4}",
        "#", "Team", "P", "W", "L", "SF", "SA", "SD", "Pts"
    );

    for (idx, row) in rows.iter().enumerate() {
        let name = names.get(&row.team_id).copied().unwrap_or(row.team_id.as_str());
        let _ = writeln!(
            out,
            "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>5} {:>5} {:>+5} {:>4}",
            idx + 1,
            name,
            row.matches_played,
            row.won,
            row.lost,
            row.score_for,
            row.score_against,
            row.score_difference(),
            row.points
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_standings, Match, MatchId, TournamentStatus};

    fn fixture() -> (Tournament, Vec<Team>, Vec<Match>) {
        let tournament = Tournament::new(
            TournamentId::new("t1").unwrap(),
            "Spring Cup",
            TournamentStatus::Ongoing,
        );
        let teams = vec![
            Team::new(TeamId::new("a").unwrap(), "Alpha").unwrap(),
            Team::new(TeamId::new("b").unwrap(), "Bravo").unwrap(),
        ];
        let matches = vec![Match::new(
            MatchId::new("m1").unwrap(),
            TournamentId::new("t1").unwrap(),
            TeamId::new("a").unwrap(),
            TeamId::new("b").unwrap(),
        )
        .completed(1, 2, TeamId::new("b").unwrap())];

        (tournament, teams, matches)
    }

    #[test]
    fn test_render_table_ranks_with_names() {
        let (tournament, teams, matches) = fixture();
        let outcome = StandingsOutcome::Ranked(compute_standings(&teams, &matches).unwrap());

        let table = render_table(&tournament, &teams, &outcome);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Spring Cup (ongoing)");
        assert!(lines[2].contains("Bravo"));
        assert!(lines[2].contains("+1"));
        assert!(lines[3].contains("Alpha"));
        assert!(lines[3].contains("-1"));
    }

    #[test]
    fn test_render_table_insufficient_data() {
        let (tournament, teams, _) = fixture();

        let table = render_table(&tournament, &teams, &StandingsOutcome::InsufficientData);
        assert!(table.contains("Insufficient data"));
    }

    #[test]
    fn test_report_json() {
        let (tournament, teams, matches) = fixture();
        let outcome = StandingsOutcome::Ranked(compute_standings(&teams, &matches).unwrap());

        let json = serde_json::to_value(StandingsReport::new(&tournament, &teams, &outcome)).unwrap();

        assert_eq!(json["insufficient_data"], false);
        assert_eq!(json["rows"][0]["position"], 1);
        assert_eq!(json["rows"][0]["team_name"], "Bravo");
        assert_eq!(json["rows"][0]["points"], 3);
        assert_eq!(json["rows"][1]["score_difference"], -1);
    }

    #[test]
    fn test_report_json_without_rows() {
        let (tournament, teams, _) = fixture();
        let outcome = StandingsOutcome::InsufficientData;

        let json = serde_json::to_value(StandingsReport::new(&tournament, &teams, &outcome)).unwrap();

        assert_eq!(json["insufficient_data"], true);
        assert!(json.get("rows").is_none());
    }
}
