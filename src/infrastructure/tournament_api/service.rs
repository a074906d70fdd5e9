//! Typed access to the tournament REST service

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::dto::{MatchDto, TeamDto, TournamentDto};
use super::envelope::{decode_list, unwrap_item};
use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, Match, Team, Tournament, TournamentId};

/// Fetches teams, matches and tournaments and hands them back as domain types.
///
/// Callers get complete collections or an error, never a partial list.
#[derive(Debug, Clone)]
pub struct TournamentDataService {
    client: Arc<dyn HttpClientTrait>,
    base_url: String,
    token: Option<String>,
}

impl TournamentDataService {
    pub fn new(client: Arc<dyn HttpClientTrait>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            token: None,
        }
    }

    /// Authenticate requests with the session token (builder pattern)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, resource: &str, tournament_id: Option<&TournamentId>) -> String {
        match tournament_id {
            Some(id) => format!("{}/{}?tournament_id={}", self.base_url, resource, id),
            None => format!("{}/{}", self.base_url, resource),
        }
    }

    async fn fetch_list<D, T>(&self, url: &str) -> Result<Vec<T>, DomainError>
    where
        D: DeserializeOwned,
        T: TryFrom<D, Error = DomainError>,
    {
        let body = self.client.get_json(url, self.token.as_deref()).await?;

        decode_list::<D>(body)?
            .into_iter()
            .map(T::try_from)
            .collect()
    }

    pub async fn list_tournaments(&self) -> Result<Vec<Tournament>, DomainError> {
        let tournaments: Vec<Tournament> = self
            .fetch_list::<TournamentDto, _>(&self.url("tournaments", None))
            .await?;

        info!(count = tournaments.len(), "Fetched tournaments");
        Ok(tournaments)
    }

    pub async fn get_tournament(&self, id: &TournamentId) -> Result<Tournament, DomainError> {
        let url = format!("{}/tournaments/{}", self.base_url, id);
        let body = self.client.get_json(&url, self.token.as_deref()).await?;

        let dto: TournamentDto = serde_json::from_value(unwrap_item(body)).map_err(|e| {
            DomainError::provider("tournament-api", format!("Malformed tournament: {}", e))
        })?;

        Tournament::try_from(dto)
    }

    /// Teams, optionally limited to one tournament's participants
    pub async fn fetch_teams(
        &self,
        tournament_id: Option<&TournamentId>,
    ) -> Result<Vec<Team>, DomainError> {
        let teams: Vec<Team> = self
            .fetch_list::<TeamDto, _>(&self.url("teams", tournament_id))
            .await?;

        info!(count = teams.len(), "Fetched teams");
        Ok(teams)
    }

    /// Matches, optionally limited to one tournament.
    ///
    /// Matches belonging to another tournament are dropped even if the
    /// service ignores the filter.
    pub async fn fetch_matches(
        &self,
        tournament_id: Option<&TournamentId>,
    ) -> Result<Vec<Match>, DomainError> {
        let mut matches: Vec<Match> = self
            .fetch_list::<MatchDto, _>(&self.url("matches", tournament_id))
            .await?;

        if let Some(id) = tournament_id {
            let before = matches.len();
            matches.retain(|m| m.tournament_id() == id);
            if matches.len() != before {
                debug!(
                    dropped = before - matches.len(),
                    tournament_id = %id,
                    "Dropped matches from other tournaments"
                );
            }
        }

        info!(count = matches.len(), "Fetched matches");
        Ok(matches)
    }
}
