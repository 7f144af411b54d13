use crate::error::UpstreamError;
use async_trait::async_trait;
use football::domain::{Country, League, Standing, Team};
use football::ports::FootballUpstream;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::config::UpstreamConfig;
use shared::{Error, Result};
use std::time::Duration;
use tracing::{error, info, warn};

/// One apifootball.com endpoint, selected by the `action` query parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action<'a> {
    Countries,
    Leagues { country_id: &'a str },
    Teams { league_id: &'a str },
    Standings { league_id: &'a str },
}

impl<'a> Action<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Countries => "get_countries",
            Action::Leagues { .. } => "get_leagues",
            Action::Teams { .. } => "get_teams",
            Action::Standings { .. } => "get_standings",
        }
    }

    fn param(&self) -> Option<(&'static str, &'a str)> {
        match *self {
            Action::Countries => None,
            Action::Leagues { country_id } => Some(("country_id", country_id)),
            Action::Teams { league_id } | Action::Standings { league_id } => {
                Some(("league_id", league_id))
            }
        }
    }
}

/// Client for the apifootball.com v3 API
#[derive(Debug, Clone)]
pub struct ApiFootballClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiFootballClient {
    /// Build a client whose every request is bounded by `config.timeout_ms`
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Perform one call and decode the list it returns
    pub async fn try_fetch<T: DeserializeOwned>(&self, action: Action<'_>) -> Result<Vec<T>> {
        Ok(self.request(action).await?)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        action: Action<'_>,
    ) -> std::result::Result<Vec<T>, UpstreamError> {
        let mut query = vec![("action", action.name()), ("APIkey", self.api_key.as_str())];
        if let Some(param) = action.param() {
            query.push(param);
        }

        let response = self.client.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        decode_list(&body)
    }

    /// Run `action`, logging any failure and answering with an empty list
    async fn fetch_or_empty<T: DeserializeOwned>(&self, action: Action<'_>) -> Vec<T> {
        match self.try_fetch(action).await {
            Ok(records) => {
                info!("Fetched {} records for {:?}", records.len(), action);
                records
            }
            Err(e) => {
                error!("Error fetching {:?}: {}", action, e);
                warn!("Returning empty list due to API error");
                Vec::new()
            }
        }
    }
}

fn decode_list<T: DeserializeOwned>(body: &[u8]) -> std::result::Result<Vec<T>, UpstreamError> {
    match serde_json::from_slice::<Value>(body)? {
        list @ Value::Array(_) => Ok(serde_json::from_value(list)?),
        Value::Object(map) => match map.get("error") {
            Some(code) => Err(UpstreamError::Remote {
                code: match code {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
                message: map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            }),
            None => Err(UpstreamError::UnexpectedShape("object without error code")),
        },
        _ => Err(UpstreamError::UnexpectedShape("expected a JSON array")),
    }
}

#[async_trait]
impl FootballUpstream for ApiFootballClient {
    async fn countries(&self) -> Vec<Country> {
        info!("Fetching countries from external API");
        self.fetch_or_empty(Action::Countries).await
    }

    async fn leagues(&self, country_id: &str) -> Vec<League> {
        info!("Fetching leagues for country ID: {}", country_id);
        self.fetch_or_empty(Action::Leagues { country_id }).await
    }

    async fn teams(&self, league_id: &str) -> Vec<Team> {
        info!("Fetching teams for league ID: {}", league_id);
        self.fetch_or_empty(Action::Teams { league_id }).await
    }

    async fn standings(&self, league_id: &str) -> Vec<Standing> {
        info!("Fetching standings for league ID: {}", league_id);
        self.fetch_or_empty(Action::Standings { league_id }).await
    }
}
