use std::time::Duration;

use async_trait::async_trait;
use broadcast_core::{Round, RoundList, RoundSnapshot};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::BroadcastApi;
use crate::error::BroadcastError;

pub struct LichessClient {
    client: Client,
    base_url: String,
}

impl LichessClient {
    /// `base_url` is the API root, e.g. `https://lichess.org/api`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BroadcastError> {
        let client = Client::builder()
            .user_agent("XadrezPontevedra/1.0")
            .timeout(timeout)
            .build()
            .map_err(|e| BroadcastError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn rounds_url(&self, tournament_id: &str) -> String {
        format!("{}/broadcast/{}", self.base_url, tournament_id)
    }

    pub fn round_url(&self, tournament_id: &str, round: &Round) -> String {
        format!(
            "{}/broadcast/{}/{}/{}",
            self.base_url, tournament_id, round.slug, round.id
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BroadcastError> {
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BroadcastError::Status(resp.status().as_u16()));
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl BroadcastApi for LichessClient {
    async fn fetch_rounds(&self, tournament_id: &str) -> Result<RoundList, BroadcastError> {
        let list: RoundList = self.get_json(&self.rounds_url(tournament_id)).await?;
        tracing::debug!("Fetched {} rounds for {}", list.rounds.len(), tournament_id);
        Ok(list)
    }

    async fn fetch_round(
        &self,
        tournament_id: &str,
        round: &Round,
    ) -> Result<RoundSnapshot, BroadcastError> {
        self.get_json(&self.round_url(tournament_id, round)).await
    }
}
