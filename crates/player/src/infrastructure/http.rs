//! HTTP gateway to the game-master backend
//!
//! Thin typed mapping over the REST contract. Every request carries the
//! persisted device id header; no session state is kept between calls.
//! The two read endpoints the product tuned for flaky networks
//! (character list and campaign fetch) get a 15-second timeout, everything
//! else uses the platform default. No retries anywhere.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use echoveil_domain::{Campaign, CampaignId, Character, CharacterId, Difficulty, NarrativeStyle};
use echoveil_protocol::{
    AiStatusResponse, CampaignDto, CampaignSummary, CharacterDto, CombatActionRequest,
    CombatActionResponse, NarrativeActionRequest, NarrativeActionResponse, SessionSummaryResponse,
    StartCampaignRequest, StartCampaignResponse, UpdateSettingsRequest,
};

use crate::config::{ClientConfig, DEVICE_ID_HEADER};
use crate::error::ApiError;
use crate::ports::outbound::GameServerPort;

/// Timeout for the two flaky-network read endpoints
const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// reqwest-backed implementation of [`GameServerPort`]
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    device_id: String,
}

impl HttpGateway {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            device_id: config.device_id().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.url(path))
            .header(DEVICE_ID_HEADER, &self.device_id)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .header(DEVICE_ID_HEADER, &self.device_id)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.client
            .put(self.url(path))
            .header(DEVICE_ID_HEADER, &self.device_id)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.client
            .delete(self.url(path))
            .header(DEVICE_ID_HEADER, &self.device_id)
    }

    async fn send_and_decode<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_expect_ok(request: RequestBuilder) -> Result<StatusCode, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }
        Ok(status)
    }
}

#[async_trait]
impl GameServerPort for HttpGateway {
    async fn health_check(&self) -> bool {
        match self.get("/health").send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "health check failed");
                false
            }
        }
    }

    async fn ai_status(&self) -> AiStatusResponse {
        match Self::send_and_decode::<AiStatusResponse>(self.get("/api/ai/status")).await {
            Ok(status) => status,
            Err(e) => {
                tracing::debug!(error = %e, "AI status probe failed, reporting offline");
                AiStatusResponse::offline()
            }
        }
    }

    async fn list_characters(&self) -> Result<Vec<Character>, ApiError> {
        let dtos: Vec<CharacterDto> =
            Self::send_and_decode(self.get("/api/characters").timeout(READ_TIMEOUT)).await?;
        Ok(dtos.into_iter().map(CharacterDto::into_domain).collect())
    }

    async fn create_character(&self, character: &Character) -> Result<Character, ApiError> {
        let payload = CharacterDto::from_domain(character);
        let dto: CharacterDto =
            Self::send_and_decode(self.post("/api/characters").json(&payload)).await?;
        Ok(dto.into_domain())
    }

    async fn update_character(&self, character: &Character) -> Result<Character, ApiError> {
        let payload = CharacterDto::from_domain(character);
        let path = format!("/api/characters/{}", character.id);
        let dto: CharacterDto = Self::send_and_decode(self.put(&path).json(&payload)).await?;
        Ok(dto.into_domain())
    }

    async fn delete_character(&self, id: &CharacterId) -> Result<(), ApiError> {
        let path = format!("/api/characters/{}", id);
        match Self::send_expect_ok(self.delete(&path)).await {
            Ok(_) => Ok(()),
            // Already gone is as deleted as it gets.
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn list_campaigns(&self) -> Result<Vec<CampaignSummary>, ApiError> {
        Self::send_and_decode(self.get("/api/game/campaigns")).await
    }

    async fn fetch_campaign(&self, id: &CampaignId) -> Result<Campaign, ApiError> {
        let path = format!("/api/game/campaign/{}", id);
        let dto: CampaignDto =
            Self::send_and_decode(self.get(&path).timeout(READ_TIMEOUT)).await?;
        Ok(dto.into_domain())
    }

    async fn start_campaign(
        &self,
        request: StartCampaignRequest,
    ) -> Result<StartCampaignResponse, ApiError> {
        Self::send_and_decode(self.post("/api/game/start").json(&request)).await
    }

    async fn submit_action(
        &self,
        request: NarrativeActionRequest,
    ) -> Result<NarrativeActionResponse, ApiError> {
        Self::send_and_decode(self.post("/api/game/action").json(&request)).await
    }

    async fn submit_combat_action(
        &self,
        request: CombatActionRequest,
    ) -> Result<CombatActionResponse, ApiError> {
        Self::send_and_decode(self.post("/api/game/combat/action").json(&request)).await
    }

    async fn undo_last_action(&self, id: &CampaignId) -> Result<Campaign, ApiError> {
        let path = format!("/api/game/campaign/{}/last-action", id);
        let dto: CampaignDto = Self::send_and_decode(self.delete(&path)).await?;
        Ok(dto.into_domain())
    }

    async fn update_settings(
        &self,
        id: &CampaignId,
        difficulty: Difficulty,
        narrative_style: NarrativeStyle,
    ) -> Result<(), ApiError> {
        let path = format!("/api/game/campaign/{}/settings", id);
        let request = UpdateSettingsRequest {
            difficulty,
            narrative_style,
        };
        Self::send_expect_ok(self.put(&path).json(&request)).await?;
        Ok(())
    }

    async fn session_summary(&self, id: &CampaignId) -> Result<String, ApiError> {
        let path = format!("/api/game/campaign/{}/summary", id);
        let response: SessionSummaryResponse = Self::send_and_decode(self.get(&path)).await?;
        Ok(response.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_without_double_slash() {
        let mut config = ClientConfig::new();
        config.set_base_url("http://localhost:8080/");
        let gateway = HttpGateway::new(&config);
        assert_eq!(gateway.url("/health"), "http://localhost:8080/health");
    }

    #[tokio::test]
    async fn test_health_check_is_false_when_unreachable() {
        let mut config = ClientConfig::new();
        // Nothing listens on the discard port, so connections are refused fast.
        config.set_base_url("http://127.0.0.1:9");
        let gateway = HttpGateway::new(&config);
        assert!(!gateway.health_check().await);
    }

    #[tokio::test]
    async fn test_ai_status_degrades_to_offline() {
        let mut config = ClientConfig::new();
        config.set_base_url("http://127.0.0.1:9");
        let gateway = HttpGateway::new(&config);
        let status = gateway.ai_status().await;
        assert!(!status.available);
    }

    #[tokio::test]
    async fn test_list_characters_surfaces_transport_error() {
        let mut config = ClientConfig::new();
        config.set_base_url("http://127.0.0.1:9");
        let gateway = HttpGateway::new(&config);
        let err = gateway.list_characters().await.expect_err("no server");
        assert!(err.is_transport());
    }
}
