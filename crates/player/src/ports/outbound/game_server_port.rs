//! Game Server Port - the typed backend contract
//!
//! One method per HTTP endpoint. Services and the combat controller depend
//! on this trait, never on the reqwest adapter, so tests substitute a mock
//! and fallback policy stays in the application layer: the gateway itself
//! only degrades the two status probes, everything else surfaces `ApiError`.

use async_trait::async_trait;

use echoveil_domain::{Campaign, CampaignId, Character, CharacterId};
use echoveil_protocol::{
    AiStatusResponse, CampaignSummary, CombatActionRequest, CombatActionResponse,
    NarrativeActionRequest, NarrativeActionResponse, StartCampaignRequest, StartCampaignResponse,
};

use crate::error::ApiError;

/// Outbound port to the AI game-master backend
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait GameServerPort: Send + Sync {
    /// GET /health - connectivity probe, never errors
    async fn health_check(&self) -> bool;

    /// GET /api/ai/status - degrades to a synthetic offline status
    async fn ai_status(&self) -> AiStatusResponse;

    /// GET /api/characters
    async fn list_characters(&self) -> Result<Vec<Character>, ApiError>;

    /// POST /api/characters
    async fn create_character(&self, character: &Character) -> Result<Character, ApiError>;

    /// PUT /api/characters/:id
    async fn update_character(&self, character: &Character) -> Result<Character, ApiError>;

    /// DELETE /api/characters/:id - a 404 counts as success
    async fn delete_character(&self, id: &CharacterId) -> Result<(), ApiError>;

    /// GET /api/game/campaigns
    async fn list_campaigns(&self) -> Result<Vec<CampaignSummary>, ApiError>;

    /// GET /api/game/campaign/:id
    async fn fetch_campaign(&self, id: &CampaignId) -> Result<Campaign, ApiError>;

    /// POST /api/game/start
    async fn start_campaign(
        &self,
        request: StartCampaignRequest,
    ) -> Result<StartCampaignResponse, ApiError>;

    /// POST /api/game/action
    async fn submit_action(
        &self,
        request: NarrativeActionRequest,
    ) -> Result<NarrativeActionResponse, ApiError>;

    /// POST /api/game/combat/action
    async fn submit_combat_action(
        &self,
        request: CombatActionRequest,
    ) -> Result<CombatActionResponse, ApiError>;

    /// DELETE /api/game/campaign/:id/last-action
    async fn undo_last_action(&self, id: &CampaignId) -> Result<Campaign, ApiError>;

    /// PUT /api/game/campaign/:id/settings
    async fn update_settings(
        &self,
        id: &CampaignId,
        difficulty: echoveil_domain::Difficulty,
        narrative_style: echoveil_domain::NarrativeStyle,
    ) -> Result<(), ApiError>;

    /// GET /api/game/campaign/:id/summary
    async fn session_summary(&self, id: &CampaignId) -> Result<String, ApiError>;
}
