//! Response payloads from the game-master backend
//!
//! Every field the backend may omit has a default so a sparse payload
//! decodes instead of erroring.

use serde::{Deserialize, Serialize};

use crate::dto::{CharacterDto, CombatStateDto};

/// GET /api/ai/status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiStatusResponse {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AiStatusResponse {
    /// Synthetic status used when the endpoint is unreachable
    pub fn offline() -> Self {
        Self {
            available: false,
            backend: None,
            message: Some("AI game master is offline".to_string()),
        }
    }
}

/// POST /api/game/start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCampaignResponse {
    #[serde(default)]
    pub campaign_id: String,
    #[serde(default)]
    pub opening_scene: String,
}

/// POST /api/game/action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeActionResponse {
    #[serde(default)]
    pub scene: String,
    #[serde(default)]
    pub combat_state: Option<CombatStateDto>,
    #[serde(default)]
    pub xp_awarded: Option<u32>,
    #[serde(default)]
    pub suggested_choices: Vec<String>,
}

/// POST /api/game/combat/action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatActionResponse {
    #[serde(default)]
    pub narration: Option<String>,
    #[serde(default)]
    pub combat_state: Option<CombatStateDto>,
    #[serde(default)]
    pub character_updates: Vec<CharacterDto>,
    #[serde(default)]
    pub combat_ended: bool,
    #[serde(default)]
    pub victory: bool,
    #[serde(default)]
    pub xp_awarded: Option<u32>,
}

/// GET /api/game/campaign/:id/summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryResponse {
    #[serde(default)]
    pub summary: String,
}
