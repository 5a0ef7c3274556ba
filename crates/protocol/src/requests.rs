//! Request payloads sent to the game-master backend

use serde::{Deserialize, Serialize};

use echoveil_domain::{Difficulty, NarrativeStyle};

/// POST /api/game/start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCampaignRequest {
    pub character_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub difficulty: Difficulty,
    pub narrative_style: NarrativeStyle,
}

/// POST /api/game/action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeActionRequest {
    pub campaign_id: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<String>,
}

/// POST /api/game/combat/action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatActionRequest {
    pub campaign_id: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

/// PUT /api/game/campaign/:id/settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub difficulty: Difficulty,
    pub narrative_style: NarrativeStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combat_action_omits_missing_target() {
        let request = CombatActionRequest {
            campaign_id: "c1".into(),
            action: "defend".into(),
            target_id: None,
        };
        let json = serde_json::to_string(&request).expect("encode");
        assert!(!json.contains("targetId"));

        let targeted = CombatActionRequest {
            target_id: Some("raider-1".into()),
            ..request
        };
        let json = serde_json::to_string(&targeted).expect("encode");
        assert!(json.contains("\"targetId\":\"raider-1\""));
    }

    #[test]
    fn test_start_campaign_encodes_enums_camel_case() {
        let request = StartCampaignRequest {
            character_id: "pc-1".into(),
            title: Some("Shadows of Ralta".into()),
            difficulty: Difficulty::Hard,
            narrative_style: NarrativeStyle::Gritty,
        };
        let json = serde_json::to_string(&request).expect("encode");
        assert!(json.contains("\"difficulty\":\"hard\""));
        assert!(json.contains("\"narrativeStyle\":\"gritty\""));
    }
}
