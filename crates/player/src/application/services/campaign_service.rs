//! Campaign service - lifecycle and the narrative action loop
//!
//! Reads degrade to demo content so the app stays usable offline. Writes
//! (start, undo, settings) surface their errors. Narrative actions use an
//! optimistic history append reconciled by correlation id: confirmed in
//! place on success, rolled back and replaced by an offline narration on
//! failure - the UI never sees a submit "fail".

use std::sync::Arc;

use anyhow::Result;

use echoveil_domain::{
    Campaign, CampaignId, Character, Difficulty, GameHistoryEntry, NarrativeStyle,
};
use echoveil_protocol::{CampaignSummary, NarrativeActionRequest, StartCampaignRequest};

use crate::infrastructure::demo;
use crate::ports::outbound::GameServerPort;

/// Shown when the session summary endpoint fails
const SUMMARY_UNAVAILABLE: &str = "The session summary could not be loaded.";

/// A freshly started campaign: its id and the opening scene text
#[derive(Debug, Clone)]
pub struct StartedCampaign {
    pub campaign_id: CampaignId,
    pub opening_scene: String,
}

/// Service for campaign lifecycle and narrative play
pub struct CampaignService {
    server: Arc<dyn GameServerPort>,
}

impl CampaignService {
    pub fn new(server: Arc<dyn GameServerPort>) -> Self {
        Self { server }
    }

    /// Browse campaigns, degrading to the demo list offline
    pub async fn list_campaigns(&self) -> Vec<CampaignSummary> {
        match self.server.list_campaigns().await {
            Ok(summaries) => summaries,
            Err(e) => {
                tracing::warn!(error = %e, "campaign list unavailable, using demo list");
                demo::demo_campaign_summaries()
            }
        }
    }

    /// Fetch a campaign, degrading to a synthesized demo campaign offline
    pub async fn fetch_campaign(&self, id: &CampaignId) -> Campaign {
        match self.server.fetch_campaign(id).await {
            Ok(campaign) => campaign,
            Err(e) => {
                tracing::warn!(error = %e, campaign = %id, "campaign unavailable, synthesizing demo");
                demo::demo_campaign(id)
            }
        }
    }

    /// Start a new campaign for a character. Errors surface to the caller.
    pub async fn start_campaign(
        &self,
        character: &Character,
        title: Option<String>,
        difficulty: Difficulty,
        narrative_style: NarrativeStyle,
    ) -> Result<StartedCampaign> {
        let response = self
            .server
            .start_campaign(StartCampaignRequest {
                character_id: character.id.as_str().to_string(),
                title,
                difficulty,
                narrative_style,
            })
            .await?;
        Ok(StartedCampaign {
            campaign_id: CampaignId::from_string(response.campaign_id),
            opening_scene: response.opening_scene,
        })
    }

    /// Submit a narrative player action, reconciling the history log.
    ///
    /// The player's action is appended optimistically before the request.
    /// On success it is confirmed in place and the GM's scene narration is
    /// appended after it; on failure it is rolled back and a synthetic
    /// offline narration is appended instead. Either way the campaign stays
    /// renderable, so this method does not error on network failure.
    ///
    /// Returns XP awarded by the response, if any.
    pub async fn submit_action(&self, campaign: &mut Campaign, action: &str) -> Option<u32> {
        let correlation_id = campaign.game_state.append_optimistic_action(action);

        let request = NarrativeActionRequest {
            campaign_id: campaign.id.as_str().to_string(),
            action: action.to_string(),
            character_id: campaign
                .game_state
                .character_id
                .as_ref()
                .map(|id| id.as_str().to_string()),
        };

        match self.server.submit_action(request).await {
            Ok(response) => {
                campaign.game_state.confirm_optimistic(correlation_id);
                campaign
                    .game_state
                    .append_entry(GameHistoryEntry::gm_narration(response.scene));
                if let Some(combat) = response.combat_state {
                    combat.apply_to(&mut campaign.game_state.combat);
                }
                if !response.suggested_choices.is_empty() {
                    campaign.game_state.suggested_choices = response.suggested_choices;
                }
                response.xp_awarded
            }
            Err(e) => {
                tracing::warn!(error = %e, "action did not reach the game master");
                campaign.game_state.rollback_optimistic(correlation_id);
                campaign
                    .game_state
                    .append_entry(GameHistoryEntry::gm_narration(demo::OFFLINE_NARRATION));
                None
            }
        }
    }

    /// Undo the most recent action. Errors surface; there is no fallback.
    pub async fn undo_last_action(&self, id: &CampaignId) -> Result<Campaign> {
        let campaign = self.server.undo_last_action(id).await?;
        Ok(campaign)
    }

    /// Update GM settings for a campaign. Errors surface to the caller.
    pub async fn update_settings(
        &self,
        campaign: &mut Campaign,
        difficulty: Difficulty,
        narrative_style: NarrativeStyle,
    ) -> Result<()> {
        self.server
            .update_settings(&campaign.id, difficulty, narrative_style)
            .await?;
        campaign.difficulty = difficulty;
        campaign.narrative_style = narrative_style;
        Ok(())
    }

    /// Fetch the session summary, degrading to a static message
    pub async fn session_summary(&self, id: &CampaignId) -> String {
        match self.server.session_summary(id).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(error = %e, "session summary unavailable");
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }
}
