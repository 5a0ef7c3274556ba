//! Combat turn controller
//!
//! Drives the player's side of an encounter as a small state machine:
//! pick an action, pick a target if the action needs one, submit, show the
//! resolution, acknowledge. The backend owns combat truth; every response
//! that carries a roster fully replaces the local one. At most one
//! submission is in flight; action taps while submitting are dropped.

use std::sync::Arc;

use echoveil_domain::{Campaign, Character, CombatantId, GameHistoryEntry};
use echoveil_protocol::{CharacterDto, CombatActionRequest, CombatActionResponse};

use crate::infrastructure::demo;
use crate::ports::outbound::GameServerPort;

/// Actions a player can take on their combat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    UsePower,
    Defend,
    Dodge,
    EndTurn,
}

impl CombatAction {
    /// Whether this action needs a target picked before submission
    pub fn needs_target(&self) -> bool {
        matches!(self, Self::Attack | Self::UsePower)
    }

    /// Wire verb sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::UsePower => "use_power",
            Self::Defend => "defend",
            Self::Dodge => "dodge",
            Self::EndTurn => "end_turn",
        }
    }
}

/// Where the controller is in the turn flow
#[derive(Debug, Clone, PartialEq)]
pub enum CombatPhase {
    /// Waiting for the player to pick an action
    Idle,
    /// An action that needs a target was picked; waiting for the target
    AwaitingTarget { action: CombatAction },
    /// A submission is in flight; further action taps are dropped
    Submitting,
    /// The server resolved the turn; waiting for acknowledgement
    TurnResolved { narration: Option<String> },
    /// The encounter is over
    CombatEnded { victory: bool, xp_awarded: Option<u32> },
}

/// Turn-flow controller for the active encounter of one campaign.
///
/// Owns the campaign while combat runs; callers take it back with
/// [`into_campaign`](Self::into_campaign) when the encounter ends.
pub struct CombatTurnController {
    server: Arc<dyn GameServerPort>,
    campaign: Campaign,
    phase: CombatPhase,
    /// Player-character updates from the last resolution, for the caller
    /// to persist or display
    character_updates: Vec<Character>,
}

impl CombatTurnController {
    pub fn new(server: Arc<dyn GameServerPort>, campaign: Campaign) -> Self {
        Self {
            server,
            campaign,
            phase: CombatPhase::Idle,
            character_updates: Vec::new(),
        }
    }

    pub fn phase(&self) -> &CombatPhase {
        &self.phase
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    /// Character updates carried by the most recent resolution
    pub fn character_updates(&self) -> &[Character] {
        &self.character_updates
    }

    /// Give the campaign back, e.g. after the encounter ends
    pub fn into_campaign(self) -> Campaign {
        self.campaign
    }

    /// Player picked an action. Targeted actions move to target selection;
    /// untargeted ones submit immediately. Dropped silently while a
    /// submission is in flight.
    pub async fn select_action(&mut self, action: CombatAction) {
        if self.phase == CombatPhase::Submitting {
            tracing::debug!(action = action.as_str(), "submission in flight, action dropped");
            return;
        }
        if action.needs_target() {
            self.phase = CombatPhase::AwaitingTarget { action };
            return;
        }
        self.submit(action, None).await;
    }

    /// Player picked a target for the pending action
    pub async fn choose_target(&mut self, target: CombatantId) {
        let CombatPhase::AwaitingTarget { action } = self.phase else {
            tracing::debug!("target chosen outside target selection, ignored");
            return;
        };
        self.submit(action, Some(target)).await;
    }

    /// Back out of target selection without submitting
    pub fn cancel_targeting(&mut self) {
        if matches!(self.phase, CombatPhase::AwaitingTarget { .. }) {
            self.phase = CombatPhase::Idle;
        }
    }

    /// Player dismissed the turn resolution; ready for the next action
    pub fn acknowledge_resolution(&mut self) {
        if matches!(self.phase, CombatPhase::TurnResolved { .. }) {
            self.phase = CombatPhase::Idle;
        }
    }

    async fn submit(&mut self, action: CombatAction, target: Option<CombatantId>) {
        self.phase = CombatPhase::Submitting;

        let request = CombatActionRequest {
            campaign_id: self.campaign.id.as_str().to_string(),
            action: action.as_str().to_string(),
            target_id: target.map(|t| t.as_str().to_string()),
        };

        match self.server.submit_combat_action(request).await {
            Ok(response) => self.apply_response(action, response),
            Err(e) => {
                tracing::warn!(error = %e, action = action.as_str(), "combat action did not land");
                self.campaign
                    .game_state
                    .append_entry(GameHistoryEntry::gm_narration(demo::OFFLINE_NARRATION));
                self.phase = CombatPhase::Idle;
            }
        }
    }

    fn apply_response(&mut self, action: CombatAction, response: CombatActionResponse) {
        let combat = &mut self.campaign.game_state.combat;

        // A missing turn index means the server did not reassign the turn;
        // an end-turn then still has to hand it to the next combatant.
        let server_set_index = response
            .combat_state
            .as_ref()
            .is_some_and(|state| state.current_turn_index.is_some());
        if let Some(state) = response.combat_state {
            state.apply_to(combat);
        }
        if !server_set_index && action == CombatAction::EndTurn {
            combat.advance_turn();
        }

        if let Some(narration) = &response.narration {
            self.campaign
                .game_state
                .append_entry(GameHistoryEntry::combat_result(narration.clone()));
        }

        self.character_updates = response
            .character_updates
            .into_iter()
            .map(CharacterDto::into_domain)
            .collect();

        if response.combat_ended {
            self.campaign.game_state.combat.end();
            self.phase = CombatPhase::CombatEnded {
                victory: response.victory,
                xp_awarded: response.xp_awarded,
            };
        } else {
            self.phase = CombatPhase::TurnResolved {
                narration: response.narration,
            };
        }
    }
}
