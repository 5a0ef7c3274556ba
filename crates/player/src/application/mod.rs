//! Application layer - services and the combat turn controller

pub mod combat;
pub mod services;

pub use combat::{CombatAction, CombatPhase, CombatTurnController};
pub use services::{
    AiStatusPoller, CampaignService, CharacterService, StartedCampaign, AI_STATUS_POLL_INTERVAL,
};
