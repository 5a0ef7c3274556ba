//! Application services - orchestration over the game server port

pub mod campaign_service;
pub mod character_service;
pub mod status_poller;

pub use campaign_service::{CampaignService, StartedCampaign};
pub use character_service::CharacterService;
pub use status_poller::{AiStatusPoller, AI_STATUS_POLL_INTERVAL};
