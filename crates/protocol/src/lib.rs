//! Echoveil protocol - wire types for the game-master backend contract
//!
//! The backend is treated as loosely typed: DTOs in this crate decode
//! defensively with per-field defaults and convert to domain types in one
//! place, so ad hoc fallbacks never leak into the application layer.

pub mod dto;
pub mod requests;
pub mod responses;

pub use dto::{
    CampaignDto, CampaignSummary, CharacterDto, CombatStateDto, CombatantDto, GameHistoryEntryDto,
    GameStateDto,
};
pub use requests::{
    CombatActionRequest, NarrativeActionRequest, StartCampaignRequest, UpdateSettingsRequest,
};
pub use responses::{
    AiStatusResponse, CombatActionResponse, NarrativeActionResponse, SessionSummaryResponse,
    StartCampaignResponse,
};
