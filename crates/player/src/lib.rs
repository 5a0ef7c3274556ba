//! Echoveil player - client application layer for the AI game master
//!
//! Hexagonal layout: the application layer (services, combat controller)
//! depends on the [`GameServerPort`](ports::outbound::GameServerPort)
//! trait; the reqwest gateway in [`infrastructure`] implements it. Tests
//! substitute the generated mock, available to downstream crates behind
//! the `testing` feature.

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::{
    AiStatusPoller, CampaignService, CharacterService, CombatAction, CombatPhase,
    CombatTurnController, StartedCampaign, AI_STATUS_POLL_INTERVAL,
};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEVICE_ID_HEADER};
pub use error::ApiError;
pub use infrastructure::HttpGateway;
pub use ports::outbound::GameServerPort;
