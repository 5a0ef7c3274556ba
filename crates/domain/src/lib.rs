//! Echoveil domain - core types, value objects, and invariants
//!
//! Everything here is transport-agnostic: no HTTP, no async, no I/O beyond
//! RNG consumption in the dice engine. The protocol and player crates build
//! on these types.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Campaign, Character, CharacterDraft, CombatState, Combatant, Difficulty, GameHistoryEntry,
    GameState, HistoryEntryType, NarrativeStyle,
};

pub use error::DomainError;

pub use ids::{CampaignId, CharacterId, CombatantId};

pub use value_objects::{
    ability_modifier, point_cost, Ability, AbilityScores, DiceRoll, DiceRollOutcome, MAX_SCORE,
    MIN_SCORE, POINT_BUY_BUDGET,
};
