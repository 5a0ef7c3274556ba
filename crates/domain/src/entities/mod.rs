//! Domain entities - identified, mutable aggregates

mod campaign;
mod character;
mod character_draft;
mod combat;
mod history;

pub use campaign::{Campaign, Difficulty, GameState, NarrativeStyle};
pub use character::Character;
pub use character_draft::CharacterDraft;
pub use combat::{CombatState, Combatant};
pub use history::{GameHistoryEntry, HistoryEntryType};
