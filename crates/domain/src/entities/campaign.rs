//! Campaign aggregate - owns the game state, combat, and history log

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::combat::CombatState;
use crate::entities::history::{GameHistoryEntry, HistoryEntryType};
use crate::ids::{CampaignId, CharacterId};

/// How punishing the game master plays encounters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Tone of the generated narration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NarrativeStyle {
    #[default]
    Cinematic,
    Gritty,
    Lighthearted,
}

/// Live campaign state owned by the campaign aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub active: bool,
    pub combat: CombatState,
    pub history: Vec<GameHistoryEntry>,
    pub suggested_choices: Vec<String>,
    pub character_id: Option<CharacterId>,
}

impl GameState {
    /// Append a confirmed entry to the history log
    pub fn append_entry(&mut self, entry: GameHistoryEntry) {
        self.history.push(entry);
    }

    /// Append an optimistic player-action entry, returning its correlation
    /// id for later confirmation or rollback.
    pub fn append_optimistic_action(&mut self, content: impl Into<String>) -> Uuid {
        let entry = GameHistoryEntry::optimistic_action(content);
        // optimistic_action always sets a correlation id
        let correlation_id = entry.correlation_id.unwrap_or_default();
        self.history.push(entry);
        correlation_id
    }

    /// Confirm an optimistic entry in place: it stops being pending and
    /// keeps its position in the log. Returns false when no entry matches.
    pub fn confirm_optimistic(&mut self, correlation_id: Uuid) -> bool {
        match self.pending_position(correlation_id) {
            Some(pos) => {
                self.history[pos].correlation_id = None;
                true
            }
            None => false,
        }
    }

    /// Roll back an optimistic entry after the action failed to land.
    /// Returns false when no entry matches.
    pub fn rollback_optimistic(&mut self, correlation_id: Uuid) -> bool {
        match self.pending_position(correlation_id) {
            Some(pos) => {
                self.history.remove(pos);
                true
            }
            None => false,
        }
    }

    fn pending_position(&self, correlation_id: Uuid) -> Option<usize> {
        self.history
            .iter()
            .position(|e| e.correlation_id == Some(correlation_id))
    }

    /// Entries of a given type, oldest first
    pub fn entries_of_type(&self, entry_type: HistoryEntryType) -> Vec<&GameHistoryEntry> {
        self.history
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .collect()
    }
}

/// A campaign: identity, GM settings, and the owned game state.
///
/// Created by a start-campaign request, mutated by every action or combat
/// submission, deleted only by explicit user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub current_location: String,
    pub difficulty: Difficulty,
    pub narrative_style: NarrativeStyle,
    pub game_state: GameState,
}

impl Campaign {
    pub fn new(id: CampaignId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            current_location: String::new(),
            difficulty: Difficulty::default(),
            narrative_style: NarrativeStyle::default(),
            game_state: GameState::default(),
        }
    }

    pub fn in_combat(&self) -> bool {
        self.game_state.combat.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut state = GameState::default();
        state.append_entry(GameHistoryEntry::gm_narration("first"));
        state.append_entry(GameHistoryEntry::gm_narration("second"));
        assert_eq!(state.history[0].content, "first");
        assert_eq!(state.history[1].content, "second");
    }

    #[test]
    fn test_confirm_optimistic_in_place() {
        let mut state = GameState::default();
        state.append_entry(GameHistoryEntry::gm_narration("scene"));
        let id = state.append_optimistic_action("I open the blast door.");
        assert!(state.history[1].is_pending());

        assert!(state.confirm_optimistic(id));
        assert!(!state.history[1].is_pending());
        assert_eq!(state.history[1].content, "I open the blast door.");
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_rollback_removes_only_the_pending_entry() {
        let mut state = GameState::default();
        state.append_entry(GameHistoryEntry::gm_narration("scene"));
        let id = state.append_optimistic_action("I open the blast door.");

        assert!(state.rollback_optimistic(id));
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].content, "scene");
    }

    #[test]
    fn test_confirm_unknown_id_is_false() {
        let mut state = GameState::default();
        assert!(!state.confirm_optimistic(Uuid::new_v4()));
        assert!(!state.rollback_optimistic(Uuid::new_v4()));
    }

    #[test]
    fn test_entries_of_type_filters() {
        let mut state = GameState::default();
        state.append_entry(GameHistoryEntry::gm_narration("scene"));
        state.append_entry(GameHistoryEntry::combat_result("hit for 7"));
        state.append_entry(GameHistoryEntry::gm_narration("aftermath"));
        let narration = state.entries_of_type(HistoryEntryType::GmNarration);
        assert_eq!(narration.len(), 2);
    }

    #[test]
    fn test_campaign_combat_flag() {
        let mut campaign = Campaign::new(CampaignId::from_string("c1"), "Shadows of Ralta");
        assert!(!campaign.in_combat());
        campaign.game_state.combat.active = true;
        assert!(campaign.in_combat());
    }
}
