//! Data Transfer Objects (DTOs)
//!
//! Wire-format types for the game-master backend. The backend contract is
//! loosely typed, so every optional field carries a documented default and
//! the DTO -> domain conversion is the single place defaults are applied.
//! Dates are RFC 3339 with fractional seconds on both encode and decode
//! (chrono's serde impls), so round-trips are symmetric.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use echoveil_domain::{
    AbilityScores, Campaign, CampaignId, Character, CharacterId, CombatState, Combatant,
    CombatantId, Difficulty, GameHistoryEntry, GameState, HistoryEntryType, NarrativeStyle,
};

fn default_unknown() -> String {
    "Unknown".to_string()
}

fn default_level() -> u32 {
    1
}

fn default_hp() -> i32 {
    10
}

fn default_ac() -> i32 {
    10
}

fn default_entry_type() -> HistoryEntryType {
    HistoryEntryType::GmNarration
}

fn default_title() -> String {
    "Untitled Campaign".to_string()
}

// =============================================================================
// Character
// =============================================================================

/// Wire-format character, also used as the create/update payload.
///
/// Decode defaults: species/class/background -> "Unknown", level -> 1,
/// HP -> 10/10, AC -> 10, veil points -> 0, ability scores -> all 8s.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_unknown")]
    pub species: String,
    #[serde(default = "default_unknown")]
    pub class: String,
    #[serde(default = "default_unknown")]
    pub background: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub experience: u32,
    #[serde(default = "default_hp")]
    pub current_hp: i32,
    #[serde(default = "default_hp")]
    pub max_hp: i32,
    #[serde(default = "default_ac")]
    pub armor_class: i32,
    #[serde(default)]
    pub veil_points: u32,
    #[serde(default)]
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CharacterDto {
    /// Convert to the domain entity, applying clamps at the boundary.
    ///
    /// A missing id means the backend never persisted this character; a
    /// fresh local id is generated so the entity is still addressable.
    pub fn into_domain(self) -> Character {
        let id = if self.id.is_empty() {
            CharacterId::new()
        } else {
            CharacterId::from_string(self.id)
        };
        Character::from_parts(
            id,
            self.name,
            self.species,
            self.class,
            self.background,
            self.level,
            self.experience,
            self.current_hp,
            self.max_hp,
            self.armor_class,
            self.veil_points,
            self.ability_scores,
            self.updated_at.unwrap_or_else(Utc::now),
        )
    }

    /// Build the wire payload for a domain character
    pub fn from_domain(character: &Character) -> Self {
        Self {
            id: character.id.as_str().to_string(),
            name: character.name.clone(),
            species: character.species.clone(),
            class: character.class.clone(),
            background: character.background.clone(),
            level: character.level,
            experience: character.experience,
            current_hp: character.current_hp(),
            max_hp: character.max_hp(),
            armor_class: character.armor_class,
            veil_points: character.veil_points,
            ability_scores: character.ability_scores,
            updated_at: Some(character.updated_at),
        }
    }
}

// =============================================================================
// Combat
// =============================================================================

/// Wire-format combatant. Defaults mirror the character table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantDto {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_unknown")]
    pub name: String,
    #[serde(default = "default_hp")]
    pub hp: i32,
    #[serde(default = "default_hp")]
    pub max_hp: i32,
    #[serde(default = "default_ac")]
    pub ac: i32,
    #[serde(default)]
    pub initiative: i32,
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl CombatantDto {
    pub fn into_domain(self) -> Combatant {
        Combatant {
            id: CombatantId::from_string(self.id),
            name: self.name,
            hp: self.hp,
            max_hp: self.max_hp,
            ac: self.ac,
            initiative: self.initiative,
            conditions: self.conditions,
        }
    }
}

/// Wire-format combat state; the server's roster fully replaces the
/// client's on every response that carries one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStateDto {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub current_turn_index: Option<usize>,
    #[serde(default)]
    pub participants: Vec<CombatantDto>,
}

impl CombatStateDto {
    /// Apply onto an existing combat state. A payload without a turn index
    /// keeps the local pointer (re-clamped to the new roster) instead of
    /// resetting it to zero.
    pub fn apply_to(self, state: &mut CombatState) {
        let active = self.active;
        state.replace_from_server(
            self.participants.into_iter().map(CombatantDto::into_domain).collect(),
            self.current_turn_index,
        );
        state.active = active && !state.participants.is_empty();
    }

    pub fn into_domain(self) -> CombatState {
        let mut state = CombatState::inactive();
        self.apply_to(&mut state);
        state
    }
}

// =============================================================================
// History
// =============================================================================

/// Wire-format history entry. Unknown/missing fields degrade to an empty
/// GM narration stamped with the decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameHistoryEntryDto {
    #[serde(default = "default_entry_type", rename = "type")]
    pub entry_type: HistoryEntryType,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl GameHistoryEntryDto {
    pub fn into_domain(self) -> GameHistoryEntry {
        GameHistoryEntry {
            entry_type: self.entry_type,
            content: self.content,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            correlation_id: None,
        }
    }
}

// =============================================================================
// Campaign
// =============================================================================

/// Wire-format campaign summary for the browse list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub last_played: Option<DateTime<Utc>>,
}

/// Wire-format game state nested inside a campaign
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateDto {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub combat_state: Option<CombatStateDto>,
    #[serde(default)]
    pub history: Vec<GameHistoryEntryDto>,
    #[serde(default)]
    pub suggested_choices: Vec<String>,
    #[serde(default)]
    pub character_id: Option<String>,
}

impl GameStateDto {
    pub fn into_domain(self) -> GameState {
        GameState {
            active: self.active,
            combat: self
                .combat_state
                .map(CombatStateDto::into_domain)
                .unwrap_or_default(),
            history: self
                .history
                .into_iter()
                .map(GameHistoryEntryDto::into_domain)
                .collect(),
            suggested_choices: self.suggested_choices,
            character_id: self.character_id.map(CharacterId::from_string),
        }
    }
}

/// Wire-format campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub narrative_style: NarrativeStyle,
    #[serde(default)]
    pub game_state: GameStateDto,
}

impl CampaignDto {
    pub fn into_domain(self) -> Campaign {
        Campaign {
            id: CampaignId::from_string(self.id),
            title: self.title,
            current_location: self.current_location,
            difficulty: self.difficulty,
            narrative_style: self.narrative_style,
            game_state: self.game_state.into_domain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_decodes_with_all_defaults() {
        let character: CharacterDto =
            serde_json::from_str(r#"{"name":"Kira"}"#).expect("decode sparse character");
        assert_eq!(character.species, "Unknown");
        assert_eq!(character.level, 1);
        assert_eq!(character.current_hp, 10);
        assert_eq!(character.max_hp, 10);
        assert_eq!(character.armor_class, 10);
        assert_eq!(character.veil_points, 0);

        let domain = character.into_domain();
        assert_eq!(domain.name, "Kira");
        assert!(!domain.id.as_str().is_empty());
    }

    #[test]
    fn test_character_decode_clamps_hp_at_boundary() {
        let character: CharacterDto =
            serde_json::from_str(r#"{"id":"c1","name":"Kira","currentHp":99,"maxHp":30}"#)
                .expect("decode");
        let domain = character.into_domain();
        assert_eq!(domain.current_hp(), 30);
    }

    #[test]
    fn test_fractional_seconds_timestamp_decodes() {
        let character: CharacterDto = serde_json::from_str(
            r#"{"name":"Kira","updatedAt":"2026-08-29T12:34:56.789Z"}"#,
        )
        .expect("decode fractional-seconds date");
        assert!(character.updated_at.is_some());
    }

    #[test]
    fn test_character_round_trips_through_wire_format() {
        let mut character = Character::new("Kira", "Human", "Sentinel", "Outlaw");
        character.set_max_hp(24);
        character.set_current_hp(17);
        let json = serde_json::to_string(&CharacterDto::from_domain(&character)).expect("encode");
        let back: CharacterDto = serde_json::from_str(&json).expect("decode");
        let domain = back.into_domain();
        assert_eq!(domain.id, character.id);
        assert_eq!(domain.current_hp(), 17);
        assert_eq!(domain.updated_at, character.updated_at);
    }

    #[test]
    fn test_combat_state_decode_defaults() {
        let combat: CombatStateDto = serde_json::from_str(r#"{}"#).expect("decode empty combat");
        let domain = combat.into_domain();
        assert!(!domain.active);
        assert!(domain.participants.is_empty());
    }

    #[test]
    fn test_combat_state_out_of_range_index_is_reduced() {
        let combat: CombatStateDto = serde_json::from_str(
            r#"{"active":true,"currentTurnIndex":7,"participants":[{"id":"a"},{"id":"b"}]}"#,
        )
        .expect("decode");
        let domain = combat.into_domain();
        assert!(domain.active);
        assert_eq!(domain.current_turn_index, 1);
        domain.validate().expect("invariant holds after decode");
    }

    #[test]
    fn test_combat_state_without_index_keeps_local_pointer() {
        let combat: CombatStateDto = serde_json::from_str(
            r#"{"active":true,"participants":[{"id":"a"},{"id":"b"},{"id":"c"}]}"#,
        )
        .expect("decode");
        let mut state = CombatState {
            active: true,
            current_turn_index: 1,
            participants: vec![],
        };
        combat.apply_to(&mut state);
        assert_eq!(state.current_turn_index, 1);
        assert_eq!(state.participants.len(), 3);
    }

    #[test]
    fn test_history_entry_unknown_fields_degrade() {
        let entry: GameHistoryEntryDto = serde_json::from_str(r#"{}"#).expect("decode");
        let domain = entry.into_domain();
        assert_eq!(domain.entry_type, HistoryEntryType::GmNarration);
        assert_eq!(domain.content, "");
    }

    #[test]
    fn test_campaign_decode_sparse() {
        let campaign: CampaignDto = serde_json::from_str(r#"{"id":"c9"}"#).expect("decode");
        let domain = campaign.into_domain();
        assert_eq!(domain.id.as_str(), "c9");
        assert_eq!(domain.title, "Untitled Campaign");
        assert_eq!(domain.difficulty, Difficulty::Normal);
        assert!(domain.game_state.history.is_empty());
    }
}
