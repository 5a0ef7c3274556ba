//! Character draft - transient builder-session aggregate
//!
//! Holds everything the character builder collects before the player
//! commits. Nothing is persisted until the draft is ready and built;
//! a cancelled builder just drops the draft.

use serde::{Deserialize, Serialize};

use crate::entities::Character;
use crate::error::DomainError;
use crate::value_objects::{ability_modifier, Ability, AbilityScores};

/// In-progress character creation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    pub name: String,
    pub species: Option<String>,
    pub class: Option<String>,
    pub background: Option<String>,
    pub ability_scores: AbilityScores,
    pub selected_powers: Vec<String>,
    pub selected_equipment: Vec<String>,
    pub appearance: String,
    pub backstory: String,
}

impl CharacterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the draft can be committed: a trimmed-non-empty name and
    /// species, class, and background all chosen.
    pub fn is_ready_to_save(&self) -> bool {
        !self.name.trim().is_empty()
            && self.species.is_some()
            && self.class.is_some()
            && self.background.is_some()
    }

    /// Commit the draft into a persistable character.
    ///
    /// Starting HP is 10 plus the constitution modifier (floored at 1 so a
    /// heavy dump stat cannot produce a dead-on-arrival character).
    pub fn build(&self) -> Result<Character, DomainError> {
        if !self.is_ready_to_save() {
            return Err(DomainError::validation(
                "draft needs a name, species, class, and background before saving",
            ));
        }
        // is_ready_to_save just confirmed all three selections are present
        let species = self.species.clone().unwrap_or_default();
        let class = self.class.clone().unwrap_or_default();
        let background = self.background.clone().unwrap_or_default();

        let mut character = Character::new(self.name.trim(), species, class, background);
        character.ability_scores = self.ability_scores;

        let hp = (10 + self.ability_scores.modifier(Ability::Constitution)).max(1);
        character.set_max_hp(hp);
        character.set_current_hp(hp);
        character.armor_class = 10 + ability_modifier(self.ability_scores.score(Ability::Dexterity));
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> CharacterDraft {
        CharacterDraft {
            name: "Kira Voss".into(),
            species: Some("Human".into()),
            class: Some("Sentinel".into()),
            background: Some("Outlaw".into()),
            ..CharacterDraft::new()
        }
    }

    #[test]
    fn test_fresh_draft_is_not_ready() {
        assert!(!CharacterDraft::new().is_ready_to_save());
    }

    #[test]
    fn test_whitespace_name_is_not_ready() {
        let mut draft = complete_draft();
        draft.name = "   \t".into();
        assert!(!draft.is_ready_to_save());
    }

    #[test]
    fn test_ready_once_name_and_selections_present() {
        let mut draft = complete_draft();
        assert!(draft.is_ready_to_save());
        draft.background = None;
        assert!(!draft.is_ready_to_save());
    }

    #[test]
    fn test_build_rejects_incomplete_draft() {
        let mut draft = complete_draft();
        draft.species = None;
        assert!(matches!(draft.build(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_build_trims_name_and_derives_stats() {
        let mut draft = complete_draft();
        draft.name = "  Kira Voss  ".into();
        // CON 14 -> +2, DEX 12 -> +1
        for _ in 0..6 {
            draft.ability_scores.increase(Ability::Constitution);
        }
        for _ in 0..4 {
            draft.ability_scores.increase(Ability::Dexterity);
        }
        let character = draft.build().expect("complete draft builds");
        assert_eq!(character.name, "Kira Voss");
        assert_eq!(character.max_hp(), 12);
        assert_eq!(character.current_hp(), 12);
        assert_eq!(character.armor_class, 11);
        assert_eq!(character.level, 1);
    }

    #[test]
    fn test_build_floors_hp_at_one() {
        let draft = complete_draft();
        // CON 8 -> -1 modifier, HP would be 9; still above the floor.
        let character = draft.build().expect("builds");
        assert_eq!(character.max_hp(), 9);
    }
}
