//! Combat state - the encounter roster and turn pointer
//!
//! Combat truth is owned by the backend: each server response fully
//! replaces the roster and turn index. The client only advances the turn
//! pointer optimistically when the server omits it.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CombatantId;

/// One participant (player or NPC) in an active encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub ac: i32,
    pub initiative: i32,
    pub conditions: Vec<String>,
}

impl Combatant {
    pub fn is_down(&self) -> bool {
        self.hp <= 0
    }
}

/// State of the current combat encounter.
///
/// # Invariants
///
/// Whenever `active` is true and `participants` is non-empty,
/// `current_turn_index` is a valid index into `participants`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatState {
    pub active: bool,
    pub current_turn_index: usize,
    pub participants: Vec<Combatant>,
}

impl CombatState {
    /// Inactive combat with an empty roster
    pub fn inactive() -> Self {
        Self::default()
    }

    /// The combatant whose turn it is, if combat is live
    pub fn current_combatant(&self) -> Option<&Combatant> {
        if !self.active {
            return None;
        }
        self.participants.get(self.current_turn_index)
    }

    /// Advance the turn pointer modulo the roster size.
    ///
    /// Used only as the optimistic echo when the server response omits a
    /// turn index. No-op on an empty roster.
    pub fn advance_turn(&mut self) {
        if !self.participants.is_empty() {
            self.current_turn_index = (self.current_turn_index + 1) % self.participants.len();
        }
    }

    /// Replace roster and turn index with server-provided values.
    ///
    /// The incoming index is reduced modulo the new roster size so a stale
    /// or out-of-range index from the backend can never violate the turn
    /// invariant.
    pub fn replace_from_server(&mut self, participants: Vec<Combatant>, turn_index: Option<usize>) {
        self.participants = participants;
        if let Some(index) = turn_index {
            self.current_turn_index = if self.participants.is_empty() {
                0
            } else {
                index % self.participants.len()
            };
        } else if self.current_turn_index >= self.participants.len() {
            self.current_turn_index = 0;
        }
        self.active = !self.participants.is_empty();
    }

    /// End the encounter, clearing the roster
    pub fn end(&mut self) {
        self.active = false;
        self.participants.clear();
        self.current_turn_index = 0;
    }

    /// Check the turn-index invariant
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.active
            && !self.participants.is_empty()
            && self.current_turn_index >= self.participants.len()
        {
            return Err(DomainError::constraint(format!(
                "turn index {} out of range for {} participants",
                self.current_turn_index,
                self.participants.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combatant(id: &str, initiative: i32) -> Combatant {
        Combatant {
            id: CombatantId::from_string(id),
            name: id.to_string(),
            hp: 20,
            max_hp: 20,
            ac: 12,
            initiative,
            conditions: vec![],
        }
    }

    fn three_way_fight() -> CombatState {
        CombatState {
            active: true,
            current_turn_index: 2,
            participants: vec![
                combatant("kira", 18),
                combatant("raider-1", 12),
                combatant("raider-2", 7),
            ],
        }
    }

    #[test]
    fn test_advance_turn_wraps_modulo() {
        let mut combat = three_way_fight();
        combat.advance_turn();
        assert_eq!(combat.current_turn_index, 0);
        combat.advance_turn();
        assert_eq!(combat.current_turn_index, 1);
    }

    #[test]
    fn test_advance_turn_on_empty_roster_is_noop() {
        let mut combat = CombatState::inactive();
        combat.advance_turn();
        assert_eq!(combat.current_turn_index, 0);
    }

    #[test]
    fn test_current_combatant_respects_active_flag() {
        let mut combat = three_way_fight();
        assert_eq!(
            combat.current_combatant().map(|c| c.id.as_str()),
            Some("raider-2")
        );
        combat.active = false;
        assert!(combat.current_combatant().is_none());
    }

    #[test]
    fn test_replace_from_server_is_authoritative() {
        let mut combat = three_way_fight();
        combat.replace_from_server(vec![combatant("kira", 18), combatant("raider-1", 12)], Some(1));
        assert_eq!(combat.participants.len(), 2);
        assert_eq!(combat.current_turn_index, 1);
        assert!(combat.active);
        combat.validate().expect("invariant holds");
    }

    #[test]
    fn test_replace_reduces_out_of_range_index() {
        let mut combat = three_way_fight();
        combat.replace_from_server(vec![combatant("kira", 18)], Some(5));
        assert_eq!(combat.current_turn_index, 0);
        combat.validate().expect("invariant holds");
    }

    #[test]
    fn test_replace_without_index_keeps_local_pointer_in_range() {
        let mut combat = three_way_fight();
        combat.replace_from_server(vec![combatant("kira", 18), combatant("raider-1", 12)], None);
        assert!(combat.current_turn_index < combat.participants.len());
    }

    #[test]
    fn test_replace_with_empty_roster_deactivates() {
        let mut combat = three_way_fight();
        combat.replace_from_server(vec![], None);
        assert!(!combat.active);
        assert_eq!(combat.current_turn_index, 0);
    }

    #[test]
    fn test_end_clears_everything() {
        let mut combat = three_way_fight();
        combat.end();
        assert!(!combat.active);
        assert!(combat.participants.is_empty());
        assert_eq!(combat.current_turn_index, 0);
    }

    #[test]
    fn test_validate_catches_bad_index() {
        let mut combat = three_way_fight();
        combat.current_turn_index = 9;
        assert!(combat.validate().is_err());
    }
}
