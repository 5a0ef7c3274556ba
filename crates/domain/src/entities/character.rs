//! Character entity - a persisted player character

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::AbilityScores;

/// A player character as persisted on the backend.
///
/// # Invariants
///
/// `current_hp` is clamped to `[0, max_hp]` on every mutation, and
/// `updated_at` is touched whenever the character changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub species: String,
    pub class: String,
    pub background: String,
    pub level: u32,
    pub experience: u32,
    current_hp: i32,
    max_hp: i32,
    pub armor_class: i32,
    /// Force/veil resource pool, never negative
    pub veil_points: u32,
    pub ability_scores: AbilityScores,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Create a level-1 character with default combat stats
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        class: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            species: species.into(),
            class: class.into(),
            background: background.into(),
            level: 1,
            experience: 0,
            current_hp: 10,
            max_hp: 10,
            armor_class: 10,
            veil_points: 0,
            ability_scores: AbilityScores::new(),
            updated_at: Utc::now(),
        }
    }

    /// Rebuild a character from already-validated parts (decode boundary).
    ///
    /// Applies the same clamping as the mutators so a loosely-typed backend
    /// payload can never produce `current_hp` outside `[0, max_hp]`.
    pub fn from_parts(
        id: CharacterId,
        name: String,
        species: String,
        class: String,
        background: String,
        level: u32,
        experience: u32,
        current_hp: i32,
        max_hp: i32,
        armor_class: i32,
        veil_points: u32,
        ability_scores: AbilityScores,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let max_hp = max_hp.max(0);
        Self {
            id,
            name,
            species,
            class,
            background,
            level: level.max(1),
            experience,
            current_hp: current_hp.clamp(0, max_hp),
            max_hp,
            armor_class,
            veil_points,
            ability_scores,
            updated_at,
        }
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Set current HP, clamped to `[0, max_hp]`
    pub fn set_current_hp(&mut self, hp: i32) {
        self.current_hp = hp.clamp(0, self.max_hp);
        self.touch();
    }

    /// Set max HP (floored at 0), re-clamping current HP
    pub fn set_max_hp(&mut self, hp: i32) {
        self.max_hp = hp.max(0);
        self.current_hp = self.current_hp.clamp(0, self.max_hp);
        self.touch();
    }

    /// Reduce current HP by `amount`, never below zero
    pub fn take_damage(&mut self, amount: i32) {
        self.set_current_hp(self.current_hp - amount.max(0));
    }

    /// Restore current HP by `amount`, never above max
    pub fn heal(&mut self, amount: i32) {
        self.set_current_hp(self.current_hp + amount.max(0));
    }

    pub fn is_unconscious(&self) -> bool {
        self.current_hp == 0
    }

    /// Advance one level
    pub fn level_up(&mut self) {
        self.level += 1;
        self.touch();
    }

    /// Award experience points
    pub fn award_experience(&mut self, xp: u32) {
        self.experience += xp;
        self.touch();
    }

    /// Spend veil points; fails when the pool is too small
    pub fn spend_veil_points(&mut self, amount: u32) -> Result<(), DomainError> {
        if amount > self.veil_points {
            return Err(DomainError::constraint(format!(
                "cannot spend {} veil points, only {} available",
                amount, self.veil_points
            )));
        }
        self.veil_points -= amount;
        self.touch();
        Ok(())
    }

    /// Update the last-modified timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate that the character has required fields
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if self.level < 1 {
            return Err(DomainError::validation("Character level must be at least 1"));
        }
        Ok(())
    }
}
