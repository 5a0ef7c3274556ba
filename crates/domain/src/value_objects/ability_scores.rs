//! Point-buy ability scores
//!
//! Six abilities, each starting at 8 and capped at 15 pre-bonus, paid for
//! out of a fixed 27-point budget with increasing marginal cost.

use serde::{Deserialize, Serialize};

/// Total points available to spend during point-buy
pub const POINT_BUY_BUDGET: i32 = 27;

/// Lowest score purchasable (and the free starting value)
pub const MIN_SCORE: i32 = 8;

/// Highest score purchasable before species bonuses
pub const MAX_SCORE: i32 = 15;

/// The six abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// All six abilities in conventional sheet order
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Three-letter sheet abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

/// Cumulative point-buy cost of holding a score.
///
/// Returns `None` outside the purchasable range `[8, 15]`.
pub fn point_cost(score: i32) -> Option<i32> {
    match score {
        8 => Some(0),
        9 => Some(1),
        10 => Some(2),
        11 => Some(3),
        12 => Some(4),
        13 => Some(5),
        14 => Some(7),
        15 => Some(9),
        _ => None,
    }
}

/// Standard ability modifier: floor((score - 10) / 2).
///
/// Floor division, not truncation toward zero: a score of 7 gives -2.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// The six ability scores of a character under point-buy rules.
///
/// Mutation happens only through [`increase`](Self::increase) and
/// [`decrease`](Self::decrease), which re-validate the budget and range
/// before applying, so the invariants (each score in `[8, 15]`, spent
/// cost within budget) hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::new()
    }
}

impl AbilityScores {
    /// All six scores at the free starting value of 8
    pub fn new() -> Self {
        Self {
            strength: MIN_SCORE,
            dexterity: MIN_SCORE,
            constitution: MIN_SCORE,
            intelligence: MIN_SCORE,
            wisdom: MIN_SCORE,
            charisma: MIN_SCORE,
        }
    }

    /// Current value of an ability
    pub fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Modifier for an ability's current score
    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.score(ability))
    }

    /// Points spent so far across all six scores
    pub fn points_spent(&self) -> i32 {
        Ability::ALL
            .iter()
            .map(|&a| point_cost(self.score(a)).unwrap_or(0))
            .sum()
    }

    /// Points left in the 27-point budget
    pub fn points_remaining(&self) -> i32 {
        POINT_BUY_BUDGET - self.points_spent()
    }

    /// Raise an ability by one if the cap and budget allow it.
    ///
    /// Returns whether the increase was applied; out-of-budget or at-cap
    /// requests are a no-op.
    pub fn increase(&mut self, ability: Ability) -> bool {
        let current = self.score(ability);
        if current >= MAX_SCORE {
            return false;
        }
        let step_cost = match (point_cost(current + 1), point_cost(current)) {
            (Some(next), Some(now)) => next - now,
            _ => return false,
        };
        if step_cost > self.points_remaining() {
            return false;
        }
        self.set(ability, current + 1);
        true
    }

    /// Lower an ability by one, refunding its cost. No-op at the floor of 8.
    pub fn decrease(&mut self, ability: Ability) -> bool {
        let current = self.score(ability);
        if current <= MIN_SCORE {
            return false;
        }
        self.set(ability, current - 1);
        true
    }

    fn set(&mut self, ability: Ability, value: i32) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Dexterity => self.dexterity = value,
            Ability::Constitution => self.constitution = value,
            Ability::Intelligence => self.intelligence = value,
            Ability::Wisdom => self.wisdom = value,
            Ability::Charisma => self.charisma = value,
        }
    }
}
