//! Dice rolling value objects
//!
//! Rolls are typed (count, sides, modifier) rather than parsed from formula
//! strings; advantage and disadvantage roll each die twice and keep the
//! better or worse draw.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dice roll specification like "2d6+3", optionally with advantage
/// or disadvantage.
///
/// Advantage and disadvantage are intended to be mutually exclusive.
/// If both are set, advantage wins: the flags are checked in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRoll {
    /// Number of dice to roll (X in XdY)
    pub count: u8,
    /// Size of each die (Y in XdY)
    pub sides: u8,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    pub modifier: i32,
    /// Roll each die twice, keep the higher draw
    pub advantage: bool,
    /// Roll each die twice, keep the lower draw
    pub disadvantage: bool,
}

impl DiceRoll {
    /// Create a flat roll with no advantage or disadvantage
    pub fn new(count: u8, sides: u8, modifier: i32) -> Self {
        Self {
            count,
            sides,
            modifier,
            advantage: false,
            disadvantage: false,
        }
    }

    /// A single d20 roll with the given modifier
    pub fn d20(modifier: i32) -> Self {
        Self::new(1, 20, modifier)
    }

    /// Set the advantage flag
    pub fn with_advantage(mut self) -> Self {
        self.advantage = true;
        self
    }

    /// Set the disadvantage flag
    pub fn with_disadvantage(mut self) -> Self {
        self.disadvantage = true;
        self
    }

    /// Roll the dice and return the outcome.
    ///
    /// Each die draws uniformly in `[1, sides]`. With advantage each die is
    /// the max of two draws; with disadvantage the min. The total is never
    /// clamped, so negative totals are possible with negative modifiers.
    pub fn roll(&self) -> DiceRollOutcome {
        let mut rng = rand::thread_rng();
        self.roll_with(&mut rng)
    }

    /// Roll using a caller-provided RNG (deterministic in tests)
    pub fn roll_with<R: Rng>(&self, rng: &mut R) -> DiceRollOutcome {
        // A zero-sided die has nothing to sample; roll no dice at all.
        if self.sides == 0 {
            return DiceRollOutcome {
                rolls: Vec::new(),
                total: self.modifier,
                modifier: self.modifier,
                is_crit: false,
                is_fail: false,
            };
        }

        let mut rolls = Vec::with_capacity(self.count as usize);

        for _ in 0..self.count {
            let first = rng.gen_range(1..=self.sides as i32);
            // Advantage is checked first: both flags set resolves as advantage.
            let roll = if self.advantage {
                first.max(rng.gen_range(1..=self.sides as i32))
            } else if self.disadvantage {
                first.min(rng.gen_range(1..=self.sides as i32))
            } else {
                first
            };
            rolls.push(roll);
        }

        let dice_total: i32 = rolls.iter().sum();

        // Crits and fumbles only exist on a d20; a d100 showing 20 is neither.
        let is_crit = self.sides == 20 && rolls.iter().any(|&r| r == 20);
        let is_fail = self.sides == 20 && rolls.iter().any(|&r| r == 1);

        DiceRollOutcome {
            rolls,
            total: dice_total + self.modifier,
            modifier: self.modifier,
            is_crit,
            is_fail,
        }
    }

    /// Format as a display string (e.g., "1d20+5")
    pub fn display(&self) -> String {
        if self.modifier == 0 {
            format!("{}d{}", self.count, self.sides)
        } else if self.modifier > 0 {
            format!("{}d{}+{}", self.count, self.sides, self.modifier)
        } else {
            format!("{}d{}{}", self.count, self.sides, self.modifier)
        }
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Outcome of rolling dice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollOutcome {
    /// Individual die results (post advantage/disadvantage selection)
    pub rolls: Vec<i32>,
    /// Final total (sum of rolls + modifier)
    pub total: i32,
    /// Modifier that was applied
    pub modifier: i32,
    /// Any die showed a natural 20 (d20 rolls only)
    pub is_crit: bool,
    /// Any die showed a natural 1 (d20 rolls only)
    pub is_fail: bool,
}

impl DiceRollOutcome {
    /// Format as a breakdown string (e.g., "[4, 5] + 3 = 12")
    pub fn breakdown(&self) -> String {
        let rolls_str: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
        if self.modifier == 0 {
            format!("[{}] = {}", rolls_str.join(", "), self.total)
        } else if self.modifier > 0 {
            format!("[{}] + {} = {}", rolls_str.join(", "), self.modifier, self.total)
        } else {
            format!("[{}] - {} = {}", rolls_str.join(", "), -self.modifier, self.total)
        }
    }
}
