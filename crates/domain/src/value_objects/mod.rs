//! Value objects - immutable domain values with no identity

mod ability_scores;
mod dice;

pub use ability_scores::{
    ability_modifier, point_cost, Ability, AbilityScores, MAX_SCORE, MIN_SCORE, POINT_BUY_BUDGET,
};
pub use dice::{DiceRoll, DiceRollOutcome};
