//! Canned offline content
//!
//! Read paths fall back to this content when the backend is unreachable so
//! the app stays browsable offline. Everything here is deterministic.

use chrono::{TimeZone, Utc};

use echoveil_domain::{
    Campaign, CampaignId, Character, CombatState, Difficulty, GameHistoryEntry, GameState,
    NarrativeStyle,
};
use echoveil_protocol::CampaignSummary;

/// Narration appended when an action cannot reach the game master
pub const OFFLINE_NARRATION: &str =
    "The galaxy holds its breath. (The game master is unreachable; your action was not recorded.)";

/// Demo characters shown when the character list cannot be fetched
pub fn demo_characters() -> Vec<Character> {
    let mut kira = Character::new("Kira Voss", "Human", "Sentinel", "Outlaw");
    kira.set_max_hp(24);
    kira.set_current_hp(24);
    kira.armor_class = 14;

    let mut dex = Character::new("Dex Arlan", "Twi'lek", "Engineer", "Scavenger");
    dex.set_max_hp(18);
    dex.set_current_hp(18);
    dex.armor_class = 12;

    vec![kira, dex]
}

/// Demo campaign list shown when browsing fails
pub fn demo_campaign_summaries() -> Vec<CampaignSummary> {
    vec![
        CampaignSummary {
            id: "demo-ralta".to_string(),
            title: "Shadows of Ralta".to_string(),
            current_location: "Ralta Spaceport, Lower Ring".to_string(),
            last_played: Utc.with_ymd_and_hms(2026, 8, 1, 19, 30, 0).single(),
        },
        CampaignSummary {
            id: "demo-veil".to_string(),
            title: "The Broken Veil".to_string(),
            current_location: "Derelict cruiser, engineering deck".to_string(),
            last_played: Utc.with_ymd_and_hms(2026, 7, 18, 21, 0, 0).single(),
        },
    ]
}

/// A synthesized campaign for offline browsing of a campaign that could
/// not be fetched. Always has history and at least one suggested choice.
pub fn demo_campaign(id: &CampaignId) -> Campaign {
    let mut history = vec![
        GameHistoryEntry::gm_narration(
            "Rain streaks the viewport as your shuttle settles onto the pad. \
             Ralta Spaceport sprawls below, all neon and rust.",
        ),
        GameHistoryEntry::gm_narration(
            "A dock worker eyes your blaster and nods toward the cantina. \
             \"Whatever you're here for, it starts in there.\"",
        ),
    ];
    for entry in &mut history {
        entry.timestamp = Utc
            .with_ymd_and_hms(2026, 8, 1, 19, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
    }

    Campaign {
        id: id.clone(),
        title: "Shadows of Ralta".to_string(),
        current_location: "Ralta Spaceport, Lower Ring".to_string(),
        difficulty: Difficulty::Normal,
        narrative_style: NarrativeStyle::Cinematic,
        game_state: GameState {
            active: true,
            combat: CombatState::inactive(),
            history,
            suggested_choices: vec![
                "Head into the cantina".to_string(),
                "Question the dock worker".to_string(),
                "Scout the landing pads first".to_string(),
            ],
            character_id: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_campaign_is_browsable_offline() {
        let id = CampaignId::from_string("demo-ralta");
        let campaign = demo_campaign(&id);
        assert_eq!(campaign.id, id);
        assert!(!campaign.game_state.history.is_empty());
        assert!(!campaign.game_state.suggested_choices.is_empty());
    }

    #[test]
    fn test_demo_characters_are_valid() {
        for character in demo_characters() {
            character.validate().expect("demo character valid");
            assert!(character.current_hp() <= character.max_hp());
        }
    }

    #[test]
    fn test_demo_content_is_deterministic() {
        assert_eq!(demo_campaign_summaries(), demo_campaign_summaries());
    }
}
