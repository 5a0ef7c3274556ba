//! Campaign history log entries
//!
//! The history is append-only for the lifetime of a campaign. Entries
//! created optimistically (before the server confirms the action) carry a
//! correlation id so they can be confirmed in place or rolled back instead
//! of being blindly double-appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryEntryType {
    GmNarration,
    PlayerAction,
    CombatResult,
    SessionSummary,
}

/// Immutable append-only log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameHistoryEntry {
    pub entry_type: HistoryEntryType,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Set only on locally-created optimistic entries awaiting confirmation
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub correlation_id: Option<Uuid>,
}

impl GameHistoryEntry {
    /// A confirmed entry (server-sourced or locally final)
    pub fn new(entry_type: HistoryEntryType, content: impl Into<String>) -> Self {
        Self {
            entry_type,
            content: content.into(),
            timestamp: Utc::now(),
            correlation_id: None,
        }
    }

    /// An optimistic player-action entry awaiting server confirmation
    pub fn optimistic_action(content: impl Into<String>) -> Self {
        Self {
            entry_type: HistoryEntryType::PlayerAction,
            content: content.into(),
            timestamp: Utc::now(),
            correlation_id: Some(Uuid::new_v4()),
        }
    }

    pub fn gm_narration(content: impl Into<String>) -> Self {
        Self::new(HistoryEntryType::GmNarration, content)
    }

    pub fn combat_result(content: impl Into<String>) -> Self {
        Self::new(HistoryEntryType::CombatResult, content)
    }

    pub fn is_pending(&self) -> bool {
        self.correlation_id.is_some()
    }
}
