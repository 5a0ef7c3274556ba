//! Client-side error taxonomy for backend calls
//!
//! Three classes, matching how callers react: transport failures (no
//! response) degrade to fallbacks on read paths, non-2xx statuses and
//! decode failures surface as typed errors. Nothing here is retried and
//! nothing is fatal to the process.

use thiserror::Error;

/// Errors from the game-server gateway
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("Server returned HTTP {code}")]
    Status { code: u16 },

    /// The response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Check if this is a "not found" status
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { code: 404 })
    }

    /// Transport errors are the ones read paths silently degrade on
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
