//! Persisted client configuration
//!
//! The only client-side persistence in the system: the backend base URL
//! (editable from a settings surface) and a stable per-device identifier.
//! There is no user authentication; the device id is the only scoping
//! mechanism and is sent on every request as `X-Device-Id`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "https://sw5e-api.petieclark.com";

/// Header carrying the per-device identifier
pub const DEVICE_ID_HEADER: &str = "X-Device-Id";

const CONFIG_FILE: &str = "client.json";

/// Client configuration, persisted as JSON in the platform config dir
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    base_url: String,
    device_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Fresh config with the default base URL and a new device id
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            device_id: Uuid::new_v4().to_string(),
        }
    }

    /// Load the persisted config, creating and saving a fresh one on first
    /// run (or when the file is unreadable).
    pub fn load_or_create() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_create_at(&path),
            None => {
                tracing::warn!("no config directory available, using in-memory config");
                Self::new()
            }
        }
    }

    /// Load from an explicit path (used by tests and custom setups)
    pub fn load_or_create_at(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(error = %e, "config file corrupt, regenerating");
                }
            },
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                tracing::warn!(error = %e, "could not read config file, regenerating");
            }
            Err(_) => {}
        }
        let config = Self::new();
        if let Err(e) = config.save_at(path) {
            tracing::warn!(error = %e, "could not persist fresh config");
        }
        config
    }

    /// Persist to the platform config dir
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("no config directory available")?;
        self.save_at(&path)
    }

    /// Persist to an explicit path
    pub fn save_at(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing config")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Echoveil", "Echoveil Companion")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Backend base URL, never with a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stable per-device identifier
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Point the client at a different backend
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_config_has_default_url_and_unique_device() {
        let a = ClientConfig::new();
        let b = ClientConfig::new();
        assert_eq!(a.base_url(), DEFAULT_BASE_URL);
        assert_ne!(a.device_id(), b.device_id());
    }

    #[test]
    fn test_set_base_url_trims_trailing_slash() {
        let mut config = ClientConfig::new();
        config.set_base_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.json");

        let first = ClientConfig::load_or_create_at(&path);
        let second = ClientConfig::load_or_create_at(&path);
        // Device id survives reloads; this is what makes it stable.
        assert_eq!(first.device_id(), second.device_id());
    }

    #[test]
    fn test_corrupt_file_regenerates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.json");
        std::fs::write(&path, "not json").expect("write garbage");

        let config = ClientConfig::load_or_create_at(&path);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }
}
