//! Runtime settings
//!
//! Loaded from TOML; every key is optional and falls back to its default.
//!
//! ```toml
//! autosave_debounce_ms = 500
//! notice_dismiss_ms = 3000
//! storage_key = "persist:root"
//! ```

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SvcLogError};

pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_NOTICE_DISMISS_MS: u64 = 3000;
pub const DEFAULT_STORAGE_KEY: &str = "persist:root";

const MAX_AUTOSAVE_DEBOUNCE_MS: u64 = 60_000;
const MAX_NOTICE_DISMISS_MS: u64 = 600_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Quiet period after the last edit before a draft is persisted
    pub autosave_debounce_ms: u64,
    /// How long a success notice stays visible
    pub notice_dismiss_ms: u64,
    /// Key the state blob is stored under
    pub storage_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autosave_debounce_ms: DEFAULT_AUTOSAVE_DEBOUNCE_MS,
            notice_dismiss_ms: DEFAULT_NOTICE_DISMISS_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text
    ///
    /// # Errors
    /// `InvalidSettings` on malformed TOML or out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file
    ///
    /// # Errors
    /// `InvalidSettings` if the file cannot be read or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SvcLogError::InvalidSettings {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `InvalidSettings` naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.autosave_debounce_ms == 0 || self.autosave_debounce_ms > MAX_AUTOSAVE_DEBOUNCE_MS {
            return Err(SvcLogError::InvalidSettings {
                reason: format!(
                    "autosave_debounce_ms must be between 1 and {}, got {}",
                    MAX_AUTOSAVE_DEBOUNCE_MS, self.autosave_debounce_ms
                ),
            });
        }
        if self.notice_dismiss_ms > MAX_NOTICE_DISMISS_MS {
            return Err(SvcLogError::InvalidSettings {
                reason: format!(
                    "notice_dismiss_ms must be at most {}, got {}",
                    MAX_NOTICE_DISMISS_MS, self.notice_dismiss_ms
                ),
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(SvcLogError::InvalidSettings {
                reason: "storage_key cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn autosave_window(&self) -> Duration {
        millis(self.autosave_debounce_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        millis(self.notice_dismiss_ms)
    }
}

fn millis(ms: u64) -> Duration {
    Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX))
}
