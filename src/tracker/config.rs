//! Tracker configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of page changes kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// What to do with a detach that matches neither tracked page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedDetachPolicy {
    /// Emit a warning and leave state unchanged
    #[default]
    Log,

    /// Return `TrackerError::UnmatchedDetach`, state unchanged
    Reject,
}

/// Errors in a tracker configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse tracker config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("History limit must be at least 1 (use null for unbounded)")]
    ZeroHistoryLimit,
}

/// Tunables for a `PageTracker`.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Example
///
/// ```rust
/// use pager_track::tracker::{TrackerConfig, UnmatchedDetachPolicy};
///
/// let config = TrackerConfig::from_json(r#"{ "unmatched_detach": "reject" }"#).unwrap();
///
/// assert_eq!(config.unmatched_detach, UnmatchedDetachPolicy::Reject);
/// assert_eq!(config.history_limit, Some(64));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub unmatched_detach: UnmatchedDetachPolicy,

    /// Maximum page changes kept in history; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            unmatched_detach: UnmatchedDetachPolicy::default(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == Some(0) {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(())
    }
}
