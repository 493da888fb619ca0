//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold the tunables shared by the query and mutation layers.
//! - Load optional JSON overrides; every missing field keeps its default.
//!
//! # Invariants
//! - Limits are never zero after normalization.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_SAVE_DELAY_MS: u64 = 1_000;
const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 5;
const DEFAULT_TAG_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Artificial latency applied to every note save.
    pub save_delay_ms: u64,
    /// Maximum rows in the dashboard "recent activity" list.
    pub recent_activity_limit: usize,
    /// Tags shown on a contact card before collapsing into "+N more".
    pub tag_preview_limit: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: DEFAULT_SAVE_DELAY_MS,
            recent_activity_limit: DEFAULT_RECENT_ACTIVITY_LIMIT,
            tag_preview_limit: DEFAULT_TAG_PREVIEW_LIMIT,
        }
    }
}

impl CoreConfig {
    /// Parses JSON overrides and normalizes zero limits back to defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }

    fn normalized(mut self) -> Self {
        if self.recent_activity_limit == 0 {
            self.recent_activity_limit = DEFAULT_RECENT_ACTIVITY_LIMIT;
        }
        if self.tag_preview_limit == 0 {
            self.tag_preview_limit = DEFAULT_TAG_PREVIEW_LIMIT;
        }
        self
    }
}
