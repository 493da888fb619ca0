//! Theme preference.
//!
//! # Invariants
//! - Read once at startup, written on every change.
//! - Missing or unknown stored values resolve to `Theme::Light`.

use super::{PrefResult, PreferenceStore};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unsupported theme `{other}`; expected light|dark")),
        }
    }
}

/// Theme read/write helpers over any preference store.
pub struct ThemeSettings;

impl ThemeSettings {
    /// Loads the stored theme, falling back to the default.
    pub fn load(store: &impl PreferenceStore) -> PrefResult<Theme> {
        let Some(raw) = store.get(THEME_KEY)? else {
            return Ok(Theme::default());
        };
        Ok(raw.parse().unwrap_or_else(|err| {
            warn!("event=theme_load module=prefs status=fallback error={err}");
            Theme::default()
        }))
    }

    pub fn set(store: &mut impl PreferenceStore, theme: Theme) -> PrefResult<()> {
        store.set(THEME_KEY, theme.as_str())
    }
}
