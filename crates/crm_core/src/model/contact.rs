//! Contact domain model.
//!
//! # Responsibility
//! - Define the person record rendered by contact cards and dashboards.
//! - Define `Sentiment`, shared with notes.
//!
//! # Invariants
//! - `id` is stable for the process lifetime; contacts are never removed.
//! - `tags` order is irrelevant for matching but preserved for display.

use crate::model::EpochMs;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable contact identifier.
pub type ContactId = String;

/// Relationship health summary attached to contacts and notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    NeedsAttention,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::NeedsAttention => "needs-attention",
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "needs-attention" => Ok(Self::NeedsAttention),
            other => Err(format!(
                "unsupported sentiment `{other}`; expected positive|neutral|needs-attention"
            )),
        }
    }
}

/// Person tracked by the CRM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Updated by every note saved for this contact.
    #[serde(default)]
    pub last_contact: Option<EpochMs>,
    #[serde(default)]
    pub next_reminder: Option<EpochMs>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub starred: bool,
    /// Free text, e.g. "Design conference 2023".
    #[serde(default)]
    pub met_at: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub sentiment: Sentiment,
}

impl Contact {
    /// Creates an unstarred, neutral contact with no contact history.
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            phone: None,
            last_contact: None,
            next_reminder: None,
            tags: Vec::new(),
            starred: false,
            met_at: String::new(),
            relationship: String::new(),
            sentiment: Sentiment::Neutral,
        }
    }

    pub fn needs_attention(&self) -> bool {
        self.sentiment == Sentiment::NeedsAttention
    }
}
