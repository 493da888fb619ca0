//! Interaction note model.
//!
//! # Responsibility
//! - Define the append-only interaction record shown on the timeline.
//!
//! # Invariants
//! - `content` is non-blank for every note created through the service.
//! - Notes are never edited or deleted once appended.

use crate::model::contact::{ContactId, Sentiment};
use crate::model::EpochMs;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable note identifier.
pub type NoteId = String;

/// Channel of the recorded interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    #[default]
    Note,
    Call,
    Email,
    Meeting,
}

impl NoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Call => "call",
            Self::Email => "email",
            Self::Meeting => "meeting",
        }
    }
}

impl Display for NoteKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "note" => Ok(Self::Note),
            "call" => Ok(Self::Call),
            "email" => Ok(Self::Email),
            "meeting" => Ok(Self::Meeting),
            other => Err(format!(
                "unsupported note type `{other}`; expected note|call|email|meeting"
            )),
        }
    }
}

/// Recorded interaction with one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Owning contact. May dangle for imported data; queries tolerate that.
    pub contact_id: ContactId,
    pub content: String,
    pub created_at: EpochMs,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sentiment: Sentiment,
    /// Serialized as `type` to match the form field naming.
    #[serde(rename = "type", default)]
    pub kind: NoteKind,
}
