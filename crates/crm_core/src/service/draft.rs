//! In-progress note form state.
//!
//! # Invariants
//! - Tags are trimmed, non-empty and unique by exact (case-sensitive) match.
//! - Tags keep entry order.

use crate::model::contact::{ContactId, Sentiment};
use crate::model::note::NoteKind;

/// Unsaved note held by the add-note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub contact_id: ContactId,
    pub content: String,
    pub kind: NoteKind,
    pub sentiment: Sentiment,
    tags: Vec<String>,
}

impl NoteDraft {
    /// Blank draft with form defaults (`note`, `neutral`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled for `contact_id`.
    pub fn for_contact(contact_id: impl Into<ContactId>, content: impl Into<String>) -> Self {
        Self {
            contact_id: contact_id.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: NoteKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.add_tag(tag.as_ref());
        }
        self
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Appends a trimmed tag. Returns `false` for blank input or duplicates.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes the exact tag. Returns whether anything was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| existing != tag);
        self.tags.len() != before
    }

    /// Mirrors the save button: a person is picked and content is not blank.
    pub fn is_submittable(&self) -> bool {
        !self.contact_id.is_empty() && !self.content.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
