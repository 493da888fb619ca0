//! Domain model for contacts, interaction notes and reminders.
//!
//! # Responsibility
//! - Define the three entity kinds held by the entity store.
//! - Define the shared enums (`Sentiment`, `NoteKind`) used by queries and
//!   the note form.
//!
//! # Invariants
//! - Every entity is identified by a string id unique within its container.
//! - Timestamps are Unix epoch milliseconds.
//! - `Contact` carries no note list; the store owns the contact -> notes index.

pub mod contact;
pub mod note;
pub mod reminder;

/// Unix epoch milliseconds.
pub type EpochMs = i64;
