//! In-process entity store for contacts, notes and reminders.
//!
//! # Responsibility
//! - Own the three entity containers for the lifetime of a UI session.
//! - Provide id lookup plus append/update-in-place; nothing is ever removed.
//! - Maintain the derived `contact_id -> note ids` index.
//!
//! # Invariants
//! - Ids are unique within each container.
//! - Container order is insertion order and is the order every query preserves.
//! - The note container is authoritative; the per-contact index only ever
//!   references notes that exist in it, in append order.

mod seed;

use crate::model::contact::{Contact, ContactId};
use crate::model::note::{Note, NoteId};
use crate::model::reminder::{Reminder, ReminderId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use seed::seed_dataset;

pub type StoreResult<T> = Result<T, StoreError>;

/// Entity kind, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Contact,
    Note,
    Reminder,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contact => f.write_str("contact"),
            Self::Note => f.write_str("note"),
            Self::Reminder => f.write_str("reminder"),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    /// An id was inserted twice into the same container.
    DuplicateId { kind: EntityKind, id: String },
    /// Embedded or caller-provided dataset could not be decoded.
    InvalidSeed(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { kind, id } => write!(f, "duplicate {kind} id: `{id}`"),
            Self::InvalidSeed(err) => write!(f, "invalid seed dataset: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId { .. } => None,
            Self::InvalidSeed(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidSeed(value)
    }
}

/// Plain container snapshot used for seeding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

/// Owner of all entity containers.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    contacts: Vec<Contact>,
    notes: Vec<Note>,
    reminders: Vec<Reminder>,
    contact_positions: HashMap<ContactId, usize>,
    note_positions: HashMap<NoteId, usize>,
    reminder_positions: HashMap<ReminderId, usize>,
    notes_by_contact: HashMap<ContactId, Vec<NoteId>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a dataset, indexing seeded notes per contact.
    ///
    /// Notes and reminders pointing at unknown contacts are kept as-is.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when any container repeats an id.
    pub fn from_dataset(dataset: Dataset) -> StoreResult<Self> {
        let mut store = Self::new();
        for contact in dataset.contacts {
            store.insert_contact(contact)?;
        }
        for note in dataset.notes {
            store.append_note(note)?;
        }
        for reminder in dataset.reminders {
            store.insert_reminder(reminder)?;
        }
        Ok(store)
    }

    /// Builds a store from the embedded demo dataset.
    pub fn seeded() -> StoreResult<Self> {
        Self::from_dataset(seed_dataset()?)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contact_positions
            .get(id)
            .map(|&position| &self.contacts[position])
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.note_positions
            .get(id)
            .map(|&position| &self.notes[position])
    }

    pub fn reminder(&self, id: &str) -> Option<&Reminder> {
        self.reminder_positions
            .get(id)
            .map(|&position| &self.reminders[position])
    }

    /// Note ids owned by `contact_id`, in append order.
    pub fn contact_note_ids(&self, contact_id: &str) -> &[NoteId] {
        self.notes_by_contact
            .get(contact_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Notes owned by `contact_id`, in append order.
    pub fn notes_for_contact(&self, contact_id: &str) -> Vec<&Note> {
        self.contact_note_ids(contact_id)
            .iter()
            .filter_map(|note_id| self.note(note_id))
            .collect()
    }

    pub fn note_count(&self, contact_id: &str) -> usize {
        self.contact_note_ids(contact_id).len()
    }

    /// Appends a contact.
    pub fn insert_contact(&mut self, contact: Contact) -> StoreResult<()> {
        if self.contact_positions.contains_key(contact.id.as_str()) {
            return Err(StoreError::DuplicateId {
                kind: EntityKind::Contact,
                id: contact.id,
            });
        }
        self.contact_positions
            .insert(contact.id.clone(), self.contacts.len());
        self.contacts.push(contact);
        Ok(())
    }

    /// Appends a reminder. The denormalized contact name is stored verbatim.
    pub fn insert_reminder(&mut self, reminder: Reminder) -> StoreResult<()> {
        if self.reminder_positions.contains_key(reminder.id.as_str()) {
            return Err(StoreError::DuplicateId {
                kind: EntityKind::Reminder,
                id: reminder.id,
            });
        }
        self.reminder_positions
            .insert(reminder.id.clone(), self.reminders.len());
        self.reminders.push(reminder);
        Ok(())
    }

    /// Appends a note and extends the owner's index entry.
    ///
    /// Does not touch the owner's `last_contact`; the note service owns that
    /// side effect so seeding keeps the dataset's timestamps.
    pub(crate) fn append_note(&mut self, note: Note) -> StoreResult<()> {
        if self.note_positions.contains_key(note.id.as_str()) {
            return Err(StoreError::DuplicateId {
                kind: EntityKind::Note,
                id: note.id,
            });
        }
        self.notes_by_contact
            .entry(note.contact_id.clone())
            .or_default()
            .push(note.id.clone());
        self.note_positions.insert(note.id.clone(), self.notes.len());
        self.notes.push(note);
        Ok(())
    }

    pub(crate) fn contact_mut(&mut self, id: &str) -> Option<&mut Contact> {
        let position = *self.contact_positions.get(id)?;
        self.contacts.get_mut(position)
    }

    pub(crate) fn reminder_mut(&mut self, id: &str) -> Option<&mut Reminder> {
        let position = *self.reminder_positions.get(id)?;
        self.reminders.get_mut(position)
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, EntityKind, EntityStore, StoreError};
    use crate::model::contact::{Contact, Sentiment};
    use crate::model::note::{Note, NoteKind};

    fn note(id: &str, contact_id: &str, created_at: i64) -> Note {
        Note {
            id: id.to_string(),
            contact_id: contact_id.to_string(),
            content: format!("note {id}"),
            created_at,
            tags: Vec::new(),
            sentiment: Sentiment::Neutral,
            kind: NoteKind::Note,
        }
    }

    #[test]
    fn from_dataset_indexes_notes_per_contact_in_append_order() {
        let store = EntityStore::from_dataset(Dataset {
            contacts: vec![Contact::new("a", "Ann"), Contact::new("b", "Bob")],
            notes: vec![note("n1", "a", 10), note("n2", "b", 20), note("n3", "a", 5)],
            reminders: Vec::new(),
        })
        .expect("dataset should load");

        assert_eq!(store.contact_note_ids("a"), ["n1", "n3"]);
        assert_eq!(store.note_count("b"), 1);
        assert_eq!(store.note_count("missing"), 0);
    }

    #[test]
    fn dangling_note_owner_is_kept() {
        let store = EntityStore::from_dataset(Dataset {
            contacts: Vec::new(),
            notes: vec![note("n1", "ghost", 1)],
            reminders: Vec::new(),
        })
        .expect("dangling owners are tolerated");

        assert_eq!(store.notes().len(), 1);
        assert!(store.contact("ghost").is_none());
    }

    #[test]
    fn duplicate_contact_id_is_rejected() {
        let err = EntityStore::from_dataset(Dataset {
            contacts: vec![Contact::new("a", "Ann"), Contact::new("a", "Again")],
            ..Dataset::default()
        })
        .expect_err("duplicate id must fail");

        assert!(matches!(
            err,
            StoreError::DuplicateId {
                kind: EntityKind::Contact,
                ..
            }
        ));
    }
}
