//! CRM mutation service.
//!
//! # Responsibility
//! - Apply star toggles, reminder completion and note creation to the store.
//! - Model the simulated remote save as a single-flight, three-stage flow:
//!   `begin_add_note` -> `PendingNote::settle` -> `commit_note`.
//!
//! # Invariants
//! - At most one note save is in flight per service; a second
//!   `begin_add_note` fails with `AddNoteError::SaveInProgress`.
//! - An accepted save lives in the service, not in its handles. Dropping a
//!   `PendingNote`, a `SettledNote` or the `add_note` future never loses it:
//!   once its delay has elapsed, the next mutation (or `finish_pending`,
//!   `flush_pending`, `snapshot`) commits it.
//! - Every accepted save is committed exactly once.
//! - A committed note and its owner's `last_contact` share one clock reading.

use crate::clock::{Clock, SystemClock};
use crate::config::CoreConfig;
use crate::model::contact::{ContactId, Sentiment};
use crate::model::note::{Note, NoteId, NoteKind};
use crate::model::reminder::Reminder;
use crate::service::draft::NoteDraft;
use crate::store::{EntityStore, StoreError, StoreResult};
use log::{info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

/// Identifies one accepted save within a service.
pub type SaveId = u64;

/// Rejection reasons for note saves.
#[derive(Debug)]
pub enum AddNoteError {
    /// No person was picked.
    MissingContact,
    /// Picked person does not exist in the store.
    ContactNotFound(ContactId),
    /// Content is empty after trimming.
    EmptyContent,
    /// Another save has not resolved yet.
    SaveInProgress,
    /// The handle does not belong to a save this service accepted, or that
    /// save already failed.
    UnknownSave(SaveId),
    Store(StoreError),
}

impl AddNoteError {
    fn reason(&self) -> &'static str {
        match self {
            Self::MissingContact => "missing_contact",
            Self::ContactNotFound(_) => "contact_not_found",
            Self::EmptyContent => "empty_content",
            Self::SaveInProgress => "save_in_progress",
            Self::UnknownSave(_) => "unknown_save",
            Self::Store(_) => "store_error",
        }
    }
}

impl Display for AddNoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingContact => write!(f, "no contact selected for note"),
            Self::ContactNotFound(id) => write!(f, "contact not found: {id}"),
            Self::EmptyContent => write!(f, "note content cannot be empty"),
            Self::SaveInProgress => write!(f, "a note save is already in progress"),
            Self::UnknownSave(id) => write!(f, "unknown note save: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AddNoteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AddNoteError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Validated note fields captured when the save starts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NoteRequest {
    contact_id: ContactId,
    content: String,
    tags: Vec<String>,
    sentiment: Sentiment,
    kind: NoteKind,
}

/// Accepted save held by the service until it is committed.
#[derive(Debug)]
struct PendingSave {
    id: SaveId,
    request: NoteRequest,
    ready_at: Instant,
    started_at: Instant,
}

/// Handle to an accepted save waiting out the simulated latency.
///
/// Dropping it does not cancel the save.
#[derive(Debug)]
pub struct PendingNote {
    save_id: SaveId,
    contact_id: ContactId,
    delay: Duration,
    ready_at: Instant,
}

impl PendingNote {
    pub fn save_id(&self) -> SaveId {
        self.save_id
    }

    pub fn contact_id(&self) -> &str {
        self.contact_id.as_str()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the save latency. Resolves exactly once.
    pub async fn settle(self) -> SettledNote {
        tokio::time::sleep_until(self.ready_at).await;
        SettledNote {
            save_id: self.save_id,
        }
    }
}

/// Handle to a save whose latency has elapsed; pass it to `CrmService::commit_note`.
#[derive(Debug)]
pub struct SettledNote {
    save_id: SaveId,
}

/// Explicit application context: the store plus everything mutations need.
pub struct CrmService<C: Clock = SystemClock> {
    store: EntityStore,
    clock: C,
    config: CoreConfig,
    pending: Option<PendingSave>,
    /// Saves committed by `finish_pending` whose handle has not claimed them yet.
    resolved: HashMap<SaveId, NoteId>,
    next_save_id: SaveId,
}

impl CrmService<SystemClock> {
    /// Service over the embedded demo dataset using the wall clock.
    pub fn seeded(config: CoreConfig) -> StoreResult<Self> {
        Ok(Self::new(EntityStore::seeded()?, SystemClock, config))
    }
}

impl<C: Clock> CrmService<C> {
    pub fn new(store: EntityStore, clock: C, config: CoreConfig) -> Self {
        Self {
            store,
            clock,
            config,
            pending: None,
            resolved: HashMap::new(),
            next_save_id: 1,
        }
    }

    /// Current store, without settling a due save. See [`Self::snapshot`].
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Commits a due save, then returns the store for re-querying.
    pub fn snapshot(&mut self) -> &EntityStore {
        self.finish_pending();
        &self.store
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_store(mut self) -> EntityStore {
        self.finish_pending();
        self.store
    }

    /// Whether an accepted save has not been committed yet.
    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }

    /// Flips the starred flag. Returns the new value, or `None` on lookup miss.
    pub fn toggle_star(&mut self, contact_id: &str) -> Option<bool> {
        self.finish_pending();
        let contact = self.store.contact_mut(contact_id)?;
        contact.starred = !contact.starred;
        info!(
            "event=contact_star module=service status=ok contact_id={} starred={}",
            contact_id, contact.starred
        );
        Some(contact.starred)
    }

    /// Marks a reminder completed. Returns `None` on lookup miss.
    pub fn complete_reminder(&mut self, reminder_id: &str) -> Option<&Reminder> {
        self.finish_pending();
        let Some(reminder) = self.store.reminder_mut(reminder_id) else {
            info!(
                "event=reminder_complete module=service status=skipped reason=not_found reminder_id={}",
                reminder_id
            );
            return None;
        };
        reminder.completed = true;
        info!(
            "event=reminder_complete module=service status=ok reminder_id={}",
            reminder_id
        );
        Some(&*reminder)
    }

    /// Validates `draft` and accepts it as the in-flight save.
    ///
    /// # Errors
    /// - `MissingContact` / `ContactNotFound` when the owner cannot be resolved.
    /// - `EmptyContent` when content is blank after trimming.
    /// - `SaveInProgress` while an earlier save is still inside its delay.
    pub fn begin_add_note(&mut self, draft: &NoteDraft) -> Result<PendingNote, AddNoteError> {
        self.finish_pending();
        let request = self.validate_draft(draft).inspect_err(|err| {
            warn!(
                "event=note_add module=service status=rejected reason={}",
                err.reason()
            );
        })?;
        if self.pending.is_some() {
            warn!(
                "event=note_add module=service status=rejected reason={}",
                AddNoteError::SaveInProgress.reason()
            );
            return Err(AddNoteError::SaveInProgress);
        }

        let save_id = self.next_save_id;
        self.next_save_id += 1;
        let delay = self.config.save_delay();
        let started_at = Instant::now();
        let ready_at = started_at + delay;
        let handle = PendingNote {
            save_id,
            contact_id: request.contact_id.clone(),
            delay,
            ready_at,
        };

        info!(
            "event=note_add module=service status=start save_id={} contact_id={} tag_count={}",
            save_id,
            request.contact_id,
            request.tags.len()
        );
        self.pending = Some(PendingSave {
            id: save_id,
            request,
            ready_at,
            started_at,
        });
        Ok(handle)
    }

    /// Resolves a settled save to its stored note.
    ///
    /// Commits it if still pending; if `finish_pending` already committed it,
    /// returns that note without storing a second copy.
    pub fn commit_note(&mut self, settled: SettledNote) -> Result<Note, AddNoteError> {
        let save_id = settled.save_id;
        if self.pending.as_ref().is_some_and(|save| save.id == save_id) {
            let note = self.commit_pending()?;
            self.resolved.remove(&save_id);
            return Ok(note);
        }
        self.resolved
            .remove(&save_id)
            .and_then(|note_id| self.store.note(note_id.as_str()).cloned())
            .ok_or(AddNoteError::UnknownSave(save_id))
    }

    /// Commits the in-flight save if its delay has elapsed.
    ///
    /// Returns the stored note, or `None` when nothing was due.
    pub fn finish_pending(&mut self) -> Option<Note> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|save| save.ready_at <= Instant::now());
        if !due {
            return None;
        }
        match self.commit_pending() {
            Ok(note) => Some(note),
            Err(err) => {
                warn!(
                    "event=note_add module=service status=error reason={}",
                    err.reason()
                );
                None
            }
        }
    }

    /// Waits for the in-flight save's delay, then commits it.
    pub async fn flush_pending(&mut self) -> Option<Note> {
        let ready_at = self.pending.as_ref()?.ready_at;
        tokio::time::sleep_until(ready_at).await;
        self.finish_pending()
    }

    /// Runs the full save flow for `draft`.
    pub async fn add_note(&mut self, draft: &NoteDraft) -> Result<Note, AddNoteError> {
        let pending = self.begin_add_note(draft)?;
        let settled = pending.settle().await;
        self.commit_note(settled)
    }

    /// Stores the pending save and stamps its owner's `last_contact`.
    ///
    /// Always clears the slot. Records the note in `resolved` so a later
    /// `commit_note` from the save's handle can claim it.
    fn commit_pending(&mut self) -> Result<Note, AddNoteError> {
        let Some(PendingSave {
            id,
            request,
            started_at,
            ..
        }) = self.pending.take()
        else {
            return Err(AddNoteError::SaveInProgress);
        };

        if self.store.contact(request.contact_id.as_str()).is_none() {
            return Err(AddNoteError::ContactNotFound(request.contact_id));
        }

        let now = self.clock.now_ms();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            contact_id: request.contact_id,
            content: request.content,
            created_at: now,
            tags: request.tags,
            sentiment: request.sentiment,
            kind: request.kind,
        };
        self.store.append_note(note.clone())?;
        if let Some(contact) = self.store.contact_mut(note.contact_id.as_str()) {
            contact.last_contact = Some(now);
        }
        self.resolved.insert(id, note.id.clone());

        info!(
            "event=note_add module=service status=ok save_id={} contact_id={} note_id={} kind={} duration_ms={}",
            id,
            note.contact_id,
            note.id,
            note.kind,
            started_at.elapsed().as_millis()
        );
        Ok(note)
    }

    fn validate_draft(&self, draft: &NoteDraft) -> Result<NoteRequest, AddNoteError> {
        if draft.contact_id.is_empty() {
            return Err(AddNoteError::MissingContact);
        }
        if self.store.contact(draft.contact_id.as_str()).is_none() {
            return Err(AddNoteError::ContactNotFound(draft.contact_id.clone()));
        }
        let content = draft.content.trim();
        if content.is_empty() {
            return Err(AddNoteError::EmptyContent);
        }

        Ok(NoteRequest {
            contact_id: draft.contact_id.clone(),
            content: content.to_string(),
            tags: draft.tags().to_vec(),
            sentiment: draft.sentiment,
            kind: draft.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AddNoteError;

    #[test]
    fn error_reasons_are_stable_log_tokens() {
        assert_eq!(AddNoteError::EmptyContent.reason(), "empty_content");
        assert_eq!(AddNoteError::SaveInProgress.reason(), "save_in_progress");
        assert_eq!(AddNoteError::UnknownSave(7).reason(), "unknown_save");
    }
}
