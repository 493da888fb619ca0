//! Global, time-ordered note feed.

use crate::model::note::Note;
use crate::store::EntityStore;

/// Display name used when a note's owner cannot be resolved.
pub const UNKNOWN_CONTACT_NAME: &str = "Unknown Contact";

/// Timeline row: a note plus its owner's current display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub note: &'a Note,
    pub contact_name: &'a str,
}

/// All notes, newest first. Equal timestamps keep append order.
pub fn timeline_feed(store: &EntityStore) -> Vec<TimelineEntry<'_>> {
    let mut notes: Vec<&Note> = store.notes().iter().collect();
    notes.sort_by(|left, right| right.created_at.cmp(&left.created_at));
    notes
        .into_iter()
        .map(|note| TimelineEntry {
            note,
            contact_name: store
                .contact(note.contact_id.as_str())
                .map_or(UNKNOWN_CONTACT_NAME, |contact| contact.name.as_str()),
        })
        .collect()
}
