//! Dashboard counters and the open reminder list.

use crate::model::reminder::Reminder;
use crate::store::EntityStore;
use serde::Serialize;

/// Header counters shown on the home tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_contacts: usize,
    pub starred_contacts: usize,
    pub pending_reminders: usize,
}

/// Reminders not yet completed, in store order.
pub fn pending_reminders(store: &EntityStore) -> Vec<&Reminder> {
    store
        .reminders()
        .iter()
        .filter(|reminder| !reminder.completed)
        .collect()
}

pub fn stats(store: &EntityStore) -> Stats {
    Stats {
        total_contacts: store.contacts().len(),
        starred_contacts: store
            .contacts()
            .iter()
            .filter(|contact| contact.starred)
            .count(),
        pending_reminders: store
            .reminders()
            .iter()
            .filter(|reminder| !reminder.completed)
            .count(),
    }
}
