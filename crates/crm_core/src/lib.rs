//! Core data model and use-cases for the personal CRM.
//! This crate is the single source of truth for contact, note and reminder
//! invariants; rendering surfaces only call into it.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod query;
pub mod service;
pub mod store;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactId, Sentiment};
pub use model::note::{Note, NoteId, NoteKind};
pub use model::reminder::{Reminder, ReminderId};
pub use model::EpochMs;
pub use prefs::memory::MemoryPreferenceStore;
pub use prefs::sqlite::SqlitePreferenceStore;
pub use prefs::theme::{Theme, ThemeSettings};
pub use prefs::{PreferenceError, PreferenceStore};
pub use query::contacts::{
    contact_matches, contact_select_options, filter_contacts, filter_counts, recent_activity,
    starred_contacts, ContactFilter, ContactOption, FilterCounts,
};
pub use query::dashboard::{pending_reminders, stats, Stats};
pub use query::timeline::{timeline_feed, TimelineEntry, UNKNOWN_CONTACT_NAME};
pub use service::crm_service::{AddNoteError, CrmService, PendingNote, SaveId, SettledNote};
pub use service::draft::NoteDraft;
pub use store::{Dataset, EntityKind, EntityStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
