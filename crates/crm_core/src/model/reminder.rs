//! Follow-up reminder model.

use crate::model::contact::ContactId;
use crate::model::EpochMs;
use serde::{Deserialize, Serialize};

/// Stable reminder identifier.
pub type ReminderId = String;

/// Follow-up task tied to a contact.
///
/// `contact_name` is captured when the reminder is created and is not
/// re-derived if the contact is renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub contact_id: ContactId,
    pub contact_name: String,
    pub message: String,
    pub due_at: EpochMs,
    /// One-way flag; completed reminders are never reopened.
    #[serde(default)]
    pub completed: bool,
}
