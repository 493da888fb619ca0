//! Contact search, filter and ranking queries.

use crate::model::contact::{Contact, ContactId};
use crate::store::EntityStore;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Narrowing mode of the contact list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactFilter {
    #[default]
    All,
    Starred,
    NeedsAttention,
}

impl ContactFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Starred => "starred",
            Self::NeedsAttention => "needs-attention",
        }
    }
}

impl Display for ContactFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "starred" => Ok(Self::Starred),
            "needs-attention" => Ok(Self::NeedsAttention),
            other => Err(format!(
                "unsupported contact filter `{other}`; expected all|starred|needs-attention"
            )),
        }
    }
}

/// Per-mode counts used to label the filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCounts {
    pub all: usize,
    pub starred: usize,
    pub needs_attention: usize,
}

/// Entry of the note form's person picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactOption<'a> {
    pub id: &'a ContactId,
    pub name: &'a str,
}

/// Returns whether `contact` passes both the search term and the filter mode.
///
/// The search term matches case-insensitively as a substring of the name or
/// of any tag. An empty term matches every contact.
pub fn contact_matches(contact: &Contact, search: &str, filter: ContactFilter) -> bool {
    let needle = search.to_lowercase();
    matches_search(contact, needle.as_str()) && matches_filter(contact, filter)
}

/// Contacts matching `search` and `filter`, in store order.
pub fn filter_contacts<'a>(
    store: &'a EntityStore,
    search: &str,
    filter: ContactFilter,
) -> Vec<&'a Contact> {
    store
        .contacts()
        .iter()
        .filter(|contact| contact_matches(contact, search, filter))
        .collect()
}

/// Starred contacts, in store order.
pub fn starred_contacts(store: &EntityStore) -> Vec<&Contact> {
    store
        .contacts()
        .iter()
        .filter(|contact| contact.starred)
        .collect()
}

/// Contacts with a known last contact, most recent first, at most `limit`.
///
/// Ties keep store order.
pub fn recent_activity(store: &EntityStore, limit: usize) -> Vec<&Contact> {
    let mut recent: Vec<&Contact> = store
        .contacts()
        .iter()
        .filter(|contact| contact.last_contact.is_some())
        .collect();
    recent.sort_by(|left, right| right.last_contact.cmp(&left.last_contact));
    recent.truncate(limit);
    recent
}

pub fn filter_counts(store: &EntityStore) -> FilterCounts {
    let contacts = store.contacts();
    FilterCounts {
        all: contacts.len(),
        starred: contacts.iter().filter(|contact| contact.starred).count(),
        needs_attention: contacts
            .iter()
            .filter(|contact| contact.needs_attention())
            .count(),
    }
}

/// Person picker options for the note form, in store order.
pub fn contact_select_options(store: &EntityStore) -> Vec<ContactOption<'_>> {
    store
        .contacts()
        .iter()
        .map(|contact| ContactOption {
            id: &contact.id,
            name: contact.name.as_str(),
        })
        .collect()
}

fn matches_search(contact: &Contact, needle: &str) -> bool {
    contact.name.to_lowercase().contains(needle)
        || contact
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn matches_filter(contact: &Contact, filter: ContactFilter) -> bool {
    match filter {
        ContactFilter::All => true,
        ContactFilter::Starred => contact.starred,
        ContactFilter::NeedsAttention => contact.needs_attention(),
    }
}
