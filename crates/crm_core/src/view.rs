//! Pure presentation-model helpers shared by every rendering surface.
//!
//! Nothing here touches the store; callers pass the values to format.

use crate::model::EpochMs;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Uppercased first letter of each word, e.g. "Sarah Chen" -> "SC".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Relative "last contact" label used on contact cards.
///
/// Elapsed time is floored to whole days; timestamps in the future count as
/// today.
pub fn last_contact_label(last_contact: Option<EpochMs>, now: EpochMs) -> String {
    let Some(last_contact) = last_contact else {
        return "No recent contact".to_string();
    };
    let days = now.saturating_sub(last_contact).max(0) / DAY_MS;
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        _ => format!("{} months ago", days / 30),
    }
}

/// Short timestamp label used on timeline rows and reminders, in UTC.
///
/// e.g. `Jan 10, 1:35 PM`.
pub fn format_date(at: EpochMs) -> String {
    format_date_in(at, &Utc)
}

/// Same as [`format_date`], rendered in `zone`.
pub fn format_date_in<Tz>(at: EpochMs, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::<Utc>::from_timestamp_millis(at) {
        Some(moment) => moment
            .with_timezone(zone)
            .format("%b %-d, %-I:%M %p")
            .to_string(),
        None => "Unknown date".to_string(),
    }
}

/// Time-of-day greeting for a local hour in `0..24`.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Tags visible on a card plus how many were collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

pub fn tag_preview(tags: &[String], limit: usize) -> TagPreview<'_> {
    let shown = &tags[..tags.len().min(limit)];
    TagPreview {
        shown,
        hidden: tags.len() - shown.len(),
    }
}
