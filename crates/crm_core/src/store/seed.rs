//! Embedded demo dataset.
//!
//! The dataset mirrors the fixture the UI ships with: six contacts, four
//! notes and three open reminders from January 2024.

use super::{Dataset, StoreResult};

const SEED_JSON: &str = include_str!("../../data/seed.json");

/// Decodes the embedded dataset.
pub fn seed_dataset() -> StoreResult<Dataset> {
    Ok(serde_json::from_str(SEED_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::seed_dataset;

    #[test]
    fn embedded_dataset_decodes() {
        let dataset = seed_dataset().expect("embedded seed should decode");
        assert_eq!(dataset.contacts.len(), 6);
        assert_eq!(dataset.notes.len(), 4);
        assert_eq!(dataset.reminders.len(), 3);
        assert!(dataset.reminders.iter().all(|reminder| !reminder.completed));
    }
}
