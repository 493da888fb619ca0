//! In-process preference store.

use super::{normalize_key, PrefResult, PreferenceStore};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> PrefResult<Option<String>> {
        let key = normalize_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PrefResult<()> {
        let key = normalize_key(key)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
