//! Local UI preference storage.
//!
//! # Responsibility
//! - Define the key-value contract used for UI preferences (theme).
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - Preferences live outside the entity store and never affect queries.
//! - `set` overwrites; there is no delete.

pub mod memory;
pub mod sqlite;
pub mod theme;

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PrefResult<T> = Result<T, PreferenceError>;

#[derive(Debug)]
pub enum PreferenceError {
    /// Key is blank after trimming.
    InvalidKey(String),
    Db(DbError),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid preference key: `{key}`"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for PreferenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PreferenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value store for UI preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> PrefResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> PrefResult<()>;
}

pub(crate) fn normalize_key(key: &str) -> PrefResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(PreferenceError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}
