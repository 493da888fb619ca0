//! Preference database.
//!
//! Only UI preferences (the theme) are persisted; contacts, notes and
//! reminders stay in the in-process entity store. The file is tiny and
//! single-writer, so no pooling or WAL setup is done.
//!
//! Schema version lives in `PRAGMA user_version`; a file written by a newer
//! build is refused instead of being migrated backwards.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// File name used when preferences live next to the host's other state.
pub const PREFERENCES_DB_FILE: &str = "crm_preferences.sqlite3";

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening or migrating the preference database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file's schema is ahead of this build.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "preference database error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "preference database was written by a newer build (schema {found}, this build reads up to {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Preference database path inside `state_dir`.
pub fn preferences_path(state_dir: impl AsRef<Path>) -> PathBuf {
    state_dir.as_ref().join(PREFERENCES_DB_FILE)
}
