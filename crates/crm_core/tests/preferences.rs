use crm_core::db::migrations::latest_version;
use crm_core::db::{
    open_db, open_db_in_memory, preferences_path, DbError, PREFERENCES_DB_FILE,
};
use crm_core::{
    MemoryPreferenceStore, PreferenceError, PreferenceStore, SqlitePreferenceStore, Theme,
    ThemeSettings,
};
use rusqlite::Connection;

#[test]
fn theme_defaults_to_light_and_persists_changes() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqlitePreferenceStore::new(&conn);

    assert_eq!(ThemeSettings::load(&store).unwrap(), Theme::Light);
    ThemeSettings::set(&mut store, Theme::Dark).unwrap();
    assert_eq!(ThemeSettings::load(&store).unwrap(), Theme::Dark);
    ThemeSettings::set(&mut store, Theme::Light).unwrap();
    assert_eq!(ThemeSettings::load(&store).unwrap(), Theme::Light);
}

#[test]
fn theme_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = preferences_path(dir.path());
    assert!(path.ends_with(PREFERENCES_DB_FILE));
    {
        let conn = open_db(&path).unwrap();
        let mut store = SqlitePreferenceStore::new(&conn);
        ThemeSettings::set(&mut store, Theme::Dark).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqlitePreferenceStore::new(&conn);
    assert_eq!(ThemeSettings::load(&store).unwrap(), Theme::Dark);
}

#[test]
fn unknown_stored_theme_falls_back_to_default() {
    let mut store = MemoryPreferenceStore::new();
    store.set("theme", "sepia").unwrap();
    assert_eq!(ThemeSettings::load(&store).unwrap(), Theme::Light);
}

#[test]
fn blank_key_is_rejected() {
    let mut store = MemoryPreferenceStore::new();
    let err = store.set("  ", "x").unwrap_err();
    assert!(matches!(err, PreferenceError::InvalidKey(_)));
}

#[test]
fn migrations_create_preferences_table() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'preferences');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 99);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}
