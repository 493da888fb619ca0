//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive `crm_core` end to end without a rendering surface: seed, query,
//!   mutate, re-query.
//! - Keep output line-oriented (`key=value`) for quick local checks.
//!
//! Usage: `crm_cli [search-term] [all|starred|needs-attention]`
//!
//! Logs and the preference database go to `$CRM_STATE_DIR`, or to
//! `<temp>/crm_cli` when unset.

use chrono::{Local, Timelike};
use crm_core::db::{open_db, preferences_path};
use crm_core::view::{format_date_in, greeting, initials, last_contact_label, tag_preview};
use crm_core::{
    default_log_level, filter_contacts, filter_counts, init_logging, logging_status,
    pending_reminders, recent_activity, stats, timeline_feed, Clock, ContactFilter, CoreConfig,
    CrmService, NoteDraft, NoteKind, Sentiment, SqlitePreferenceStore, ThemeSettings,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

const STATE_DIR_ENV: &str = "CRM_STATE_DIR";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let search = args.next().unwrap_or_default();
    let filter: ContactFilter = match args.next() {
        Some(raw) => raw.parse()?,
        None => ContactFilter::All,
    };

    let state_dir = state_dir()?;
    init_logging(default_log_level(), &state_dir.to_string_lossy())?;
    if let Some((level, log_dir)) = logging_status() {
        println!("logging level={} dir={}", level, log_dir.display());
    }
    info!("event=cli_start module=cli status=ok");

    let config = CoreConfig::default().with_save_delay(Duration::from_millis(200));
    let mut service = CrmService::seeded(config)?;
    let prefs_conn = open_db(preferences_path(&state_dir))?;
    let prefs = SqlitePreferenceStore::new(&prefs_conn);

    println!("crm_core version={}", crm_core::core_version());
    println!("theme={}", ThemeSettings::load(&prefs)?);
    println!("greeting={}", greeting(Local::now().hour()));
    print_dashboard(&service);

    let now = service.clock().now_ms();
    let tag_limit = service.config().tag_preview_limit;
    for contact in filter_contacts(service.store(), &search, filter) {
        let tags = tag_preview(&contact.tags, tag_limit);
        println!(
            "contact id={} initials={} name={} tags={} more={} notes={} last_contact={}",
            contact.id,
            initials(&contact.name),
            contact.name,
            tags.shown.join(","),
            tags.hidden,
            service.store().note_count(&contact.id),
            last_contact_label(contact.last_contact, now)
        );
    }

    service.toggle_star("4");
    service.complete_reminder("1");

    let draft = NoteDraft::for_contact("4", "Caught up over lunch; he is open to a new role.")
        .with_kind(NoteKind::Meeting)
        .with_sentiment(Sentiment::Positive)
        .with_tags(["catch-up", "career"]);
    let note = service.add_note(&draft).await?;
    println!("note_saved id={} contact_id={}", note.id, note.contact_id);

    print_dashboard(&service);
    for entry in timeline_feed(service.store()).iter().take(3) {
        println!(
            "timeline contact={} type={} at={}",
            entry.contact_name,
            entry.note.kind,
            format_date_in(entry.note.created_at, &Local)
        );
    }

    Ok(())
}

/// Absolute directory for logs and preferences.
fn state_dir() -> Result<PathBuf, Box<dyn Error>> {
    let dir = match std::env::var_os(STATE_DIR_ENV) {
        Some(raw) => PathBuf::from(raw),
        None => std::env::temp_dir().join("crm_cli"),
    };
    let dir = if dir.is_absolute() {
        dir
    } else {
        std::env::current_dir()?.join(dir)
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn print_dashboard<C: Clock>(service: &CrmService<C>) {
    let store = service.store();
    let stats = stats(store);
    let counts = filter_counts(store);
    println!(
        "stats total={} starred={} pending_reminders={}",
        stats.total_contacts, stats.starred_contacts, stats.pending_reminders
    );
    println!(
        "filters all={} starred={} needs_attention={}",
        counts.all, counts.starred, counts.needs_attention
    );
    for reminder in pending_reminders(store) {
        println!(
            "reminder id={} contact={} due={}",
            reminder.id,
            reminder.contact_name,
            format_date_in(reminder.due_at, &Local)
        );
    }
    let recent: Vec<&str> = recent_activity(store, service.config().recent_activity_limit)
        .into_iter()
        .map(|contact| contact.id.as_str())
        .collect();
    println!("recent_activity ids={}", recent.join(","));
}
