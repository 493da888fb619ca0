use crm_core::{
    filter_counts, pending_reminders, recent_activity, stats, timeline_feed, AddNoteError,
    CoreConfig, CrmService, EntityStore, ManualClock, NoteDraft, NoteKind, Sentiment,
};
use std::time::Duration;

const NOW: i64 = 1_706_000_000_000;

fn service() -> CrmService<ManualClock> {
    CrmService::new(
        EntityStore::seeded().unwrap(),
        ManualClock::new(NOW),
        CoreConfig::default().with_save_delay(Duration::ZERO),
    )
}

#[tokio::test]
async fn add_note_appends_and_stamps_last_contact() {
    let mut service = service();
    let draft = NoteDraft::for_contact("2", "  Followed up on funding round  ")
        .with_kind(NoteKind::Call)
        .with_sentiment(Sentiment::Positive)
        .with_tags(["funding", "startup"]);

    let note = service.add_note(&draft).await.unwrap();

    assert_eq!(note.content, "Followed up on funding round");
    assert_eq!(note.created_at, NOW);
    assert_eq!(note.kind, NoteKind::Call);
    assert_eq!(note.tags, ["funding", "startup"]);
    assert!(!note.id.is_empty());

    let store = service.store();
    assert_eq!(store.notes().len(), 5);
    assert_eq!(store.contact("2").unwrap().last_contact, Some(note.created_at));
    assert_eq!(store.contact_note_ids("2").last(), Some(&note.id));
    assert_eq!(store.note_count("2"), 2);

    let feed = timeline_feed(store);
    assert_eq!(feed[0].note.id, note.id);
    assert_eq!(feed[0].contact_name, "Marcus Rodriguez");
    assert_eq!(recent_activity(store, 5)[0].id, "2");
    assert!(!service.is_saving());
}

#[tokio::test]
async fn notes_saved_at_the_same_instant_keep_append_order_on_timeline() {
    let mut service = service();
    let first = service
        .add_note(&NoteDraft::for_contact("1", "first"))
        .await
        .unwrap();
    let second = service
        .add_note(&NoteDraft::for_contact("3", "second"))
        .await
        .unwrap();

    let feed = timeline_feed(service.store());
    assert_eq!(feed[0].note.id, first.id);
    assert_eq!(feed[1].note.id, second.id);
}

#[tokio::test]
async fn whitespace_content_is_rejected_without_state_change() {
    let mut service = service();
    let before = service.store().contact("2").unwrap().last_contact;

    let err = service
        .add_note(&NoteDraft::for_contact("2", "  "))
        .await
        .unwrap_err();

    assert!(matches!(err, AddNoteError::EmptyContent));
    assert_eq!(service.store().notes().len(), 4);
    assert_eq!(service.store().contact("2").unwrap().last_contact, before);
    assert!(!service.is_saving());
}

#[tokio::test]
async fn missing_or_unknown_contact_is_rejected() {
    let mut service = service();

    let missing = service
        .add_note(&NoteDraft::for_contact("", "hello"))
        .await
        .unwrap_err();
    assert!(matches!(missing, AddNoteError::MissingContact));

    let unknown = service
        .add_note(&NoteDraft::for_contact("999", "hello"))
        .await
        .unwrap_err();
    assert!(matches!(unknown, AddNoteError::ContactNotFound(id) if id == "999"));
    assert_eq!(service.store().notes().len(), 4);
}

fn delayed_service(delay_ms: u64) -> CrmService<ManualClock> {
    CrmService::new(
        EntityStore::seeded().unwrap(),
        ManualClock::new(NOW),
        CoreConfig::default().with_save_delay(Duration::from_millis(delay_ms)),
    )
}

#[tokio::test]
async fn second_save_is_rejected_while_first_is_pending() {
    let mut service = delayed_service(50);
    let pending = service
        .begin_add_note(&NoteDraft::for_contact("1", "coffee"))
        .unwrap();
    assert!(service.is_saving());
    assert_eq!(pending.contact_id(), "1");

    let err = service
        .begin_add_note(&NoteDraft::for_contact("1", "coffee"))
        .unwrap_err();
    assert!(matches!(err, AddNoteError::SaveInProgress));

    let settled = pending.settle().await;
    assert!(service.is_saving());
    service.commit_note(settled).unwrap();

    assert!(!service.is_saving());
    assert_eq!(service.store().notes().len(), 5);
    assert!(service
        .begin_add_note(&NoteDraft::for_contact("1", "again"))
        .is_ok());
}

#[tokio::test]
async fn abandoned_add_note_future_is_still_committed_once() {
    let mut service = delayed_service(40);
    let draft = NoteDraft::for_contact("2", "pitch feedback");

    let outcome = tokio::time::timeout(Duration::from_millis(5), service.add_note(&draft)).await;
    assert!(outcome.is_err());
    assert!(service.is_saving());
    assert_eq!(service.store().notes().len(), 4);
    assert!(matches!(
        service.begin_add_note(&draft).unwrap_err(),
        AddNoteError::SaveInProgress
    ));

    tokio::time::sleep(Duration::from_millis(60)).await;
    let note = service.finish_pending().expect("due save should be committed");
    assert_eq!(note.contact_id, "2");
    assert_eq!(service.store().notes().len(), 5);
    assert_eq!(service.store().contact("2").unwrap().last_contact, Some(NOW));
    assert!(!service.is_saving());

    assert!(service.finish_pending().is_none());
    assert_eq!(service.store().notes().len(), 5);
}

#[tokio::test]
async fn dropped_pending_handle_is_committed_by_next_mutation() {
    let mut service = delayed_service(20);
    let pending = service
        .begin_add_note(&NoteDraft::for_contact("4", "catch up"))
        .unwrap();
    drop(pending);
    assert!(service.is_saving());

    tokio::time::sleep(Duration::from_millis(40)).await;
    service.toggle_star("4");

    assert!(!service.is_saving());
    assert_eq!(service.store().note_count("4"), 1);
    assert_eq!(service.snapshot().notes().len(), 5);
}

#[tokio::test]
async fn flush_pending_waits_out_a_dropped_save() {
    let mut service = delayed_service(20);
    drop(
        service
            .begin_add_note(&NoteDraft::for_contact("6", "advice"))
            .unwrap(),
    );

    let note = service.flush_pending().await.expect("save should flush");
    assert_eq!(note.contact_id, "6");
    assert!(service.flush_pending().await.is_none());
    assert_eq!(service.store().note_count("6"), 1);
}

#[tokio::test]
async fn settled_handle_claims_note_committed_in_the_background() {
    let mut service = delayed_service(10);
    let pending = service
        .begin_add_note(&NoteDraft::for_contact("3", "proposal sent"))
        .unwrap();
    let settled = pending.settle().await;

    let background = service.finish_pending().expect("due save should commit");
    let claimed = service.commit_note(settled).unwrap();

    assert_eq!(claimed, background);
    assert_eq!(service.store().notes().len(), 5);
    assert_eq!(service.store().note_count("3"), 2);
}

#[tokio::test]
async fn configured_delay_is_waited_before_commit() {
    let mut service = CrmService::new(
        EntityStore::seeded().unwrap(),
        ManualClock::new(NOW),
        CoreConfig::default().with_save_delay(Duration::from_millis(20)),
    );
    let started = std::time::Instant::now();
    let pending = service
        .begin_add_note(&NoteDraft::for_contact("6", "advice"))
        .unwrap();
    assert_eq!(pending.delay(), Duration::from_millis(20));

    let settled = pending.settle().await;
    assert!(started.elapsed() >= Duration::from_millis(20));
    service.commit_note(settled).unwrap();
}

#[test]
fn toggle_star_is_its_own_inverse_and_updates_stats() {
    let mut service = service();
    let before = stats(service.store()).starred_contacts;

    assert_eq!(service.toggle_star("4"), Some(true));
    assert_eq!(stats(service.store()).starred_contacts, before + 1);
    assert_eq!(filter_counts(service.store()).starred, before + 1);

    assert_eq!(service.toggle_star("4"), Some(false));
    assert_eq!(stats(service.store()).starred_contacts, before);
}

#[test]
fn toggle_star_on_unknown_contact_is_a_no_op() {
    let mut service = service();
    let before = stats(service.store());
    assert_eq!(service.toggle_star("missing"), None);
    assert_eq!(stats(service.store()), before);
}

#[test]
fn complete_reminder_is_idempotent() {
    let mut service = service();

    assert!(service.complete_reminder("2").unwrap().completed);
    assert!(service.complete_reminder("2").unwrap().completed);

    let pending: Vec<&str> = pending_reminders(service.store())
        .iter()
        .map(|reminder| reminder.id.as_str())
        .collect();
    assert_eq!(pending, ["1", "3"]);
}

#[test]
fn complete_unknown_reminder_leaves_pending_count_unchanged() {
    let mut service = service();
    assert!(service.complete_reminder("999").is_none());
    assert_eq!(stats(service.store()).pending_reminders, 3);
}
