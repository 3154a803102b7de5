//! Integration tests for [`records::SqliteRecordStore`].
//!
//! Each test opens a fresh database file in a temp directory, so tables are
//! created from scratch and nothing leaks between tests. Behavior is asserted
//! to match the in-memory backend: duplicate-id insert fails, update of a
//! missing row fails, listings come back newest first, profile save upserts.

use chrono::{NaiveDate, Utc};
use records::{
    Expense, ExpenseCategory, HealthEntry, HealthKind, Profile, ProfileStore, RecordStore,
    SchoolTask, SqliteRecordStore, StoreError, TaskKind,
};
use tempfile::TempDir;

async fn open_store() -> (TempDir, SqliteRecordStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("records.db");
    let store = SqliteRecordStore::new(path.to_str().unwrap())
        .await
        .expect("Failed to open store");
    (dir, store)
}

fn expense(user_id: &str, amount: f64) -> Expense {
    Expense::new(
        user_id,
        ExpenseCategory::FoodAndDining,
        "Lunch",
        amount,
        NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
    )
}

/// **Test: An added expense round-trips through get.**
///
/// **Setup:** Fresh database; one expense saved.
/// **Action:** `get(id)`.
/// **Expected:** The stored record comes back field-for-field.
#[tokio::test]
async fn test_expense_add_and_get() {
    let (_dir, store) = open_store().await;
    let saved = expense("user1", 12.5);

    store.add(&saved).await.expect("Failed to add expense");
    let found: Expense = RecordStore::get(&store, &saved.id)
        .await
        .expect("Failed to get expense")
        .expect("Expense missing");

    assert_eq!(found.id, saved.id);
    assert_eq!(found.category, ExpenseCategory::FoodAndDining);
    assert_eq!(found.amount, 12.5);
    assert_eq!(found.incurred_on, saved.incurred_on);
}

/// **Test: Inserting the same id twice fails with AlreadyExists.**
///
/// **Setup:** Fresh database; one expense saved.
/// **Action:** `add` the same record again.
/// **Expected:** `StoreError::AlreadyExists`.
#[tokio::test]
async fn test_duplicate_insert_rejected() {
    let (_dir, store) = open_store().await;
    let saved = expense("user1", 12.5);
    store.add(&saved).await.expect("Failed to add expense");

    let err = RecordStore::<Expense>::add(&store, &saved).await.unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(_)));
}

/// **Test: Updating a missing row fails with NotFound; deleting it reports false.**
///
/// **Setup:** Empty database.
/// **Action:** `update` and `delete` an expense that was never added.
/// **Expected:** `StoreError::NotFound`, then `Ok(false)`.
#[tokio::test]
async fn test_update_and_delete_missing() {
    let (_dir, store) = open_store().await;
    let ghost = expense("user1", 1.0);

    let err = RecordStore::<Expense>::update(&store, &ghost).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let removed = RecordStore::<Expense>::delete(&store, &ghost.id)
        .await
        .expect("Delete failed");
    assert!(!removed);
}

/// **Test: list_by_user filters to the user and orders newest first.**
///
/// **Setup:** Two expenses for user1 five minutes apart, one for user2.
/// **Action:** `list_by_user("user1")`.
/// **Expected:** Two rows, most recent `created_at` first.
#[tokio::test]
async fn test_list_by_user_newest_first() {
    let (_dir, store) = open_store().await;
    let mut older = expense("user1", 1.0);
    older.created_at = Utc::now() - chrono::Duration::minutes(5);
    let newer = expense("user1", 2.0);
    let other = expense("user2", 3.0);

    store.add(&older).await.unwrap();
    store.add(&newer).await.unwrap();
    store.add(&other).await.unwrap();

    let listed: Vec<Expense> = store.list_by_user("user1").await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, newer.id);
    assert_eq!(listed[1].id, older.id);
}

/// **Test: Task progress updates persist.**
///
/// **Setup:** One task at 0%.
/// **Action:** Set progress to 60 and `update`.
/// **Expected:** Re-read row shows 60 and a bumped `updated_at`.
#[tokio::test]
async fn test_task_progress_update_persists() {
    let (_dir, store) = open_store().await;
    let mut task = SchoolTask::new(
        "user1",
        "Databases project",
        Some("ER model draft".to_string()),
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        TaskKind::Project,
    );
    store.add(&task).await.unwrap();

    task.set_progress(60);
    store.update(&task).await.unwrap();

    let found: SchoolTask = RecordStore::get(&store, &task.id).await.unwrap().unwrap();
    assert_eq!(found.progress, 60);
    assert_eq!(found.kind, TaskKind::Project);
    assert!(found.updated_at >= found.created_at);
}

/// **Test: Health entries store kind and optional notes.**
///
/// **Setup:** One meditation entry with notes, one food entry without.
/// **Action:** List for the user.
/// **Expected:** Both rows come back with their kinds and notes intact.
#[tokio::test]
async fn test_health_entries_round_trip() {
    let (_dir, store) = open_store().await;
    let sit = HealthEntry::new(
        "user1",
        HealthKind::Meditation,
        "15 minutes",
        Some("Morning session".to_string()),
    );
    let meal = HealthEntry::new("user1", HealthKind::Food, "Oatmeal with berries", None);
    store.add(&sit).await.unwrap();
    store.add(&meal).await.unwrap();

    let listed: Vec<HealthEntry> = store.list_by_user("user1").await.unwrap();
    assert_eq!(listed.len(), 2);
    let stored_sit = listed.iter().find(|e| e.id == sit.id).unwrap();
    assert_eq!(stored_sit.kind, HealthKind::Meditation);
    assert_eq!(stored_sit.notes.as_deref(), Some("Morning session"));
}

/// **Test: Profile save is an upsert keyed by user id.**
///
/// **Setup:** Profile saved once, then saved again with a new name.
/// **Action:** `upsert` twice, `get` once.
/// **Expected:** One row, the new name, the original `created_at` kept.
#[tokio::test]
async fn test_profile_upsert_overwrites() {
    let (_dir, store) = open_store().await;
    let mut profile = Profile::new("user1", "Astrid");
    profile.degree_program = Some("Computer Science".to_string());
    store.upsert(&profile).await.unwrap();
    let first = ProfileStore::get(&store, "user1").await.unwrap().unwrap();

    let mut renamed = first.clone();
    renamed.name = "Astrid L.".to_string();
    store.upsert(&renamed).await.unwrap();

    let second = ProfileStore::get(&store, "user1").await.unwrap().unwrap();
    assert_eq!(second.name, "Astrid L.");
    assert_eq!(second.degree_program.as_deref(), Some("Computer Science"));
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
}
