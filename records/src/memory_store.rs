//! In-memory store backend.
//!
//! One generic map per record type plus a keyed map for profiles. Data is
//! lost on restart; used for tests and ephemeral sessions. Thread-safe via
//! `Arc<RwLock<_>>`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::models::Profile;
use crate::store::{ProfileStore, Record, RecordStore};

/// In-memory store for one record type.
#[derive(Debug, Clone)]
pub struct MemoryRecordStore<T> {
    entries: Arc<RwLock<HashMap<String, T>>>,
}

impl<T> MemoryRecordStore<T> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T> Default for MemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record + 'static> RecordStore<T> for MemoryRecordStore<T> {
    async fn add(&self, record: &T) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(record.id()) {
            return Err(StoreError::AlreadyExists(record.id().to_string()));
        }
        entries.insert(record.id().to_string(), record.clone());
        debug!(id = record.id(), user_id = record.user_id(), "record added");
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(id).cloned())
    }

    async fn update(&self, record: &T) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(record.id()) {
            return Err(StoreError::NotFound(record.id().to_string()));
        }
        entries.insert(record.id().to_string(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(id).is_some())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<T>, StoreError> {
        let entries = self.entries.read().await;
        let mut results: Vec<T> = entries
            .values()
            .filter(|record| record.user_id() == user_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        debug!(user_id, count = results.len(), "records listed");
        Ok(results)
    }
}

/// In-memory profile store, one row per user.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn upsert(&self, profile: &Profile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;
        let mut stored = profile.clone();
        stored.updated_at = Utc::now();
        if let Some(existing) = profiles.get(&stored.user_id) {
            stored.created_at = existing.created_at;
        }
        debug!(user_id = %stored.user_id, "profile upserted");
        profiles.insert(stored.user_id.clone(), stored);
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory};
    use chrono::NaiveDate;

    fn create_test_expense(user_id: &str, amount: f64) -> Expense {
        Expense::new(
            user_id,
            ExpenseCategory::FoodAndDining,
            "Lunch",
            amount,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let store = MemoryRecordStore::new();
        let expense = create_test_expense("user1", 12.5);

        store.add(&expense).await.unwrap();

        let found = store.get(&expense.id).await.unwrap();
        assert_eq!(found, Some(expense));
    }

    #[tokio::test]
    async fn test_add_duplicate_id_fails() {
        let store = MemoryRecordStore::new();
        let expense = create_test_expense("user1", 12.5);
        store.add(&expense).await.unwrap();

        let result = store.add(&expense).await;
        assert!(matches!(result, Err(StoreError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_update_missing_record_fails() {
        let store = MemoryRecordStore::new();
        let expense = create_test_expense("user1", 12.5);

        let result = store.update(&expense).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = MemoryRecordStore::new();
        let mut expense = create_test_expense("user1", 12.5);
        store.add(&expense).await.unwrap();

        expense.amount = 20.0;
        store.update(&expense).await.unwrap();

        let found = store.get(&expense.id).await.unwrap().unwrap();
        assert_eq!(found.amount, 20.0);
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let store = MemoryRecordStore::new();
        let expense = create_test_expense("user1", 12.5);
        store.add(&expense).await.unwrap();

        assert!(store.delete(&expense.id).await.unwrap());
        assert!(!store.delete(&expense.id).await.unwrap());
        assert!(store.get(&expense.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_user_filters_and_orders_newest_first() {
        let store = MemoryRecordStore::new();
        let mut first = create_test_expense("user1", 1.0);
        first.created_at = Utc::now() - chrono::Duration::minutes(5);
        let second = create_test_expense("user1", 2.0);
        let other = create_test_expense("user2", 3.0);

        store.add(&first).await.unwrap();
        store.add(&second).await.unwrap();
        store.add(&other).await.unwrap();

        let listed = store.list_by_user("user1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_profile_upsert_keeps_created_at_and_bumps_updated_at() {
        let store = MemoryProfileStore::new();
        let profile = Profile::new("user1", "Astrid");
        store.upsert(&profile).await.unwrap();
        let first = store.get("user1").await.unwrap().unwrap();

        let mut renamed = first.clone();
        renamed.name = "Astrid L.".to_string();
        store.upsert(&renamed).await.unwrap();

        let second = store.get("user1").await.unwrap().unwrap();
        assert_eq!(second.name, "Astrid L.");
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }
}
