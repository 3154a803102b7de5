//! Store traits: a generic per-type record store and the profile upsert
//! store. Both backends (in-memory and SQLite) implement these.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::{Expense, HealthEntry, Profile, SchoolTask};

/// A record owned by a user, keyed by a UUID string.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> &str;
    fn user_id(&self) -> &str;
    /// Ordering key for user listings (newest first).
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Add/get/update/delete/list operations for one record type.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Inserts a record. Fails with [`StoreError::AlreadyExists`] on a
    /// duplicate id.
    async fn add(&self, record: &T) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Replaces an existing record. Fails with [`StoreError::NotFound`] when
    /// the id is absent.
    async fn update(&self, record: &T) -> Result<(), StoreError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// All records for the user, newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<T>, StoreError>;
}

/// Profile persistence: one row per user, saved by upsert.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Inserts or overwrites the user's profile. The stored row keeps the
    /// original `created_at` when one exists and gets a fresh `updated_at`.
    async fn upsert(&self, profile: &Profile) -> Result<(), StoreError>;

    async fn get(&self, user_id: &str) -> Result<Option<Profile>, StoreError>;
}

impl Record for Expense {
    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for SchoolTask {
    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for HealthEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
