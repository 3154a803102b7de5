//! SQLite store backend: persistence for profiles, expenses, school tasks,
//! and health entries.
//!
//! Uses SqlitePoolManager; tables are created on first open. One storage
//! struct implements every store trait, sharing the pool.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::error::StoreError;
use crate::models::{Expense, HealthEntry, Profile, SchoolTask};
use crate::sqlite_pool::SqlitePoolManager;
use crate::store::{ProfileStore, RecordStore};

#[derive(Clone)]
pub struct SqliteRecordStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteRecordStore {
    pub async fn new(database_path: &str) -> Result<Self, StoreError> {
        let pool_manager = SqlitePoolManager::new(database_path).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StoreError> {
        info!("Creating records tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                user_id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT,
                age INTEGER,
                degree_program TEXT,
                expected_graduation TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS expenses (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                incurred_on TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS school_tasks (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT,
                due_date TEXT NOT NULL,
                kind TEXT NOT NULL,
                progress INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS health_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                kind TEXT NOT NULL,
                value TEXT NOT NULL,
                notes TEXT,
                recorded_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_expenses_user_id ON expenses(user_id);
            CREATE INDEX IF NOT EXISTS idx_expenses_incurred_on ON expenses(incurred_on);
            CREATE INDEX IF NOT EXISTS idx_school_tasks_user_id ON school_tasks(user_id);
            CREATE INDEX IF NOT EXISTS idx_school_tasks_due_date ON school_tasks(due_date);
            CREATE INDEX IF NOT EXISTS idx_health_entries_user_id ON health_entries(user_id);
            CREATE INDEX IF NOT EXISTS idx_health_entries_recorded_at ON health_entries(recorded_at);
            "#,
        )
        .execute(pool)
        .await?;

        info!("Records tables created successfully");
        Ok(())
    }
}

/// Maps an insert failure, turning a primary key conflict into AlreadyExists.
fn map_insert_err(err: sqlx::Error, id: &str) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
            return StoreError::AlreadyExists(id.to_string());
        }
    }
    StoreError::Database(err.to_string())
}

#[async_trait]
impl RecordStore<Expense> for SqliteRecordStore {
    async fn add(&self, record: &Expense) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO expenses (id, user_id, category, description, amount, incurred_on, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(record.category)
        .bind(&record.description)
        .bind(record.amount)
        .bind(record.incurred_on)
        .bind(record.created_at)
        .execute(pool)
        .await
        .map_err(|e| map_insert_err(e, &record.id))?;

        info!("Saved expense: id={}, amount={}", record.id, record.amount);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Expense>, StoreError> {
        let pool = self.pool_manager.pool();

        let expense = sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(expense)
    }

    async fn update(&self, record: &Expense) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET category = ?, description = ?, amount = ?, incurred_on = ?
            WHERE id = ?
            "#,
        )
        .bind(record.category)
        .bind(&record.description)
        .bind(record.amount)
        .bind(record.incurred_on)
        .bind(&record.id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(record.id.clone()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Expense>, StoreError> {
        let pool = self.pool_manager.pool();

        let expenses: Vec<Expense> = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        info!("Retrieved {} expenses for user {}", expenses.len(), user_id);
        Ok(expenses)
    }
}

#[async_trait]
impl RecordStore<SchoolTask> for SqliteRecordStore {
    async fn add(&self, record: &SchoolTask) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO school_tasks (id, user_id, title, description, due_date, kind, progress, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.due_date)
        .bind(record.kind)
        .bind(record.progress)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(pool)
        .await
        .map_err(|e| map_insert_err(e, &record.id))?;

        info!("Saved school task: id={}, title={}", record.id, record.title);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<SchoolTask>, StoreError> {
        let pool = self.pool_manager.pool();

        let task = sqlx::query_as::<_, SchoolTask>("SELECT * FROM school_tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(task)
    }

    async fn update(&self, record: &SchoolTask) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            r#"
            UPDATE school_tasks
            SET title = ?, description = ?, due_date = ?, kind = ?, progress = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.due_date)
        .bind(record.kind)
        .bind(record.progress)
        .bind(record.updated_at)
        .bind(&record.id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(record.id.clone()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("DELETE FROM school_tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SchoolTask>, StoreError> {
        let pool = self.pool_manager.pool();

        let tasks: Vec<SchoolTask> = sqlx::query_as::<_, SchoolTask>(
            "SELECT * FROM school_tasks WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        info!("Retrieved {} school tasks for user {}", tasks.len(), user_id);
        Ok(tasks)
    }
}

#[async_trait]
impl RecordStore<HealthEntry> for SqliteRecordStore {
    async fn add(&self, record: &HealthEntry) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO health_entries (id, user_id, kind, value, notes, recorded_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(record.kind)
        .bind(&record.value)
        .bind(&record.notes)
        .bind(record.recorded_at)
        .execute(pool)
        .await
        .map_err(|e| map_insert_err(e, &record.id))?;

        info!("Saved health entry: id={}, kind={}", record.id, record.kind);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<HealthEntry>, StoreError> {
        let pool = self.pool_manager.pool();

        let entry = sqlx::query_as::<_, HealthEntry>("SELECT * FROM health_entries WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(entry)
    }

    async fn update(&self, record: &HealthEntry) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            r#"
            UPDATE health_entries
            SET kind = ?, value = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(record.kind)
        .bind(&record.value)
        .bind(&record.notes)
        .bind(&record.id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(record.id.clone()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("DELETE FROM health_entries WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<HealthEntry>, StoreError> {
        let pool = self.pool_manager.pool();

        let entries: Vec<HealthEntry> = sqlx::query_as::<_, HealthEntry>(
            "SELECT * FROM health_entries WHERE user_id = ? ORDER BY recorded_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        info!(
            "Retrieved {} health entries for user {}",
            entries.len(),
            user_id
        );
        Ok(entries)
    }
}

#[async_trait]
impl ProfileStore for SqliteRecordStore {
    async fn upsert(&self, profile: &Profile) -> Result<(), StoreError> {
        let pool = self.pool_manager.pool();
        let updated_at = Utc::now();

        // created_at binds for the insert arm only; an existing row keeps its
        // original value.
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, name, email, age, degree_program, expected_graduation, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                name = excluded.name,
                email = excluded.email,
                age = excluded.age,
                degree_program = excluded.degree_program,
                expected_graduation = excluded.expected_graduation,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&profile.user_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(profile.age)
        .bind(&profile.degree_program)
        .bind(profile.expected_graduation)
        .bind(profile.created_at)
        .bind(updated_at)
        .execute(pool)
        .await?;

        info!("Upserted profile for user {}", profile.user_id);
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let pool = self.pool_manager.pool();

        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(profile)
    }
}
