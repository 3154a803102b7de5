//! # records
//!
//! Per-user record storage for the astrid life organizer: profiles, expenses,
//! school tasks, and health entries. Each record type sits behind the async
//! [`RecordStore`] trait (profiles behind [`ProfileStore`], an upsert) with
//! two backends: in-memory maps for tests and ephemeral sessions, SQLite via
//! `sqlx` for persistence. Derived statistics are pure functions in [`stats`],
//! recomputed on every read.

pub mod error;
pub mod memory_store;
pub mod models;
pub mod sqlite_pool;
pub mod sqlite_store;
pub mod stats;
pub mod store;

pub use error::StoreError;
pub use memory_store::{MemoryProfileStore, MemoryRecordStore};
pub use models::{
    Expense, ExpenseCategory, HealthEntry, HealthKind, Profile, SchoolTask, TaskKind,
};
pub use sqlite_store::SqliteRecordStore;
pub use stats::{
    expense_summary, health_day_counts, task_stats, tasks_due_within, ExpenseSummary,
    HealthDayCounts, TaskStats,
};
pub use store::{ProfileStore, Record, RecordStore};
