//! Component factory: builds the configured record stores from config.
//! Isolates assembly from the chat runner and the CLI commands.

use std::sync::Arc;

use anyhow::Result;
use records::{
    Expense, HealthEntry, MemoryProfileStore, MemoryRecordStore, ProfileStore, RecordStore,
    SchoolTask, SqliteRecordStore,
};
use tracing::{error, info, instrument};

use crate::config::{AppConfig, StoreKind};

/// One store handle per record type; backends share a pool when SQLite.
pub struct AppComponents {
    pub profiles: Arc<dyn ProfileStore>,
    pub expenses: Arc<dyn RecordStore<Expense>>,
    pub tasks: Arc<dyn RecordStore<SchoolTask>>,
    pub health: Arc<dyn RecordStore<HealthEntry>>,
}

/// Creates the record stores named by `RECORDS_STORE`.
#[instrument(skip(config))]
pub async fn build_components(config: &AppConfig) -> Result<AppComponents> {
    match config.store_kind {
        StoreKind::Sqlite => {
            info!(db_path = %config.database_path, "Using SQLite records store");
            let store = SqliteRecordStore::new(&config.database_path)
                .await
                .map_err(|e| {
                    error!(error = %e, db_path = %config.database_path, "Failed to open records database");
                    anyhow::anyhow!("Failed to open records database: {}", e)
                })?;
            Ok(AppComponents {
                profiles: Arc::new(store.clone()),
                expenses: Arc::new(store.clone()),
                tasks: Arc::new(store.clone()),
                health: Arc::new(store),
            })
        }
        StoreKind::Memory => {
            info!("Using in-memory records store");
            Ok(AppComponents {
                profiles: Arc::new(MemoryProfileStore::new()),
                expenses: Arc::new(MemoryRecordStore::<Expense>::new()),
                tasks: Arc::new(MemoryRecordStore::<SchoolTask>::new()),
                health: Arc::new(MemoryRecordStore::<HealthEntry>::new()),
            })
        }
    }
}
