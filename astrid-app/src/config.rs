//! App config: records backend, database path, logging, chat user. Loaded
//! from env with defaults; a `.env` file is read by the binary before this
//! runs.

use anyhow::Result;
use std::env;

/// Which records backend to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// RECORDS_STORE: `memory` or `sqlite`.
    pub store_kind: StoreKind,
    /// ASTRID_DB: SQLite file path (sqlite backend only).
    pub database_path: String,
    /// LOG_FILE
    pub log_file: String,
    /// ASTRID_USER: the user id every record and session is keyed by.
    pub user_id: String,
    /// TYPING_DELAY_MS: cosmetic pause before a reply is shown; never
    /// affects classification.
    pub typing_delay_ms: u64,
}

impl AppConfig {
    /// Load from environment variables with defaults.
    pub fn load() -> Result<Self> {
        let store_kind = match env::var("RECORDS_STORE").as_deref() {
            Ok("memory") => StoreKind::Memory,
            Ok("sqlite") | Err(_) => StoreKind::Sqlite,
            Ok(other) => {
                anyhow::bail!(
                    "RECORDS_STORE must be 'memory' or 'sqlite', got: {}",
                    other
                );
            }
        };
        let database_path = env::var("ASTRID_DB").unwrap_or_else(|_| "astrid.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/astrid.log".to_string());
        let user_id = env::var("ASTRID_USER").unwrap_or_else(|_| "local".to_string());
        let typing_delay_ms = env::var("TYPING_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        Ok(Self {
            store_kind,
            database_path,
            log_file,
            user_id,
            typing_delay_ms,
        })
    }

    /// Validate config before component assembly.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            anyhow::bail!("ASTRID_USER must not be empty");
        }
        if self.store_kind == StoreKind::Sqlite && self.database_path.trim().is_empty() {
            anyhow::bail!("ASTRID_DB must not be empty when RECORDS_STORE=sqlite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "RECORDS_STORE",
            "ASTRID_DB",
            "LOG_FILE",
            "ASTRID_USER",
            "TYPING_DELAY_MS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_empty() {
        clear_env();
        let config = AppConfig::load().unwrap();
        assert_eq!(config.store_kind, StoreKind::Sqlite);
        assert_eq!(config.database_path, "astrid.db");
        assert_eq!(config.log_file, "logs/astrid.log");
        assert_eq!(config.user_id, "local");
        assert_eq!(config.typing_delay_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn memory_store_and_delay_from_env() {
        clear_env();
        env::set_var("RECORDS_STORE", "memory");
        env::set_var("TYPING_DELAY_MS", "250");
        let config = AppConfig::load().unwrap();
        assert_eq!(config.store_kind, StoreKind::Memory);
        assert_eq!(config.typing_delay_ms, 250);
        clear_env();
    }

    #[test]
    #[serial]
    fn unknown_store_kind_is_rejected() {
        clear_env();
        env::set_var("RECORDS_STORE", "postgres");
        assert!(AppConfig::load().is_err());
        clear_env();
    }
}
