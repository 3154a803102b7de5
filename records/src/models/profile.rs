//! User profile model.
//!
//! One row per user: saving is an upsert keyed by `user_id`, not an insert.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<u8>,
    pub degree_program: Option<String>,
    pub expected_graduation: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a profile with the optional fields unset and both timestamps
    /// at now.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: None,
            age: None,
            degree_program: None,
            expected_graduation: None,
            created_at: now,
            updated_at: now,
        }
    }
}
