//! Health journal model: food, meditation, and activity entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HealthKind {
    Food,
    Meditation,
    Activity,
}

impl HealthKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthKind::Food => "food",
            HealthKind::Meditation => "meditation",
            HealthKind::Activity => "activity",
        }
    }
}

impl fmt::Display for HealthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(HealthKind::Food),
            "meditation" => Ok(HealthKind::Meditation),
            "activity" => Ok(HealthKind::Activity),
            unknown => Err(format!("unknown health entry kind: {}", unknown)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HealthEntry {
    pub id: String,
    pub user_id: String,
    pub kind: HealthKind,
    /// Free-form entry text, e.g. "Oatmeal with berries" or "20 minutes".
    pub value: String,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl HealthEntry {
    /// Creates an entry recorded now, with a generated UUID.
    pub fn new(
        user_id: impl Into<String>,
        kind: HealthKind,
        value: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            kind,
            value: value.into(),
            notes,
            recorded_at: Utc::now(),
        }
    }
}
