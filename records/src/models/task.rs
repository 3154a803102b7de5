//! School task model: assignments, exams, and projects with a progress
//! percentage.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Assignment,
    Midterm,
    Final,
    Project,
    Other,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Assignment => "assignment",
            TaskKind::Midterm => "midterm",
            TaskKind::Final => "final",
            TaskKind::Project => "project",
            TaskKind::Other => "other",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "assignment" => Ok(TaskKind::Assignment),
            "midterm" => Ok(TaskKind::Midterm),
            "final" => Ok(TaskKind::Final),
            "project" => Ok(TaskKind::Project),
            "other" => Ok(TaskKind::Other),
            unknown => Err(format!("unknown task kind: {}", unknown)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SchoolTask {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub kind: TaskKind,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SchoolTask {
    /// Creates a task at 0% progress with a generated UUID.
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
        due_date: NaiveDate,
        kind: TaskKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            title: title.into(),
            description,
            due_date,
            kind,
            progress: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets progress, clamping to 100, and bumps `updated_at`.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
        self.updated_at = Utc::now();
    }

    pub fn is_completed(&self) -> bool {
        self.progress == 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_100() {
        let mut task = SchoolTask::new(
            "local",
            "Algorithms problem set",
            None,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            TaskKind::Assignment,
        );
        assert_eq!(task.progress, 0);

        task.set_progress(250);
        assert_eq!(task.progress, 100);
        assert!(task.is_completed());
    }
}
