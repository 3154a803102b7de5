//! Derived statistics, recomputed on read.
//!
//! Pure functions over record slices; no cached aggregate state. Callers
//! fetch the user's records from a store and hand the slice in.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseCategory, HealthEntry, HealthKind, SchoolTask};

/// Spending aggregates for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Sum over every expense, all time.
    pub total_spent: f64,
    /// Starting balance minus `total_spent`.
    pub balance: f64,
    /// Per-category totals for the queried month, zero-total categories
    /// omitted, in catalog order.
    pub month_by_category: Vec<(ExpenseCategory, f64)>,
    /// `(YYYY-MM, total)` pairs sorted ascending by month.
    pub monthly_trend: Vec<(String, f64)>,
}

/// Computes spending aggregates. `month` is `YYYY-MM`; expenses bucket by
/// their `incurred_on` date, not the insertion time.
pub fn expense_summary(
    expenses: &[Expense],
    starting_balance: f64,
    month: &str,
) -> ExpenseSummary {
    let total_spent: f64 = expenses.iter().map(|e| e.amount).sum();

    let mut by_category: HashMap<ExpenseCategory, f64> = HashMap::new();
    for expense in expenses.iter().filter(|e| month_key(e.incurred_on) == month) {
        *by_category.entry(expense.category).or_default() += expense.amount;
    }
    let month_by_category: Vec<(ExpenseCategory, f64)> = ExpenseCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let total = by_category.get(&category).copied().unwrap_or(0.0);
            (total > 0.0).then_some((category, total))
        })
        .collect();

    let mut by_month: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        *by_month.entry(month_key(expense.incurred_on)).or_default() += expense.amount;
    }
    let mut monthly_trend: Vec<(String, f64)> = by_month.into_iter().collect();
    monthly_trend.sort_by(|a, b| a.0.cmp(&b.0));

    ExpenseSummary {
        total_spent,
        balance: starting_balance - total_spent,
        month_by_category,
        monthly_trend,
    }
}

fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Completion aggregates for one user's school tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    /// Tasks at exactly 100% progress.
    pub completed: usize,
    pub in_progress: usize,
    /// Mean progress rounded to a whole percent (half-up); 0 with no tasks.
    pub average_progress: u8,
}

pub fn task_stats(tasks: &[SchoolTask]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    let average_progress = if total == 0 {
        0
    } else {
        let sum: u32 = tasks.iter().map(|t| t.progress as u32).sum();
        ((sum as f64 / total as f64).round()) as u8
    };
    TaskStats {
        total,
        completed,
        in_progress: total - completed,
        average_progress,
    }
}

/// Tasks whose due date falls within `days` of `today`, inclusive on both
/// ends, soonest first. Overdue tasks are excluded.
pub fn tasks_due_within(tasks: &[SchoolTask], today: NaiveDate, days: i64) -> Vec<SchoolTask> {
    let horizon = today + chrono::Duration::days(days);
    let mut due: Vec<SchoolTask> = tasks
        .iter()
        .filter(|t| t.due_date >= today && t.due_date <= horizon && !t.is_completed())
        .cloned()
        .collect();
    due.sort_by_key(|t| t.due_date);
    due
}

/// Per-kind entry counts for one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthDayCounts {
    pub food: usize,
    pub meditation: usize,
    pub activity: usize,
}

impl HealthDayCounts {
    pub fn total(&self) -> usize {
        self.food + self.meditation + self.activity
    }
}

pub fn health_day_counts(entries: &[HealthEntry], day: NaiveDate) -> HealthDayCounts {
    let mut counts = HealthDayCounts::default();
    for entry in entries.iter().filter(|e| e.recorded_at.date_naive() == day) {
        match entry.kind {
            HealthKind::Food => counts.food += 1,
            HealthKind::Meditation => counts.meditation += 1,
            HealthKind::Activity => counts.activity += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskKind;
    use chrono::{TimeZone, Utc};

    fn expense(category: ExpenseCategory, amount: f64, incurred_on: &str) -> Expense {
        Expense::new(
            "user1",
            category,
            "test",
            amount,
            incurred_on.parse().unwrap(),
        )
    }

    fn task(progress: u8, due: &str) -> SchoolTask {
        let mut t = SchoolTask::new(
            "user1",
            "task",
            None,
            due.parse().unwrap(),
            TaskKind::Assignment,
        );
        t.progress = progress;
        t
    }

    #[test]
    fn summary_totals_and_balance() {
        let expenses = vec![
            expense(ExpenseCategory::FoodAndDining, 12.5, "2025-05-03"),
            expense(ExpenseCategory::Travel, 80.0, "2025-04-20"),
        ];
        let summary = expense_summary(&expenses, 500.0, "2025-05");
        assert_eq!(summary.total_spent, 92.5);
        assert_eq!(summary.balance, 407.5);
    }

    #[test]
    fn category_totals_cover_queried_month_and_omit_zeroes() {
        let expenses = vec![
            expense(ExpenseCategory::FoodAndDining, 10.0, "2025-05-03"),
            expense(ExpenseCategory::FoodAndDining, 5.0, "2025-05-28"),
            expense(ExpenseCategory::Shopping, 40.0, "2025-04-11"),
        ];
        let summary = expense_summary(&expenses, 0.0, "2025-05");
        assert_eq!(
            summary.month_by_category,
            vec![(ExpenseCategory::FoodAndDining, 15.0)]
        );
    }

    #[test]
    fn trend_months_ascend() {
        let expenses = vec![
            expense(ExpenseCategory::Other, 1.0, "2025-06-01"),
            expense(ExpenseCategory::Other, 2.0, "2025-04-01"),
            expense(ExpenseCategory::Other, 3.0, "2025-05-01"),
        ];
        let summary = expense_summary(&expenses, 0.0, "2025-06");
        let months: Vec<&str> = summary.monthly_trend.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(months, vec!["2025-04", "2025-05", "2025-06"]);
    }

    #[test]
    fn task_stats_counts_and_rounds_half_up() {
        let tasks = vec![task(100, "2025-06-01"), task(25, "2025-06-02")];
        let stats = task_stats(&tasks);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        // (100 + 25) / 2 = 62.5, rounds to 63.
        assert_eq!(stats.average_progress, 63);
    }

    #[test]
    fn empty_task_list_averages_zero() {
        assert_eq!(task_stats(&[]).average_progress, 0);
    }

    #[test]
    fn due_within_excludes_overdue_and_completed() {
        let tasks = vec![
            task(0, "2025-05-30"),
            task(0, "2025-06-03"),
            task(100, "2025-06-02"),
            task(0, "2025-06-20"),
        ];
        let today: NaiveDate = "2025-06-01".parse().unwrap();
        let due = tasks_due_within(&tasks, today, 7);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].due_date, "2025-06-03".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn health_counts_bucket_by_calendar_day() {
        let mut breakfast = HealthEntry::new("user1", HealthKind::Food, "Oatmeal", None);
        breakfast.recorded_at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let mut sit = HealthEntry::new("user1", HealthKind::Meditation, "10 minutes", None);
        sit.recorded_at = Utc.with_ymd_and_hms(2025, 6, 1, 22, 30, 0).unwrap();
        let mut yesterday = HealthEntry::new("user1", HealthKind::Activity, "Run", None);
        yesterday.recorded_at = Utc.with_ymd_and_hms(2025, 5, 31, 18, 0, 0).unwrap();

        let counts =
            health_day_counts(&[breakfast, sit, yesterday], "2025-06-01".parse().unwrap());
        assert_eq!(counts.food, 1);
        assert_eq!(counts.meditation, 1);
        assert_eq!(counts.activity, 0);
        assert_eq!(counts.total(), 2);
    }
}
