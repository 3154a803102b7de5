//! Record models: profile, expenses, school tasks, and health entries.

mod expense;
mod health;
mod profile;
mod task;

pub use expense::{Expense, ExpenseCategory};
pub use health::{HealthEntry, HealthKind};
pub use profile::Profile;
pub use task::{SchoolTask, TaskKind};
