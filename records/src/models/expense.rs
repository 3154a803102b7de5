//! Expense record model and category catalog.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The nine spending categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum ExpenseCategory {
    #[sqlx(rename = "Food & Dining")]
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    #[sqlx(rename = "Bills & Utilities")]
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    Health,
    Education,
    Travel,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order.
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::FoodAndDining,
        ExpenseCategory::Transportation,
        ExpenseCategory::Shopping,
        ExpenseCategory::Entertainment,
        ExpenseCategory::BillsAndUtilities,
        ExpenseCategory::Health,
        ExpenseCategory::Education,
        ExpenseCategory::Travel,
        ExpenseCategory::Other,
    ];

    /// Display label, also the stored TEXT value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::FoodAndDining => "Food & Dining",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::BillsAndUtilities => "Bills & Utilities",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    /// Accepts the full label in any case, plus `food` and `bills` as
    /// shorthand for the two ampersand categories.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food & dining" | "food" => Ok(ExpenseCategory::FoodAndDining),
            "transportation" => Ok(ExpenseCategory::Transportation),
            "shopping" => Ok(ExpenseCategory::Shopping),
            "entertainment" => Ok(ExpenseCategory::Entertainment),
            "bills & utilities" | "bills" => Ok(ExpenseCategory::BillsAndUtilities),
            "health" => Ok(ExpenseCategory::Health),
            "education" => Ok(ExpenseCategory::Education),
            "travel" => Ok(ExpenseCategory::Travel),
            "other" => Ok(ExpenseCategory::Other),
            unknown => Err(format!("unknown expense category: {}", unknown)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
    /// Day the money was spent (as entered, not the insertion time).
    pub incurred_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Creates an expense with a generated UUID and current timestamp.
    pub fn new(
        user_id: impl Into<String>,
        category: ExpenseCategory,
        description: impl Into<String>,
        amount: f64,
        incurred_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            category,
            description: description.into(),
            amount,
            incurred_on,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_from_str() {
        for category in ExpenseCategory::ALL {
            let parsed: ExpenseCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_shorthand_and_case() {
        assert_eq!(
            "FOOD".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::FoodAndDining
        );
        assert_eq!(
            "bills".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::BillsAndUtilities
        );
        assert!("groceries".parse::<ExpenseCategory>().is_err());
    }
}
