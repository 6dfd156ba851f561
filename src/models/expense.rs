//! Expense log models
//!
//! The expense log is keyed by date string. Each date holds its entries in
//! the order they were tracked. Unlike the budget categorizer, the category
//! here is free text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation errors for a new expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    MissingDateOrCategory,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive."),
            Self::MissingDateOrCategory => {
                write!(f, "Each expense must have a date and category.")
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// An expense as submitted by the caller; date and category may be missing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewExpense {
    pub fn new(amount: f64, date: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount,
            date: Some(date.into()),
            category: Some(category.into()),
        }
    }

    /// Validate and convert into a log entry
    pub fn into_entry(self) -> Result<ExpenseEntry, ExpenseValidationError> {
        if self.amount <= 0.0 || !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        match (present(self.date), present(self.category)) {
            (Some(date), Some(category)) => Ok(ExpenseEntry {
                amount: self.amount,
                date,
                category,
            }),
            _ => Err(ExpenseValidationError::MissingDateOrCategory),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A validated expense stored in the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub amount: f64,
    pub date: String,
    pub category: String,
}

/// Expenses grouped by date
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseLog {
    entries: BTreeMap<String, Vec<ExpenseEntry>>,
}

impl ExpenseLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under its own date
    pub(crate) fn push(&mut self, entry: ExpenseEntry) {
        self.entries
            .entry(entry.date.clone())
            .or_default()
            .push(entry);
    }

    /// Entries recorded for a date, oldest first
    pub fn entries_for(&self, date: &str) -> Option<&[ExpenseEntry]> {
        self.entries.get(date).map(Vec::as_slice)
    }

    /// All dates with at least one entry, in ascending order
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over every (date, entries) pair
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ExpenseEntry])> {
        self.entries
            .iter()
            .map(|(date, entries)| (date.as_str(), entries.as_slice()))
    }

    /// Sum of the amounts recorded for a date
    pub fn total_for(&self, date: &str) -> f64 {
        self.entries_for(date)
            .map(|entries| entries.iter().map(|e| e.amount).sum())
            .unwrap_or(0.0)
    }

    /// Sum of every amount in the log
    pub fn total(&self) -> f64 {
        self.entries
            .values()
            .flat_map(|entries| entries.iter().map(|e| e.amount))
            .sum()
    }

    /// Number of entries across all dates
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_entry() {
        let entry = NewExpense::new(100.0, "2023-03-01", "supplies")
            .into_entry()
            .unwrap();
        assert_eq!(entry.amount, 100.0);
        assert_eq!(entry.date, "2023-03-01");
        assert_eq!(entry.category, "supplies");
    }

    #[test]
    fn test_non_positive_amount() {
        for amount in [0.0, -50.0, f64::NAN] {
            let result = NewExpense::new(amount, "2023-03-02", "travel").into_entry();
            assert_eq!(result, Err(ExpenseValidationError::NonPositiveAmount));
        }
    }

    #[test]
    fn test_missing_fields() {
        let missing_category = NewExpense {
            amount: 50.0,
            date: Some("2023-03-03".into()),
            category: None,
        };
        assert_eq!(
            missing_category.into_entry(),
            Err(ExpenseValidationError::MissingDateOrCategory)
        );

        let blank_date = NewExpense::new(50.0, "  ", "meals");
        assert_eq!(
            blank_date.into_entry(),
            Err(ExpenseValidationError::MissingDateOrCategory)
        );
    }

    #[test]
    fn test_log_accessors() {
        let mut log = ExpenseLog::new();
        assert!(log.is_empty());

        log.push(NewExpense::new(55.0, "2023-03-04", "meals").into_entry().unwrap());
        log.push(NewExpense::new(95.0, "2023-03-04", "travel").into_entry().unwrap());
        log.push(NewExpense::new(10.0, "2023-03-01", "supplies").into_entry().unwrap());

        assert_eq!(log.len(), 3);
        assert_eq!(log.dates().collect::<Vec<_>>(), ["2023-03-01", "2023-03-04"]);
        assert_eq!(log.total_for("2023-03-04"), 150.0);
        assert_eq!(log.total_for("2024-01-01"), 0.0);
        assert_eq!(log.total(), 160.0);

        let categories: Vec<_> = log
            .entries_for("2023-03-04")
            .unwrap()
            .iter()
            .map(|e| e.category.as_str())
            .collect();
        assert_eq!(categories, ["meals", "travel"]);
    }

    #[test]
    fn test_log_serializes_as_map() {
        let mut log = ExpenseLog::new();
        log.push(NewExpense::new(20.0, "2023-03-01", "meals").into_entry().unwrap());

        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(
            json,
            r#"{"2023-03-01":[{"amount":20.0,"date":"2023-03-01","category":"meals"}]}"#
        );

        let back: ExpenseLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
