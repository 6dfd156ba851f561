//! Income entry model
//!
//! A single source of household income, read by the budget categorizer.

use serde::{Deserialize, Serialize};

/// One income source and its amount for the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// Where the income comes from (e.g., "Job 1")
    pub source: String,
    /// Amount earned
    pub amount: f64,
}

impl IncomeEntry {
    /// Create a new income entry
    pub fn new(source: impl Into<String>, amount: f64) -> Self {
        Self {
            source: source.into(),
            amount,
        }
    }
}
