//! Budget categorization models
//!
//! Expenses arrive tagged with a free-text category label; the categorizer
//! checks the label against [`ExpenseCategory`] and produces one
//! [`CategorySummary`] per category seen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::income::IncomeEntry;

/// An expense submitted for categorization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetExpense {
    /// Category label, expected to name an [`ExpenseCategory`]
    pub category: String,
    /// What the money was spent on
    #[serde(default)]
    pub description: String,
    /// Amount spent
    pub amount: f64,
}

impl BudgetExpense {
    pub fn new(category: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            amount,
        }
    }
}

/// Accumulated spending for one category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Sum of all expenses in the category
    pub total: f64,
    /// Share of total income, 0-100 scale
    pub percentage: f64,
}

/// Result of categorizing a set of expenses
pub type BudgetSummary = BTreeMap<ExpenseCategory, CategorySummary>;

/// Income and expenses read together from a single input document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetInput {
    #[serde(default)]
    pub income: Vec<IncomeEntry>,
    #[serde(default)]
    pub expenses: Vec<BudgetExpense>,
}
