//! Budget expense categories
//!
//! The budget categorizer only accepts a closed set of categories. Anything
//! outside this list is rejected rather than bucketed as "other".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognised household expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "mortgage")]
    Mortgage,
    #[serde(rename = "auto payment")]
    AutoPayment,
    #[serde(rename = "insurance")]
    Insurance,
    #[serde(rename = "credit card")]
    CreditCard,
    #[serde(rename = "utility")]
    Utility,
}

impl ExpenseCategory {
    /// Every valid category, in display order
    pub const ALL: [ExpenseCategory; 5] = [
        Self::Mortgage,
        Self::AutoPayment,
        Self::Insurance,
        Self::CreditCard,
        Self::Utility,
    ];

    /// The label callers use for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mortgage => "mortgage",
            Self::AutoPayment => "auto payment",
            Self::Insurance => "insurance",
            Self::CreditCard => "credit card",
            Self::Utility => "utility",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not one of the valid categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Labels must match exactly; no case folding or trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
