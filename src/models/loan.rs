//! Loan state model
//!
//! Tracks the outstanding balance of an amortizing loan together with the
//! running total of interest paid. The caller owns the state across months.

use serde::{Deserialize, Serialize};

/// Validation errors for loan state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanValidationError {
    NegativeAmount,
    NegativeInterestPaid,
    NotFinite,
}

impl std::fmt::Display for LoanValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => {
                write!(f, "Loan balance and monthly payment must be non-negative.")
            }
            Self::NegativeInterestPaid => write!(f, "Total interest paid must be non-negative."),
            Self::NotFinite => write!(f, "Loan figures must be finite numbers."),
        }
    }
}

impl std::error::Error for LoanValidationError {}

/// Current state of a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanState {
    /// Outstanding principal; goes negative on overpayment
    pub loan_balance: f64,
    pub monthly_payment: f64,
    /// Annual rate as a percentage (5 means 5%)
    pub interest_rate: f64,
    #[serde(default)]
    pub total_interest_paid: f64,
}

impl LoanState {
    /// Create a loan with no interest paid yet
    pub fn new(loan_balance: f64, monthly_payment: f64, interest_rate: f64) -> Self {
        Self {
            loan_balance,
            monthly_payment,
            interest_rate,
            total_interest_paid: 0.0,
        }
    }

    /// Validate the state before a payment is applied
    pub fn validate(&self) -> Result<(), LoanValidationError> {
        let fields = [
            self.loan_balance,
            self.monthly_payment,
            self.interest_rate,
            self.total_interest_paid,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(LoanValidationError::NotFinite);
        }
        if self.loan_balance < 0.0 || self.monthly_payment < 0.0 {
            return Err(LoanValidationError::NegativeAmount);
        }
        if self.total_interest_paid < 0.0 {
            return Err(LoanValidationError::NegativeInterestPaid);
        }
        Ok(())
    }

    /// Interest accrued over one month at the current balance
    pub fn monthly_interest(&self) -> f64 {
        let rate = self.interest_rate / 100.0;
        self.loan_balance * rate / 12.0
    }
}
