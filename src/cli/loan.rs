//! Loan CLI command
//!
//! Applies one month's payment to a loan given either as a state file or as
//! flags. Flags override the matching fields of the file.

use std::path::PathBuf;

use clap::Args;

use crate::config::{OutputFormat, Settings};
use crate::display::{format_loan_state, render};
use crate::error::{HomefinError, HomefinResult};
use crate::input::read_input;
use crate::models::LoanState;
use crate::services::modify_loan_balance;

/// Arguments for `homefin loan`
#[derive(Args, Debug)]
pub struct LoanArgs {
    /// Loan state file (JSON or YAML)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Outstanding loan balance
    #[arg(short, long, allow_negative_numbers = true)]
    pub balance: Option<f64>,

    /// Monthly payment
    #[arg(short, long, allow_negative_numbers = true)]
    pub payment: Option<f64>,

    /// Annual interest rate in percent (e.g., 5 for 5%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Interest paid so far
    #[arg(long, allow_negative_numbers = true)]
    pub interest_paid: Option<f64>,
}

impl LoanArgs {
    /// Build the starting loan state from the file and/or flags
    fn into_state(self) -> HomefinResult<LoanState> {
        let mut loan = match &self.state {
            Some(path) => read_input::<LoanState, _>(path)?,
            None => match (self.balance, self.payment, self.rate) {
                (Some(balance), Some(payment), Some(rate)) => {
                    LoanState::new(balance, payment, rate)
                }
                _ => {
                    return Err(HomefinError::Input(
                        "Provide --state or all of --balance, --payment and --rate".into(),
                    ))
                }
            },
        };

        if let Some(balance) = self.balance {
            loan.loan_balance = balance;
        }
        if let Some(payment) = self.payment {
            loan.monthly_payment = payment;
        }
        if let Some(rate) = self.rate {
            loan.interest_rate = rate;
        }
        if let Some(paid) = self.interest_paid {
            loan.total_interest_paid = paid;
        }

        Ok(loan)
    }
}

/// Handle the loan command
pub fn handle_loan_command(
    settings: &Settings,
    format: OutputFormat,
    args: LoanArgs,
) -> HomefinResult<()> {
    let mut loan = args.into_state()?;
    modify_loan_balance(&mut loan)?;

    let output = render(&loan, format, |l| {
        format_loan_state(l, &settings.currency_symbol)
    })?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args() -> LoanArgs {
        LoanArgs {
            state: None,
            balance: None,
            payment: None,
            rate: None,
            interest_paid: None,
        }
    }

    #[test]
    fn test_state_from_flags() {
        let loan = LoanArgs {
            balance: Some(20000.0),
            payment: Some(1000.0),
            rate: Some(5.0),
            ..args()
        }
        .into_state()
        .unwrap();

        assert_eq!(loan, LoanState::new(20000.0, 1000.0, 5.0));
    }

    #[test]
    fn test_missing_flags() {
        let err = LoanArgs {
            balance: Some(20000.0),
            ..args()
        }
        .into_state()
        .unwrap_err();

        assert!(matches!(err, HomefinError::Input(_)));
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("loan.json");
        std::fs::write(
            &path,
            r#"{"loan_balance": 20000, "monthly_payment": 1000, "interest_rate": 5, "total_interest_paid": 12.5}"#,
        )
        .unwrap();

        let loan = LoanArgs {
            state: Some(path),
            payment: Some(1200.0),
            ..args()
        }
        .into_state()
        .unwrap();

        assert_eq!(loan.loan_balance, 20000.0);
        assert_eq!(loan.monthly_payment, 1200.0);
        assert_eq!(loan.total_interest_paid, 12.5);
    }
}
