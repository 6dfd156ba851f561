//! Loan balance service
//!
//! Applies one month's payment to a [`LoanState`].

use tracing::{debug, warn};

use crate::error::{HomefinError, HomefinResult};
use crate::models::LoanState;

/// Apply one monthly payment, updating the balance and interest paid in place
///
/// Interest accrues on the balance before the payment. The balance is not
/// floored at zero, so an overpayment leaves it negative.
///
/// # Errors
///
/// Returns [`HomefinError::InvalidArgument`] if the loan balance or monthly
/// payment is negative, if the interest paid so far is negative, or if any
/// figure is not finite. The state is left untouched.
pub fn modify_loan_balance(loan_details: &mut LoanState) -> HomefinResult<()> {
    loan_details.validate().map_err(|e| {
        warn!(
            loan_balance = loan_details.loan_balance,
            monthly_payment = loan_details.monthly_payment,
            total_interest_paid = loan_details.total_interest_paid,
            "rejected loan update"
        );
        HomefinError::invalid(e.to_string())
    })?;

    let monthly_interest = loan_details.monthly_interest();
    loan_details.total_interest_paid += monthly_interest;

    let principal_payment = loan_details.monthly_payment - monthly_interest;
    loan_details.loan_balance -= principal_payment;

    debug!(
        monthly_interest,
        principal_payment,
        loan_balance = loan_details.loan_balance,
        "applied monthly loan payment"
    );
    Ok(())
}
