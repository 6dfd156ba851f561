//! Expense tracking service
//!
//! Appends validated expenses to a date-keyed [`ExpenseLog`].

use tracing::{debug, warn};

use crate::error::{HomefinError, HomefinResult};
use crate::models::{ExpenseLog, NewExpense};

/// Add a new expense to the log under its date
///
/// The category is free text here; it is not checked against the budget
/// categories.
///
/// # Errors
///
/// Returns [`HomefinError::InvalidArgument`] if the amount is not positive or
/// the date or category is missing. The log is left untouched.
pub fn track_expenses(expense_record: &mut ExpenseLog, new_expense: NewExpense) -> HomefinResult<()> {
    let entry = new_expense.into_entry().map_err(|e| {
        warn!(error = %e, "rejected expense");
        HomefinError::invalid(e.to_string())
    })?;

    debug!(
        date = %entry.date,
        category = %entry.category,
        amount = entry.amount,
        "tracked expense"
    );
    expense_record.push(entry);
    Ok(())
}
