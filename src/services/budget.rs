//! Budget categorization service
//!
//! Totals household expenses by category and works out what share of total
//! income each category consumes.

use tracing::{debug, warn};

use crate::error::{HomefinError, HomefinResult};
use crate::models::{BudgetExpense, BudgetSummary, ExpenseCategory, IncomeEntry};

/// Organize expenses by category and compute each category's percentage of income
///
/// Every expense category must be one of [`ExpenseCategory::ALL`]. The result
/// only contains categories that had at least one expense.
///
/// # Errors
///
/// Returns [`HomefinError::InvalidArgument`] if total income is zero, if any
/// amount is negative or not finite, or if an expense names an unknown
/// category. No summary is produced in that case.
pub fn manage_household_finances(
    income: &[IncomeEntry],
    expenses: &[BudgetExpense],
) -> HomefinResult<BudgetSummary> {
    if let Some(entry) = income
        .iter()
        .find(|entry| !entry.amount.is_finite() || entry.amount < 0.0)
    {
        warn!(source = %entry.source, amount = entry.amount, "rejected income entry");
        return Err(HomefinError::invalid(format!(
            "Income amount for '{}' must be a non-negative number.",
            entry.source
        )));
    }

    let total_income: f64 = income.iter().map(|entry| entry.amount).sum();
    if total_income == 0.0 {
        warn!("rejected budget with zero total income");
        return Err(HomefinError::invalid("Total income cannot be zero."));
    }
    if !total_income.is_finite() {
        warn!("rejected budget with overflowing total income");
        return Err(HomefinError::invalid("Total income is too large."));
    }

    let mut summary = BudgetSummary::new();
    for expense in expenses {
        let category = expense.category.parse::<ExpenseCategory>().map_err(|e| {
            warn!(category = %expense.category, "rejected expense category");
            HomefinError::invalid(e.to_string())
        })?;

        if !expense.amount.is_finite() || expense.amount < 0.0 {
            return Err(HomefinError::invalid(format!(
                "Expense amount for '{}' must be a non-negative number.",
                expense.description
            )));
        }

        summary.entry(category).or_default().total += expense.amount;
    }

    for category_summary in summary.values_mut() {
        category_summary.percentage = (category_summary.total / total_income) * 100.0;
    }

    if let Some((category, _)) = summary
        .iter()
        .find(|(_, s)| !s.total.is_finite() || !s.percentage.is_finite())
    {
        warn!(%category, "rejected overflowing category total");
        return Err(HomefinError::invalid(format!(
            "Total for category '{}' is too large.",
            category
        )));
    }

    debug!(
        total_income,
        expenses = expenses.len(),
        categories = summary.len(),
        "categorized household expenses"
    );

    Ok(summary)
}
