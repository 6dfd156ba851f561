//! Loan, mileage, expense log and depreciation display formatting

use super::report::{format_amount, format_miles, separator};
use crate::models::{ExpenseLog, LoanState, MileageRecord};
use crate::services::DepreciationYear;

/// Format the state of a loan after a payment
pub fn format_loan_state(loan: &LoanState, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Loan Balance:        {:>14}\n",
        format_amount(loan.loan_balance, symbol)
    ));
    output.push_str(&format!(
        "Monthly Payment:     {:>14}\n",
        format_amount(loan.monthly_payment, symbol)
    ));
    output.push_str(&format!(
        "Interest Rate:       {:>13.2}%\n",
        loan.interest_rate
    ));
    output.push_str(&format!(
        "Total Interest Paid: {:>14}",
        format_amount(loan.total_interest_paid, symbol)
    ));
    output
}

/// Format a mileage record
pub fn format_mileage(record: &MileageRecord) -> String {
    format!(
        "Business: {:>12}\nPersonal: {:>12}\n{}\nTotal:    {:>12}",
        format_miles(record.business_miles),
        format_miles(record.personal_miles),
        separator(22),
        format_miles(record.total_miles()),
    )
}

/// Format an expense log grouped by date
pub fn format_expense_log(log: &ExpenseLog, symbol: &str) -> String {
    if log.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let mut output = String::new();
    for (date, entries) in log.iter() {
        output.push_str(&format!(
            "{}  ({})\n",
            date,
            format_amount(log.total_for(date), symbol)
        ));
        for entry in entries {
            output.push_str(&format!(
                "  {:<20} {:>12}\n",
                entry.category,
                format_amount(entry.amount, symbol)
            ));
        }
    }
    output.push_str(&separator(36));
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}",
        log.len(),
        format_amount(log.total(), symbol)
    ));
    output
}

/// Format a depreciation schedule as a table
pub fn format_depreciation_schedule(schedule: &[DepreciationYear], symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:>4}  {:>14}  {:>14}\n", "Year", "Depreciation", "Book Value"));
    output.push_str(&separator(36));
    output.push('\n');
    for year in schedule {
        output.push_str(&format!(
            "{:>4}  {:>14}  {:>14}\n",
            year.year,
            format_amount(year.depreciation, symbol),
            format_amount(year.book_value, symbol)
        ));
    }
    output.trim_end().to_string()
}
