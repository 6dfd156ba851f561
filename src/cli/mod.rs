//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod depreciation;
pub mod expense;
pub mod loan;
pub mod mileage;

pub use budget::{handle_budget_command, BudgetArgs};
pub use depreciation::{handle_depreciation_command, DepreciationArgs};
pub use expense::{handle_expense_command, ExpenseArgs};
pub use loan::{handle_loan_command, LoanArgs};
pub use mileage::{handle_mileage_command, MileageArgs};
