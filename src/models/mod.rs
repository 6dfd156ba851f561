//! Core data models for homefin
//!
//! Plain records the finance services read and mutate: income, budget
//! expenses, the expense log, loan state and mileage.

pub mod budget;
pub mod category;
pub mod expense;
pub mod income;
pub mod loan;
pub mod mileage;

pub use budget::{BudgetExpense, BudgetInput, BudgetSummary, CategorySummary};
pub use category::{ExpenseCategory, UnknownCategory};
pub use expense::{ExpenseEntry, ExpenseLog, ExpenseValidationError, NewExpense};
pub use income::IncomeEntry;
pub use loan::{LoanState, LoanValidationError};
pub use mileage::{InvalidMileageRecord, MileageRecord, TripType, UnknownTripType};
