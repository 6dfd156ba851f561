//! Business logic layer
//!
//! Each service is a single operation over caller-owned records. All of them
//! validate their input completely before computing or mutating anything.

pub mod budget;
pub mod depreciation;
pub mod expense;
pub mod loan;
pub mod mileage;

pub use budget::manage_household_finances;
pub use depreciation::{calculate_depreciation, depreciation_schedule, DepreciationYear};
pub use expense::track_expenses;
pub use loan::modify_loan_balance;
pub use mileage::update_mileage;
