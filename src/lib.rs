//! homefin - Household finance helpers
//!
//! This library provides a handful of independent personal finance
//! calculations: categorizing household expenses against income, straight-line
//! depreciation, a date-keyed expense log, monthly loan amortization and
//! business/personal mileage tracking.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Plain records (income, expenses, loan state, mileage)
//! - `services`: The finance operations
//! - `input`: Reading records from JSON/YAML files
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `homefin` binary
//!
//! # Example
//!
//! ```rust
//! use homefin::models::LoanState;
//! use homefin::services::modify_loan_balance;
//!
//! let mut loan = LoanState::new(20000.0, 1000.0, 5.0);
//! modify_loan_balance(&mut loan)?;
//! assert!((loan.loan_balance - 19083.33).abs() < 0.01);
//! # Ok::<(), homefin::HomefinError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod services;

pub use error::{HomefinError, HomefinResult};
