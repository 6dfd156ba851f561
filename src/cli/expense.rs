//! Expense CLI command
//!
//! Adds one expense to a log read from disk and prints the resulting log.
//! The file itself is not rewritten.

use std::fmt::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::{OutputFormat, Settings};
use crate::display::{format_expense_log, render};
use crate::error::{HomefinError, HomefinResult};
use crate::input::read_input_or_default;
use crate::models::{ExpenseLog, NewExpense};
use crate::services::track_expenses;

/// Arguments for `homefin expense`
#[derive(Args, Debug)]
pub struct ExpenseArgs {
    /// Existing expense log (JSON or YAML); starts empty if absent
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Amount spent
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Free-form category (e.g., "travel")
    #[arg(short, long)]
    pub category: Option<String>,

    /// Date of the expense (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle the expense command
pub fn handle_expense_command(
    settings: &Settings,
    format: OutputFormat,
    args: ExpenseArgs,
) -> HomefinResult<()> {
    let mut log: ExpenseLog = match &args.log {
        Some(path) => read_input_or_default(path)?,
        None => ExpenseLog::new(),
    };

    let date = match args.date {
        Some(date) => date,
        None => today(&settings.date_format)?,
    };

    let new_expense = NewExpense {
        amount: args.amount,
        date: Some(date),
        category: args.category,
    };
    track_expenses(&mut log, new_expense)?;

    let output = render(&log, format, |l| {
        format_expense_log(l, &settings.currency_symbol)
    })?;
    println!("{}", output);
    Ok(())
}

/// Today's local date in the configured format
fn today(date_format: &str) -> HomefinResult<String> {
    let mut date = String::new();
    write!(date, "{}", Local::now().format(date_format))
        .map_err(|_| HomefinError::Config(format!("Invalid date format: {}", date_format)))?;
    Ok(date)
}
