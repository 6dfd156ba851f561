//! Budget CLI command
//!
//! Categorizes the expenses of an input document against its income.

use std::path::PathBuf;

use clap::Args;

use crate::config::{OutputFormat, Settings};
use crate::display::{format_budget_summary, render};
use crate::error::HomefinResult;
use crate::input::read_input;
use crate::models::BudgetInput;
use crate::services::manage_household_finances;

/// Arguments for `homefin budget`
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// JSON or YAML file with `income` and `expenses` lists
    pub file: PathBuf,
}

/// Handle the budget command
pub fn handle_budget_command(
    settings: &Settings,
    format: OutputFormat,
    args: BudgetArgs,
) -> HomefinResult<()> {
    let input: BudgetInput = read_input(&args.file)?;
    let summary = manage_household_finances(&input.income, &input.expenses)?;

    let output = render(&summary, format, |s| {
        format_budget_summary(s, &settings.currency_symbol)
    })?;
    println!("{}", output);
    Ok(())
}
