//! Display formatting for terminal output
//!
//! Table output is hand-aligned text; JSON and YAML output serialize the
//! records directly so they can be fed back in as input.

pub mod budget;
pub mod records;
pub mod report;

pub use budget::format_budget_summary;
pub use records::{
    format_depreciation_schedule, format_expense_log, format_loan_state, format_mileage,
};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::HomefinResult;

/// Render a value in the requested format, using `table` for text output
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> HomefinResult<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Table => Ok(table(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
    }
}
