//! Depreciation CLI command

use clap::Args;

use crate::config::{OutputFormat, Settings};
use crate::display::report::format_amount;
use crate::display::{format_depreciation_schedule, render};
use crate::error::HomefinResult;
use crate::services::{calculate_depreciation, depreciation_schedule};

/// Arguments for `homefin depreciation`
#[derive(Args, Debug)]
pub struct DepreciationArgs {
    /// Initial value of the asset
    #[arg(allow_negative_numbers = true)]
    pub asset_value: f64,

    /// Useful life in years
    #[arg(allow_negative_numbers = true)]
    pub lifespan: i32,

    /// Show the year-by-year schedule instead of the annual amount
    #[arg(short, long)]
    pub schedule: bool,
}

/// Handle the depreciation command
pub fn handle_depreciation_command(
    settings: &Settings,
    format: OutputFormat,
    args: DepreciationArgs,
) -> HomefinResult<()> {
    let symbol = &settings.currency_symbol;

    let output = if args.schedule {
        let schedule = depreciation_schedule(args.asset_value, args.lifespan)?;
        render(schedule.as_slice(), format, |s| {
            format_depreciation_schedule(s, symbol)
        })?
    } else {
        let annual = calculate_depreciation(args.asset_value, args.lifespan)?;
        render(&annual, format, |a| {
            format!("Annual depreciation: {}", format_amount(*a, symbol))
        })?
    };

    println!("{}", output);
    Ok(())
}
