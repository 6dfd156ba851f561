//! Mileage CLI command

use std::path::PathBuf;

use clap::Args;

use crate::config::{OutputFormat, Settings};
use crate::display::{format_mileage, render};
use crate::error::HomefinResult;
use crate::input::read_input_or_default;
use crate::models::MileageRecord;
use crate::services::update_mileage;

/// A trip given on the command line as `MILES:TYPE`
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub miles: f64,
    pub trip_type: String,
}

/// Parse `MILES:TYPE`; the trip type itself is checked by the service
pub fn parse_trip(s: &str) -> Result<Trip, String> {
    let (miles, trip_type) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected MILES:TYPE, got '{}'", s))?;
    let miles = miles
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid miles '{}'", miles))?;

    Ok(Trip {
        miles,
        trip_type: trip_type.trim().to_string(),
    })
}

/// Arguments for `homefin mileage`
#[derive(Args, Debug)]
pub struct MileageArgs {
    /// Mileage record file (JSON or YAML); starts at zero if absent
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Trip as MILES:TYPE, where TYPE is business or personal (repeatable)
    #[arg(
        short,
        long = "trip",
        required = true,
        allow_hyphen_values = true,
        value_parser = parse_trip
    )]
    pub trips: Vec<Trip>,
}

/// Handle the mileage command
pub fn handle_mileage_command(
    _settings: &Settings,
    format: OutputFormat,
    args: MileageArgs,
) -> HomefinResult<()> {
    let mut record: MileageRecord = match &args.state {
        Some(path) => read_input_or_default(path)?,
        None => MileageRecord::new(),
    };

    for trip in &args.trips {
        update_mileage(&mut record, trip.miles, &trip.trip_type)?;
    }

    let output = render(&record, format, format_mileage)?;
    println!("{}", output);
    Ok(())
}
