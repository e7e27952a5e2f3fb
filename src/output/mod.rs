//! Output formatting for subnet data.
//!
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

use crate::models::Subnet;
use std::error::Error;
use std::str::FromStr;

pub use csv::{csv_row, subnet_print, subnets_csv};
pub use json::subnets_json;
pub use terminal::{format_field, print_subnets, render_subnet};

/// How descriptors are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

/// Write subnets to stdout in the requested format.
pub fn write_subnets(subnets: &[Subnet], format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => print_subnets(subnets),
        OutputFormat::Csv => subnet_print(subnets),
        OutputFormat::Json => println!("{}", subnets_json(subnets)?),
    }
    Ok(())
}
