//! `gentol table` command - print the tolerance table

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::output::{effective_format, write_delimited};
use crate::cli::{OutputFormat, Settings};
use crate::core::{
    find_range, format_value, round_display, validate_dimension, GradeTolerances, ToleranceGrade,
    ToleranceRange, TOLERANCE_TABLE,
};

/// Shown where the standard gives no tolerance
const NOT_SPECIFIED: &str = "—";

#[derive(clap::Args, Debug)]
pub struct TableArgs {
    /// Show only the size range containing this dimension (mm)
    #[arg(long = "for", value_name = "DIMENSION", allow_negative_numbers = true)]
    pub dimension: Option<String>,
}

/// Table row as displayed and written to CSV/TSV
#[derive(Debug, Tabled, Serialize)]
struct TableRow {
    #[tabled(rename = "RANGE (mm)")]
    range: String,
    #[tabled(rename = "f (fine)")]
    fine: String,
    #[tabled(rename = "m (medium)")]
    medium: String,
    #[tabled(rename = "c (coarse)")]
    coarse: String,
    #[tabled(rename = "v (very coarse)")]
    #[serde(rename = "very-coarse")]
    very_coarse: String,
}

/// Range with tolerances rounded for JSON/YAML output
#[derive(Debug, Serialize)]
struct RangeRecord {
    min: f64,
    max: f64,
    tolerances: GradeTolerances,
}

impl RangeRecord {
    fn new(range: &ToleranceRange, decimals: u32) -> Self {
        Self {
            min: range.min,
            max: range.max,
            tolerances: range.tolerances.map(|t| round_display(t, decimals)),
        }
    }
}

impl TableRow {
    fn new(range: &ToleranceRange, decimals: u32) -> Self {
        let cell = |grade: ToleranceGrade| {
            range
                .tolerance(grade)
                .map(|t| format!("±{}", format_value(t, decimals)))
                .unwrap_or_else(|| NOT_SPECIFIED.to_string())
        };
        Self {
            range: range.label(),
            fine: cell(ToleranceGrade::Fine),
            medium: cell(ToleranceGrade::Medium),
            coarse: cell(ToleranceGrade::Coarse),
            very_coarse: cell(ToleranceGrade::VeryCoarse),
        }
    }
}

pub fn run(args: TableArgs, settings: &Settings) -> Result<()> {
    let ranges = selected_ranges(args.dimension.as_deref())?;
    let records = || -> Vec<RangeRecord> {
        ranges
            .iter()
            .map(|r| RangeRecord::new(r, settings.decimals))
            .collect()
    };

    match effective_format(settings.output, false) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records()).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&records()).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let rows: Vec<TableRow> = ranges
                .iter()
                .map(|r| TableRow::new(r, settings.decimals))
                .collect();
            let delimiter = if settings.output == OutputFormat::Csv {
                b','
            } else {
                b'\t'
            };
            write_delimited(&rows, delimiter)?;
        }
        OutputFormat::Text | OutputFormat::Auto => {
            let rows = ranges.iter().map(|r| TableRow::new(r, settings.decimals));
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }

    Ok(())
}

/// The whole table, or the single range containing `dimension`
fn selected_ranges(dimension: Option<&str>) -> Result<Vec<&'static ToleranceRange>> {
    match dimension {
        None => Ok(TOLERANCE_TABLE.iter().collect()),
        Some(raw) => {
            let value = validate_dimension(raw)?;
            let range = find_range(value)
                .ok_or_else(|| miette::miette!("No size range contains {} mm", value))?;
            Ok(vec![range])
        }
    }
}
