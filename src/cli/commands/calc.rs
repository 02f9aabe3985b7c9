//! `gentol calc` command - resolve a single dimension

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::output::{effective_format, write_delimited, ResolutionRecord};
use crate::cli::{OutputFormat, Settings};
use crate::core::{format_value, resolve, Resolution};

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Nominal dimension in mm (0.5 to 4000)
    #[arg(allow_negative_numbers = true)]
    pub dimension: String,
}

pub fn run(args: CalcArgs, settings: &Settings) -> Result<()> {
    let resolution = resolve(&args.dimension, settings.grade);

    // An invalid dimension never produces a record
    if let Resolution::InvalidDimension(err) = &resolution {
        return Err(err.clone().into());
    }

    let record = ResolutionRecord::new(
        &args.dimension,
        &resolution,
        settings.grade,
        settings.decimals,
    );

    match effective_format(settings.output, false) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&record).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&record).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => write_delimited(std::slice::from_ref(&record), b',')?,
        OutputFormat::Tsv => write_delimited(std::slice::from_ref(&record), b'\t')?,
        OutputFormat::Text | OutputFormat::Auto => print_text(&record, settings.decimals),
    }

    Ok(())
}

fn print_text(record: &ResolutionRecord, decimals: u32) {
    let (Some(dimension), Some(tolerance), Some(upper), Some(lower)) = (
        record.dimension,
        record.tolerance,
        record.upper_limit,
        record.lower_limit,
    ) else {
        println!(
            "{} {}",
            style("!").yellow(),
            record.message.as_deref().unwrap_or(record.status)
        );
        return;
    };

    println!(
        "{} {} mm",
        style("Dimension:  ").bold(),
        format_value(dimension, decimals)
    );
    println!(
        "{} {} ({})",
        style("Grade:      ").bold(),
        record.grade,
        record.grade.letter()
    );
    println!(
        "{} ±{}",
        style("Tolerance:  ").bold(),
        style(format_value(tolerance, decimals)).cyan()
    );
    println!(
        "{} {}",
        style("Upper limit:").bold(),
        style(format_value(upper, decimals)).green()
    );
    println!(
        "{} {}",
        style("Lower limit:").bold(),
        style(format_value(lower, decimals)).green()
    );
}
