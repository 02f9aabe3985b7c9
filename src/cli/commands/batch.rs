//! `gentol batch` command - resolve many dimensions at once
//!
//! Reads one dimension per line. Blank lines and lines starting with `#` are
//! skipped. A bad line is reported in its own record and never stops the run.

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use crate::cli::output::{effective_format, write_delimited, ResolutionRecord};
use crate::cli::{OutputFormat, Settings};
use crate::core::{format_value, resolve};

#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    /// File with one dimension per line (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Show only the number of records per status
    #[arg(long)]
    pub summary: bool,
}

pub fn run(args: BatchArgs, settings: &Settings) -> Result<()> {
    let content = match &args.file {
        Some(path) => fs::read(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        None => read_stdin()?,
    };
    let lines = split_lines(&content);

    let records: Vec<ResolutionRecord> = dimension_lines(&lines)
        .map(|input| {
            let resolution = resolve(input, settings.grade);
            ResolutionRecord::new(input, &resolution, settings.grade, settings.decimals)
        })
        .collect();

    tracing::info!(count = records.len(), grade = %settings.grade, "batch resolved");

    if args.summary {
        print_summary(&records);
        return Ok(());
    }

    match effective_format(settings.output, true) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&records).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => write_delimited(&records, b',')?,
        OutputFormat::Tsv | OutputFormat::Auto => write_delimited(&records, b'\t')?,
        OutputFormat::Text => print_text(&records, settings.decimals),
    }

    Ok(())
}

/// Split raw input into lines, decoding each one on its own
///
/// Invalid UTF-8 only spoils its own line, which then fails to parse.
fn split_lines(content: &[u8]) -> Vec<String> {
    content
        .split(|b| *b == b'\n')
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect()
}

/// Lines that carry a dimension, trimmed
fn dimension_lines(lines: &[String]) -> impl Iterator<Item = &str> + '_ {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}

fn read_stdin() -> Result<Vec<u8>> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        return Err(miette::miette!(
            "No input. Pass a file or pipe dimensions on stdin, e.g. `printf '10\\n25\\n' | gentol batch`"
        ));
    }

    let mut content = Vec::new();
    stdin.lock().read_to_end(&mut content).into_diagnostic()?;
    Ok(content)
}

fn print_text(records: &[ResolutionRecord], decimals: u32) {
    for record in records {
        match (record.tolerance, record.upper_limit, record.lower_limit) {
            (Some(tol), Some(upper), Some(lower)) => println!(
                "{:<12} ±{:<8} {} .. {}",
                record.input,
                format_value(tol, decimals),
                format_value(lower, decimals),
                format_value(upper, decimals)
            ),
            _ => println!(
                "{:<12} {}",
                record.input,
                style(record.message.as_deref().unwrap_or(record.status)).yellow()
            ),
        }
    }
}

fn print_summary(records: &[ResolutionRecord]) {
    let count = |status: &str| records.iter().filter(|r| r.status == status).count();
    println!("ok: {}", count("ok"));
    println!("unspecified: {}", count("unspecified"));
    println!("invalid: {}", count("invalid"));
}
