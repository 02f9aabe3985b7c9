//! Command-line argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::batch::BatchArgs;
use crate::cli::commands::calc::CalcArgs;
use crate::cli::commands::table::TableArgs;
use crate::core::ToleranceGrade;

/// General tolerances for linear dimensions
///
/// Looks up the permissible deviation for a nominal size (0.5 mm to 4000 mm)
/// and tolerance grade, and prints the resulting upper and lower limits.
#[derive(Parser, Debug)]
#[command(name = "gentol", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the tolerance and limits for one dimension
    Calc(CalcArgs),

    /// Resolve one dimension per line from a file or stdin
    Batch(BatchArgs),

    /// Print the full tolerance table
    Table(TableArgs),
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "auto")]
    pub output: OutputFormat,

    /// Tolerance grade: fine (f), medium (m), coarse (c), very-coarse (v)
    #[arg(long, short = 'g', global = true, env = "GENTOL_GRADE")]
    pub grade: Option<ToleranceGrade>,

    /// Decimal places shown for tolerances and limits
    #[arg(long, global = true)]
    pub decimals: Option<u32>,

    /// Path to a config file (overrides GENTOL_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Text for single results and the table, TSV for batch
    #[default]
    Auto,
    /// Human-readable text
    Text,
    /// JSON
    Json,
    /// YAML
    Yaml,
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
}
