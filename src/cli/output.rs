//! Output formatting utilities

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::{round_display, Resolution, ToleranceGrade};

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_list {
                OutputFormat::Tsv
            } else {
                OutputFormat::Text
            }
        }
        other => other,
    }
}

/// One resolution flattened for structured output
///
/// Numeric fields are rounded for display. They are empty unless the
/// dimension resolved; `dimension` is also present for unspecified results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionRecord {
    pub input: String,
    pub status: &'static str,
    pub grade: ToleranceGrade,
    pub dimension: Option<f64>,
    pub tolerance: Option<f64>,
    pub upper_limit: Option<f64>,
    pub lower_limit: Option<f64>,
    pub message: Option<String>,
}

impl ResolutionRecord {
    pub fn new(
        input: &str,
        resolution: &Resolution,
        grade: ToleranceGrade,
        decimals: u32,
    ) -> Self {
        let round = |v: f64| round_display(v, decimals);
        let mut record = Self {
            input: input.trim().to_string(),
            status: resolution.status(),
            grade,
            dimension: None,
            tolerance: None,
            upper_limit: None,
            lower_limit: None,
            message: None,
        };

        match resolution {
            Resolution::Resolved(r) => {
                record.dimension = Some(round(r.dimension));
                record.tolerance = Some(round(r.tolerance));
                record.upper_limit = Some(round(r.upper_limit));
                record.lower_limit = Some(round(r.lower_limit));
            }
            Resolution::Unspecified { dimension, grade } => {
                record.dimension = Some(round(*dimension));
                record.message = Some(format!(
                    "tolerance not specified by the standard for {} mm at grade {}",
                    round(*dimension),
                    grade
                ));
            }
            Resolution::InvalidDimension(err) => {
                record.message = Some(err.to_string());
            }
        }

        record
    }
}

/// Write serializable rows as CSV or TSV with a header line to stdout
pub fn write_delimited<T: Serialize>(rows: &[T], delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;
    Ok(())
}
