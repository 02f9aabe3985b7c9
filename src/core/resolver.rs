//! Tolerance resolution - validate a dimension, look up its tolerance, derive limits
//!
//! Every function here is pure. Absence is reported through return values:
//! an invalid dimension is a [`DimensionError`], and a valid dimension with no
//! tolerance for the chosen grade is [`Resolution::Unspecified`].

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::core::grade::ToleranceGrade;
use crate::core::table::{find_range, MAX_DIMENSION, MIN_DIMENSION};

/// Why a raw dimension was rejected
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum DimensionError {
    #[error("'{input}' is not a number")]
    #[diagnostic(
        code(gentol::dimension::unparseable),
        help("enter a nominal size in mm between 0.5 and 4000, e.g. 12.5")
    )]
    Unparseable { input: String },

    #[error("{value} mm is outside the covered range")]
    #[diagnostic(
        code(gentol::dimension::out_of_range),
        help("general tolerances apply to nominal sizes from 0.5 mm to 4000 mm inclusive")
    )]
    OutOfRange { value: f64 },
}

/// Upper and lower limits around a nominal dimension, unrounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub upper: f64,
    pub lower: f64,
}

/// A fully resolved dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolutionResult {
    pub dimension: f64,
    pub grade: ToleranceGrade,
    pub tolerance: f64,
    pub upper_limit: f64,
    pub lower_limit: f64,
}

/// Outcome of resolving raw input against the tolerance table
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Tolerance found and limits computed
    Resolved(ResolutionResult),
    /// Input rejected before lookup
    InvalidDimension(DimensionError),
    /// Valid dimension, but the standard gives no tolerance for this grade
    Unspecified {
        dimension: f64,
        grade: ToleranceGrade,
    },
}

impl Resolution {
    /// Short status keyword used in batch output
    pub fn status(&self) -> &'static str {
        match self {
            Resolution::Resolved(_) => "ok",
            Resolution::InvalidDimension(_) => "invalid",
            Resolution::Unspecified { .. } => "unspecified",
        }
    }

    pub fn result(&self) -> Option<&ResolutionResult> {
        match self {
            Resolution::Resolved(r) => Some(r),
            _ => None,
        }
    }
}

/// Parse raw text into a dimension within `[0.5, 4000]`
pub fn validate_dimension(input: &str) -> Result<f64, DimensionError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| DimensionError::Unparseable {
            input: trimmed.to_string(),
        })?;

    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        return Err(DimensionError::OutOfRange { value });
    }

    Ok(value)
}

/// Look up the ± tolerance for a dimension and grade
///
/// `None` when the dimension lies outside every size range, or when the
/// standard has no entry for the grade in that range.
pub fn resolve_tolerance(dimension: f64, grade: ToleranceGrade) -> Option<f64> {
    find_range(dimension)?.tolerance(grade)
}

/// Nominal ± tolerance; an unspecified tolerance yields unspecified limits
pub fn compute_limits(dimension: f64, tolerance: Option<f64>) -> Option<Limits> {
    tolerance.map(|t| Limits {
        upper: dimension + t,
        lower: dimension - t,
    })
}

/// Run the whole pipeline on raw input
pub fn resolve(input: &str, grade: ToleranceGrade) -> Resolution {
    let dimension = match validate_dimension(input) {
        Ok(d) => d,
        Err(e) => {
            tracing::debug!(input, error = %e, "dimension rejected");
            return Resolution::InvalidDimension(e);
        }
    };

    let tolerance = resolve_tolerance(dimension, grade);
    let resolution = match (tolerance, compute_limits(dimension, tolerance)) {
        (Some(tolerance), Some(limits)) => Resolution::Resolved(ResolutionResult {
            dimension,
            grade,
            tolerance,
            upper_limit: limits.upper,
            lower_limit: limits.lower,
        }),
        _ => Resolution::Unspecified { dimension, grade },
    };

    tracing::debug!(
        dimension,
        %grade,
        status = resolution.status(),
        "resolved dimension"
    );
    resolution
}
