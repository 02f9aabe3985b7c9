//! Static tolerance table for linear dimensions
//!
//! Permissible deviations (±, in mm) by nominal size range and tolerance grade.
//! Angular dimensions and broken edges (chamfers, radii) are not covered.

use serde::Serialize;

use crate::core::grade::ToleranceGrade;

/// Smallest nominal size covered by the table (mm)
pub const MIN_DIMENSION: f64 = 0.5;

/// Largest nominal size covered by the table (mm)
pub const MAX_DIMENSION: f64 = 4000.0;

/// Per-grade tolerances for one size range
///
/// `None` means the standard specifies no value for that grade in this range,
/// which is not the same as a zero tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GradeTolerances {
    pub fine: Option<f64>,
    pub medium: Option<f64>,
    pub coarse: Option<f64>,
    pub very_coarse: Option<f64>,
}

impl GradeTolerances {
    /// Tolerance for the given grade, if the standard defines one
    pub fn get(&self, grade: ToleranceGrade) -> Option<f64> {
        match grade {
            ToleranceGrade::Fine => self.fine,
            ToleranceGrade::Medium => self.medium,
            ToleranceGrade::Coarse => self.coarse,
            ToleranceGrade::VeryCoarse => self.very_coarse,
        }
    }

    /// Apply `f` to every specified tolerance
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            fine: self.fine.map(&f),
            medium: self.medium.map(&f),
            coarse: self.coarse.map(&f),
            very_coarse: self.very_coarse.map(&f),
        }
    }
}

/// A nominal size bucket
///
/// The first bucket is closed on both ends, `[0.5, 3]`. Every later bucket is
/// open below and closed above, `(min, max]`, so a boundary value belongs to
/// the lower bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceRange {
    pub min: f64,
    pub max: f64,
    pub tolerances: GradeTolerances,
}

impl ToleranceRange {
    const fn new(min: f64, max: f64, tolerances: [Option<f64>; 4]) -> Self {
        let [fine, medium, coarse, very_coarse] = tolerances;
        Self {
            min,
            max,
            tolerances: GradeTolerances {
                fine,
                medium,
                coarse,
                very_coarse,
            },
        }
    }

    /// Whether the dimension falls in this bucket
    pub fn contains(&self, dimension: f64) -> bool {
        if self.min == MIN_DIMENSION {
            MIN_DIMENSION <= dimension && dimension <= self.max
        } else {
            self.min < dimension && dimension <= self.max
        }
    }

    /// Tolerance for the given grade, if specified
    pub fn tolerance(&self, grade: ToleranceGrade) -> Option<f64> {
        self.tolerances.get(grade)
    }

    /// Human-readable label, e.g. "[0.5, 3]" or "(3, 6]"
    pub fn label(&self) -> String {
        let open = if self.min == MIN_DIMENSION { '[' } else { '(' };
        format!("{}{}, {}]", open, self.min, self.max)
    }
}

/// Ordered, contiguous size ranges covering `[0.5, 4000]`
pub static TOLERANCE_TABLE: &[ToleranceRange] = &[
    ToleranceRange::new(0.5, 3.0, [Some(0.05), Some(0.1), Some(0.2), None]),
    ToleranceRange::new(3.0, 6.0, [Some(0.05), Some(0.1), Some(0.3), Some(0.5)]),
    ToleranceRange::new(6.0, 30.0, [Some(0.1), Some(0.2), Some(0.5), Some(1.0)]),
    ToleranceRange::new(30.0, 120.0, [Some(0.15), Some(0.3), Some(0.8), Some(1.5)]),
    ToleranceRange::new(120.0, 400.0, [Some(0.2), Some(0.5), Some(1.2), Some(2.5)]),
    ToleranceRange::new(400.0, 1000.0, [Some(0.3), Some(0.8), Some(2.0), Some(4.0)]),
    ToleranceRange::new(1000.0, 2000.0, [Some(0.5), Some(1.2), Some(3.0), Some(6.0)]),
    ToleranceRange::new(2000.0, 4000.0, [None, Some(2.0), Some(4.0), Some(8.0)]),
];

/// Find the size range containing a dimension
///
/// Returns `None` only for dimensions outside `[0.5, 4000]`.
pub fn find_range(dimension: f64) -> Option<&'static ToleranceRange> {
    let range = TOLERANCE_TABLE.iter().find(|r| r.contains(dimension));
    match range {
        Some(r) => tracing::trace!(dimension, range = %r.label(), "matched size range"),
        None => tracing::trace!(dimension, "no size range matched"),
    }
    range
}
