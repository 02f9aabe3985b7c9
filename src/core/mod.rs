//! Core module - tolerance table, resolution and configuration

pub mod config;
pub mod grade;
pub mod resolver;
pub mod rounding;
pub mod table;

pub use config::{Config, ConfigError};
pub use grade::ToleranceGrade;
pub use resolver::{
    compute_limits, resolve, resolve_tolerance, validate_dimension, DimensionError, Limits,
    Resolution, ResolutionResult,
};
pub use rounding::{format_value, round_display, DEFAULT_DECIMALS};
pub use table::{
    find_range, GradeTolerances, ToleranceRange, MAX_DIMENSION, MIN_DIMENSION, TOLERANCE_TABLE,
};
