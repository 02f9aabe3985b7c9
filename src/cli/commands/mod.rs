//! CLI command implementations

pub mod batch;
pub mod calc;
pub mod table;
