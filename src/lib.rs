//! gentol: general tolerances for linear dimensions
//!
//! Looks up the permissible ± deviation for a nominal size and tolerance grade
//! (fine, medium, coarse, very coarse) and derives the upper and lower limits.

pub mod cli;
pub mod core;
