//! Effective settings for a command run
//!
//! Command-line options (and their environment variables) take precedence
//! over the config file, which takes precedence over built-in defaults.

use miette::Result;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::MAX_DECIMALS;
use crate::core::{Config, ConfigError, ToleranceGrade};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub output: OutputFormat,
    pub grade: ToleranceGrade,
    pub decimals: u32,
}

impl Settings {
    pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<Self> {
        let decimals = global.decimals.unwrap_or(config.decimals);
        if decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(decimals).into());
        }

        Ok(Self {
            output: global.output,
            grade: global.grade.unwrap_or(config.default_grade),
            decimals,
        })
    }
}
