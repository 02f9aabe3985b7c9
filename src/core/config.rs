//! User configuration
//!
//! Loaded from a YAML file:
//! 1. `--config <path>` on the command line
//! 2. `GENTOL_CONFIG` environment variable
//! 3. `config.yaml` in the platform config directory (e.g. `~/.config/gentol/`)
//!
//! A missing file at the platform location is not an error; defaults apply.

use directories::ProjectDirs;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::grade::ToleranceGrade;
use crate::core::rounding::DEFAULT_DECIMALS;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "GENTOL_CONFIG";

/// Upper bound on display precision
pub const MAX_DECIMALS: u32 = 10;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    #[diagnostic(code(gentol::config::not_found))]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}", .path.display())]
    #[diagnostic(code(gentol::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {message}", .path.display())]
    #[diagnostic(code(gentol::config::parse))]
    Parse { path: PathBuf, message: String },

    #[error("decimals must be at most 10, got {0}")]
    #[diagnostic(
        code(gentol::config::decimals),
        help("tolerances in the table have at most two decimal places; 3 is the usual choice")
    )]
    InvalidDecimals(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grade used when none is given on the command line
    pub default_grade: ToleranceGrade,

    /// Decimal places shown for tolerances and limits
    pub decimals: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_grade: ToleranceGrade::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Config {
    /// Load configuration, honoring an explicit path before the environment
    /// and the platform default location
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Self::load_file(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Platform config file location, if a home directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gentol").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load and validate a specific config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            grade = %config.default_grade,
            decimals = config.decimals,
            "loaded config"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        // A file with only comments is a null document, not a mapping
        let config = serde_yml::from_str::<Option<Config>>(content)
            .map_err(|e| ConfigError::Parse {
                path: PathBuf::new(),
                message: e.to_string(),
            })?
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(self.decimals));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_grade, ToleranceGrade::Medium);
        assert_eq!(config.decimals, 3);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = Config::from_yaml("default_grade: fine\n").unwrap();
        assert_eq!(config.default_grade, ToleranceGrade::Fine);
        assert_eq!(config.decimals, 3);
    }

    #[test]
    fn test_from_yaml_letter_grade() {
        let config = Config::from_yaml("default_grade: c\ndecimals: 2\n").unwrap();
        assert_eq!(config.default_grade, ToleranceGrade::Coarse);
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_from_yaml_comments_only() {
        let config = Config::from_yaml("# default_grade: fine\n# decimals: 3\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_yaml_rejects_bad_grade() {
        let err = Config::from_yaml("default_grade: ultra\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_large_decimals() {
        let err = Config::from_yaml("decimals: 11\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDecimals(11)));
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "default_grade: very-coarse\ndecimals: 1\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.default_grade, ToleranceGrade::VeryCoarse);
        assert_eq!(config.decimals, 1);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.yaml");
        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.yaml");
        fs::write(&path, "decimals: [not, a, number]\n").unwrap();

        match Config::load_file(&path).unwrap_err() {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
