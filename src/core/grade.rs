//! Tolerance grades - the four precision classes for linear dimensions

use serde::{Deserialize, Serialize};

/// Precision class selecting how loose the permissible deviation is
///
/// The standard designates the classes with a single letter:
/// - **f**: fine
/// - **m**: medium (the usual default on drawings)
/// - **c**: coarse
/// - **v**: very coarse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToleranceGrade {
    #[serde(alias = "f")]
    Fine,
    #[serde(alias = "m")]
    #[default]
    Medium,
    #[serde(alias = "c")]
    Coarse,
    #[serde(alias = "v", alias = "very_coarse")]
    VeryCoarse,
}

impl ToleranceGrade {
    /// All grades, finest first
    pub const ALL: [ToleranceGrade; 4] = [
        ToleranceGrade::Fine,
        ToleranceGrade::Medium,
        ToleranceGrade::Coarse,
        ToleranceGrade::VeryCoarse,
    ];

    /// One-letter designation used on drawings (e.g. "ISO 2768-m")
    pub fn letter(&self) -> char {
        match self {
            ToleranceGrade::Fine => 'f',
            ToleranceGrade::Medium => 'm',
            ToleranceGrade::Coarse => 'c',
            ToleranceGrade::VeryCoarse => 'v',
        }
    }
}

impl std::fmt::Display for ToleranceGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToleranceGrade::Fine => write!(f, "fine"),
            ToleranceGrade::Medium => write!(f, "medium"),
            ToleranceGrade::Coarse => write!(f, "coarse"),
            ToleranceGrade::VeryCoarse => write!(f, "very-coarse"),
        }
    }
}

impl std::str::FromStr for ToleranceGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fine" | "f" => Ok(ToleranceGrade::Fine),
            "medium" | "m" => Ok(ToleranceGrade::Medium),
            "coarse" | "c" => Ok(ToleranceGrade::Coarse),
            "very-coarse" | "very_coarse" | "verycoarse" | "v" => Ok(ToleranceGrade::VeryCoarse),
            _ => Err(format!(
                "Invalid tolerance grade: '{}'. Use 'fine', 'medium', 'coarse' or 'very-coarse'",
                s
            )),
        }
    }
}
