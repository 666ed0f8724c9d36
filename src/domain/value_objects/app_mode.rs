//! Application Mode Value Object
//!
//! The runtime mode decides which file-resolution strategy is used and
//! whether cyclic layout updates are reported.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Runtime mode of the storefront application
///
/// - `Default`: cached file resolution, quiet merge
/// - `Production`: same strategies as `Default`
/// - `Developer`: direct file resolution, cyclic updates are logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    #[default]
    Default,
    Production,
    Developer,
}

impl AppMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppMode::Default => "default",
            AppMode::Production => "production",
            AppMode::Developer => "developer",
        }
    }

    pub fn is_developer(&self) -> bool {
        matches!(self, AppMode::Developer)
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application mode '{0}' (expected default, production or developer)")]
pub struct UnknownModeError(pub String);

impl FromStr for AppMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(AppMode::Default),
            "production" => Ok(AppMode::Production),
            "developer" => Ok(AppMode::Developer),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}
