use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visibility of an attached shadow root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowMode {
    /// Internals reachable from outside through `element.shadowRoot`
    #[default]
    Open,
    /// Internals hidden from outside scripts
    Closed,
}

impl ShadowMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ShadowMode::Open => "open",
            ShadowMode::Closed => "closed",
        }
    }
}

impl fmt::Display for ShadowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shadow mode {0:?}, expected \"open\" or \"closed\"")]
pub struct ParseModeError(String);

impl FromStr for ShadowMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(ShadowMode::Open),
            "closed" => Ok(ShadowMode::Closed),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
