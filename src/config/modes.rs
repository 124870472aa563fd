//! Link resolution mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How link path segments are matched against the rename records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkResolution {
    /// Replace any segment equal to a renamed base name, wherever it lives (default).
    #[default]
    Name,
    /// Resolve segments against the linking document's directory and only
    /// replace entries that were renamed at that exact location.
    Path,
}

impl fmt::Display for LinkResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkResolution::Name => write!(f, "name"),
            LinkResolution::Path => write!(f, "path"),
        }
    }
}

impl FromStr for LinkResolution {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(LinkResolution::Name),
            "path" => Ok(LinkResolution::Path),
            _ => Err(format!("Unknown link resolution mode: {}", s)),
        }
    }
}
