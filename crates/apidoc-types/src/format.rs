//! TOC document formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TocError;
use crate::toc::Toc;

/// On-disk encoding of a TOC document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TocFormat {
    #[default]
    Json,
    Toml,
}

impl TocFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, TocError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| TocError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
            .map_err(|_| TocError::UnsupportedFormat(path.display().to_string()))
    }

    /// Decode a document.
    pub fn parse(&self, content: &str) -> Result<Toc, TocError> {
        match self {
            TocFormat::Json => Ok(serde_json::from_str(content)?),
            TocFormat::Toml => Ok(toml::from_str(content)?),
        }
    }

    /// Encode a document. JSON is pretty-printed.
    pub fn render(&self, toc: &Toc) -> Result<String, TocError> {
        match self {
            TocFormat::Json => Ok(toc.to_json_string()?),
            TocFormat::Toml => Ok(toml::to_string_pretty(toc)?),
        }
    }
}

impl FromStr for TocFormat {
    type Err = TocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(TocFormat::Json),
            "toml" => Ok(TocFormat::Toml),
            other => Err(TocError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for TocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocFormat::Json => write!(f, "json"),
            TocFormat::Toml => write!(f, "toml"),
        }
    }
}
