//! Typed CLI values: seasons and report output selection.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season identifier forwarded to the API as `seasons[]`.
///
/// Usually the year the season starts, but any non-blank text is accepted
/// and left for the API to judge.
///
/// # Examples
///
/// ```rust
/// use bdl_stats::Season;
///
/// let season: Season = " 2021 ".parse().unwrap();
/// assert_eq!(season.as_str(), "2021");
/// assert!("".parse::<Season>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    pub fn new(season: impl Into<String>) -> Self {
        Self(season.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatsError::InvalidSeason {
                value: s.to_string(),
            });
        }
        Ok(Self::new(trimmed))
    }
}

/// Where `teams-stats` sends its report.
///
/// Parsed from the raw `--output` text rather than validated by clap, so an
/// unknown selector reaches the command and can be handled there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSelector {
    Stdout,
    Csv,
    Json,
}

impl fmt::Display for OutputSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSelector::Stdout => write!(f, "stdout"),
            OutputSelector::Csv => write!(f, "csv"),
            OutputSelector::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputSelector {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stdout" => Ok(OutputSelector::Stdout),
            "csv" => Ok(OutputSelector::Csv),
            "json" => Ok(OutputSelector::Json),
            other => Err(StatsError::UnsupportedOutput {
                selector: other.to_string(),
            }),
        }
    }
}

/// Layout of the JSON report file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum JsonStyle {
    /// A single JSON array of team objects
    #[default]
    Array,
    /// Team objects each followed by a comma, as older consumers expect
    Concatenated,
}

impl fmt::Display for JsonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonStyle::Array => write!(f, "array"),
            JsonStyle::Concatenated => write!(f, "concatenated"),
        }
    }
}
