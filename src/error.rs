//! Error types for the balldontlie statistics CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid season: {value:?}")]
    InvalidSeason { value: String },

    #[error("Unsupported output target: {selector}")]
    UnsupportedOutput { selector: String },

    #[error("Invalid next page token: {value}")]
    InvalidPageToken { value: String },

    #[error("Malformed CSV report: {message}")]
    MalformedCsv { message: String },

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

/// Failure converting an imperial measurement to SI units.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("missing {component}")]
    MissingComponent { component: &'static str },

    #[error("invalid measurement: {value}")]
    InvalidMeasurement { value: f64 },
}
