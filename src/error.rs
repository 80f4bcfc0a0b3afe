//! Custom error types for the bakery quote calculator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for quote calculator operations
#[derive(Error, Debug)]
pub enum PadocaError {
    /// The supplied date range ends before it starts
    #[error("Invalid date range: end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// After weekend and manual exclusions no billable day remains
    #[error("No billable days remain in the selected period after exclusions")]
    EmptyCalendar,

    /// A selection references an item absent from the catalog
    #[error("Unknown catalog item: {name}")]
    UnknownItem { name: String },

    /// Validation errors for user-supplied data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl PadocaError {
    /// Create an "unknown item" error
    pub fn unknown_item(name: impl Into<String>) -> Self {
        Self::UnknownItem { name: name.into() }
    }

    /// Check if this is a blocking user-input condition (bad range, empty
    /// calendar, bad quantity) rather than a programming-defect signal
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::EmptyCalendar | Self::Validation(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PadocaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PadocaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for quote calculator operations
pub type PadocaResult<T> = Result<T, PadocaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PadocaError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_range_display() {
        let err = PadocaError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: end date 2025-03-08 precedes start date 2025-03-10"
        );
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_unknown_item_error() {
        let err = PadocaError::unknown_item("Croissant");
        assert_eq!(err.to_string(), "Unknown catalog item: Croissant");
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PadocaError = io_err.into();
        assert!(matches!(err, PadocaError::Io(_)));
    }
}
