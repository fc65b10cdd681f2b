//! Error types for the detailing payroll engine.
//!
//! The salary calculator itself never fails; these errors come from the
//! layers around it: loading configuration, resolving the settings that
//! apply on a date and validating caller-supplied input.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use detailing_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shop.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shop.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate settings are in effect on the given date.
    #[error("No rate settings in effect on {date}")]
    SettingsNotFound {
        /// The date for which settings were requested.
        date: NaiveDate,
    },

    /// A rate settings value is outside its allowed range.
    #[error("Invalid rate setting '{field}': {message}")]
    InvalidSettings {
        /// The offending settings field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A service record carries a value the engine cannot compute with.
    #[error("Invalid service record '{record_id}': {message}")]
    InvalidRecord {
        /// The offending record's id.
        record_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A reporting period is malformed.
    #[error("Invalid report period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
