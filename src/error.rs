//! Error types for the Counter-Proposal Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading reference data
//! and resolving directory lookups. The calculation core itself is total
//! and reports missing preconditions through sentinels rather than errors.

use thiserror::Error;

/// The main error type for the Counter-Proposal Engine.
///
/// All fallible operations in the engine return this error type, making
/// it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use retention_engine::error::EngineError;
///
/// let error = EngineError::DatasetNotFound {
///     path: "/missing/employees.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Dataset file not found: /missing/employees.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A dataset file was not found at the specified path.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A dataset file could not be parsed.
    #[error("Failed to parse dataset file '{path}': {message}")]
    DatasetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee id was not found in the directory.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// No compensation range matches an employee's job attributes.
    #[error("No compensation range for '{job_title}' at level {level}")]
    RangeNotFound {
        /// The job title that was looked up.
        job_title: String,
        /// The job level that was looked up.
        level: String,
    },

    /// A competing offer was invalid or contained inconsistent data.
    #[error("Invalid competing offer: {message}")]
    InvalidOffer {
        /// A description of what made the offer invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
