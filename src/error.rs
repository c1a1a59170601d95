//! Error types for the workforce decision engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all fault conditions the engine can surface. Domain-expected outcomes
//! (denials, review flags, low-confidence answers) are never errors; they are
//! encoded in the result types instead.

use thiserror::Error;

/// The main error type for the workforce decision engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle faults consistently at the boundary.
///
/// # Example
///
/// ```
/// use workforce_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// A loaded policy contained values outside their allowed ranges.
    #[error("Invalid policy: {message}")]
    InvalidPolicy {
        /// A description of the policy violation.
        message: String,
    },

    /// A time-off request was invalid or contained inconsistent data.
    #[error("Invalid request '{request_id}': {message}")]
    InvalidRequest {
        /// The ID of the invalid request.
        request_id: String,
        /// A description of what made the request invalid.
        message: String,
    },

    /// A worker record was invalid or contained inconsistent data.
    #[error("Invalid worker '{worker_id}': {message}")]
    InvalidWorker {
        /// The ID of the invalid worker.
        worker_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// No time report was supplied for a worker that required one.
    #[error("Missing time report for worker '{worker_id}'")]
    MissingTimeReport {
        /// The worker without a time report.
        worker_id: String,
    },

    /// A time report contained inconsistent figures.
    #[error("Invalid time report for worker '{worker_id}': {message}")]
    InvalidTimeReport {
        /// The worker the report belongs to.
        worker_id: String,
        /// A description of what made the report invalid.
        message: String,
    },

    /// Result rows could not be serialized to the export format.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
