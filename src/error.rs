//! Error types for the Site Labor Ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The aggregation engine raises [`EngineError::InvalidDate`] for a bad
//! window and [`EngineError::AmountOverflow`] when a money total leaves the
//! range of `Decimal`; stale employee or task references are excluded from
//! reports instead of failing them.

use thiserror::Error;

/// The main error type for the Site Labor Ledger.
///
/// # Example
///
/// ```
/// use site_ledger::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// A date crossing the engine boundary was not a canonical `yyyy-MM-dd` date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        message: String,
    },

    /// No project with the given identifier exists in the dataset.
    #[error("Project not found: {project_id}")]
    ProjectNotFound {
        /// The identifier that was looked up.
        project_id: String,
    },

    /// A record in the dataset violated a field constraint.
    #[error("Invalid {entity} '{id}': {message}")]
    InvalidRecord {
        /// The kind of record (e.g. "task").
        entity: String,
        /// The identifier of the offending record.
        id: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// A money total exceeded the range of `Decimal`.
    #[error("Amount overflow in {context}")]
    AmountOverflow {
        /// The total that overflowed.
        context: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::AmountOverflow`] for the named total.
    pub fn amount_overflow(context: impl Into<String>) -> Self {
        Self::AmountOverflow {
            context: context.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
