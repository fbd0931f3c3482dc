//! Structured error handling for calculator execution and registry
//! operations.
//!
//! Validation failure is part of the function signature: `calculate` returns
//! `Result<Outputs, CalcError>` rather than raising, and the `Validation`
//! variant carries every violation found in one pass.

use thiserror::Error;

/// Error type covering all fincalc core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// One or more input fields violated the calculator's validation rules.
    /// The rendered message contains every violation, joined with "; ".
    #[error("validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    /// A required input field was absent.
    #[error("required field '{field}' is missing")]
    MissingField { field: String },

    /// An input field was present with an unexpected type.
    #[error("field '{field}' expected {expected}, got {actual}")]
    InvalidFieldType { field: String, expected: &'static str, actual: String },

    /// The formula could not produce a finite result from otherwise valid
    /// inputs (e.g. a degenerate denominator).
    #[error("domain error: {message}")]
    Domain { message: String },

    /// Lookup of an id the registry does not contain.
    #[error("calculator '{id}' not found")]
    UnknownCalculator { id: String },

    /// Attempt to register a second calculator under an existing id.
    #[error("calculator '{id}' is already registered")]
    DuplicateCalculator { id: String },
}

impl CalcError {
    /// Create a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    /// Create a type-mismatch error.
    pub fn invalid_field_type(
        field: impl Into<String>,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldType { field: field.into(), expected, actual: actual.into() }
    }

    /// Create a domain error.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain { message: message.into() }
    }

    /// Error category for logging and metrics.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::MissingField { .. } | Self::InvalidFieldType { .. } => "input",
            Self::Domain { .. } => "domain",
            Self::UnknownCalculator { .. } | Self::DuplicateCalculator { .. } => "registry",
        }
    }
}

/// Convenient result alias used throughout the fincalc crates.
pub type CalcResult<T> = Result<T, CalcError>;
