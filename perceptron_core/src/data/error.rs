//! Error types for dataset loading and vector operations
//!
//! Loading a delimited image file can fail in several distinct ways, and the
//! engine must refuse to train on a partially parsed dataset. Every variant
//! carries enough context to point at the offending record.

use std::fmt;

/// Result type alias for dataset and vector operations
pub type DataResult<T> = Result<T, DataError>;

/// Error type for dataset and vector operations
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// Two vectors of different dimension were combined
    DimensionMismatch { expected: usize, got: usize },

    /// A record had the wrong number of delimited fields
    WrongFieldCount {
        line_number: usize,
        expected: usize,
        found: usize,
    },

    /// A record field could not be parsed as a number
    MalformedField {
        line_number: usize,
        field: String,
        reason: String,
    },

    /// A dataset contained no records
    EmptySet { context: String },

    /// Invalid generation or loading parameter
    InvalidParameter { parameter: String, reason: String },

    /// Underlying I/O failure while reading a dataset file
    Io { path: String, reason: String },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "Dimension mismatch: expected {} components, got {}",
                    expected, got
                )
            }
            DataError::WrongFieldCount {
                line_number,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Record on line {} has {} fields, expected {}",
                    line_number, found, expected
                )
            }
            DataError::MalformedField {
                line_number,
                field,
                reason,
            } => {
                write!(
                    f,
                    "Record on line {} has malformed field '{}': {}",
                    line_number, field, reason
                )
            }
            DataError::EmptySet { context } => {
                write!(f, "Empty dataset: {}", context)
            }
            DataError::InvalidParameter { parameter, reason } => {
                write!(f, "Invalid parameter '{}': {}", parameter, reason)
            }
            DataError::Io { path, reason } => {
                write!(f, "I/O error while reading '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for DataError {}

// Convenience constructors for common error patterns
impl DataError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        DataError::DimensionMismatch { expected, got }
    }

    /// Create a wrong field count error
    pub fn wrong_field_count(line_number: usize, expected: usize, found: usize) -> Self {
        DataError::WrongFieldCount {
            line_number,
            expected,
            found,
        }
    }

    /// Create a malformed field error
    pub fn malformed_field(
        line_number: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DataError::MalformedField {
            line_number,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an empty dataset error
    pub fn empty_set(context: impl Into<String>) -> Self {
        DataError::EmptySet {
            context: context.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        DataError::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
