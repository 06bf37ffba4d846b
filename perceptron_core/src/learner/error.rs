//! Error types for classifier and evaluation operations

use std::fmt;

use crate::data::DataError;

/// Result type alias for classifier operations
pub type LearnerResult<T> = Result<T, LearnerError>;

/// Error type for classifier and evaluation operations
#[derive(Debug, Clone, PartialEq)]
pub enum LearnerError {
    /// Underlying vector or dataset error
    Data(DataError),

    /// An evaluation was requested over zero samples
    EmptySet { operation: String },

    /// A sample carried a label outside the classifier's class range
    LabelOutOfRange { label: usize, class_count: usize },
}

impl fmt::Display for LearnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnerError::Data(err) => write!(f, "Data error: {}", err),
            LearnerError::EmptySet { operation } => {
                write!(f, "Cannot compute {} over an empty sample set", operation)
            }
            LearnerError::LabelOutOfRange { label, class_count } => {
                write!(
                    f,
                    "Label {} is out of range for a {}-class classifier",
                    label, class_count
                )
            }
        }
    }
}

impl std::error::Error for LearnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LearnerError::Data(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DataError> for LearnerError {
    fn from(err: DataError) -> Self {
        LearnerError::Data(err)
    }
}

impl LearnerError {
    /// Create an empty set error
    pub fn empty_set(operation: impl Into<String>) -> Self {
        LearnerError::EmptySet {
            operation: operation.into(),
        }
    }

    /// Create a label out of range error
    pub fn label_out_of_range(label: usize, class_count: usize) -> Self {
        LearnerError::LabelOutOfRange { label, class_count }
    }
}
