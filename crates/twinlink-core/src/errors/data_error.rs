//! Tabular sample errors.

use super::error_code::{self, TwinlinkErrorCode};

/// Errors raised when building or reading a [`crate::SampleTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("missing column: {name}")]
    MissingColumn { name: String },

    #[error("duplicate column: {name}")]
    DuplicateColumn { name: String },

    #[error("column {name} has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("column {name} row {row} holds {value}, expected 0 or 1")]
    NonBinaryValue { name: String, row: usize, value: u8 },
}

impl TwinlinkErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_ERROR
    }
}
