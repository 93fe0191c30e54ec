//! Model construction errors.

use super::error_code::{self, TwinlinkErrorCode};

/// Errors raised while building CPDs, graphs, and Bayesian models.
/// All of them are construction-time and fatal to the configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("structural mismatch: {details}")]
    StructuralMismatch { details: String },

    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("cycle detected in model graph: {path}")]
    CycleDetected { path: String },

    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },
}

impl ModelError {
    /// Shorthand for an out-of-range probability.
    pub fn out_of_range(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            reason: "must be a finite probability in [0, 1]".to_string(),
        }
    }

    /// Shorthand for a structural mismatch.
    pub fn mismatch(details: impl Into<String>) -> Self {
        Self::StructuralMismatch {
            details: details.into(),
        }
    }
}

impl TwinlinkErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::StructuralMismatch { .. } => error_code::STRUCTURAL_MISMATCH,
            Self::UnknownVariable { .. } => error_code::UNKNOWN_VARIABLE,
            Self::CycleDetected { .. } => error_code::CYCLE_DETECTED,
            Self::InvalidQuery { .. } => error_code::INVALID_QUERY,
        }
    }
}
