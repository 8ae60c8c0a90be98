//! Error types for the evaluation domain.

use std::fmt;
use thiserror::Error;

/// Errors raised by preprocessing, weighting, models, and ranking.
///
/// Every computation is all-or-nothing: an error means no partial result
/// was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Model '{model}' does not implement fit")]
    NotImplemented { model: String },

    #[error("Degenerate input in {operation}: {reason}")]
    DegenerateInput { operation: String, reason: String },

    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid table: {reason}")]
    InvalidTable { reason: String },

    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("Unknown indicator '{0}'")]
    UnknownColumn(String),
}

impl EvaluationError {
    /// Creates a not-implemented error for the named model.
    pub fn not_implemented(model: impl Into<String>) -> Self {
        EvaluationError::NotImplemented {
            model: model.into(),
        }
    }

    /// Creates a degenerate input error.
    pub fn degenerate(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        EvaluationError::DegenerateInput {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Creates a shape mismatch error.
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        EvaluationError::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid table error.
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        EvaluationError::InvalidTable {
            reason: reason.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        EvaluationError::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::NotImplemented { .. } => ErrorCode::NotImplemented,
            EvaluationError::DegenerateInput { .. } => ErrorCode::DegenerateInput,
            EvaluationError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            EvaluationError::InvalidTable { .. } => ErrorCode::InvalidTable,
            EvaluationError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            EvaluationError::UnknownColumn(_) => ErrorCode::UnknownColumn,
        }
    }
}

/// Error codes organized by condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotImplemented,
    DegenerateInput,
    ShapeMismatch,
    InvalidTable,
    InvalidParameter,
    UnknownColumn,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
            ErrorCode::DegenerateInput => "DEGENERATE_INPUT",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::InvalidTable => "INVALID_TABLE",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::UnknownColumn => "UNKNOWN_COLUMN",
        };
        write!(f, "{}", s)
    }
}
