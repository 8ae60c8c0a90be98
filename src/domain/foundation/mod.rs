//! Foundation module - Shared domain primitives.
//!
//! Contains the table, score, and weight value types plus the error
//! vocabulary used across the evaluation domain.

mod errors;
mod series;
pub mod stats;
mod table;
mod weights;

pub use errors::{ErrorCode, EvaluationError};
pub use series::ScoreSeries;
pub use table::{ColumnRecord, Table, TableBuilder, TableRecord};
pub use weights::{Weights, WEIGHT_SUM_TOLERANCE};
