//! Evaluation Module - Pure domain services for multi-criteria evaluation.
//!
//! # Components
//!
//! - `Preprocessor` - Forward conversion of indicators and table normalization
//! - `Weighting` - Entropy, CRITIC, and AHP weights
//! - `models` - TOPSIS, grey relational analysis, coupling coordination
//! - `RankedResult` - Descending scores with 1-based ranks
//!
//! Like the rest of the domain layer, everything here is stateless: functions
//! take a table and return newly allocated results.

pub mod models;
mod preprocessing;
mod ranking;
mod weighting;

pub use models::{
    BaseModel, CouplingCoordinationModel, EvaluationModel, GraModel, Model, TopsisModel,
    DEFAULT_RHO,
};
pub use preprocessing::{NormalizeMethod, PositiveKind, Preprocessor};
pub use ranking::{RankedResult, RankedRow, RANKED_COLUMNS};
pub use weighting::{
    AhpAnalysis, PowerIteration, Weighting, AHP_CONSISTENCY_THRESHOLD, AHP_RANDOM_INDEX,
    ENTROPY_EPSILON,
};
