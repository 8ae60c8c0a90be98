//! Domain layer containing the evaluation logic and value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (table, scores, weights, errors)
//! - `evaluation` - Preprocessing, weighting, scoring models, and ranking

pub mod evaluation;
pub mod foundation;
