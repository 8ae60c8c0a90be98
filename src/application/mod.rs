//! Application layer - Facade over the evaluation domain.
//!
//! Resolves method names to models, applies configured defaults, and turns
//! scores into ranked results.

mod evaluator;

pub use evaluator::{quick_evaluate, Evaluator, Method};
