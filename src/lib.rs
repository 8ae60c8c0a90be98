//! MCDA Kit - Multi-criteria decision analysis scoring.
//!
//! This crate forward-converts and normalizes indicator tables, derives
//! indicator weights (entropy, CRITIC, AHP), and ranks alternatives with
//! TOPSIS, grey relational analysis, or coupling coordination.
//!
//! # Example
//!
//! ```
//! use mcda_kit::domain::foundation::Table;
//! use mcda_kit::quick_evaluate;
//!
//! let table = Table::builder()
//!     .index(vec!["A", "B", "C"])
//!     .column("GDP", vec![100.0, 80.0, 120.0])
//!     .column("Growth", vec![2.0, 3.5, 1.0])
//!     .build()
//!     .unwrap();
//!
//! let ranked = quick_evaluate(&table, "topsis").unwrap();
//! assert_eq!(ranked.top().unwrap().rank, 1);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;

pub use application::{quick_evaluate, Evaluator, Method};
