//! Indicator weight vector.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::EvaluationError;

/// Tolerance used when checking that weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights keyed by indicator name, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightsRecord", into = "WeightsRecord")]
pub struct Weights {
    names: Vec<String>,
    values: Vec<f64>,
}

impl Weights {
    /// Builds a weight vector, rescaling values so they sum to 1.
    ///
    /// # Errors
    /// - `ShapeMismatch` if names and values differ in length
    /// - `InvalidParameter` for a repeated name, or a negative or non-finite value
    /// - `DegenerateInput` if the values sum to zero
    pub fn new(names: Vec<impl Into<String>>, values: Vec<f64>) -> Result<Self, EvaluationError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != values.len() {
            return Err(EvaluationError::shape_mismatch(
                "weights",
                names.len(),
                values.len(),
            ));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(EvaluationError::invalid_parameter(
                dup.clone(),
                format!("duplicate weight for '{}'", dup),
            ));
        }
        if let Some(bad) = values.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(EvaluationError::invalid_parameter(
                names[bad].clone(),
                format!("weight must be a finite non-negative number, got {}", values[bad]),
            ));
        }

        let total: f64 = values.iter().sum();
        if total == 0.0 {
            return Err(EvaluationError::degenerate(
                "weight normalization",
                "weights sum to zero",
            ));
        }

        Ok(Self {
            names,
            values: values.into_iter().map(|v| v / total).collect(),
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Weight of the named indicator.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|pos| self.values[pos])
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Iterates `(name, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .zip(&self.values)
            .map(|(n, v)| (n.as_str(), *v))
    }

    /// Returns weights in the order of `columns`.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the counts differ
    /// - `UnknownColumn` if a column has no weight
    pub fn aligned_to(&self, columns: &[String]) -> Result<Vec<f64>, EvaluationError> {
        if columns.len() != self.len() {
            return Err(EvaluationError::shape_mismatch(
                "weights",
                columns.len(),
                self.len(),
            ));
        }
        columns
            .iter()
            .map(|c| {
                self.get(c)
                    .ok_or_else(|| EvaluationError::UnknownColumn(c.clone()))
            })
            .collect()
    }
}

/// Serialized form of a weight vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeightsRecord {
    names: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<WeightsRecord> for Weights {
    type Error = EvaluationError;

    fn try_from(record: WeightsRecord) -> Result<Self, Self::Error> {
        Weights::new(record.names, record.values)
    }
}

impl From<Weights> for WeightsRecord {
    fn from(weights: Weights) -> Self {
        WeightsRecord {
            names: weights.names,
            values: weights.values,
        }
    }
}
