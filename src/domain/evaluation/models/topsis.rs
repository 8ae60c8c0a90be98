//! TOPSIS - ranking by relative closeness to the ideal solution.

use tracing::debug;

use super::Model;
use crate::domain::evaluation::weighting::{Weighting, ENTROPY_EPSILON};
use crate::domain::foundation::stats::{self, checked_div};
use crate::domain::foundation::{EvaluationError, ScoreSeries, Table, Weights};

/// Classic TOPSIS model.
///
/// Without explicit weights, entropy weights are derived from the table on
/// every `fit` call.
#[derive(Debug, Clone, PartialEq)]
pub struct TopsisModel {
    weights: Option<Weights>,
    entropy_epsilon: f64,
}

impl Default for TopsisModel {
    fn default() -> Self {
        Self {
            weights: None,
            entropy_epsilon: ENTROPY_EPSILON,
        }
    }
}

impl TopsisModel {
    /// Creates a model that derives entropy weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with caller-supplied weights.
    pub fn with_weights(weights: Weights) -> Self {
        Self {
            weights: Some(weights),
            ..Self::default()
        }
    }

    /// Sets the epsilon used when entropy weights are derived.
    pub fn entropy_epsilon(mut self, epsilon: f64) -> Self {
        self.entropy_epsilon = epsilon;
        self
    }

    pub fn weights(&self) -> Option<&Weights> {
        self.weights.as_ref()
    }
}

impl Model for TopsisModel {
    fn name(&self) -> &'static str {
        "topsis"
    }

    /// Scores rows by `d_worst / (d_best + d_worst)`.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm
    /// 2. Multiply each column by its weight
    /// 3. Ideal best/worst = column max/min of the weighted table
    /// 4. Euclidean distance of each row to both ideals
    ///
    /// # Edge Cases
    /// - All-zero column: `DegenerateInput`
    /// - Row coincident with both ideals (e.g. a single-row table): `DegenerateInput`
    /// - Supplied weights not matching the columns: `ShapeMismatch` / `UnknownColumn`
    fn fit(&self, table: &Table) -> Result<ScoreSeries, EvaluationError> {
        table.require_non_empty("TOPSIS")?;

        let weights = match &self.weights {
            Some(w) => w.aligned_to(table.columns())?,
            None => Weighting::entropy_weight_with_epsilon(table, self.entropy_epsilon)?
                .aligned_to(table.columns())?,
        };

        let weighted = table
            .iter_columns()
            .zip(&weights)
            .map(|((name, column), w)| {
                let norm = stats::l2_norm(column);
                column
                    .iter()
                    .map(|v| {
                        checked_div(*v, norm, "TOPSIS vector normalization", || {
                            format!("column '{}' is all zeros", name)
                        })
                        .map(|x| x * w)
                    })
                    .collect::<Result<Vec<f64>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ideal_best: Vec<f64> = weighted.iter().map(|c| stats::max(c)).collect();
        let ideal_worst: Vec<f64> = weighted.iter().map(|c| stats::min(c)).collect();

        let scores = (0..table.row_count())
            .map(|i| {
                let (mut sq_best, mut sq_worst) = (0.0, 0.0);
                for (j, column) in weighted.iter().enumerate() {
                    sq_best += (column[i] - ideal_best[j]).powi(2);
                    sq_worst += (column[i] - ideal_worst[j]).powi(2);
                }
                let d_best = sq_best.sqrt();
                let d_worst = sq_worst.sqrt();
                checked_div(d_worst, d_best + d_worst, "TOPSIS closeness", || {
                    format!(
                        "row '{}' coincides with both ideal solutions",
                        table.index()[i]
                    )
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        debug!(rows = scores.len(), "TOPSIS scores computed");
        ScoreSeries::new(table.index().to_vec(), scores)
    }
}
