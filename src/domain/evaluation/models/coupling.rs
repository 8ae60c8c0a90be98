//! Coupling-coordination degree across sub-system scores.

use tracing::debug;

use super::Model;
use crate::domain::foundation::stats::{checked_div, ensure_finite};
use crate::domain::foundation::{EvaluationError, ScoreSeries, Table};

/// Coupling-coordination model.
///
/// Each column is a sub-system score, assumed already in `[0, 1]`.
/// Sub-systems are weighted equally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CouplingCoordinationModel;

impl Model for CouplingCoordinationModel {
    fn name(&self) -> &'static str {
        "coupling"
    }

    /// Scores each row with `D = sqrt(C * T)`.
    ///
    /// - `C = (Π x / mean(x)^n)^(1/n)`: coupling degree, 1 when balanced
    /// - `T = mean(x)`: composite development index
    ///
    /// A single zero sub-system zeroes the product and therefore the row's
    /// score, whatever the other sub-systems are.
    ///
    /// # Edge Cases
    /// - Row mean of zero: `DegenerateInput`
    /// - Negative row mean: `DegenerateInput`
    /// - Negative product (negative inputs): `DegenerateInput`
    fn fit(&self, table: &Table) -> Result<ScoreSeries, EvaluationError> {
        table.require_non_empty("coupling coordination")?;
        let n = table.column_count() as f64;

        let scores = (0..table.row_count())
            .map(|i| {
                let row = table.row(i);
                let id = &table.index()[i];
                let product: f64 = row.iter().product();
                let mean = row.iter().sum::<f64>() / n;
                if mean < 0.0 {
                    return Err(EvaluationError::degenerate(
                        "coupling degree",
                        format!("row '{}' has a negative mean {}", id, mean),
                    ));
                }

                let ratio = checked_div(product, mean.powf(n), "coupling degree", || {
                    format!("row '{}' has a zero mean", id)
                })?;
                let coupling = ensure_finite(ratio.powf(1.0 / n), "coupling degree", || {
                    format!("row '{}' has a negative product", id)
                })?;

                ensure_finite((coupling * mean).sqrt(), "coupling coordination", || {
                    format!("row '{}' has no real coordination degree", id)
                })
            })
            .collect::<Result<Vec<f64>, EvaluationError>>()?;

        debug!(rows = scores.len(), subsystems = n, "Coupling coordination computed");
        ScoreSeries::new(table.index().to_vec(), scores)
    }
}
