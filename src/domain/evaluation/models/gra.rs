//! Grey Relational Analysis - similarity of each sample to the ideal sample.

use tracing::debug;

use super::Model;
use crate::domain::evaluation::preprocessing::min_max_column;
use crate::domain::foundation::stats::{self, checked_div};
use crate::domain::foundation::{EvaluationError, ScoreSeries, Table};

/// Conventional distinguishing coefficient.
pub const DEFAULT_RHO: f64 = 0.5;

/// Grey relational analysis model. Suited to small samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraModel {
    rho: f64,
}

impl Default for GraModel {
    fn default() -> Self {
        Self { rho: DEFAULT_RHO }
    }
}

impl GraModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given distinguishing coefficient. Values outside (0, 1]
    /// are accepted but give ill-posed scores.
    pub fn with_rho(rho: f64) -> Self {
        Self { rho }
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }
}

impl Model for GraModel {
    fn name(&self) -> &'static str {
        "gra"
    }

    /// Scores each row by its mean grey relational coefficient.
    ///
    /// # Algorithm
    /// 1. Min-max normalize; the reference sequence is the column max
    /// 2. `Δ = |z - reference|`, with global `Δmin` and `Δmax`
    /// 3. `ξ = (Δmin + ρ Δmax) / (Δ + ρ Δmax)`
    /// 4. score = row mean of `ξ`
    ///
    /// # Edge Cases
    /// - Constant column: `DegenerateInput` from min-max
    fn fit(&self, table: &Table) -> Result<ScoreSeries, EvaluationError> {
        table.require_non_empty("GRA")?;

        let deviations = table
            .iter_columns()
            .map(|(name, column)| {
                let z = min_max_column(name, column)?;
                let reference = stats::max(&z);
                Ok(z.iter().map(|v| (v - reference).abs()).collect::<Vec<f64>>())
            })
            .collect::<Result<Vec<_>, EvaluationError>>()?;

        let a_min = deviations
            .iter()
            .map(|c| stats::min(c))
            .fold(f64::INFINITY, f64::min);
        let a_max = deviations
            .iter()
            .map(|c| stats::max(c))
            .fold(f64::NEG_INFINITY, f64::max);
        let numerator = a_min + self.rho * a_max;
        let column_count = table.column_count() as f64;

        let scores = (0..table.row_count())
            .map(|i| {
                let mut total = 0.0;
                for column in &deviations {
                    total += checked_div(
                        numerator,
                        column[i] + self.rho * a_max,
                        "grey relational coefficient",
                        || format!("zero denominator with rho = {}", self.rho),
                    )?;
                }
                Ok(total / column_count)
            })
            .collect::<Result<Vec<f64>, EvaluationError>>()?;

        debug!(rows = scores.len(), rho = self.rho, "GRA scores computed");
        ScoreSeries::new(table.index().to_vec(), scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::preprocessing::{NormalizeMethod, Preprocessor};

    fn sample_table() -> Table {
        Table::builder()
            .index(vec!["CityA", "CityB", "CityC", "CityD", "CityE"])
            .column("GDP", vec![100.0, 80.0, 120.0, 90.0, 110.0])
            .column("Pollution", vec![30.0, 50.0, 20.0, 40.0, 10.0])
            .column("Temp", vec![25.0, 10.0, 35.0, 20.0, 28.0])
            .build()
            .unwrap()
    }

    #[test]
    fn scores_lie_in_half_open_unit_interval() {
        let norm = Preprocessor::normalize(&sample_table(), NormalizeMethod::MinMax).unwrap();
        let scores = GraModel::new().fit(&norm).unwrap();

        assert!(scores.min().unwrap() > 0.0);
        assert!(scores.max().unwrap() <= 1.0);
    }

    #[test]
    fn ideal_row_scores_one() {
        let table = Table::builder()
            .index(vec!["ideal", "other"])
            .column("A", vec![5.0, 1.0])
            .column("B", vec![9.0, 3.0])
            .build()
            .unwrap();
        let scores = GraModel::new().fit(&table).unwrap();

        assert!((scores.get("ideal").unwrap() - 1.0).abs() < 1e-12);
        // Δ = 1 everywhere: (0 + 0.5) / (1 + 0.5)
        assert!((scores.get("other").unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn rho_changes_discrimination() {
        let table = Table::builder()
            .index(vec!["ideal", "other"])
            .column("A", vec![5.0, 1.0])
            .build()
            .unwrap();
        let scores = GraModel::with_rho(1.0).fit(&table).unwrap();
        // (0 + 1) / (1 + 1)
        assert!((scores.get("other").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_rho_is_degenerate() {
        let table = Table::builder()
            .column("A", vec![5.0, 1.0])
            .build()
            .unwrap();
        let result = GraModel::with_rho(0.0).fit(&table);
        assert!(matches!(result, Err(EvaluationError::DegenerateInput { .. })));
    }

    #[test]
    fn constant_column_is_degenerate() {
        let table = Table::builder()
            .column("A", vec![1.0, 1.0])
            .build()
            .unwrap();
        let result = GraModel::new().fit(&table);
        assert!(matches!(result, Err(EvaluationError::DegenerateInput { .. })));
    }
}
