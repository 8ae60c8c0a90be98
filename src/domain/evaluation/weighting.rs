//! Weighting - Objective (entropy, CRITIC) and subjective (AHP) indicator weights.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::preprocessing::min_max_column;
use crate::domain::foundation::stats::{self, checked_div};
use crate::domain::foundation::{EvaluationError, Table, Weights};

/// Offset added to min-max normalized values before taking logarithms.
pub const ENTROPY_EPSILON: f64 = 1e-9;

/// AHP judgments are acceptable when the consistency ratio is below this.
pub const AHP_CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Saaty's random consistency index for matrices of order 1 through 15.
pub const AHP_RANDOM_INDEX: &[f64] = &[
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Settings for the power iteration used to find the dominant eigenvector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerIteration {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-12,
        }
    }
}

/// Result of analyzing an AHP pairwise-comparison matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpAnalysis {
    /// Dominant eigenvector, normalized to sum to 1.
    pub weights: Vec<f64>,
    /// Dominant eigenvalue.
    pub lambda_max: f64,
    /// `(lambda_max - n) / (n - 1)`, zero for n <= 2.
    pub consistency_index: f64,
    /// `CI / RI(n)`. `None` when no random index is tabulated for n.
    pub consistency_ratio: Option<f64>,
}

impl AhpAnalysis {
    /// True when the consistency ratio is known and below the threshold.
    pub fn is_consistent(&self) -> bool {
        self.is_consistent_at(AHP_CONSISTENCY_THRESHOLD)
    }

    pub fn is_consistent_at(&self, threshold: f64) -> bool {
        self.consistency_ratio.map_or(false, |cr| cr < threshold)
    }
}

/// Weight derivation functions.
pub struct Weighting;

impl Weighting {
    /// Entropy weights with the default epsilon.
    pub fn entropy_weight(table: &Table) -> Result<Weights, EvaluationError> {
        Self::entropy_weight_with_epsilon(table, ENTROPY_EPSILON)
    }

    /// Entropy weights.
    ///
    /// # Algorithm
    /// 1. `z = min-max(x) + epsilon`
    /// 2. `p_ij = z_ij / Σ_i z_ij`
    /// 3. `e_j = -(1 / ln n) Σ_i p_ij ln p_ij`
    /// 4. `w_j = (1 - e_j) / Σ (1 - e)`
    ///
    /// # Edge Cases
    /// - Fewer than two rows: `DegenerateInput` (ln 1 = 0)
    /// - Constant column: `DegenerateInput` from min-max
    pub fn entropy_weight_with_epsilon(
        table: &Table,
        epsilon: f64,
    ) -> Result<Weights, EvaluationError> {
        table.require_non_empty("entropy weighting")?;
        let n = table.row_count();
        if n < 2 {
            return Err(EvaluationError::degenerate(
                "entropy weighting",
                "at least two rows are required",
            ));
        }
        let ln_n = (n as f64).ln();

        let divergence = table
            .iter_columns()
            .map(|(name, column)| {
                let z: Vec<f64> = min_max_column(name, column)?
                    .into_iter()
                    .map(|v| v + epsilon)
                    .collect();
                let total = stats::sum(&z);
                let mut entropy_sum = 0.0;
                for v in &z {
                    let p = checked_div(*v, total, "entropy weighting", || {
                        format!("column '{}' sums to zero", name)
                    })?;
                    if p > 0.0 {
                        entropy_sum += p * p.ln();
                    }
                }
                let entropy = -entropy_sum / ln_n;
                Ok(1.0 - entropy)
            })
            .collect::<Result<Vec<f64>, EvaluationError>>()?;

        let weights = Weights::new(table.columns().to_vec(), divergence)?;
        debug!(
            indicators = weights.len(),
            weights = ?weights.values(),
            "Computed entropy weights"
        );
        Ok(weights)
    }

    /// CRITIC weights.
    ///
    /// # Algorithm
    /// 1. `z = min-max(x)`
    /// 2. `σ_j` = sample standard deviation of column j
    /// 3. `conflict_j = Σ_k (1 - r_jk)` over the Pearson correlation matrix
    /// 4. `w_j = σ_j conflict_j / Σ (σ conflict)`
    ///
    /// # Edge Cases
    /// - Constant column: `DegenerateInput` from min-max
    /// - Single column or perfectly correlated columns: `DegenerateInput`
    pub fn critic_weight(table: &Table) -> Result<Weights, EvaluationError> {
        table.require_non_empty("CRITIC weighting")?;
        let normalized = table
            .iter_columns()
            .map(|(name, column)| min_max_column(name, column))
            .collect::<Result<Vec<_>, _>>()?;

        let information: Vec<f64> = normalized
            .iter()
            .enumerate()
            .map(|(j, zj)| {
                let conflict: f64 = normalized
                    .iter()
                    .enumerate()
                    .filter(|(k, _)| *k != j)
                    .map(|(_, zk)| 1.0 - stats::pearson(zj, zk))
                    .sum();
                stats::sample_std(zj) * conflict.max(0.0)
            })
            .collect();

        if information.iter().any(|f| !f.is_finite()) || stats::sum(&information) == 0.0 {
            return Err(EvaluationError::degenerate(
                "CRITIC weighting",
                "indicators carry no conflicting information",
            ));
        }

        let weights = Weights::new(table.columns().to_vec(), information)?;
        debug!(
            indicators = weights.len(),
            weights = ?weights.values(),
            "Computed CRITIC weights"
        );
        Ok(weights)
    }

    /// AHP weights with default power-iteration settings.
    pub fn ahp_weight(matrix: &[Vec<f64>]) -> Result<Vec<f64>, EvaluationError> {
        Self::ahp_weight_with(matrix, PowerIteration::default())
    }

    /// AHP weights: the dominant eigenvector of the pairwise-comparison
    /// matrix, normalized to sum to 1. No consistency check is performed.
    pub fn ahp_weight_with(
        matrix: &[Vec<f64>],
        solver: PowerIteration,
    ) -> Result<Vec<f64>, EvaluationError> {
        validate_pairwise(matrix)?;
        dominant_eigenvector(matrix, solver)
    }

    /// AHP weights plus consistency diagnostics.
    pub fn ahp_analysis(matrix: &[Vec<f64>]) -> Result<AhpAnalysis, EvaluationError> {
        Self::ahp_analysis_with(matrix, PowerIteration::default())
    }

    /// AHP weights plus consistency diagnostics. Inconsistent judgments
    /// are reported through the ratio, never rejected.
    pub fn ahp_analysis_with(
        matrix: &[Vec<f64>],
        solver: PowerIteration,
    ) -> Result<AhpAnalysis, EvaluationError> {
        let weights = Self::ahp_weight_with(matrix, solver)?;
        let n = weights.len();

        let ratios: Vec<f64> = matrix
            .iter()
            .zip(&weights)
            .map(|(row, w)| {
                let aw: f64 = row.iter().zip(&weights).map(|(a, x)| a * x).sum();
                checked_div(aw, *w, "AHP eigenvalue", || {
                    "dominant eigenvector has a zero component".to_string()
                })
            })
            .collect::<Result<_, _>>()?;
        let lambda_max = stats::mean(&ratios);

        let consistency_index = if n > 2 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };
        let consistency_ratio = AHP_RANDOM_INDEX.get(n - 1).map(|&ri| {
            if ri > 0.0 {
                consistency_index / ri
            } else {
                0.0
            }
        });

        let analysis = AhpAnalysis {
            weights,
            lambda_max,
            consistency_index,
            consistency_ratio,
        };

        debug!(
            order = n,
            lambda_max,
            consistency_ratio = ?analysis.consistency_ratio,
            "Computed AHP weights"
        );

        Ok(analysis)
    }
}

fn validate_pairwise(matrix: &[Vec<f64>]) -> Result<(), EvaluationError> {
    let n = matrix.len();
    if n == 0 {
        return Err(EvaluationError::invalid_parameter(
            "pairwise_matrix",
            "matrix is empty",
        ));
    }
    for row in matrix {
        if row.len() != n {
            return Err(EvaluationError::shape_mismatch(
                "pairwise matrix row",
                n,
                row.len(),
            ));
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(EvaluationError::degenerate(
                "AHP weighting",
                "matrix contains non-finite entries",
            ));
        }
    }
    Ok(())
}

/// Power iteration from the uniform vector, renormalizing to unit sum.
fn dominant_eigenvector(
    matrix: &[Vec<f64>],
    solver: PowerIteration,
) -> Result<Vec<f64>, EvaluationError> {
    let n = matrix.len();
    let mut current = vec![1.0 / n as f64; n];

    for _ in 0..solver.max_iterations {
        let product: Vec<f64> = matrix
            .iter()
            .map(|row| row.iter().zip(&current).map(|(a, x)| a * x).sum())
            .collect();
        let total = stats::sum(&product);
        let next = product
            .iter()
            .map(|v| {
                checked_div(*v, total, "AHP weighting", || {
                    "matrix has no dominant positive eigenvector".to_string()
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let delta = next
            .iter()
            .zip(&current)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        current = next;
        if delta < solver.tolerance {
            return Ok(current);
        }
    }

    Err(EvaluationError::degenerate(
        "AHP weighting",
        format!(
            "power iteration did not converge in {} iterations",
            solver.max_iterations
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::preprocessing::{NormalizeMethod, Preprocessor};
    use crate::domain::foundation::WEIGHT_SUM_TOLERANCE;

    fn sample_table() -> Table {
        Table::builder()
            .index(vec!["CityA", "CityB", "CityC", "CityD", "CityE"])
            .column("GDP", vec![100.0, 80.0, 120.0, 90.0, 110.0])
            .column("Pollution", vec![30.0, 50.0, 20.0, 40.0, 10.0])
            .column("Temp", vec![25.0, 10.0, 35.0, 20.0, 28.0])
            .build()
            .unwrap()
    }

    fn saaty_matrix() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![1.0 / 5.0, 1.0 / 3.0, 1.0],
        ]
    }

    fn consistent_matrix() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 2.0, 4.0],
            vec![0.5, 1.0, 2.0],
            vec![0.25, 0.5, 1.0],
        ]
    }

    // Entropy Tests

    #[test]
    fn entropy_weights_sum_to_one() {
        let ready = Preprocessor::normalize(&sample_table(), NormalizeMethod::MinMax).unwrap();
        let w = Weighting::entropy_weight(&ready).unwrap();

        assert_eq!(w.len(), 3);
        assert!((w.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!(w.values().iter().all(|v| *v > 0.0));
    }

    #[test]
    fn entropy_weights_keep_column_names() {
        let w = Weighting::entropy_weight(&sample_table()).unwrap();
        assert_eq!(w.names(), &["GDP", "Pollution", "Temp"]);
    }

    #[test]
    fn entropy_favors_concentrated_column() {
        // "Spike" concentrates its mass in one row; "Even" spreads it out.
        let table = Table::builder()
            .column("Spike", vec![0.0, 0.0, 0.0, 1.0])
            .column("Even", vec![0.0, 1.0, 2.0, 3.0])
            .build()
            .unwrap();
        let w = Weighting::entropy_weight(&table).unwrap();
        assert!(w.get("Spike").unwrap() > w.get("Even").unwrap());
    }

    #[test]
    fn entropy_single_row_is_degenerate() {
        let table = Table::builder().column("A", vec![1.0]).build().unwrap();
        let result = Weighting::entropy_weight(&table);
        assert!(matches!(result, Err(EvaluationError::DegenerateInput { .. })));
    }

    #[test]
    fn entropy_single_column_gets_full_weight() {
        let table = Table::builder()
            .column("GDP", vec![100.0, 80.0, 120.0, 90.0, 110.0])
            .build()
            .unwrap();
        let w = Weighting::entropy_weight(&table).unwrap();
        assert!((w.get("GDP").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_empty_table_is_invalid() {
        let table = Table::builder().build().unwrap();
        let result = Weighting::entropy_weight(&table);
        assert!(matches!(result, Err(EvaluationError::InvalidTable { .. })));
    }

    // CRITIC Tests

    #[test]
    fn critic_weights_sum_to_one() {
        let ready = Preprocessor::normalize(&sample_table(), NormalizeMethod::MinMax).unwrap();
        let w = Weighting::critic_weight(&ready).unwrap();

        assert_eq!(w.len(), 3);
        assert!((w.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn critic_rewards_conflicting_indicator() {
        // A and B move together, C moves against both.
        let table = Table::builder()
            .column("A", vec![1.0, 2.0, 3.0, 4.0])
            .column("B", vec![1.0, 2.0, 3.0, 4.5])
            .column("C", vec![4.0, 3.0, 2.0, 1.0])
            .build()
            .unwrap();
        let w = Weighting::critic_weight(&table).unwrap();
        assert!(w.get("C").unwrap() > w.get("A").unwrap());
        assert!(w.get("C").unwrap() > w.get("B").unwrap());
    }

    #[test]
    fn critic_single_column_is_degenerate() {
        let table = Table::builder()
            .column("A", vec![1.0, 2.0, 3.0])
            .build()
            .unwrap();
        let result = Weighting::critic_weight(&table);
        assert!(matches!(result, Err(EvaluationError::DegenerateInput { .. })));
    }

    // AHP Tests

    #[test]
    fn ahp_respects_dominance_order() {
        let w = Weighting::ahp_weight(&saaty_matrix()).unwrap();
        assert_eq!(w.len(), 3);
        assert!(w[0] > w[1] && w[1] > w[2]);
        assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ahp_consistent_matrix_recovers_ratios() {
        let w = Weighting::ahp_weight(&consistent_matrix()).unwrap();
        assert!((w[0] - 4.0 / 7.0).abs() < 1e-9);
        assert!((w[1] - 2.0 / 7.0).abs() < 1e-9);
        assert!((w[2] - 1.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn ahp_analysis_of_consistent_matrix() {
        let analysis = Weighting::ahp_analysis(&consistent_matrix()).unwrap();
        assert!((analysis.lambda_max - 3.0).abs() < 1e-9);
        assert!(analysis.consistency_ratio.unwrap().abs() < 1e-9);
        assert!(analysis.is_consistent());
    }

    #[test]
    fn ahp_analysis_of_saaty_matrix() {
        let analysis = Weighting::ahp_analysis(&saaty_matrix()).unwrap();
        // lambda_max ≈ 3.039 for this classic example
        assert!(analysis.lambda_max > 3.0 && analysis.lambda_max < 3.1);
        assert!(analysis.is_consistent());
    }

    #[test]
    fn ahp_analysis_flags_inconsistent_judgments() {
        // A > B, B > C, but C > A strongly
        let matrix = vec![
            vec![1.0, 9.0, 1.0 / 9.0],
            vec![1.0 / 9.0, 1.0, 9.0],
            vec![9.0, 1.0 / 9.0, 1.0],
        ];
        let analysis = Weighting::ahp_analysis(&matrix).unwrap();
        assert!(!analysis.is_consistent());
    }

    #[test]
    fn ahp_single_criterion() {
        let w = Weighting::ahp_weight(&[vec![1.0]]).unwrap();
        assert_eq!(w, vec![1.0]);
    }

    #[test]
    fn ahp_rejects_non_square() {
        let matrix = vec![vec![1.0, 2.0], vec![0.5]];
        let result = Weighting::ahp_weight(&matrix);
        assert!(matches!(result, Err(EvaluationError::ShapeMismatch { .. })));
    }

    #[test]
    fn ahp_rejects_empty() {
        let result = Weighting::ahp_weight(&[]);
        assert!(matches!(
            result,
            Err(EvaluationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn ahp_reports_non_convergence() {
        let solver = PowerIteration {
            max_iterations: 1,
            tolerance: 0.0,
        };
        let result = Weighting::ahp_weight_with(&saaty_matrix(), solver);
        assert!(matches!(result, Err(EvaluationError::DegenerateInput { .. })));
    }
}
