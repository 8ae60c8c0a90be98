//! Column statistics shared by preprocessing, weighting, and models.
//!
//! All helpers operate on plain slices. Callers are expected to pass
//! non-empty, finite data; empty slices yield `NaN`/infinite sentinels
//! which [`checked_div`] and [`ensure_finite`] turn into errors.

use super::EvaluationError;

/// Smallest value in the slice (`+inf` when empty).
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value in the slice (`-inf` when empty).
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns `NaN` for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Pearson correlation coefficient of two equally long slices.
///
/// Returns `NaN` when either slice has zero variance.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let ma = mean(a);
    let mb = mean(b);
    let mut cov = 0.0;
    let mut va = 0.0;
    let mut vb = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - ma;
        let dy = y - mb;
        cov += dx * dy;
        va += dx * dx;
        vb += dy * dy;
    }
    cov / (va * vb).sqrt()
}

/// Euclidean norm.
pub fn l2_norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Divides, failing with `DegenerateInput` on a zero denominator or a
/// non-finite quotient.
pub fn checked_div(
    numerator: f64,
    denominator: f64,
    operation: &str,
    reason: impl FnOnce() -> String,
) -> Result<f64, EvaluationError> {
    if denominator == 0.0 {
        return Err(EvaluationError::degenerate(operation, reason()));
    }
    ensure_finite(numerator / denominator, operation, reason)
}

/// Passes `value` through, failing with `DegenerateInput` if it is NaN or infinite.
pub fn ensure_finite(
    value: f64,
    operation: &str,
    reason: impl FnOnce() -> String,
) -> Result<f64, EvaluationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::degenerate(operation, reason()))
    }
}
