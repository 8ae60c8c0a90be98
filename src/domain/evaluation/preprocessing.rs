//! Preprocessor - Forward conversion and normalization of indicators.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::stats::{self, checked_div};
use crate::domain::foundation::{EvaluationError, Table};

/// How an indicator is turned into "larger is better" form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositiveKind {
    /// Smaller is better: `max(column) - value`.
    Min,
    /// Closest to `target` is best. Defaults to the column mean.
    Mid { target: Option<f64> },
    /// Anything within `[low, high]` is best. Defaults to the column min/max.
    Range { bounds: Option<(f64, f64)> },
    /// Already larger-is-better.
    Identity,
}

impl PositiveKind {
    /// Parses a kind name with its extra parameters.
    ///
    /// - `"min"`: extra parameters ignored
    /// - `"mid"`: `[]` or `[target]`
    /// - `"range"`: `[]` or `[low, high]`
    /// - anything else: `Identity`
    pub fn parse(kind: &str, extra_params: &[f64]) -> Result<Self, EvaluationError> {
        match kind {
            "min" => Ok(PositiveKind::Min),
            "mid" => match extra_params {
                [] => Ok(PositiveKind::Mid { target: None }),
                [target] => Ok(PositiveKind::Mid {
                    target: Some(*target),
                }),
                _ => Err(EvaluationError::invalid_parameter(
                    "extra_params",
                    format!("mid expects [target], got {} values", extra_params.len()),
                )),
            },
            "range" => match extra_params {
                [] => Ok(PositiveKind::Range { bounds: None }),
                [low, high] => Ok(PositiveKind::Range {
                    bounds: Some((*low, *high)),
                }),
                _ => Err(EvaluationError::invalid_parameter(
                    "extra_params",
                    format!(
                        "range expects [low, high], got {} values",
                        extra_params.len()
                    ),
                )),
            },
            _ => Ok(PositiveKind::Identity),
        }
    }
}

/// Table normalization method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizeMethod {
    MinMax,
    ZScore,
    Identity,
}

impl NormalizeMethod {
    /// `"min-max"`, `"z-score"`, anything else is `Identity`.
    pub fn parse(method: &str) -> Self {
        match method {
            "min-max" => NormalizeMethod::MinMax,
            "z-score" => NormalizeMethod::ZScore,
            _ => NormalizeMethod::Identity,
        }
    }
}

/// Indicator preprocessing functions.
pub struct Preprocessor;

impl Preprocessor {
    /// Converts one indicator column to "larger is better" form.
    ///
    /// # Edge Cases
    /// - Empty column: returns an empty column
    /// - `Mid` with every value equal to the target: `DegenerateInput`
    /// - `Range` with a zero-width decay span: `DegenerateInput`
    pub fn to_positive(column: &[f64], kind: PositiveKind) -> Result<Vec<f64>, EvaluationError> {
        if column.is_empty() {
            return Ok(Vec::new());
        }

        match kind {
            PositiveKind::Min => {
                let max = stats::max(column);
                Ok(column.iter().map(|v| max - v).collect())
            }
            PositiveKind::Mid { target } => {
                let target = target.unwrap_or_else(|| stats::mean(column));
                let deviations: Vec<f64> = column.iter().map(|v| (v - target).abs()).collect();
                let max_deviation = stats::max(&deviations);
                deviations
                    .iter()
                    .map(|d| {
                        checked_div(*d, max_deviation, "mid-type conversion", || {
                            format!("every value equals the target {}", target)
                        })
                        .map(|ratio| 1.0 - ratio)
                    })
                    .collect()
            }
            PositiveKind::Range { bounds } => {
                let col_min = stats::min(column);
                let col_max = stats::max(column);
                let (low, high) = bounds.unwrap_or((col_min, col_max));
                column
                    .iter()
                    .map(|&v| {
                        if v < low {
                            checked_div(low - v, low - col_min, "range-type conversion", || {
                                format!("lower bound {} equals the column minimum", low)
                            })
                            .map(|ratio| 1.0 - ratio)
                        } else if v > high {
                            checked_div(v - high, col_max - high, "range-type conversion", || {
                                format!("upper bound {} equals the column maximum", high)
                            })
                            .map(|ratio| 1.0 - ratio)
                        } else {
                            Ok(1.0)
                        }
                    })
                    .collect()
            }
            PositiveKind::Identity => Ok(column.to_vec()),
        }
    }

    /// Returns a copy of `table` with the named column forward-converted.
    pub fn to_positive_column(
        table: &Table,
        name: &str,
        kind: PositiveKind,
    ) -> Result<Table, EvaluationError> {
        let column = table
            .column(name)
            .ok_or_else(|| EvaluationError::UnknownColumn(name.to_string()))?;
        let converted = Self::to_positive(column, kind)?;
        table.with_column(name, converted)
    }

    /// Normalizes every column of the table.
    ///
    /// # Edge Cases
    /// - `MinMax` on a constant column: `DegenerateInput`
    /// - `ZScore` on a zero-variance column or a single row: `DegenerateInput`
    pub fn normalize(table: &Table, method: NormalizeMethod) -> Result<Table, EvaluationError> {
        match method {
            NormalizeMethod::MinMax => table.map_columns(min_max_column),
            NormalizeMethod::ZScore => table.map_columns(z_score_column),
            NormalizeMethod::Identity => Ok(table.clone()),
        }
    }
}

/// `(value - min) / (max - min)` for one column.
pub(crate) fn min_max_column(name: &str, column: &[f64]) -> Result<Vec<f64>, EvaluationError> {
    let min = stats::min(column);
    let range = stats::max(column) - min;
    column
        .iter()
        .map(|v| {
            checked_div(v - min, range, "min-max normalization", || {
                format!("column '{}' is constant", name)
            })
        })
        .collect()
}

/// `(value - mean) / std` for one column.
fn z_score_column(name: &str, column: &[f64]) -> Result<Vec<f64>, EvaluationError> {
    let mean = stats::mean(column);
    let std = stats::sample_std(column);
    column
        .iter()
        .map(|v| {
            checked_div(v - mean, std, "z-score normalization", || {
                format!("column '{}' has no variance", name)
            })
        })
        .collect()
}
