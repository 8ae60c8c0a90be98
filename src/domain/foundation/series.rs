//! Score series - one score per table row, in table order.

use serde::{Deserialize, Serialize};

use super::EvaluationError;

/// Scores keyed by sample id, in the same order as the input table.
///
/// Every score is finite and there is exactly one per id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScoreSeriesRecord", into = "ScoreSeriesRecord")]
pub struct ScoreSeries {
    index: Vec<String>,
    values: Vec<f64>,
}

impl ScoreSeries {
    /// Pairs row ids with scores.
    ///
    /// # Errors
    /// - `ShapeMismatch` if ids and scores differ in length
    /// - `DegenerateInput` if a score is NaN or infinite
    pub fn new(index: Vec<String>, values: Vec<f64>) -> Result<Self, EvaluationError> {
        if index.len() != values.len() {
            return Err(EvaluationError::shape_mismatch(
                "score series",
                index.len(),
                values.len(),
            ));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(EvaluationError::degenerate(
                "score series",
                format!("score for '{}' is {}", index[pos], values[pos]),
            ));
        }
        Ok(Self { index, values })
    }

    pub fn index(&self) -> &[String] {
        &self.index
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

    /// Score of the given sample.
    pub fn get(&self, id: &str) -> Option<f64> {
        self.index
            .iter()
            .position(|i| i == id)
            .map(|pos| self.values[pos])
    }

    /// Iterates `(id, score)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.index
            .iter()
            .zip(&self.values)
            .map(|(id, v)| (id.as_str(), *v))
    }

    /// Id of the highest score; the first one wins on ties.
    pub fn idxmax(&self) -> Option<&str> {
        self.iter()
            .fold(None, |best: Option<(&str, f64)>, (id, v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((id, v)),
            })
            .map(|(id, _)| id)
    }

    /// Lowest score, `None` when empty.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Highest score, `None` when empty.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Serialized form of a score series.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScoreSeriesRecord {
    index: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<ScoreSeriesRecord> for ScoreSeries {
    type Error = EvaluationError;

    fn try_from(record: ScoreSeriesRecord) -> Result<Self, Self::Error> {
        ScoreSeries::new(record.index, record.values)
    }
}

impl From<ScoreSeries> for ScoreSeriesRecord {
    fn from(series: ScoreSeries) -> Self {
        ScoreSeriesRecord {
            index: series.index,
            values: series.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ScoreSeries {
        ScoreSeries::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![0.2, 0.9, 0.9],
        )
        .unwrap()
    }

    #[test]
    fn get_by_id() {
        let s = series();
        assert_eq!(s.get("a"), Some(0.2));
        assert_eq!(s.get("z"), None);
    }

    #[test]
    fn idxmax_prefers_first_on_tie() {
        assert_eq!(series().idxmax(), Some("b"));
    }

    #[test]
    fn min_and_max() {
        let s = series();
        assert_eq!(s.min(), Some(0.2));
        assert_eq!(s.max(), Some(0.9));
    }

    #[test]
    fn empty_series() {
        let s = ScoreSeries::new(Vec::new(), Vec::new()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.idxmax(), None);
        assert_eq!(s.max(), None);
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let result = ScoreSeries::new(vec!["a".into(), "b".into()], vec![0.5]);
        assert_eq!(
            result,
            Err(EvaluationError::shape_mismatch("score series", 2, 1))
        );
    }

    #[test]
    fn new_rejects_non_finite_scores() {
        let result = ScoreSeries::new(vec!["a".into(), "b".into()], vec![0.5, f64::NAN]);
        assert!(matches!(result, Err(EvaluationError::DegenerateInput { .. })));
    }

    #[test]
    fn deserialize_validates_lengths() {
        let json = r#"{"index":["a","b"],"values":[1.0]}"#;
        let result: Result<ScoreSeries, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_round_trip_keeps_order() {
        let json = serde_json::to_string(&series()).unwrap();
        assert_eq!(json, r#"{"index":["a","b","c"],"values":[0.2,0.9,0.9]}"#);
        let restored: ScoreSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, series());
    }
}
