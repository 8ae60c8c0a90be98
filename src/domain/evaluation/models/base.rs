use super::Model;
use crate::domain::foundation::{EvaluationError, ScoreSeries, Table};

/// Placeholder model with no scoring rule; `fit` always fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseModel;

impl Model for BaseModel {
    fn name(&self) -> &'static str {
        "base"
    }

    fn fit(&self, _table: &Table) -> Result<ScoreSeries, EvaluationError> {
        Err(EvaluationError::not_implemented(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_is_not_implemented() {
        let table = Table::builder().column("A", vec![1.0]).build().unwrap();
        let err = BaseModel.fit(&table).unwrap_err();
        assert_eq!(err, EvaluationError::not_implemented("base"));
        assert_eq!(err.to_string(), "Model 'base' does not implement fit");
    }
}
