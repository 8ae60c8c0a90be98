//! Scoring models.
//!
//! Every model turns a table into one score per row through [`Model::fit`].
//! [`EvaluationModel`] bundles the concrete variants so callers can pick one
//! at runtime and still dispatch statically.

mod base;
mod coupling;
mod gra;
mod topsis;

pub use base::BaseModel;
pub use coupling::CouplingCoordinationModel;
pub use gra::{GraModel, DEFAULT_RHO};
pub use topsis::TopsisModel;

use crate::domain::foundation::{EvaluationError, ScoreSeries, Table};

/// A scoring model.
pub trait Model {
    /// Short model name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Scores every row of `table`. Higher is better.
    fn fit(&self, table: &Table) -> Result<ScoreSeries, EvaluationError>;
}

/// Runtime-selectable model.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationModel {
    Base(BaseModel),
    Topsis(TopsisModel),
    Gra(GraModel),
    CouplingCoordination(CouplingCoordinationModel),
}

impl Model for EvaluationModel {
    fn name(&self) -> &'static str {
        match self {
            EvaluationModel::Base(m) => m.name(),
            EvaluationModel::Topsis(m) => m.name(),
            EvaluationModel::Gra(m) => m.name(),
            EvaluationModel::CouplingCoordination(m) => m.name(),
        }
    }

    fn fit(&self, table: &Table) -> Result<ScoreSeries, EvaluationError> {
        match self {
            EvaluationModel::Base(m) => m.fit(table),
            EvaluationModel::Topsis(m) => m.fit(table),
            EvaluationModel::Gra(m) => m.fit(table),
            EvaluationModel::CouplingCoordination(m) => m.fit(table),
        }
    }
}

impl From<TopsisModel> for EvaluationModel {
    fn from(model: TopsisModel) -> Self {
        EvaluationModel::Topsis(model)
    }
}

impl From<GraModel> for EvaluationModel {
    fn from(model: GraModel) -> Self {
        EvaluationModel::Gra(model)
    }
}

impl From<CouplingCoordinationModel> for EvaluationModel {
    fn from(model: CouplingCoordinationModel) -> Self {
        EvaluationModel::CouplingCoordination(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::builder()
            .column("Economy", vec![0.9, 0.1, 0.5])
            .column("Environment", vec![0.8, 0.2, 0.5])
            .build()
            .unwrap()
    }

    #[test]
    fn dispatch_reports_variant_names() {
        assert_eq!(EvaluationModel::Base(BaseModel).name(), "base");
        assert_eq!(EvaluationModel::from(TopsisModel::new()).name(), "topsis");
        assert_eq!(EvaluationModel::from(GraModel::new()).name(), "gra");
        assert_eq!(
            EvaluationModel::from(CouplingCoordinationModel).name(),
            "coupling"
        );
    }

    #[test]
    fn dispatch_matches_direct_fit() {
        let direct = CouplingCoordinationModel.fit(&table()).unwrap();
        let dispatched = EvaluationModel::from(CouplingCoordinationModel)
            .fit(&table())
            .unwrap();
        assert_eq!(direct, dispatched);
    }

    #[test]
    fn base_variant_is_not_implemented() {
        let result = EvaluationModel::Base(BaseModel).fit(&table());
        assert!(matches!(
            result,
            Err(EvaluationError::NotImplemented { .. })
        ));
    }
}
