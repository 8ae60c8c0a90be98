//! Evaluator - Facade that selects a model by name, scores, and ranks.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::{AhpConfig, EvaluationConfig, KitConfig};
use crate::domain::evaluation::{
    AhpAnalysis, BaseModel, EvaluationModel, GraModel, Model, RankedResult, TopsisModel,
    Weighting,
};
use crate::domain::foundation::{EvaluationError, Table};

/// Scoring method requested by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Topsis,
    Gra,
    /// Unrecognized name; resolves to the base model and fails when run.
    Other(String),
}

impl Method {
    /// `"topsis"` and `"gra"` are recognized; anything else is `Other`.
    pub fn parse(name: &str) -> Self {
        match name {
            "topsis" => Method::Topsis,
            "gra" => Method::Gra,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Topsis => "topsis",
            Method::Gra => "gra",
            Method::Other(name) => name,
        }
    }
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Method::parse(s))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runs a model over a table and ranks the scores.
///
/// Configured defaults (GRA rho, entropy epsilon, AHP solver settings) flow
/// into the models it builds.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    evaluation: EvaluationConfig,
    ahp: AhpConfig,
}

impl Evaluator {
    /// Creates an evaluator from the loaded configuration.
    pub fn new(config: &KitConfig) -> Self {
        Self {
            evaluation: config.evaluation.clone(),
            ahp: config.ahp.clone(),
        }
    }

    pub fn evaluation_config(&self) -> &EvaluationConfig {
        &self.evaluation
    }

    /// Builds the model for a method.
    pub fn model_for(&self, method: &Method) -> EvaluationModel {
        match method {
            Method::Topsis => EvaluationModel::Topsis(
                TopsisModel::new().entropy_epsilon(self.evaluation.entropy_epsilon),
            ),
            Method::Gra => EvaluationModel::Gra(GraModel::with_rho(self.evaluation.gra_rho)),
            Method::Other(_) => EvaluationModel::Base(BaseModel),
        }
    }

    /// Scores `table` with the named method and ranks the result.
    ///
    /// # Errors
    /// - `NotImplemented` for an unrecognized method
    /// - Any error raised by the selected model
    pub fn evaluate(&self, table: &Table, method: &str) -> Result<RankedResult, EvaluationError> {
        let method = Method::parse(method);
        let model = self.model_for(&method);
        self.evaluate_with(table, &model)
    }

    /// Scores `table` with the configured default method.
    pub fn evaluate_default(&self, table: &Table) -> Result<RankedResult, EvaluationError> {
        self.evaluate(table, &self.evaluation.default_method)
    }

    /// Scores `table` with any model and ranks the result.
    pub fn evaluate_with<M: Model + ?Sized>(
        &self,
        table: &Table,
        model: &M,
    ) -> Result<RankedResult, EvaluationError> {
        debug!(
            model = model.name(),
            rows = table.row_count(),
            indicators = table.column_count(),
            "Evaluating table"
        );

        let scores = model.fit(table)?;
        let ranked = RankedResult::from_scores(&scores);

        if let Some(top) = ranked.top() {
            debug!(model = model.name(), top = %top.id, score = top.score, "Ranking complete");
        }
        Ok(ranked)
    }

    /// Derives AHP weights with the configured solver settings.
    ///
    /// Judgments whose consistency ratio reaches the configured threshold
    /// are still returned, with a warning.
    pub fn ahp_weights(&self, matrix: &[Vec<f64>]) -> Result<AhpAnalysis, EvaluationError> {
        let analysis = Weighting::ahp_analysis_with(matrix, self.ahp.power_iteration())?;
        if !analysis.is_consistent_at(self.ahp.consistency_threshold) {
            warn!(
                order = analysis.weights.len(),
                consistency_ratio = ?analysis.consistency_ratio,
                threshold = self.ahp.consistency_threshold,
                "AHP pairwise judgments are not acceptably consistent"
            );
        }
        Ok(analysis)
    }
}

/// Scores `table` with the named method using default settings.
///
/// Returns rows sorted by descending `Score` with a 1-based `Rank`.
/// `"topsis"` and `"gra"` are supported; any other name fails with
/// `NotImplemented`.
pub fn quick_evaluate(table: &Table, method: &str) -> Result<RankedResult, EvaluationError> {
    Evaluator::default().evaluate(table, method)
}
