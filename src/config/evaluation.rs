//! Evaluation defaults configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::evaluation::{DEFAULT_RHO, ENTROPY_EPSILON};

/// Defaults applied by the evaluator facade
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EvaluationConfig {
    /// Method used when the caller does not name one
    #[serde(default = "default_method")]
    pub default_method: String,

    /// Distinguishing coefficient for grey relational analysis
    #[serde(default = "default_gra_rho")]
    pub gra_rho: f64,

    /// Offset applied before logarithms in entropy weighting
    #[serde(default = "default_entropy_epsilon")]
    pub entropy_epsilon: f64,
}

impl EvaluationConfig {
    /// Validate evaluation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_method.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DEFAULT_METHOD"));
        }
        if !(self.gra_rho > 0.0 && self.gra_rho <= 1.0) {
            return Err(ValidationError::InvalidGraRho(self.gra_rho));
        }
        if !(self.entropy_epsilon > 0.0 && self.entropy_epsilon.is_finite()) {
            return Err(ValidationError::InvalidEntropyEpsilon(self.entropy_epsilon));
        }
        Ok(())
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            default_method: default_method(),
            gra_rho: default_gra_rho(),
            entropy_epsilon: default_entropy_epsilon(),
        }
    }
}

fn default_method() -> String {
    "topsis".to_string()
}

fn default_gra_rho() -> f64 {
    DEFAULT_RHO
}

fn default_entropy_epsilon() -> f64 {
    ENTROPY_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_defaults() {
        let config = EvaluationConfig::default();
        assert_eq!(config.default_method, "topsis");
        assert_eq!(config.gra_rho, 0.5);
        assert_eq!(config.entropy_epsilon, 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rho_bounds() {
        let mut config = EvaluationConfig::default();
        config.gra_rho = 1.0;
        assert!(config.validate().is_ok());

        config.gra_rho = 0.0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidGraRho(0.0)));

        config.gra_rho = 1.5;
        assert_eq!(config.validate(), Err(ValidationError::InvalidGraRho(1.5)));
    }

    #[test]
    fn test_epsilon_must_be_positive() {
        let config = EvaluationConfig {
            entropy_epsilon: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidEntropyEpsilon(0.0))
        );
    }

    #[test]
    fn test_empty_default_method() {
        let config = EvaluationConfig {
            default_method: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("DEFAULT_METHOD"))
        );
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"gra_rho": 0.3}"#;
        let config: EvaluationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.gra_rho, 0.3);
        assert_eq!(config.default_method, "topsis");
    }
}
