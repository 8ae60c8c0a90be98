//! AHP solver configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::evaluation::{PowerIteration, AHP_CONSISTENCY_THRESHOLD};

/// Settings for deriving AHP weights
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AhpConfig {
    /// Power iteration cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Convergence tolerance on the eigenvector components
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Consistency ratios at or above this are reported as inconsistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,
}

impl AhpConfig {
    /// Solver settings for the weighting service
    pub fn power_iteration(&self) -> PowerIteration {
        PowerIteration {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }

    /// Validate AHP configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_iterations == 0 {
            return Err(ValidationError::InvalidMaxIterations);
        }
        if !(self.tolerance > 0.0) {
            return Err(ValidationError::InvalidTolerance(self.tolerance));
        }
        if !(self.consistency_threshold > 0.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(
                self.consistency_threshold,
            ));
        }
        Ok(())
    }
}

impl Default for AhpConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            consistency_threshold: default_consistency_threshold(),
        }
    }
}

fn default_max_iterations() -> usize {
    PowerIteration::default().max_iterations
}

fn default_tolerance() -> f64 {
    PowerIteration::default().tolerance
}

fn default_consistency_threshold() -> f64 {
    AHP_CONSISTENCY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ahp_defaults_match_solver() {
        let config = AhpConfig::default();
        assert_eq!(config.power_iteration(), PowerIteration::default());
        assert_eq!(config.consistency_threshold, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = AhpConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxIterations));
    }

    #[test]
    fn test_non_positive_tolerance_rejected() {
        let config = AhpConfig {
            tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTolerance(0.0)));
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let config = AhpConfig {
            consistency_threshold: -0.1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidConsistencyThreshold(-0.1))
        );
    }
}
