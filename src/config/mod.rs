//! Library configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MCDA_KIT` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use mcda_kit::config::KitConfig;
//!
//! let config = KitConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("GRA rho: {}", config.evaluation.gra_rho);
//! ```

mod ahp;
mod error;
mod evaluation;
mod logging;

pub use ahp::AhpConfig;
pub use error::{ConfigError, ValidationError};
pub use evaluation::EvaluationConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root configuration
///
/// Load using [`KitConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct KitConfig {
    /// Evaluator defaults (method, GRA rho, entropy epsilon)
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// AHP solver settings
    #[serde(default)]
    pub ahp: AhpConfig,

    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl KitConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MCDA_KIT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDA_KIT__EVALUATION__GRA_RHO=0.4` -> `evaluation.gra_rho = 0.4`
    /// - `MCDA_KIT__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MCDA_KIT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.evaluation.validate()?;
        self.ahp.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("MCDA_KIT__EVALUATION__GRA_RHO");
        env::remove_var("MCDA_KIT__EVALUATION__DEFAULT_METHOD");
        env::remove_var("MCDA_KIT__AHP__MAX_ITERATIONS");
        env::remove_var("MCDA_KIT__LOGGING__FORMAT");
        env::remove_var("MCDA_KIT__LOGGING__LEVEL");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = KitConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.evaluation, EvaluationConfig::default());
        assert_eq!(config.ahp, AhpConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_KIT__EVALUATION__GRA_RHO", "0.4");
        env::set_var("MCDA_KIT__EVALUATION__DEFAULT_METHOD", "gra");
        env::set_var("MCDA_KIT__AHP__MAX_ITERATIONS", "50");
        env::set_var("MCDA_KIT__LOGGING__FORMAT", "json");
        let result = KitConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.evaluation.gra_rho, 0.4);
        assert_eq!(config.evaluation.default_method, "gra");
        assert_eq!(config.ahp.max_iterations, 50);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_validated_rejects_bad_rho() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_KIT__EVALUATION__GRA_RHO", "2.0");
        let result = KitConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidGraRho(_)))
        ));
    }

    #[test]
    fn test_load_rejects_unparseable_value() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_KIT__AHP__MAX_ITERATIONS", "many");
        let result = KitConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_reports_first_failing_section() {
        let mut config = KitConfig::default();
        config.logging.level = "chatty".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel("chatty".to_string()))
        );
    }
}
