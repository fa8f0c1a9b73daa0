//! # Cohort Configuration
//!
//! Layered configuration built with the `config` crate:
//!
//! 1. compiled defaults ([`CohortConfig::default`])
//! 2. an optional file (`config/cohort.{toml,yaml,json}` or an explicit path)
//! 3. `COHORT__*` environment variables (`COHORT__LOGGING__JSON=true`)
//!
//! ```rust,no_run
//! use cohort_core::config::CohortConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CohortConfig::load(None)?;
//! cohort_core::logging::init_with_config(&config.logging, &config.environment);
//! # Ok(())
//! # }
//! ```

use crate::error::{CohortError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default location searched when no explicit file is given (extension optional)
pub const DEFAULT_CONFIG_BASENAME: &str = "config/cohort";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortConfig {
    pub environment: String,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; falls back to the environment's default level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Report `end < start` as a validation issue at ingestion
    pub flag_inverted_intervals: bool,
    /// Intervals longer than this are reported as suspicious
    pub max_batch_duration_days: u32,
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            logging: LoggingConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            flag_inverted_intervals: true,
            max_batch_duration_days: 730,
        }
    }
}

impl CohortConfig {
    /// Load layered configuration. An explicit `path` must exist; the default
    /// location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = CohortConfig {
            environment: crate::logging::get_environment(),
            ..CohortConfig::default()
        };

        let mut builder = Config::builder().add_source(Config::try_from(&defaults)?);

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false)),
        };

        let config: CohortConfig = builder
            .add_source(
                Environment::with_prefix("COHORT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;

        debug!(
            environment = %config.environment,
            json_logs = config.logging.json,
            max_batch_duration_days = config.validation.max_batch_duration_days,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Defaults overridden by the flat `COHORT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            environment: crate::logging::get_environment(),
            ..Self::default()
        };

        if let Ok(level) = std::env::var("COHORT_LOG_LEVEL") {
            config.logging.level = Some(level);
        }

        if let Ok(json) = std::env::var("COHORT_LOG_JSON") {
            config.logging.json = json.parse().map_err(|e| {
                CohortError::ConfigurationError(format!("Invalid COHORT_LOG_JSON: {e}"))
            })?;
        }

        if let Ok(days) = std::env::var("COHORT_MAX_BATCH_DURATION_DAYS") {
            config.validation.max_batch_duration_days = days.parse().map_err(|e| {
                CohortError::ConfigurationError(format!("Invalid max_batch_duration_days: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.environment.trim().is_empty() {
            return Err(CohortError::ConfigurationError(
                "environment must not be empty".to_string(),
            ));
        }

        if self.validation.max_batch_duration_days == 0 {
            return Err(CohortError::ConfigurationError(
                "validation.max_batch_duration_days must be greater than zero".to_string(),
            ));
        }

        if let Some(level) = &self.logging.level {
            tracing_subscriber::EnvFilter::try_new(level).map_err(|e| {
                CohortError::ConfigurationError(format!("Invalid logging.level '{level}': {e}"))
            })?;
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
