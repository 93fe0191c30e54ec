//! Top-level study configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EstimatorConfig, GridConfig, OutputConfig, RunConfig};
use crate::errors::ConfigError;
use crate::models::{CausalParams, CovariateHandling};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TWINLINK_*`)
/// 3. Config file (TOML)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StudyConfig {
    pub dgp: CausalParams,
    pub grid: GridConfig,
    pub run: RunConfig,
    pub estimator: EstimatorConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bootstraps: Option<usize>,
    pub sample_size: Option<usize>,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub covariate: Option<CovariateHandling>,
    pub output_dir: Option<PathBuf>,
}

impl StudyConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `path` means "defaults"; a `path` that does not exist is an error.
    pub fn load(
        path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read a TOML file. Sections and keys it omits keep their defaults.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Error rates are left to model construction so that one bad rate skips
    /// only its own grid cells.
    pub fn validate(config: &StudyConfig) -> Result<(), ConfigError> {
        for (name, value) in config.dgp.probabilities() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("dgp.{name}"),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if !config.dgp.confounding_strength.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "dgp.confounding_strength".to_string(),
                message: "must be finite".to_string(),
            });
        }
        if config.grid.error_rates.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "grid.error_rates".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.grid.recall_rates.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "grid.recall_rates".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config
            .grid
            .recall_rates
            .iter()
            .any(|r| !(*r > 0.0 && *r <= 1.0))
        {
            return Err(ConfigError::ValidationFailed {
                field: "grid.recall_rates".to_string(),
                message: "every recall rate must be in (0.0, 1.0]".to_string(),
            });
        }
        if config.run.bootstraps == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "run.bootstraps".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.run.sample_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "run.sample_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.estimator.treatment.is_empty() || config.estimator.outcome.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "estimator".to_string(),
                message: "treatment and outcome columns must be named".to_string(),
            });
        }
        if config.estimator.treatment == config.estimator.outcome {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.outcome".to_string(),
                message: "must differ from the treatment column".to_string(),
            });
        }
        if config.estimator.max_iterations == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.max_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(config.estimator.tolerance > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "estimator.tolerance".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `TWINLINK_BOOTSTRAPS`, `TWINLINK_SAMPLE_SIZE`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut StudyConfig) {
        if let Ok(val) = std::env::var("TWINLINK_BOOTSTRAPS") {
            if let Ok(v) = val.parse::<usize>() {
                config.run.bootstraps = v;
            }
        }
        if let Ok(val) = std::env::var("TWINLINK_SAMPLE_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.run.sample_size = v;
            }
        }
        if let Ok(val) = std::env::var("TWINLINK_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.run.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TWINLINK_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.run.threads = v;
            }
        }
        if let Ok(val) = std::env::var("TWINLINK_COVARIATE") {
            if let Ok(v) = val.parse::<CovariateHandling>() {
                config.run.covariate = v;
            }
        }
        if let Ok(val) = std::env::var("TWINLINK_OUTPUT_DIR") {
            if !val.is_empty() {
                config.output.dir = PathBuf::from(val);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut StudyConfig, cli: &CliOverrides) {
        if let Some(v) = cli.bootstraps {
            config.run.bootstraps = v;
        }
        if let Some(v) = cli.sample_size {
            config.run.sample_size = v;
        }
        if let Some(v) = cli.seed {
            config.run.seed = Some(v);
        }
        if let Some(v) = cli.threads {
            config.run.threads = v;
        }
        if let Some(v) = cli.covariate {
            config.run.covariate = v;
        }
        if let Some(ref v) = cli.output_dir {
            config.output.dir = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
