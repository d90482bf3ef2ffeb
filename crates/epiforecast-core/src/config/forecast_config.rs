//! Top-level forecast configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ModelConfig, SensitivityConfig, SimulationConfig, SummaryConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`EPIFORECAST_*`)
/// 3. Project config (`epiforecast.toml` in project root)
/// 4. User config (`~/.epiforecast/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ForecastConfig {
    pub simulation: SimulationConfig,
    pub model: ModelConfig,
    pub summary: SummaryConfig,
    pub sensitivity: SensitivityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub num_simulations: Option<usize>,
    pub horizon_days: Option<usize>,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub skip_sensitivity: bool,
}

impl ForecastConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only parse failures are fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

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

    /// Validate the configuration values.
    pub fn validate(config: &ForecastConfig) -> Result<(), ConfigError> {
        let sim = &config.simulation;
        if sim.num_simulations == Some(0) {
            return Err(invalid("simulation.num_simulations", "must be greater than 0"));
        }
        if sim.horizon_days == Some(0) {
            return Err(invalid("simulation.horizon_days", "must be greater than 0"));
        }

        let (lo, hi) = config.model.effective_growth_clamp();
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(invalid(
                "model.growth_clamp_min",
                "must be finite and less than model.growth_clamp_max",
            ));
        }
        let weight = config.model.effective_growth_model_weight();
        if !(0.0..=1.0).contains(&weight) {
            return Err(invalid("model.growth_model_weight", "must be between 0.0 and 1.0"));
        }
        let noise = config.model.effective_noise_std();
        if !noise.is_finite() || noise < 0.0 {
            return Err(invalid("model.noise_std", "must be a finite non-negative number"));
        }

        let risk = config.summary.effective_risk_multiplier();
        if !risk.is_finite() || risk <= 0.0 {
            return Err(invalid("summary.risk_multiplier", "must be greater than 0"));
        }
        let lower = config.summary.effective_lower_percentile();
        let upper = config.summary.effective_upper_percentile();
        if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) {
            return Err(invalid("summary.lower_percentile", "percentiles must be between 0 and 100"));
        }
        if lower > upper {
            return Err(invalid(
                "summary.lower_percentile",
                "must not exceed summary.upper_percentile",
            ));
        }

        let sweep = &config.sensitivity;
        if sweep.runs == Some(0) {
            return Err(invalid("sensitivity.runs", "must be greater than 0"));
        }
        if sweep.horizon_days == Some(0) {
            return Err(invalid("sensitivity.horizon_days", "must be greater than 0"));
        }
        let scale = sweep.effective_std_scale();
        if !scale.is_finite() || scale < 0.0 {
            return Err(invalid("sensitivity.std_scale", "must be a finite non-negative number"));
        }
        let (lo, hi) = sweep.effective_clamp();
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(invalid(
                "sensitivity.clamp_min",
                "must be finite and less than sensitivity.clamp_max",
            ));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.epiforecast/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".epiforecast").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ForecastConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ForecastConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut ForecastConfig, other: &ForecastConfig) {
        // Simulation
        overlay(&mut base.simulation.num_simulations, &other.simulation.num_simulations);
        overlay(&mut base.simulation.horizon_days, &other.simulation.horizon_days);
        overlay(&mut base.simulation.progress_interval, &other.simulation.progress_interval);
        overlay(&mut base.simulation.seed, &other.simulation.seed);
        overlay(&mut base.simulation.threads, &other.simulation.threads);

        // Model
        overlay(&mut base.model.growth_clamp_min, &other.model.growth_clamp_min);
        overlay(&mut base.model.growth_clamp_max, &other.model.growth_clamp_max);
        overlay(&mut base.model.growth_model_weight, &other.model.growth_model_weight);
        overlay(&mut base.model.noise_std, &other.model.noise_std);

        // Summary
        overlay(&mut base.summary.risk_multiplier, &other.summary.risk_multiplier);
        overlay(&mut base.summary.lower_percentile, &other.summary.lower_percentile);
        overlay(&mut base.summary.upper_percentile, &other.summary.upper_percentile);

        // Sensitivity
        overlay(&mut base.sensitivity.enabled, &other.sensitivity.enabled);
        overlay(&mut base.sensitivity.runs, &other.sensitivity.runs);
        overlay(&mut base.sensitivity.horizon_days, &other.sensitivity.horizon_days);
        overlay(&mut base.sensitivity.std_scale, &other.sensitivity.std_scale);
        overlay(&mut base.sensitivity.clamp_min, &other.sensitivity.clamp_min);
        overlay(&mut base.sensitivity.clamp_max, &other.sensitivity.clamp_max);
    }

    /// Apply environment variable overrides.
    /// Pattern: `EPIFORECAST_NUM_SIMULATIONS`, `EPIFORECAST_SEED`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut ForecastConfig) {
        if let Some(v) = env_parse::<usize>("NUM_SIMULATIONS") {
            config.simulation.num_simulations = Some(v);
        }
        if let Some(v) = env_parse::<usize>("HORIZON_DAYS") {
            config.simulation.horizon_days = Some(v);
        }
        if let Some(v) = env_parse::<u64>("SEED") {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = env_parse::<usize>("THREADS") {
            config.simulation.threads = Some(v);
        }
        if let Some(v) = env_parse::<f64>("NOISE_STD") {
            config.model.noise_std = Some(v);
        }
        if let Some(v) = env_parse::<f64>("RISK_MULTIPLIER") {
            config.summary.risk_multiplier = Some(v);
        }
        if let Some(v) = env_parse::<bool>("SENSITIVITY_ENABLED") {
            config.sensitivity.enabled = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ForecastConfig, cli: &CliOverrides) {
        if let Some(v) = cli.num_simulations {
            config.simulation.num_simulations = Some(v);
        }
        if let Some(v) = cli.horizon_days {
            config.simulation.horizon_days = Some(v);
        }
        if let Some(v) = cli.seed {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = cli.threads {
            config.simulation.threads = Some(v);
        }
        if cli.skip_sensitivity {
            config.sensitivity.enabled = Some(false);
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

fn overlay<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        base.clone_from(other);
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(format!("{}{}", constants::ENV_PREFIX, key))
        .ok()
        .and_then(|v| v.parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
