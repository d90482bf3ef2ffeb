//! Tests for the forecast configuration system.

use std::sync::Mutex;

use epiforecast_core::config::{CliOverrides, ForecastConfig};
use epiforecast_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all EPIFORECAST_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "EPIFORECAST_NUM_SIMULATIONS",
        "EPIFORECAST_HORIZON_DAYS",
        "EPIFORECAST_SEED",
        "EPIFORECAST_THREADS",
        "EPIFORECAST_NOISE_STD",
        "EPIFORECAST_RISK_MULTIPLIER",
        "EPIFORECAST_SENSITIVITY_ENABLED",
    ] {
        std::env::remove_var(key);
    }
}

/// CLI beats env, env beats the project file.
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("epiforecast.toml"),
        r#"
[simulation]
num_simulations = 250
horizon_days = 14

[model]
noise_std = 0.2
"#,
    )
    .unwrap();

    std::env::set_var("EPIFORECAST_HORIZON_DAYS", "21");
    std::env::set_var("EPIFORECAST_NUM_SIMULATIONS", "400");

    let cli = CliOverrides {
        num_simulations: Some(900),
        seed: Some(5),
        ..Default::default()
    };
    let config = ForecastConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.simulation.num_simulations, Some(900));
    assert_eq!(config.simulation.horizon_days, Some(21));
    assert_eq!(config.simulation.seed, Some(5));
    assert_eq!(config.model.noise_std, Some(0.2));

    clear_env_vars();
}

/// No config files: compiled defaults apply.
#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = ForecastConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.simulation.effective_num_simulations(), 1000);
    assert_eq!(config.simulation.effective_horizon_days(), 30);
    assert_eq!(config.simulation.effective_progress_interval(), 100);
    assert_eq!(config.model.effective_growth_clamp(), (-0.10, 0.30));
    assert_eq!(config.model.effective_growth_model_weight(), 0.70);
    assert_eq!(config.model.effective_noise_std(), 0.10);
    assert_eq!(config.summary.effective_risk_multiplier(), 1.5);
    assert_eq!(config.sensitivity.effective_runs(), 100);
    assert_eq!(config.sensitivity.effective_clamp(), (-0.05, 0.20));
    assert!(config.sensitivity.is_enabled());
}

/// Unparseable env values are ignored.
#[test]
fn test_bad_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("EPIFORECAST_SEED", "not-a-number");
    let dir = tempdir();
    let config = ForecastConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.simulation.seed, None);

    clear_env_vars();
}

/// Invalid TOML in the project file is a parse error.
#[test]
fn test_invalid_project_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("epiforecast.toml"), "[simulation\nnum = ").unwrap();
    let err = ForecastConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_skip_sensitivity_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let cli = CliOverrides {
        skip_sensitivity: true,
        ..Default::default()
    };
    let config = ForecastConfig::load(dir.path(), Some(&cli)).unwrap();
    assert!(!config.sensitivity.is_enabled());
}

#[test]
fn test_validation_rejects_zero_simulations() {
    let config = ForecastConfig::from_toml("[simulation]\nnum_simulations = 0\n").unwrap();
    let err = ForecastConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "simulation.num_simulations")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validation_rejects_inverted_clamp() {
    let config =
        ForecastConfig::from_toml("[model]\ngrowth_clamp_min = 0.4\ngrowth_clamp_max = 0.1\n")
            .unwrap();
    assert!(ForecastConfig::validate(&config).is_err());
}

#[test]
fn test_validation_rejects_bad_weight_and_percentiles() {
    let weight = ForecastConfig::from_toml("[model]\ngrowth_model_weight = 1.5\n").unwrap();
    assert!(ForecastConfig::validate(&weight).is_err());

    let band =
        ForecastConfig::from_toml("[summary]\nlower_percentile = 90.0\nupper_percentile = 10.0\n")
            .unwrap();
    assert!(ForecastConfig::validate(&band).is_err());
}

#[test]
fn test_toml_roundtrip() {
    let config = ForecastConfig::from_toml(
        "[simulation]\nnum_simulations = 42\nseed = 9\n[sensitivity]\nenabled = false\n",
    )
    .unwrap();
    let back = ForecastConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(config, back);
}

#[test]
fn test_unknown_keys_ignored() {
    let config = ForecastConfig::from_toml("[simulation]\nfuture_option = true\n").unwrap();
    assert_eq!(config.simulation.num_simulations, None);
}
