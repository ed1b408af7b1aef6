//! Solver configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use powernet_core::solver::GraspConfig;
use powernet_core::utils::{Environment, InfoLogger, get_cpus};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A solver configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies GRASP parameters.
    pub grasp: Option<GraspSettings>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// GRASP parameters, defaults are used for missing ones.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GraspSettings {
    /// Overload penalty weight. Default is 10.
    pub lambda: Option<i64>,
    /// Amount of restarts. Default is 100.
    pub restarts: Option<usize>,
    /// Randomization of construction in [0, 1]. Default is 0.3.
    pub alpha: Option<f64>,
    /// Maximum amount of local search passes. Default is 50.
    pub max_passes: Option<usize>,
}

/// An environment configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// A seed of the random stream. Default is a random seed.
    pub seed: Option<u64>,
    /// Amount of restarts run in parallel, zero means amount of cpus. Default is 1.
    pub parallelism: Option<usize>,
}

#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    pub logging: Option<LoggingConfig>,
}

#[derive(Clone, Default, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether solver progress is printed to stderr.
    pub enabled: bool,
}

impl Config {
    /// Returns GRASP settings, inserting empty ones if missing.
    pub fn grasp_mut(&mut self) -> &mut GraspSettings {
        self.grasp.get_or_insert_with(Default::default)
    }

    /// Returns environment configuration, inserting empty one if missing.
    pub fn environment_mut(&mut self) -> &mut EnvironmentConfig {
        self.environment.get_or_insert_with(Default::default)
    }

    /// Enables or disables logging.
    pub fn set_logging(&mut self, enabled: bool) {
        self.telemetry.get_or_insert_with(Default::default).logging = Some(LoggingConfig { enabled });
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates GRASP parameters from config. Parameters out of their allowed ranges are rejected.
pub fn create_grasp_config(config: &Config) -> Result<GraspConfig, String> {
    let defaults = GraspConfig::default();
    let grasp = config.grasp.clone().unwrap_or_default();

    let grasp_config = GraspConfig {
        lambda: grasp.lambda.unwrap_or(defaults.lambda),
        restarts: grasp.restarts.unwrap_or(defaults.restarts),
        alpha: grasp.alpha.unwrap_or(defaults.alpha),
        max_passes: grasp.max_passes.unwrap_or(defaults.max_passes),
    };

    grasp_config.validate().map_err(|err| format!("invalid solver parameters: {err}"))?;

    Ok(grasp_config)
}

/// Creates solver environment from config.
pub fn create_environment(config: &Config) -> Environment {
    let environment = config.environment.clone().unwrap_or_default();

    let parallelism = match environment.parallelism {
        Some(0) => get_cpus(),
        Some(parallelism) => parallelism,
        None => 1,
    };

    let logger: InfoLogger =
        if config.is_logging_enabled() { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|_: &str| {}) };

    Environment::new(environment.seed, parallelism, logger)
}
