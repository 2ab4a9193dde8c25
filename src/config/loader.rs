// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::config::consts::{
    DEFAULT_WORKER_MODULE, DEFAULT_WORKER_PROGRAM, DEFAULT_WORKER_TIMEOUT_SECS,
};
use crate::errors::ConfigError;
use crate::worker::WorkerConfig;

/// Main configuration structure for the service.
///
/// Typically loaded from a YAML configuration file; every field has a
/// default so the service also runs with no file at all.
///
/// # Example
/// ```yaml
/// worker:
///   program: python
///   module: aiparser.entrypoints.find_codes_entrypoint
///   timeout_seconds: 600
///   working_dir: /opt/parser
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub worker: WorkerSettings,
}

/// Worker bridge settings.
///
/// # Fields
/// * `program` - worker interpreter executable
/// * `module` - Python module invoked via `-m`
/// * `timeout_seconds` - wall-clock deadline per invocation
/// * `working_dir` - explicit worker root; when unset the bridge discovers
///   it by a bounded upward walk at startup
#[derive(Debug, Deserialize, Clone)]
pub struct WorkerSettings {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_module")]
    pub module: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            module: default_module(),
            timeout_seconds: default_timeout_seconds(),
            working_dir: None,
        }
    }
}

impl WorkerSettings {
    /// Lowers settings into the bridge's [`WorkerConfig`].
    pub fn to_worker_config(&self) -> WorkerConfig {
        WorkerConfig {
            program: self.program.clone(),
            args: vec!["-m".to_string(), self.module.clone()],
            timeout: Duration::from_secs(self.timeout_seconds),
            working_dir: self.working_dir.clone(),
        }
    }
}

fn default_program() -> String {
    DEFAULT_WORKER_PROGRAM.to_string()
}

fn default_module() -> String {
    DEFAULT_WORKER_MODULE.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_WORKER_TIMEOUT_SECS
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Rejects configs with unusable worker settings.
pub fn validate_config(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.worker.program.trim().is_empty() {
        return Err(ConfigError::Invalid {
            reason: "worker.program must not be empty".to_string(),
        });
    }
    if cfg.worker.module.trim().is_empty() {
        return Err(ConfigError::Invalid {
            reason: "worker.module must not be empty".to_string(),
        });
    }
    if cfg.worker.timeout_seconds == 0 {
        return Err(ConfigError::Invalid {
            reason: "worker.timeout_seconds must be at least 1".to_string(),
        });
    }
    Ok(())
}
