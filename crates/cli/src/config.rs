// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration: built-in defaults, then the optional TOML file, then
//! environment overrides, then command-line flags.
//!
//! ```toml
//! adapter = "docker"
//! db_path = "./data/zerobitch.json"
//! poll_interval_secs = 15
//!
//! [docker]
//! socket = "/var/run/docker.sock"
//! request_timeout_ms = 5000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use zb_adapters::{AdapterKind, BackendSettings, DockerConfig};

use crate::env;

pub const DEFAULT_DB_PATH: &str = "./data/zerobitch.json";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid config {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// On-disk shape of `zerobitch.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub adapter: Option<String>,
    pub db_path: Option<PathBuf>,
    pub poll_interval_secs: Option<u64>,
    pub docker: DockerSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DockerSection {
    pub socket: Option<PathBuf>,
    pub request_timeout_ms: Option<u64>,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub adapter: AdapterKind,
    pub db_path: PathBuf,
    pub poll_interval: Duration,
    pub docker: DockerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adapter: AdapterKind::Docker,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            poll_interval: DEFAULT_POLL_INTERVAL,
            docker: DockerConfig::default(),
        }
    }
}

impl Config {
    /// Resolve the full configuration.
    ///
    /// A config file named by `--config` or `ZEROBITCH_CONFIG` must exist; the
    /// default `./zerobitch.toml` is optional.
    pub fn load(config_flag: Option<&Path>, adapter_flag: Option<&str>) -> Result<Self, ConfigError> {
        let (path, required) = match config_flag {
            Some(path) => (path.to_path_buf(), true),
            None => env::config_path(),
        };

        let mut config = Self::default();
        if required || path.exists() {
            tracing::debug!(path = %path.display(), "loading config file");
            config.apply_file(FileConfig::read(&path)?);
        }
        config.apply_env();
        if let Some(adapter) = adapter_flag {
            config.adapter = parse_adapter(adapter);
        }
        Ok(config)
    }

    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(adapter) = file.adapter {
            self.adapter = parse_adapter(&adapter);
        }
        if let Some(db_path) = file.db_path {
            self.db_path = db_path;
        }
        if let Some(secs) = file.poll_interval_secs {
            self.poll_interval = poll_interval(secs);
        }
        if let Some(socket) = file.docker.socket {
            self.docker.socket_path = socket;
        }
        if let Some(ms) = file.docker.request_timeout_ms {
            self.docker.request_timeout = request_timeout(ms);
        }
    }

    pub fn apply_env(&mut self) {
        if let Some(adapter) = env::adapter() {
            self.adapter = parse_adapter(&adapter);
        }
        if let Some(db_path) = env::db_path() {
            self.db_path = db_path;
        }
        if let Some(secs) = env::poll_interval_secs() {
            self.poll_interval = poll_interval(secs);
        }
        if let Some(socket) = env::docker_socket() {
            self.docker.socket_path = socket;
        }
        if let Some(ms) = env::request_timeout_ms() {
            self.docker.request_timeout = request_timeout(ms);
        }
    }

    /// Settings for the backend constructors. Webhook endpoints come from
    /// the environment only.
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            docker: self.docker.clone(),
            openclaw: env::openclaw(),
            clawtrol: env::clawtrol(),
        }
    }
}

/// Unknown names fall back to the simulated backend.
fn parse_adapter(raw: &str) -> AdapterKind {
    raw.parse().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to simulated adapter");
        AdapterKind::None
    })
}

fn poll_interval(secs: u64) -> Duration {
    Duration::from_secs(secs.max(1))
}

fn request_timeout(ms: u64) -> Duration {
    Duration::from_millis(ms.max(1))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
