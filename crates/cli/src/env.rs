// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

use zb_adapters::{ClawTrolConfig, OpenClawConfig};

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "zerobitch.toml";

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn first_of(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| non_empty(name))
}

/// Config file path: ZEROBITCH_CONFIG > ./zerobitch.toml
pub fn config_path() -> (PathBuf, bool) {
    match non_empty("ZEROBITCH_CONFIG") {
        Some(path) => (PathBuf::from(path), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    }
}

pub fn adapter() -> Option<String> {
    non_empty("ZEROBITCH_ADAPTER")
}

pub fn db_path() -> Option<PathBuf> {
    non_empty("ZEROBITCH_DB_PATH").map(PathBuf::from)
}

pub fn docker_socket() -> Option<PathBuf> {
    non_empty("ZEROBITCH_DOCKER_SOCKET").map(PathBuf::from)
}

/// Poll interval in seconds. Unparseable values are ignored.
pub fn poll_interval_secs() -> Option<u64> {
    non_empty("ZEROBITCH_POLL_INTERVAL").and_then(|s| s.parse().ok())
}

pub fn request_timeout_ms() -> Option<u64> {
    non_empty("ZEROBITCH_REQUEST_TIMEOUT_MS").and_then(|s| s.parse().ok())
}

/// Log filter directive for the tracing subscriber
pub fn log_filter() -> Option<String> {
    non_empty("ZB_LOG")
}

pub fn clawtrol() -> ClawTrolConfig {
    ClawTrolConfig {
        api_url: first_of(&["ZEROBITCH_CLAWTROL_API_URL", "CLAWTROL_API_URL"]),
        api_token: first_of(&["ZEROBITCH_CLAWTROL_API_TOKEN", "CLAWTROL_API_TOKEN"]),
    }
}

pub fn openclaw() -> OpenClawConfig {
    OpenClawConfig {
        gateway_url: first_of(&[
            "ZEROBITCH_OPENCLAW_GATEWAY_URL",
            "OPENCLAW_GATEWAY_URL",
            "ZEROBITCH_OPENCLAW_WEBHOOK_URL",
        ]),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
