//! Configuration file and override specs

use crate::prelude::*;

#[test]
fn config_file_selects_adapter() {
    let fleet = Fleet::new();
    fleet.file("zerobitch.toml", "adapter = \"none\"\n");

    fleet.zb().args(&["action", "restart", "zb-bravo"]).passes().stdout_has("action restart executed");
}

#[test]
fn adapter_flag_beats_config_file() {
    let fleet = Fleet::new();
    fleet.file("zerobitch.toml", "adapter = \"none\"\n");

    fleet.zb().args(&["--adapter", "docker", "action", "stop", "zb-alpha"]).fails().stdout_has("read-only");
}

#[test]
fn unknown_adapter_falls_back_to_simulated() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .env("ZEROBITCH_ADAPTER", "kubernetes")
        .args(&["action", "start", "zb-bravo"])
        .passes()
        .stderr_has("falling back to simulated adapter");
}

#[test]
fn db_path_from_config_file() {
    let fleet = Fleet::new();
    fleet.file("custom.toml", "db_path = \"elsewhere/state.json\"\n");

    fleet
        .zb()
        .env_remove("ZEROBITCH_DB_PATH")
        .args(&["--config", "custom.toml", "agents"])
        .passes();

    assert!(fleet.path("elsewhere/state.json").exists());
}

#[test]
fn missing_explicit_config_fails() {
    let fleet = Fleet::new();
    fleet.zb().args(&["--config", "nope.toml", "agents"]).fails().stderr_has("failed to read config");
}

#[test]
fn openclaw_without_gateway_reports_missing_env() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .args(&["--adapter", "openclaw", "task", "zb-alpha", "hello"])
        .fails()
        .stdout_has("missing OPENCLAW gateway URL env");
}
