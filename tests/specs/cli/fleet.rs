//! Inventory, action and refresh specs against a fresh store

use crate::prelude::*;

#[test]
fn first_run_seeds_demo_agents() {
    let fleet = Fleet::new();

    let agents = fleet.zb().args(&["-o", "json", "agents"]).passes().json();

    let ids: Vec<&str> = agents.as_array().unwrap().iter().map(|a| a["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["zb-alpha", "zb-bravo", "zb-charlie"]);
    assert_eq!(agents[0]["ram_limit"]["state"], "real");
    assert_eq!(agents[0]["last_activity"]["state"], "event");
    assert!(fleet.path("data/fleet.json").exists());
}

#[test]
fn agents_text_table() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .args(&["agents"])
        .passes()
        .stdout_has("STATUS")
        .stdout_has("zb-charlie")
        .stdout_has("512.00 MB");
}

#[test]
fn simulated_stop_persists() {
    let fleet = Fleet::new();

    fleet
        .zb()
        .args(&["--adapter", "none", "action", "stop", "zb-alpha"])
        .passes()
        .stdout_has("action stop executed");

    let agents = fleet.zb().args(&["-o", "json", "agents"]).passes().json();
    assert_eq!(agents[0]["status"], "stopped");
    assert_eq!(agents[0]["ram_used"]["mb"], 0.0);
}

#[test]
fn action_on_unknown_agent_fails() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .args(&["--adapter", "none", "action", "start", "zb-ghost"])
        .fails()
        .stdout_has("agent not found")
        .stderr_has("1 of 1 action(s) failed");
}

#[test]
fn unsupported_action_is_rejected() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .args(&["--adapter", "none", "action", "explode", "zb-alpha"])
        .fails()
        .stderr_has("unsupported action: explode");
}

#[test]
fn docker_backend_refuses_actions() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .args(&["action", "restart", "zb-alpha"])
        .fails()
        .stdout_has("read-only");
}

#[test]
fn refresh_without_runtime_socket_fails() {
    let fleet = Fleet::new();
    fleet.zb().args(&["refresh"]).fails().stdout_has("docker socket not mounted");

    let agents = fleet.zb().args(&["-o", "json", "agents"]).passes().json();
    assert_eq!(agents.as_array().unwrap().len(), 3);
}

#[test]
fn simulated_refresh_passes() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .env("ZEROBITCH_ADAPTER", "none")
        .args(&["-o", "json", "refresh"])
        .passes()
        .stdout_has("\"ok\":true");
}

#[test]
fn watch_runs_requested_cycles() {
    let fleet = Fleet::new();
    let run = fleet
        .zb()
        .env("ZEROBITCH_ADAPTER", "none")
        .env("ZEROBITCH_POLL_INTERVAL", "1")
        .args(&["-o", "json", "watch", "--cycles", "2"])
        .passes();
    assert_eq!(run.stdout().lines().count(), 2);
}

#[test]
fn metrics_sum_real_readings() {
    let fleet = Fleet::new();
    let summary = fleet.zb().args(&["-o", "json", "metrics"]).passes().json();
    assert_eq!(summary["counts"]["total"], 3);
    assert_eq!(summary["counts"]["error"], 1);
    assert_eq!(summary["ram"]["used_mb"], 640.0);
    assert_eq!(summary["ram"]["limit_mb"], 1536.0);
}

#[test]
fn task_is_recorded_by_docker_backend() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .args(&["task", "zb-alpha", "collect metrics"])
        .passes()
        .stdout_has("mock task accepted");
    fleet
        .zb()
        .args(&["logs", "zb-alpha", "-n", "1"])
        .passes()
        .stdout_has("Mock dispatch queued: collect metrics");
}

#[test]
fn empty_task_is_rejected() {
    let fleet = Fleet::new();
    fleet.zb().args(&["task", "zb-alpha", "  "]).fails().stderr_has("task required");
}

#[test]
fn template_update_and_unknown_agent() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .args(&["template", "zb-bravo", "mode: proactive"])
        .passes()
        .stdout_has("Template updated for zb-bravo");
    fleet.zb().args(&["template", "zb-ghost", "x"]).fails().stderr_has("agent not found: zb-ghost");
}

#[test]
fn corrupt_store_is_reported() {
    let fleet = Fleet::new();
    fleet.file("data/fleet.json", "{ not json");
    fleet.zb().args(&["agents"]).fails().stderr_has("failed to open store");
}
