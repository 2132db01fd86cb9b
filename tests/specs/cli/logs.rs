//! Log tail specs

use crate::prelude::*;

#[test]
fn seeded_logs_are_oldest_first() {
    let fleet = Fleet::new();
    let lines = fleet.zb().args(&["-o", "json", "logs", "zb-charlie"]).passes().json();
    let text: Vec<&str> =
        lines.as_array().unwrap().iter().map(|l| l["line"].as_str().unwrap()).collect();
    assert_eq!(text, vec!["Restarted after panic", "Crash loop detected"]);
}

#[test]
fn tail_limits_lines() {
    let fleet = Fleet::new();
    let lines = fleet.zb().args(&["-o", "json", "logs", "zb-alpha", "-n", "1"]).passes().json();
    assert_eq!(lines.as_array().unwrap().len(), 1);
    assert_eq!(lines[0]["line"], "Metrics push 0.26 GB RAM");
}

#[test]
fn zero_tail_is_clamped() {
    let fleet = Fleet::new();
    let lines = fleet.zb().args(&["-o", "json", "logs", "zb-alpha", "--tail", "0"]).passes().json();
    assert_eq!(lines.as_array().unwrap().len(), 1);
}

#[test]
fn managed_agent_without_runtime_gets_diagnostic_line() {
    let fleet = Fleet::new();
    fleet
        .zb()
        .args(&["logs", "zeroclaw-worker"])
        .passes()
        .stdout_has("[docker-error]")
        .stdout_has("docker socket not mounted");
}

#[test]
fn unknown_agent_has_no_entries() {
    let fleet = Fleet::new();
    fleet.zb().args(&["logs", "zb-ghost"]).passes().stdout_has("No log entries found for zb-ghost");
}
