//! CLI help output specs

use crate::prelude::*;

#[test]
fn zb_no_args_shows_usage_and_fails() {
    cli().exits(2).stderr_has("Usage:");
}

#[test]
fn zb_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("agents")
        .stdout_has("refresh")
        .stdout_has("watch")
        .stdout_has("logs");
}

#[test]
fn zb_logs_help_shows_tail_flag() {
    cli().args(&["logs", "--help"]).passes().stdout_has("--tail");
}

#[test]
fn zb_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn zb_rejects_unknown_output_format() {
    cli().args(&["-o", "yaml", "agents"]).exits(2).stderr_has("yaml");
}
