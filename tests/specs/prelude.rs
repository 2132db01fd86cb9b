// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: an isolated fleet directory and a fluent wrapper around
//! the `zb` binary.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Variables that must never leak in from the developer's shell.
const SCRUBBED_ENV: [&str; 14] = [
    "ZEROBITCH_CONFIG",
    "ZEROBITCH_ADAPTER",
    "ZEROBITCH_DB_PATH",
    "ZEROBITCH_POLL_INTERVAL",
    "ZEROBITCH_DOCKER_SOCKET",
    "ZEROBITCH_REQUEST_TIMEOUT_MS",
    "ZEROBITCH_CLAWTROL_API_URL",
    "CLAWTROL_API_URL",
    "ZEROBITCH_CLAWTROL_API_TOKEN",
    "CLAWTROL_API_TOKEN",
    "ZEROBITCH_OPENCLAW_GATEWAY_URL",
    "OPENCLAW_GATEWAY_URL",
    "ZEROBITCH_OPENCLAW_WEBHOOK_URL",
    "ZB_LOG",
];

fn zb_command() -> Command {
    let mut cmd = Command::cargo_bin("zb").unwrap();
    for name in SCRUBBED_ENV {
        cmd.env_remove(name);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

/// `zb` with no fleet directory; enough for help and version output.
pub fn cli() -> CliBuilder {
    CliBuilder { cmd: zb_command() }
}

/// A temp working directory holding the store and an absent runtime socket.
pub struct Fleet {
    dir: TempDir,
}

impl Fleet {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// `zb` running inside this fleet directory.
    pub fn zb(&self) -> CliBuilder {
        let mut cmd = zb_command();
        cmd.current_dir(self.root())
            .env("ZEROBITCH_DB_PATH", self.path("data/fleet.json"))
            .env("ZEROBITCH_DOCKER_SOCKET", self.path("docker.sock"))
            .env("ZEROBITCH_REQUEST_TIMEOUT_MS", "500");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn env_remove(mut self, key: &str) -> Self {
        self.cmd.env_remove(key);
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let run = RunAssert { output: self.cmd.output().unwrap() };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }
}
