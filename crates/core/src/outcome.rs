// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit outcomes returned by every fleet operation.
//!
//! Backends never raise to their callers: failures are reported as
//! `ok == false` together with a human-readable message.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Result of a single action or task dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub ok: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { ok: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { ok: false, message: message.into() }
    }
}

/// Result of one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResult {
    pub ok: bool,
    pub message: String,
    /// Number of records written this cycle
    pub updated: usize,
}

impl RefreshResult {
    pub fn ok(message: impl Into<String>, updated: usize) -> Self {
        Self { ok: true, message: message.into(), updated }
    }

    /// A failed cycle never reports updates.
    pub fn failed(message: impl Into<String>) -> Self {
        Self { ok: false, message: message.into(), updated: 0 }
    }
}

/// Lifecycle actions an operator can request for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentAction {
    Start,
    Stop,
    Restart,
    Delete,
}

crate::simple_display! {
    AgentAction {
        Start => "start",
        Stop => "stop",
        Restart => "restart",
        Delete => "delete",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported action: {0}")]
pub struct UnsupportedAction(pub String);

impl FromStr for AgentAction {
    type Err = UnsupportedAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "restart" => Ok(Self::Restart),
            "delete" => Ok(Self::Delete),
            _ => Err(UnsupportedAction(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
