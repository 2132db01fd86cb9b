// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory fleet state and the pure operations over it.
//!
//! [`FleetStore`](crate::FleetStore) wraps this type with locking and
//! persistence; everything here is plain data manipulation.

mod agents;
mod logs;

pub use logs::MAX_LOGS_PER_AGENT;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zb_core::{AgentRecord, Dispatch};

/// Everything persisted by the store.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetState {
    /// agent id → record, ordered by id
    #[serde(default)]
    pub agents: BTreeMap<String, AgentRecord>,
    /// Log lines for all agents in insertion order
    #[serde(default)]
    pub logs: Vec<StoredLog>,
    #[serde(default)]
    pub dispatches: Vec<Dispatch>,
    /// Monotonic id handed to the next appended log line
    #[serde(default)]
    pub next_log_id: u64,
}

/// A persisted log line tagged with its owning agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLog {
    pub id: u64,
    pub agent_id: String,
    pub ts: i64,
    pub line: String,
}

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

impl FleetState {
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
#[path = "../state_tests/mod.rs"]
mod tests;
