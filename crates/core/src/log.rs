// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log lines and task dispatch records.

use serde::{Deserialize, Serialize};

/// One line of agent output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    /// Epoch seconds
    pub ts: i64,
    pub line: String,
}

impl LogLine {
    pub fn new(ts: i64, line: impl Into<String>) -> Self {
        Self { ts, line: line.into() }
    }
}

/// A task handed to an agent through a store-owning backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: String,
    pub agent_id: String,
    pub task: String,
    /// Epoch seconds
    pub created_at: i64,
}
