// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log and dispatch operations.

use zb_core::{Dispatch, LogLine};

use super::{FleetState, StoredLog};

/// Per-agent retention bound; the oldest lines are dropped first.
pub const MAX_LOGS_PER_AGENT: usize = 1000;

impl FleetState {
    pub fn append_log(&mut self, agent_id: &str, ts: i64, line: impl Into<String>) {
        self.next_log_id += 1;
        self.logs.push(StoredLog {
            id: self.next_log_id,
            agent_id: agent_id.to_string(),
            ts,
            line: line.into(),
        });

        let count = self.logs.iter().filter(|log| log.agent_id == agent_id).count();
        if count > MAX_LOGS_PER_AGENT {
            let mut excess = count - MAX_LOGS_PER_AGENT;
            self.logs.retain(|log| {
                if excess > 0 && log.agent_id == agent_id {
                    excess -= 1;
                    false
                } else {
                    true
                }
            });
        }
    }

    /// The most recent `limit` lines for an agent, oldest first.
    pub fn tail_logs(&self, agent_id: &str, limit: usize) -> Vec<LogLine> {
        let mut tail: Vec<LogLine> = self
            .logs
            .iter()
            .rev()
            .filter(|log| log.agent_id == agent_id)
            .take(limit)
            .map(|log| LogLine::new(log.ts, log.line.clone()))
            .collect();
        tail.reverse();
        tail
    }

    pub fn record_dispatch(&mut self, dispatch: Dispatch) {
        self.dispatches.push(dispatch);
    }

    pub fn dispatches_for(&self, agent_id: &str) -> Vec<Dispatch> {
        self.dispatches.iter().filter(|d| d.agent_id == agent_id).cloned().collect()
    }
}
