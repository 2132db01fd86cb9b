// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fleet-wide counters.

use crate::agent_record::{AgentRecord, AgentStatus};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub running: usize,
    pub stopped: usize,
    pub error: usize,
    pub other: usize,
}

/// RAM totals. Only readings tagged `real` contribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RamTotals {
    pub used_mb: f64,
    pub limit_mb: f64,
    /// Agents whose usage could not be summed
    pub used_unreported: usize,
    /// Agents without a real limit (unlimited or unavailable)
    pub limit_unreported: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FleetSummary {
    pub counts: StatusCounts,
    pub ram: RamTotals,
}

impl FleetSummary {
    pub fn from_agents(agents: &[AgentRecord]) -> Self {
        let mut summary = Self::default();
        for agent in agents {
            summary.counts.total += 1;
            match agent.status {
                AgentStatus::Running => summary.counts.running += 1,
                AgentStatus::Stopped => summary.counts.stopped += 1,
                AgentStatus::Error => summary.counts.error += 1,
                AgentStatus::Other => summary.counts.other += 1,
            }
            match agent.ram_used.real_mb() {
                Some(mb) => summary.ram.used_mb += mb,
                None => summary.ram.used_unreported += 1,
            }
            match agent.ram_limit.real_mb() {
                Some(mb) => summary.ram.limit_mb += mb,
                None => summary.ram.limit_unreported += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
