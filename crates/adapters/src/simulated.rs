// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend that simulates the fleet entirely inside the store.

use crate::backend::FleetAdapter;
use async_trait::async_trait;
use zb_core::{
    ActionResult, ActivityReading, ActivityState, AgentAction, AgentPatch, AgentStatus, Clock,
    Dispatch, LogLine, MemoryReading, RefreshResult, SystemClock,
};
use zb_storage::{FleetStore, StoreError};

/// Simulated RAM growth per refresh for a running agent
const RAM_STEP_MB: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct SimulatedAdapter<C: Clock = SystemClock> {
    store: FleetStore,
    clock: C,
}

impl<C: Clock> SimulatedAdapter<C> {
    pub fn new(store: FleetStore, clock: C) -> Self {
        Self { store, clock }
    }

    fn apply_action(&self, agent_id: &str, action: AgentAction) -> Result<ActionResult, StoreError> {
        let Some(agent) = self.store.get(agent_id)? else {
            return Ok(ActionResult::failed("agent not found"));
        };
        let now = self.clock.epoch_secs();
        let mut patch = AgentPatch {
            last_activity: Some(ActivityReading::new(now, ActivityState::Event)),
            ..AgentPatch::default()
        };
        match action {
            AgentAction::Start => patch.status = Some(AgentStatus::Running),
            AgentAction::Stop => {
                patch.status = Some(AgentStatus::Stopped);
                patch.ram_used = Some(MemoryReading::real(0.0));
                patch.uptime_sec = Some(0);
            }
            AgentAction::Restart => {
                patch.status = Some(AgentStatus::Running);
                patch.restart_count = Some(agent.restart_count.saturating_add(1));
            }
            AgentAction::Delete => {
                self.store.delete(agent_id)?;
                return Ok(ActionResult::ok("agent deleted"));
            }
        }
        self.store.update(agent_id, patch)?;
        self.store.append_log(agent_id, now, format!("Action invoked: {action}"))?;
        Ok(ActionResult::ok(format!("action {action} executed")))
    }

    fn queue_task(&self, agent_id: &str, task: &str) -> Result<ActionResult, StoreError> {
        if self.store.get(agent_id)?.is_none() {
            return Ok(ActionResult::failed("agent not found"));
        }
        let now = self.clock.epoch_secs();
        self.store.append_log(agent_id, now, format!("Task queued: {task}"))?;
        self.store.record_dispatch(Dispatch {
            id: uuid::Uuid::new_v4().to_string(),
            agent_id: agent_id.to_string(),
            task: task.to_string(),
            created_at: now,
        })?;
        self.store.update(
            agent_id,
            AgentPatch {
                last_activity: Some(ActivityReading::new(now, ActivityState::Event)),
                ..AgentPatch::default()
            },
        )?;
        Ok(ActionResult::ok("task queued"))
    }

    /// Advance every running agent to `now`: uptime grows by the time since
    /// its last activity and RAM creeps towards its limit.
    fn advance(&self) -> Result<RefreshResult, StoreError> {
        let now = self.clock.epoch_secs();
        let mut updated = 0;
        for agent in self.store.list()? {
            if agent.status != AgentStatus::Running {
                continue;
            }
            let elapsed = (now - agent.last_activity.ts.unwrap_or(now)).max(0) as u64;
            let mut patch = AgentPatch {
                last_activity: Some(ActivityReading::new(now, ActivityState::Synthetic)),
                ..AgentPatch::default()
            };
            if elapsed > 0 {
                patch.uptime_sec = Some(agent.uptime_sec.saturating_add(elapsed));
            }
            let used = agent.ram_used.real_mb().unwrap_or(0.0);
            if let Some(limit) = agent.ram_limit.real_mb().filter(|limit| used < *limit) {
                patch.ram_used = Some(MemoryReading::real((used + RAM_STEP_MB).min(limit)));
            }
            self.store.update(&agent.id, patch)?;
            updated += 1;
        }
        let message =
            if updated > 0 { "simulated refresh applied" } else { "no running agents to refresh" };
        Ok(RefreshResult::ok(message, updated))
    }
}

#[async_trait]
impl<C: Clock> FleetAdapter for SimulatedAdapter<C> {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn invoke_action(&self, agent_id: &str, action: AgentAction) -> ActionResult {
        self.apply_action(agent_id, action)
            .unwrap_or_else(|e| ActionResult::failed(format!("store error: {e}")))
    }

    async fn send_task(&self, agent_id: &str, task: &str) -> ActionResult {
        self.queue_task(agent_id, task)
            .unwrap_or_else(|e| ActionResult::failed(format!("store error: {e}")))
    }

    async fn refresh_agents(&self) -> RefreshResult {
        self.advance().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "simulated refresh failed");
            RefreshResult::failed(format!("store error: {e}"))
        })
    }

    async fn tail_logs(&self, agent_id: &str, limit: usize) -> Result<Vec<LogLine>, StoreError> {
        self.store.tail_logs(agent_id, limit)
    }
}

#[cfg(test)]
#[path = "simulated_tests.rs"]
mod tests;
