// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action service: validates requests, invokes the selected backend and
//! mirrors forwarded outcomes into the store.

use crate::backend::{FleetAdapter, FleetBackend};
use serde::Serialize;
use thiserror::Error;
use zb_core::{
    ActionResult, ActivityReading, ActivityState, AgentAction, AgentPatch, AgentRecord, AgentStatus,
    Clock, UnsupportedAction,
};
use zb_storage::{FleetStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    UnsupportedAction(#[from] UnsupportedAction),
    #[error("agent_ids required")]
    NoAgents,
    #[error("task required")]
    EmptyTask,
    #[error("agent not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Per-agent result of a bulk action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub agent_id: String,
    pub ok: bool,
    pub message: String,
}

/// Run `action` against every id in order.
///
/// Validation happens before any backend call: an unknown action or an
/// empty id list fails the whole request.
pub async fn run_actions<C: Clock>(
    backend: &FleetBackend<C>,
    store: &FleetStore,
    action: &str,
    agent_ids: &[String],
    now: i64,
) -> Result<Vec<ActionOutcome>, ServiceError> {
    let action: AgentAction = action.parse()?;
    if agent_ids.is_empty() {
        return Err(ServiceError::NoAgents);
    }

    let mut outcomes = Vec::with_capacity(agent_ids.len());
    for agent_id in agent_ids {
        let result = backend.invoke_action(agent_id, action).await;
        tracing::info!(agent_id = %agent_id, %action, ok = result.ok, adapter = backend.name(), "action invoked");
        if result.ok && !backend.owns_store() {
            mirror_action(store, agent_id, action, &result.message, now)?;
        }
        outcomes.push(ActionOutcome { agent_id: agent_id.clone(), ok: result.ok, message: result.message });
    }
    Ok(outcomes)
}

fn mirror_action(
    store: &FleetStore,
    agent_id: &str,
    action: AgentAction,
    message: &str,
    now: i64,
) -> Result<(), StoreError> {
    let Some(current) = store.get(agent_id)? else {
        tracing::debug!(agent_id, %action, "forwarded action for untracked agent");
        return Ok(());
    };
    let mut patch = AgentPatch {
        last_activity: Some(ActivityReading::new(now, ActivityState::Event)),
        ..AgentPatch::default()
    };
    match action {
        AgentAction::Delete => {
            store.delete(agent_id)?;
            return Ok(());
        }
        AgentAction::Start => patch.status = Some(AgentStatus::Running),
        AgentAction::Stop => patch.status = Some(AgentStatus::Stopped),
        AgentAction::Restart => {
            patch.status = Some(AgentStatus::Running);
            patch.restart_count = Some(current.restart_count.saturating_add(1));
        }
    }
    store.update(agent_id, patch)?;
    store.append_log(agent_id, now, format!("{action} requested via adapter: {message}"))
}

/// Send a task to one agent.
pub async fn dispatch_task<C: Clock>(
    backend: &FleetBackend<C>,
    store: &FleetStore,
    agent_id: &str,
    task: &str,
    now: i64,
) -> Result<ActionResult, ServiceError> {
    let task = task.trim();
    if task.is_empty() {
        return Err(ServiceError::EmptyTask);
    }

    let result = backend.send_task(agent_id, task).await;
    tracing::info!(agent_id, ok = result.ok, adapter = backend.name(), "task dispatched");
    if result.ok && !backend.owns_store() && store.get(agent_id)?.is_some() {
        store.append_log(agent_id, now, format!("Task queued: {task}"))?;
        store.update(
            agent_id,
            AgentPatch {
                last_activity: Some(ActivityReading::new(now, ActivityState::Event)),
                ..AgentPatch::default()
            },
        )?;
    }
    Ok(result)
}

/// Replace an agent's template text.
pub fn set_template(
    store: &FleetStore,
    agent_id: &str,
    template: &str,
    now: i64,
) -> Result<AgentRecord, ServiceError> {
    let patch = AgentPatch { template: Some(template.to_string()), ..AgentPatch::default() };
    let record =
        store.update(agent_id, patch)?.ok_or_else(|| ServiceError::NotFound(agent_id.to_string()))?;
    store.append_log(agent_id, now, "Template updated")?;
    Ok(record)
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
