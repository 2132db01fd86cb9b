// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{http_client, post_json, SOURCE};
use crate::backend::{BackendError, FleetAdapter};
use async_trait::async_trait;
use serde_json::json;
use zb_core::{ActionResult, AgentAction, LogLine, RefreshResult};
use zb_storage::{FleetStore, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenClawConfig {
    /// Gateway endpoint tasks are POSTed to
    pub gateway_url: Option<String>,
}

/// Forwards tasks to an OpenClaw gateway. Lifecycle actions are unsupported.
#[derive(Debug, Clone)]
pub struct OpenClawAdapter {
    store: FleetStore,
    config: OpenClawConfig,
    client: reqwest::Client,
}

impl OpenClawAdapter {
    pub fn new(store: FleetStore, config: OpenClawConfig) -> Result<Self, BackendError> {
        Ok(Self { store, config, client: http_client()? })
    }
}

#[async_trait]
impl FleetAdapter for OpenClawAdapter {
    fn name(&self) -> &'static str {
        "openclaw"
    }

    async fn invoke_action(&self, _agent_id: &str, action: AgentAction) -> ActionResult {
        ActionResult::failed(format!("openclaw adapter does not support action '{action}'"))
    }

    async fn send_task(&self, agent_id: &str, task: &str) -> ActionResult {
        let Some(url) = self.config.gateway_url.as_deref() else {
            return ActionResult::failed("missing OPENCLAW gateway URL env");
        };
        let payload = json!({ "agent_id": agent_id, "task": task, "source": SOURCE });
        post_json(&self.client, "openclaw gateway", url, None, &payload, "task forwarded to openclaw gateway")
            .await
    }

    async fn refresh_agents(&self) -> RefreshResult {
        RefreshResult::failed("openclaw adapter does not support refresh")
    }

    async fn tail_logs(&self, agent_id: &str, limit: usize) -> Result<Vec<LogLine>, StoreError> {
        self.store.tail_logs(agent_id, limit)
    }
}

#[cfg(test)]
#[path = "openclaw_tests.rs"]
mod tests;
