// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{http_client, post_json, SOURCE};
use crate::backend::{BackendError, FleetAdapter};
use async_trait::async_trait;
use serde_json::json;
use zb_core::{ActionResult, AgentAction, LogLine, RefreshResult};
use zb_storage::{FleetStore, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClawTrolConfig {
    /// Base URL; `/agents/<id>/...` is appended
    pub api_url: Option<String>,
    pub api_token: Option<String>,
}

/// Forwards actions and tasks to the ClawTrol API with bearer auth.
#[derive(Debug, Clone)]
pub struct ClawTrolAdapter {
    store: FleetStore,
    config: ClawTrolConfig,
    client: reqwest::Client,
}

impl ClawTrolAdapter {
    pub fn new(store: FleetStore, config: ClawTrolConfig) -> Result<Self, BackendError> {
        Ok(Self { store, config, client: http_client()? })
    }

    async fn post(&self, agent_id: &str, endpoint: &str, payload: serde_json::Value, success: &str) -> ActionResult {
        let Some(base) = self.config.api_url.as_deref() else {
            return ActionResult::failed("missing CLAWTROL API URL env");
        };
        let Some(token) = self.config.api_token.as_deref() else {
            return ActionResult::failed("missing CLAWTROL API token env");
        };
        let url = format!(
            "{}/agents/{}/{endpoint}",
            base.trim_end_matches('/'),
            urlencoding::encode(agent_id)
        );
        post_json(&self.client, "clawtrol API", &url, Some(token), &payload, success).await
    }
}

#[async_trait]
impl FleetAdapter for ClawTrolAdapter {
    fn name(&self) -> &'static str {
        "clawtrol"
    }

    async fn invoke_action(&self, agent_id: &str, action: AgentAction) -> ActionResult {
        let payload = json!({ "action": action, "source": SOURCE });
        self.post(agent_id, "actions", payload, "action sent to clawtrol").await
    }

    async fn send_task(&self, agent_id: &str, task: &str) -> ActionResult {
        let payload = json!({ "task": task, "source": SOURCE });
        self.post(agent_id, "tasks", payload, "task queued in clawtrol").await
    }

    async fn refresh_agents(&self) -> RefreshResult {
        RefreshResult::failed("clawtrol adapter does not support refresh")
    }

    async fn tail_logs(&self, agent_id: &str, limit: usize) -> Result<Vec<LogLine>, StoreError> {
        self.store.tail_logs(agent_id, limit)
    }
}

#[cfg(test)]
#[path = "clawtrol_tests.rs"]
mod tests;
