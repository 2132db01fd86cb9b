// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container-runtime backend.
//!
//! Derives ground truth for managed agents from the runtime's Unix socket
//! API and reconciles it into the store.
//!
//! # Module layout
//!
//! - [`http`]: socket HTTP client ([`chunked`] decodes chunked bodies)
//! - [`payload`]: typed, all-optional views of the JSON payloads
//! - [`metrics`], [`activity`], [`labels`]: per-field extractors
//! - [`fetcher`]: listing and per-container enrichment
//! - [`reconcile`]: snapshot → record, upsert then prune
//! - [`logs`]: live log tail with store fallback
//!
//! A refresh cycle is `fetcher` → `reconcile`. Log tailing is independent.

pub mod activity;
pub mod chunked;
pub mod fetcher;
pub mod http;
pub mod labels;
pub mod logs;
pub mod metrics;
pub mod payload;
pub mod reconcile;
pub mod snapshot;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod fake;

pub use fetcher::InventoryFetcher;
pub use http::SocketHttpClient;
pub use snapshot::ContainerSnapshot;
#[cfg(any(test, feature = "test-support"))]
pub use snapshot::ContainerSnapshotBuilder;

use crate::backend::FleetAdapter;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use zb_core::{
    ActionResult, ActivityReading, ActivityState, AgentAction, AgentPatch, Clock, Dispatch, LogLine,
    RefreshResult, SystemClock, MANAGED_PREFIX,
};
use zb_storage::{FleetStore, StoreError};

pub const DEFAULT_SOCKET_PATH: &str = "/var/run/docker.sock";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors from a single runtime API call
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Socket missing, connection refused, or the stream broke
    #[error("{0}")]
    Connectivity(String),
    /// Non-2xx status line
    #[error("docker HTTP error: {0}")]
    Protocol(String),
    /// Malformed JSON
    #[error("docker parse error: {0}")]
    Parse(String),
    #[error("docker request timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerConfig {
    pub socket_path: PathBuf,
    /// Deadline for one request (connect + write + read)
    pub request_timeout: Duration,
    /// Agent ids owned by reconciliation
    pub prefix: String,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            prefix: MANAGED_PREFIX.to_string(),
        }
    }
}

/// Read-only runtime backend: lifecycle actions are refused, tasks are only
/// recorded.
#[derive(Debug, Clone)]
pub struct DockerAdapter<C: Clock = SystemClock> {
    store: FleetStore,
    client: SocketHttpClient,
    prefix: String,
    clock: C,
}

impl<C: Clock> DockerAdapter<C> {
    pub fn new(store: FleetStore, config: DockerConfig, clock: C) -> Self {
        Self {
            store,
            client: SocketHttpClient::new(config.socket_path, config.request_timeout),
            prefix: config.prefix,
            clock,
        }
    }

    pub fn fetcher(&self) -> InventoryFetcher<'_> {
        InventoryFetcher::new(&self.client, &self.prefix)
    }

    fn record_task(&self, agent_id: &str, task: &str) -> Result<ActionResult, StoreError> {
        if self.store.get(agent_id)?.is_none() {
            return Ok(ActionResult::failed("agent not found"));
        }
        let now = self.clock.epoch_secs();
        self.store.append_log(agent_id, now, format!("Mock dispatch queued: {task}"))?;
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
        Ok(ActionResult::ok("mock task accepted (no container mutation)"))
    }
}

#[async_trait]
impl<C: Clock> FleetAdapter for DockerAdapter<C> {
    fn name(&self) -> &'static str {
        "docker"
    }

    async fn invoke_action(&self, agent_id: &str, action: AgentAction) -> ActionResult {
        tracing::debug!(agent_id, %action, "refusing action on read-only docker backend");
        ActionResult::failed("docker adapter is read-only (actions disabled for safety)")
    }

    async fn send_task(&self, agent_id: &str, task: &str) -> ActionResult {
        self.record_task(agent_id, task)
            .unwrap_or_else(|e| ActionResult::failed(format!("store error: {e}")))
    }

    async fn refresh_agents(&self) -> RefreshResult {
        let snapshots = match self.fetcher().list().await {
            Ok(snapshots) => snapshots,
            Err(e) => {
                tracing::warn!(error = %e, "docker refresh failed");
                return RefreshResult::failed(e.to_string());
            }
        };
        reconcile::reconcile(&self.store, &self.prefix, self.clock.epoch_secs(), &snapshots)
    }

    async fn tail_logs(&self, agent_id: &str, limit: usize) -> Result<Vec<LogLine>, StoreError> {
        logs::tail(&self.client, &self.store, &self.prefix, agent_id, limit, self.clock.epoch_secs()).await
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
