// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fleet capability interface and the closed set of backends.

use crate::runtime::{DockerAdapter, DockerConfig};
use crate::simulated::SimulatedAdapter;
use crate::webhook::{ClawTrolAdapter, ClawTrolConfig, OpenClawAdapter, OpenClawConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use zb_core::{ActionResult, AgentAction, Clock, LogLine, RefreshResult, SystemClock};
use zb_storage::{FleetStore, StoreError};

/// What every backend can do for the fleet.
///
/// Operations report failure through `ok == false` outcomes; only log
/// reads surface store errors.
#[async_trait]
pub trait FleetAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    async fn invoke_action(&self, agent_id: &str, action: AgentAction) -> ActionResult;

    async fn send_task(&self, agent_id: &str, task: &str) -> ActionResult;

    async fn refresh_agents(&self) -> RefreshResult;

    /// Most recent `limit` lines, oldest first.
    async fn tail_logs(&self, agent_id: &str, limit: usize) -> Result<Vec<LogLine>, StoreError>;
}

/// Backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    /// Simulated fleet kept entirely in the store
    None,
    Docker,
    OpenClaw,
    ClawTrol,
}

zb_core::simple_display! {
    AdapterKind {
        None => "none",
        Docker => "docker",
        OpenClaw => "openclaw",
        ClawTrol => "clawtrol",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown adapter: {0}")]
pub struct UnknownAdapter(pub String);

impl FromStr for AdapterKind {
    type Err = UnknownAdapter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "docker" => Ok(Self::Docker),
            "openclaw" => Ok(Self::OpenClaw),
            "clawtrol" => Ok(Self::ClawTrol),
            _ => Err(UnknownAdapter(s.to_string())),
        }
    }
}

/// Errors constructing a backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Per-backend settings; only the selected backend's entry is used.
#[derive(Debug, Clone, Default)]
pub struct BackendSettings {
    pub docker: DockerConfig,
    pub openclaw: OpenClawConfig,
    pub clawtrol: ClawTrolConfig,
}

pub enum FleetBackend<C: Clock = SystemClock> {
    Simulated(SimulatedAdapter<C>),
    Docker(DockerAdapter<C>),
    OpenClaw(OpenClawAdapter),
    ClawTrol(ClawTrolAdapter),
}

impl<C: Clock> FleetBackend<C> {
    pub fn build(
        kind: AdapterKind,
        store: FleetStore,
        settings: BackendSettings,
        clock: C,
    ) -> Result<Self, BackendError> {
        tracing::debug!(adapter = %kind, "building fleet backend");
        Ok(match kind {
            AdapterKind::None => Self::Simulated(SimulatedAdapter::new(store, clock)),
            AdapterKind::Docker => Self::Docker(DockerAdapter::new(store, settings.docker, clock)),
            AdapterKind::OpenClaw => Self::OpenClaw(OpenClawAdapter::new(store, settings.openclaw)?),
            AdapterKind::ClawTrol => Self::ClawTrol(ClawTrolAdapter::new(store, settings.clawtrol)?),
        })
    }

    pub fn kind(&self) -> AdapterKind {
        match self {
            Self::Simulated(_) => AdapterKind::None,
            Self::Docker(_) => AdapterKind::Docker,
            Self::OpenClaw(_) => AdapterKind::OpenClaw,
            Self::ClawTrol(_) => AdapterKind::ClawTrol,
        }
    }

    /// Whether the backend keeps the store in sync itself.
    ///
    /// Forwarding backends only relay requests; their successful outcomes
    /// are mirrored into the store by the action service.
    pub fn owns_store(&self) -> bool {
        matches!(self, Self::Simulated(_) | Self::Docker(_))
    }

    fn adapter(&self) -> &dyn FleetAdapter {
        match self {
            Self::Simulated(a) => a,
            Self::Docker(a) => a,
            Self::OpenClaw(a) => a,
            Self::ClawTrol(a) => a,
        }
    }
}

#[async_trait]
impl<C: Clock> FleetAdapter for FleetBackend<C> {
    fn name(&self) -> &'static str {
        self.adapter().name()
    }

    async fn invoke_action(&self, agent_id: &str, action: AgentAction) -> ActionResult {
        self.adapter().invoke_action(agent_id, action).await
    }

    async fn send_task(&self, agent_id: &str, task: &str) -> ActionResult {
        self.adapter().send_task(agent_id, task).await
    }

    async fn refresh_agents(&self) -> RefreshResult {
        self.adapter().refresh_agents().await
    }

    async fn tail_logs(&self, agent_id: &str, limit: usize) -> Result<Vec<LogLine>, StoreError> {
        self.adapter().tail_logs(agent_id, limit).await
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
