// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted agent record and the reliability tags carried by its metrics.
//!
//! Every derived value (memory, last activity) is stored together with a
//! state describing where it came from, so a consumer can tell "0 MB used"
//! apart from "usage could not be read".

use serde::{Deserialize, Serialize};

/// One tracked agent in the fleet inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Unique identity. Runtime-backed agents use their container name.
    pub id: String,
    pub name: String,
    pub status: AgentStatus,
    pub restart_count: u32,
    pub ram_used: MemoryReading,
    pub ram_limit: MemoryReading,
    pub uptime_sec: u64,
    pub last_activity: ActivityReading,
    /// Where external telemetry for this agent lives (e.g. "docker", "grafana")
    pub observability_backend: String,
    pub observability_details: String,
    /// Scheduling metadata, opaque to the inventory
    pub cron_native: String,
    pub cron_registry: String,
    pub model: String,
    pub template: String,
    pub template_state: TemplateState,
}

/// Normalized operational status.
///
/// Raw runtime strings never reach the store; they are mapped onto these
/// four values first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Running,
    Stopped,
    Error,
    Other,
}

crate::simple_display! {
    AgentStatus {
        Running => "running",
        Stopped => "stopped",
        Error => "error",
        Other => "other",
    }
}

/// Reliability of a memory figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryState {
    /// Read from the runtime
    Real,
    /// Runtime reports no configured ceiling
    Unlimited,
    /// Could not be determined
    Unavailable,
}

crate::simple_display! {
    MemoryState {
        Real => "real",
        Unlimited => "unlimited",
        Unavailable => "unavailable",
    }
}

/// A memory value in MiB paired with its reliability state.
///
/// `mb` is only ever `Some` when `state` is [`MemoryState::Real`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryReading {
    pub mb: Option<f64>,
    pub state: MemoryState,
}

impl MemoryReading {
    pub fn real(mb: f64) -> Self {
        Self { mb: Some(mb), state: MemoryState::Real }
    }

    pub fn unlimited() -> Self {
        Self { mb: None, state: MemoryState::Unlimited }
    }

    pub fn unavailable() -> Self {
        Self { mb: None, state: MemoryState::Unavailable }
    }

    /// The value, if it is a real reading.
    pub fn real_mb(&self) -> Option<f64> {
        match self.state {
            MemoryState::Real => self.mb,
            _ => None,
        }
    }
}

impl std::fmt::Display for MemoryReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.state, self.mb) {
            (MemoryState::Real, Some(mb)) => write!(f, "{mb:.2} MB"),
            (state, _) => write!(f, "{state}"),
        }
    }
}

/// Provenance of a last-activity timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityState {
    /// Timestamp of the latest observed log line
    Log,
    /// Lifecycle event (start/finish, action, task dispatch)
    Event,
    /// Produced by the simulated backend
    Synthetic,
    Unavailable,
}

crate::simple_display! {
    ActivityState {
        Log => "log",
        Event => "event",
        Synthetic => "synthetic",
        Unavailable => "unavailable",
    }
}

/// Last-activity epoch seconds paired with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityReading {
    pub ts: Option<i64>,
    pub state: ActivityState,
}

impl ActivityReading {
    pub fn new(ts: i64, state: ActivityState) -> Self {
        Self { ts: Some(ts), state }
    }

    pub fn unavailable() -> Self {
        Self { ts: None, state: ActivityState::Unavailable }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateState {
    Configured,
    Unknown,
}

crate::simple_display! {
    TemplateState {
        Configured => "configured",
        Unknown => "unknown",
    }
}

impl TemplateState {
    /// Derive the state from template text: any non-empty body counts as configured.
    pub fn of(template: &str) -> Self {
        if template.is_empty() {
            Self::Unknown
        } else {
            Self::Configured
        }
    }
}

/// Field-level update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentPatch {
    pub status: Option<AgentStatus>,
    pub restart_count: Option<u32>,
    pub ram_used: Option<MemoryReading>,
    pub uptime_sec: Option<u64>,
    pub last_activity: Option<ActivityReading>,
    pub template: Option<String>,
}

impl AgentPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, record: &mut AgentRecord) {
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(count) = self.restart_count {
            record.restart_count = count;
        }
        if let Some(ram_used) = self.ram_used {
            record.ram_used = ram_used;
        }
        if let Some(uptime) = self.uptime_sec {
            record.uptime_sec = uptime;
        }
        if let Some(activity) = self.last_activity {
            record.last_activity = activity;
        }
        if let Some(template) = self.template {
            record.template_state = TemplateState::of(&template);
            record.template = template;
        }
    }
}

crate::builder! {
    pub struct AgentRecordBuilder => AgentRecord {
        into {
            id: String = "zb-test",
            name: String = "zb-test",
            observability_backend: String = "none",
            observability_details: String = "",
            cron_native: String = "n/a",
            cron_registry: String = "n/a",
            model: String = "unknown",
            template: String = "",
        }
        set {
            status: AgentStatus = AgentStatus::Running,
            restart_count: u32 = 0,
            ram_used: MemoryReading = MemoryReading::unavailable(),
            ram_limit: MemoryReading = MemoryReading::unavailable(),
            uptime_sec: u64 = 0,
            last_activity: ActivityReading = ActivityReading::unavailable(),
            template_state: TemplateState = TemplateState::Unknown,
        }
    }
}

#[cfg(test)]
#[path = "agent_record_tests.rs"]
mod tests;
