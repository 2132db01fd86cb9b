// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed views of the runtime's JSON payloads.
//!
//! Every field is optional: the runtime omits, nulls, or blanks fields
//! depending on container state and version, and absent values must reach the
//! extractors as `None` rather than as a silent default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// One row of the container listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    pub id: Option<String>,
    pub names: Option<Vec<String>>,
    pub state: Option<String>,
}

impl ContainerSummary {
    /// First name without the runtime's leading `/`.
    pub fn name(&self) -> Option<&str> {
        let name = self.names.as_ref()?.first()?;
        let name = name.strip_prefix('/').unwrap_or(name);
        (!name.is_empty()).then_some(name)
    }

    /// Lower-cased raw state, empty when absent.
    pub fn state(&self) -> String {
        self.state.as_deref().unwrap_or_default().to_ascii_lowercase()
    }

    /// First 12 characters of the container id.
    pub fn short_id(&self) -> String {
        self.id.as_deref().unwrap_or_default().chars().take(12).collect()
    }
}

/// Single-container inspection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Inspection {
    pub state: Option<InspectState>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub restart_count: Option<f64>,
    pub host_config: Option<HostConfig>,
    pub config: Option<ContainerConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InspectState {
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostConfig {
    /// Memory ceiling in bytes; 0 means no ceiling
    #[serde(default, deserialize_with = "lenient_number")]
    pub memory: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerConfig {
    /// `KEY=value` assignments
    pub env: Option<Vec<String>>,
    pub labels: Option<BTreeMap<String, String>>,
}

impl Inspection {
    pub fn started_at(&self) -> Option<&str> {
        self.state.as_ref()?.started_at.as_deref()
    }

    pub fn finished_at(&self) -> Option<&str> {
        self.state.as_ref()?.finished_at.as_deref()
    }

    pub fn restart_count(&self) -> Option<u32> {
        self.restart_count.filter(|n| *n >= 0.0).map(|n| n as u32)
    }

    pub fn memory_limit_bytes(&self) -> Option<f64> {
        self.host_config.as_ref()?.memory
    }

    pub fn env(&self) -> &[String] {
        self.config.as_ref().and_then(|c| c.env.as_deref()).unwrap_or_default()
    }

    /// A label value, treating empty strings as absent.
    pub fn label(&self, key: &str) -> Option<&str> {
        let value = self.config.as_ref()?.labels.as_ref()?.get(key)?;
        (!value.is_empty()).then_some(value.as_str())
    }
}

/// Non-streaming resource stats. Unlike the other payloads these keys are
/// snake_case on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stats {
    pub memory_stats: Option<MemoryStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MemoryStats {
    #[serde(default, deserialize_with = "lenient_number")]
    pub usage: Option<f64>,
}

impl Stats {
    pub fn memory_usage_bytes(&self) -> Option<f64> {
        self.memory_stats.as_ref()?.usage
    }
}

/// Accept a JSON number or a numeric string; `null`, `""` and anything
/// unparsable become `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
