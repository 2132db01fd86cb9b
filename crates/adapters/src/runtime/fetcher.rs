// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container listing and per-container enrichment.

use super::http::SocketHttpClient;
use super::logs::{demux, split_timestamp};
use super::payload::{ContainerSummary, Inspection, Stats};
use super::snapshot::ContainerSnapshot;
use super::timestamp::parse_rfc3339;
use super::RuntimeError;
use zb_core::is_managed;

pub struct InventoryFetcher<'a> {
    client: &'a SocketHttpClient,
    prefix: &'a str,
}

impl<'a> InventoryFetcher<'a> {
    pub fn new(client: &'a SocketHttpClient, prefix: &'a str) -> Self {
        Self { client, prefix }
    }

    /// List managed containers and enrich each one.
    ///
    /// Only the listing call can fail the whole operation. Inspection, stats
    /// and latest-log lookups fail independently per container and leave the
    /// corresponding snapshot field empty.
    pub async fn list(&self) -> Result<Vec<ContainerSnapshot>, RuntimeError> {
        let rows: Vec<ContainerSummary> = self.client.get_json(&listing_path(self.prefix)).await?;

        let mut snapshots = Vec::new();
        for row in &rows {
            let Some(name) = row.name() else { continue };
            if !is_managed(name, self.prefix) {
                continue;
            }
            snapshots.push(self.enrich(row, name).await);
        }
        tracing::debug!(listed = rows.len(), managed = snapshots.len(), "docker listing fetched");
        Ok(snapshots)
    }

    async fn enrich(&self, row: &ContainerSummary, name: &str) -> ContainerSnapshot {
        let encoded = urlencoding::encode(name);
        let inspection: Option<Inspection> =
            self.lookup(name, "inspect", &format!("/containers/{encoded}/json")).await;
        let stats: Option<Stats> =
            self.lookup(name, "stats", &format!("/containers/{encoded}/stats?stream=false")).await;
        let last_log_ts = self.latest_log_ts(name).await;

        ContainerSnapshot {
            name: name.to_string(),
            state: row.state(),
            short_id: row.short_id(),
            started_at: inspection.as_ref().and_then(Inspection::started_at).and_then(parse_rfc3339),
            restart_count: inspection.as_ref().and_then(Inspection::restart_count).unwrap_or(0),
            inspection,
            stats,
            last_log_ts,
        }
    }

    async fn lookup<T: serde::de::DeserializeOwned>(&self, name: &str, what: &str, path: &str) -> Option<T> {
        match self.client.get_json(path).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(container = name, lookup = what, error = %e, "docker lookup failed");
                None
            }
        }
    }

    async fn latest_log_ts(&self, name: &str) -> Option<i64> {
        let path = format!("{}&tail=1", log_path(name));
        let body = match self.client.get_bytes(&path).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(container = name, lookup = "logs", error = %e, "docker lookup failed");
                return None;
            }
        };
        let text = String::from_utf8_lossy(&demux(&body)).into_owned();
        let last = text.lines().rev().find(|line| !line.trim().is_empty())?;
        split_timestamp(last).0
    }
}

/// Listing restricted to names containing `prefix`, including stopped containers.
pub(crate) fn listing_path(prefix: &str) -> String {
    let filters = serde_json::json!({ "name": [prefix] }).to_string();
    format!("/containers/json?all=1&filters={}", urlencoding::encode(&filters))
}

/// Log endpoint for a container, without the tail bound.
pub(crate) fn log_path(name: &str) -> String {
    format!("/containers/{}/logs?stdout=1&stderr=1&timestamps=1", urlencoding::encode(name))
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod tests;
