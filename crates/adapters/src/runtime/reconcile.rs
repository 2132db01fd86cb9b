// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot → canonical record conversion and upsert-then-prune
//! reconciliation against the store.

use super::activity;
use super::labels::{detect_model, detect_template};
use super::metrics::{memory_limit, memory_used};
use super::snapshot::ContainerSnapshot;
use std::collections::HashSet;
use zb_core::{AgentRecord, AgentStatus, RefreshResult, TemplateState};
use zb_storage::FleetStore;

pub const REFRESHED_MESSAGE: &str = "docker inventory refreshed";

/// Map a raw runtime state onto the four persisted statuses.
pub fn normalize_status(state: &str) -> AgentStatus {
    match state {
        "running" => AgentStatus::Running,
        "exited" | "dead" | "created" => AgentStatus::Stopped,
        "restarting" | "paused" => AgentStatus::Error,
        _ => AgentStatus::Other,
    }
}

/// The record a snapshot stands for at time `now`.
pub fn canonical_record(snapshot: &ContainerSnapshot, now: i64) -> AgentRecord {
    let status = normalize_status(&snapshot.state);
    let uptime_sec = match (status, snapshot.started_at) {
        (AgentStatus::Running, Some(started)) => now.saturating_sub(started).max(0) as u64,
        _ => 0,
    };
    let inspection = snapshot.inspection.as_ref();
    let template = detect_template(inspection);

    AgentRecord {
        id: snapshot.name.clone(),
        name: snapshot.name.clone(),
        status,
        restart_count: snapshot.restart_count,
        ram_used: memory_used(snapshot.stats.as_ref()),
        ram_limit: memory_limit(inspection),
        uptime_sec,
        last_activity: activity::resolve(snapshot),
        observability_backend: "docker".to_string(),
        observability_details: format!("container:{}", snapshot.short_id),
        cron_native: "n/a".to_string(),
        cron_registry: "n/a".to_string(),
        model: detect_model(inspection),
        template_state: TemplateState::of(&template),
        template,
    }
}

/// Upsert every snapshot, then prune records in the `prefix` namespace that
/// were not observed.
///
/// Records outside the namespace are never deleted. A store failure stops the
/// cycle and is reported as a failed refresh; writes already made are kept.
///
/// Cycles are not serialized against each other. Each store operation is its
/// own transaction, so overlapping cycles resolve as last-writer-wins.
pub fn reconcile(
    store: &FleetStore,
    prefix: &str,
    now: i64,
    snapshots: &[ContainerSnapshot],
) -> RefreshResult {
    let mut seen = HashSet::new();
    for snapshot in snapshots {
        let record = canonical_record(snapshot, now);
        if let Err(e) = store.upsert(record) {
            tracing::warn!(agent_id = %snapshot.name, error = %e, "reconcile upsert failed");
            return RefreshResult::failed(format!("store error: {e}"));
        }
        seen.insert(snapshot.name.clone());
    }

    if prefix.is_empty() {
        tracing::warn!("empty managed prefix, skipping prune");
    } else {
        match store.delete_with_prefix_except(prefix, &seen) {
            Ok(pruned) if !pruned.is_empty() => {
                tracing::info!(count = pruned.len(), ids = ?pruned, "pruned vanished containers");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "reconcile prune failed");
                return RefreshResult::failed(format!("store error: {e}"));
            }
        }
    }

    tracing::info!(updated = snapshots.len(), "docker inventory reconciled");
    RefreshResult::ok(REFRESHED_MESSAGE, snapshots.len())
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
