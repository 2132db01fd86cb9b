// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::payload::{Inspection, Stats};

/// One container as observed during a refresh cycle.
///
/// Enrichment payloads are `None` when their lookup failed; the extractors
/// turn that into an `unavailable` reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerSnapshot {
    /// Container name without the leading `/`; doubles as the agent id
    pub name: String,
    /// Raw runtime state, lower-cased
    pub state: String,
    pub short_id: String,
    pub started_at: Option<i64>,
    pub restart_count: u32,
    pub inspection: Option<Inspection>,
    pub stats: Option<Stats>,
    /// Epoch seconds of the most recent log line
    pub last_log_ts: Option<i64>,
}

zb_core::builder! {
    pub struct ContainerSnapshotBuilder => ContainerSnapshot {
        into {
            name: String = "zeroclaw-test",
            state: String = "running",
            short_id: String = "0123456789ab",
        }
        set {
            restart_count: u32 = 0,
            inspection: Option<Inspection> = None,
            stats: Option<Stats> = None,
        }
        option {
            started_at: i64 = None,
            last_log_ts: i64 = None,
        }
    }
}
