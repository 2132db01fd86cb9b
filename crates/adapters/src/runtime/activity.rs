// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::snapshot::ContainerSnapshot;
use super::timestamp::parse_rfc3339;
use zb_core::{ActivityReading, ActivityState};

/// Most trustworthy last-activity timestamp for a container.
///
/// Latest log line first, then the later of the finish/start lifecycle
/// events, otherwise unavailable.
pub fn resolve(snapshot: &ContainerSnapshot) -> ActivityReading {
    if let Some(ts) = snapshot.last_log_ts {
        return ActivityReading::new(ts, ActivityState::Log);
    }
    let lifecycle = snapshot.inspection.as_ref().and_then(|inspection| {
        let finished = inspection.finished_at().and_then(parse_rfc3339);
        let started = inspection.started_at().and_then(parse_rfc3339);
        finished.max(started)
    });
    match lifecycle {
        Some(ts) => ActivityReading::new(ts, ActivityState::Event),
        None => ActivityReading::unavailable(),
    }
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
