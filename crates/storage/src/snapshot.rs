// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk snapshot of the fleet state.
//!
//! The whole state is written to a temporary sibling file and renamed over
//! the target, so readers only ever observe a complete snapshot.

use crate::{FleetState, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Current snapshot schema version
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of the store file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version for migrations
    #[serde(rename = "v")]
    pub version: u32,
    pub state: FleetState,
    /// When this snapshot was written
    pub saved_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    #[serde(rename = "v")]
    version: u32,
    state: &'a FleetState,
    saved_at: DateTime<Utc>,
}

/// Read the snapshot at `path`. A missing file is `Ok(None)`.
pub(crate) fn load(path: &Path) -> Result<Option<FleetState>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
    if snapshot.version > CURRENT_SNAPSHOT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: snapshot.version,
            supported: CURRENT_SNAPSHOT_VERSION,
        });
    }
    Ok(Some(snapshot.state))
}

/// Atomically replace the snapshot at `path`.
pub(crate) fn save(path: &Path, state: &FleetState) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let snapshot = SnapshotRef { version: CURRENT_SNAPSHOT_VERSION, state, saved_at: Utc::now() };
    let json = serde_json::to_vec_pretty(&snapshot)?;

    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, json)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

/// Unique per process and per write, so concurrent writers never share a temp file.
fn tmp_path_for(path: &Path) -> PathBuf {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    path.with_extension(format!("{}.{seq}.tmp", std::process::id()))
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
