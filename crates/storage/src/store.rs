// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared handle to the fleet state.
//!
//! A file-backed store treats the snapshot file as the source of truth: every
//! operation reloads it, and every mutation writes it back before returning.
//! Each call is therefore its own transaction. Two handles (or two processes)
//! mutating the same record interleave as last-writer-wins; there is no
//! cross-process lock.

use crate::seed::{seed_agents, SEED_LOGS};
use crate::snapshot;
use crate::state::{FleetState, Upsert};
use crate::StoreError;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use zb_core::{AgentPatch, AgentRecord, Dispatch, LogLine};

#[derive(Clone, Debug)]
pub struct FleetStore {
    state: Arc<Mutex<FleetState>>,
    path: Option<PathBuf>,
}

impl FleetStore {
    /// Open (or lazily create) a store persisted at `path`.
    ///
    /// An existing file is read immediately so a corrupt snapshot is reported
    /// up front instead of on the first operation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = snapshot::load(&path)?.unwrap_or_default();
        tracing::debug!(path = %path.display(), agents = state.agents.len(), "opened fleet store");
        Ok(Self { state: Arc::new(Mutex::new(state)), path: Some(path) })
    }

    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self { state: Arc::new(Mutex::new(FleetState::default())), path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read<T>(&self, f: impl FnOnce(&FleetState) -> T) -> Result<T, StoreError> {
        let mut state = self.state.lock();
        if let Some(path) = &self.path {
            *state = snapshot::load(path)?.unwrap_or_default();
        }
        Ok(f(&state))
    }

    fn write<T>(&self, f: impl FnOnce(&mut FleetState) -> T) -> Result<T, StoreError> {
        let mut state = self.state.lock();
        if let Some(path) = &self.path {
            *state = snapshot::load(path)?.unwrap_or_default();
        }
        let out = f(&mut state);
        if let Some(path) = &self.path {
            snapshot::save(path, &state)?;
        }
        Ok(out)
    }

    /// Seed the demo inventory if the store holds no agents.
    ///
    /// Returns whether seeding happened.
    pub fn seed_if_empty(&self, now: i64) -> Result<bool, StoreError> {
        let seeded = self.write(|state| {
            if !state.is_empty() {
                return false;
            }
            for record in seed_agents(now) {
                state.upsert(record);
            }
            for (agent_id, line) in SEED_LOGS {
                state.append_log(agent_id, now, line);
            }
            true
        })?;
        if seeded {
            tracing::info!("seeded empty fleet store with demo agents");
        }
        Ok(seeded)
    }

    pub fn get(&self, id: &str) -> Result<Option<AgentRecord>, StoreError> {
        self.read(|state| state.get(id).cloned())
    }

    pub fn list(&self) -> Result<Vec<AgentRecord>, StoreError> {
        self.read(FleetState::list)
    }

    pub fn upsert(&self, record: AgentRecord) -> Result<Upsert, StoreError> {
        self.write(|state| state.upsert(record))
    }

    pub fn update(&self, id: &str, patch: AgentPatch) -> Result<Option<AgentRecord>, StoreError> {
        if patch.is_empty() {
            return self.get(id);
        }
        self.write(|state| state.update(id, patch))
    }

    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.write(|state| state.delete(id))
    }

    pub fn delete_with_prefix_except(
        &self,
        prefix: &str,
        keep: &HashSet<String>,
    ) -> Result<Vec<String>, StoreError> {
        self.write(|state| state.delete_with_prefix_except(prefix, keep))
    }

    pub fn append_log(&self, agent_id: &str, ts: i64, line: impl Into<String>) -> Result<(), StoreError> {
        self.write(|state| state.append_log(agent_id, ts, line))
    }

    pub fn tail_logs(&self, agent_id: &str, limit: usize) -> Result<Vec<LogLine>, StoreError> {
        self.read(|state| state.tail_logs(agent_id, limit))
    }

    pub fn record_dispatch(&self, dispatch: Dispatch) -> Result<(), StoreError> {
        self.write(|state| state.record_dispatch(dispatch))
    }

    pub fn dispatches_for(&self, agent_id: &str) -> Result<Vec<Dispatch>, StoreError> {
        self.read(|state| state.dispatches_for(agent_id))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
