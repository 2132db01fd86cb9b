// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent record operations.

use std::collections::HashSet;
use zb_core::{AgentPatch, AgentRecord};

use super::{FleetState, Upsert};

impl FleetState {
    pub fn get(&self, id: &str) -> Option<&AgentRecord> {
        self.agents.get(id)
    }

    /// All records ordered by id.
    pub fn list(&self) -> Vec<AgentRecord> {
        self.agents.values().cloned().collect()
    }

    /// Insert a new record or replace the one with the same id.
    pub fn upsert(&mut self, record: AgentRecord) -> Upsert {
        match self.agents.insert(record.id.clone(), record) {
            Some(_) => Upsert::Updated,
            None => Upsert::Inserted,
        }
    }

    /// Apply a field-level patch. Returns the updated record, or `None`
    /// if no record has this id.
    pub fn update(&mut self, id: &str, patch: AgentPatch) -> Option<AgentRecord> {
        let record = self.agents.get_mut(id)?;
        patch.apply(record);
        Some(record.clone())
    }

    /// Remove a record together with its logs and dispatches.
    pub fn delete(&mut self, id: &str) -> bool {
        let existed = self.agents.remove(id).is_some();
        self.logs.retain(|log| log.agent_id != id);
        self.dispatches.retain(|d| d.agent_id != id);
        existed
    }

    /// Delete every record whose id starts with `prefix` and is not in `keep`.
    ///
    /// Records outside the prefix are never touched. Returns the deleted ids.
    pub fn delete_with_prefix_except(&mut self, prefix: &str, keep: &HashSet<String>) -> Vec<String> {
        let doomed: Vec<String> = self
            .agents
            .keys()
            .filter(|id| id.starts_with(prefix) && !keep.contains(id.as_str()))
            .cloned()
            .collect();
        for id in &doomed {
            self.delete(id);
        }
        doomed
    }
}
