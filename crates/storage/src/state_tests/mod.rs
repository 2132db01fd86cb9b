// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod agents;
mod logs;

use super::*;
use zb_core::AgentRecord;

fn state_with(ids: &[&str]) -> FleetState {
    let mut state = FleetState::default();
    for id in ids {
        state.upsert(AgentRecord::builder().id(*id).name(*id).build());
    }
    state
}

#[test]
fn default_state_is_empty() {
    assert!(FleetState::default().is_empty());
    assert!(!state_with(&["zb-alpha"]).is_empty());
}

#[test]
fn state_deserializes_with_missing_sections() {
    let state: FleetState = serde_json::from_str("{}").unwrap();
    assert_eq!(state, FleetState::default());
}
