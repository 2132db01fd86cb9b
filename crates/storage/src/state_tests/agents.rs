// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashSet;
use zb_core::{AgentPatch, AgentStatus, Dispatch};

#[test]
fn upsert_inserts_then_updates() {
    let mut state = FleetState::default();
    let record = AgentRecord::builder().id("zeroclaw-a").build();

    assert_eq!(state.upsert(record.clone()), Upsert::Inserted);
    let changed = AgentRecord { restart_count: 4, ..record };
    assert_eq!(state.upsert(changed), Upsert::Updated);

    assert_eq!(state.agents.len(), 1);
    assert_eq!(state.get("zeroclaw-a").map(|r| r.restart_count), Some(4));
}

#[test]
fn list_is_ordered_by_id() {
    let state = state_with(&["zb-charlie", "zb-alpha", "zb-bravo"]);
    let ids: Vec<_> = state.list().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["zb-alpha", "zb-bravo", "zb-charlie"]);
}

#[test]
fn update_returns_none_for_unknown_id() {
    let mut state = state_with(&["zb-alpha"]);
    let patch = AgentPatch { status: Some(AgentStatus::Stopped), ..AgentPatch::default() };
    assert!(state.update("zb-missing", patch).is_none());
}

#[test]
fn update_applies_patch() {
    let mut state = state_with(&["zb-alpha"]);
    let patch = AgentPatch { status: Some(AgentStatus::Error), ..AgentPatch::default() };
    let updated = state.update("zb-alpha", patch).unwrap();
    assert_eq!(updated.status, AgentStatus::Error);
    assert_eq!(state.get("zb-alpha").unwrap().status, AgentStatus::Error);
}

#[test]
fn delete_removes_logs_and_dispatches() {
    let mut state = state_with(&["zb-alpha", "zb-bravo"]);
    state.append_log("zb-alpha", 1, "a");
    state.append_log("zb-bravo", 2, "b");
    state.record_dispatch(Dispatch {
        id: "d-1".into(),
        agent_id: "zb-alpha".into(),
        task: "sync".into(),
        created_at: 1,
    });

    assert!(state.delete("zb-alpha"));
    assert!(!state.delete("zb-alpha"));

    assert!(state.tail_logs("zb-alpha", 10).is_empty());
    assert!(state.dispatches_for("zb-alpha").is_empty());
    assert_eq!(state.tail_logs("zb-bravo", 10).len(), 1);
}

#[test]
fn delete_with_prefix_except_only_touches_prefix() {
    let mut state = state_with(&["zeroclaw-a", "zeroclaw-b", "zeroclaw-c", "zb-alpha"]);
    let keep: HashSet<String> = ["zeroclaw-b".to_string()].into_iter().collect();

    let deleted = state.delete_with_prefix_except("zeroclaw-", &keep);

    assert_eq!(deleted, vec!["zeroclaw-a", "zeroclaw-c"]);
    let ids: Vec<_> = state.agents.keys().cloned().collect();
    assert_eq!(ids, vec!["zb-alpha", "zeroclaw-b"]);
}

#[test]
fn delete_with_prefix_except_empty_keep_clears_namespace() {
    let mut state = state_with(&["zeroclaw-a", "manual-1"]);
    let deleted = state.delete_with_prefix_except("zeroclaw-", &HashSet::new());
    assert_eq!(deleted, vec!["zeroclaw-a"]);
    assert!(state.get("manual-1").is_some());
}
