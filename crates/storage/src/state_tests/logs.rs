// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use zb_core::{Dispatch, LogLine};

#[test]
fn tail_logs_returns_most_recent_oldest_first() {
    let mut state = FleetState::default();
    for i in 0..5 {
        state.append_log("zb-alpha", i, format!("line {i}"));
    }
    state.append_log("zb-bravo", 99, "other agent");

    let tail = state.tail_logs("zb-alpha", 3);
    assert_eq!(
        tail,
        vec![LogLine::new(2, "line 2"), LogLine::new(3, "line 3"), LogLine::new(4, "line 4")]
    );
}

#[test]
fn append_log_assigns_increasing_ids() {
    let mut state = FleetState::default();
    state.append_log("zb-alpha", 0, "first");
    state.append_log("zb-alpha", 0, "second");
    let ids: Vec<_> = state.logs.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(state.next_log_id, 2);
}

#[test]
fn retention_drops_oldest_lines_of_that_agent_only() {
    let mut state = FleetState::default();
    state.append_log("zb-bravo", 0, "bravo keeps this");
    for i in 0..(MAX_LOGS_PER_AGENT as i64 + 5) {
        state.append_log("zb-alpha", i, format!("line {i}"));
    }

    let alpha = state.tail_logs("zb-alpha", usize::MAX);
    assert_eq!(alpha.len(), MAX_LOGS_PER_AGENT);
    assert_eq!(alpha[0].line, "line 5");
    assert_eq!(state.tail_logs("zb-bravo", 10).len(), 1);
}

#[test]
fn dispatches_are_filtered_by_agent() {
    let mut state = FleetState::default();
    for (id, agent) in [("d-1", "zb-alpha"), ("d-2", "zb-bravo"), ("d-3", "zb-alpha")] {
        state.record_dispatch(Dispatch {
            id: id.into(),
            agent_id: agent.into(),
            task: "sync".into(),
            created_at: 0,
        });
    }
    let ids: Vec<_> = state.dispatches_for("zb-alpha").into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["d-1", "d-3"]);
}
