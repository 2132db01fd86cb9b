// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    zero    = { 0,       "0s" },
    seconds = { 59,      "59s" },
    minutes = { 125,     "2m" },
    hours   = { 7_200,   "2h" },
    days    = { 259_200, "3d" },
)]
fn elapsed(secs: u64, expected: &str) {
    assert_eq!(format_elapsed(secs), expected);
}

#[test]
fn activity_shows_age_and_state() {
    let activity = ActivityReading::new(1_000, ActivityState::Log);
    assert_eq!(format_activity(&activity, 1_120), "2m ago (log)");
}

#[test]
fn future_activity_clamps_to_zero() {
    let activity = ActivityReading::new(2_000, ActivityState::Event);
    assert_eq!(format_activity(&activity, 1_000), "0s ago (event)");
}

#[test]
fn unavailable_activity_is_a_dash() {
    assert_eq!(format_activity(&ActivityReading::unavailable(), 1_000), "-");
}

#[test]
fn handle_list_json_and_empty_text() {
    let items: Vec<String> = vec![];
    assert!(handle_list(OutputFormat::Json, &items, "none", |_, _| Ok(())).is_ok());
    assert!(handle_list(OutputFormat::Text, &items, "none", |_, _| Ok(())).is_ok());
}

#[test]
fn format_or_json_runs_text_fn_for_text() {
    let mut called = false;
    format_or_json(OutputFormat::Text, &"x", || called = true).unwrap();
    assert!(called);
}
