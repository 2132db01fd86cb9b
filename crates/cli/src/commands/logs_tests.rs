// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::commands::test_app;
use serial_test::serial;

#[test]
#[serial]
fn line_is_prefixed_with_utc_stamp() {
    std::env::set_var("NO_COLOR", "1");
    assert_eq!(
        render_line(&LogLine::new(1_704_067_200, "booted")),
        "2024-01-01T00:00:00Z booted"
    );
}

#[tokio::test]
async fn zero_tail_is_clamped_to_one() {
    let app = test_app::simulated();
    let lines = app.backend.tail_logs("zb-alpha", 0usize.clamp(1, MAX_TAIL)).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert!(handle(&app, "zb-alpha", 0).await.is_ok());
}

#[tokio::test]
async fn unknown_agent_has_no_lines() {
    let app = test_app::simulated();
    assert!(handle(&app, "zb-ghost", DEFAULT_TAIL).await.is_ok());
}
