// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `zb metrics`

use anyhow::Result;
use zb_core::{Clock, FleetSummary};

use super::App;
use crate::color;
use crate::output::format_or_json;

pub fn handle<C: Clock>(app: &App<C>) -> Result<()> {
    let summary = FleetSummary::from_agents(&app.store.list()?);
    format_or_json(app.format, &summary, || {
        for line in text_lines(&summary) {
            println!("{line}");
        }
    })
}

pub fn text_lines(summary: &FleetSummary) -> Vec<String> {
    let counts = &summary.counts;
    let ram = &summary.ram;
    let mut lines = vec![
        color::header("Agents"),
        format!(
            "  total {}  running {}  stopped {}  error {}  other {}",
            counts.total, counts.running, counts.stopped, counts.error, counts.other
        ),
        color::header("RAM (real readings only)"),
        format!("  used  {:.2} MB", ram.used_mb),
        format!("  limit {:.2} MB", ram.limit_mb),
    ];
    if ram.used_unreported > 0 || ram.limit_unreported > 0 {
        lines.push(color::muted(&format!(
            "  not counted: {} usage, {} limit",
            ram.used_unreported, ram.limit_unreported
        )));
    }
    lines
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
