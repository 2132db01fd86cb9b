// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `zb logs`

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, SecondsFormat};
use zb_adapters::FleetAdapter;
use zb_core::{Clock, LogLine};

use super::App;
use crate::color;
use crate::output::handle_list;

pub const DEFAULT_TAIL: usize = 200;
pub const MAX_TAIL: usize = 1000;

pub async fn handle<C: Clock>(app: &App<C>, agent_id: &str, tail: usize) -> Result<()> {
    let limit = tail.clamp(1, MAX_TAIL);
    let lines = app.backend.tail_logs(agent_id, limit).await?;
    let empty = format!("No log entries found for {agent_id}");
    handle_list(app.format, &lines, &empty, |items, out| {
        for line in items {
            writeln!(out, "{}", render_line(line))?;
        }
        Ok(())
    })
}

fn render_line(line: &LogLine) -> String {
    let stamp = DateTime::from_timestamp(line.ts, 0)
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| line.ts.to_string());
    format!("{} {}", color::muted(&stamp), line.line)
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
