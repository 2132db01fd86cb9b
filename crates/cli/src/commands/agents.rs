// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `zb agents`

use std::io::Write;

use anyhow::Result;
use zb_core::{AgentRecord, Clock, MemoryState};

use super::App;
use crate::color;
use crate::output::{format_activity, handle_list};

pub fn handle<C: Clock>(app: &App<C>) -> Result<()> {
    let agents = app.store.list()?;
    let now = app.now();
    handle_list(app.format, &agents, "No agents tracked", |items, out| render(items, now, out))
}

/// Table of agents. Cells are padded before coloring so ANSI codes do not
/// skew the columns.
pub fn render(agents: &[AgentRecord], now: i64, out: &mut dyn Write) -> std::io::Result<()> {
    let id_width = agents.iter().map(|a| a.id.len()).max().unwrap_or(0).max(2);
    writeln!(
        out,
        "{}",
        color::header(&format!(
            "{:<id_width$}  {:<8}  {:<18}  {:<18}  {:<18}  {:<14}  {}",
            "ID", "STATUS", "RAM USED", "RAM LIMIT", "LAST ACTIVITY", "MODEL", "TEMPLATE"
        ))
    )?;
    for agent in agents {
        writeln!(
            out,
            "{}  {}  {}  {}  {}  {:<14}  {}",
            color::literal(&format!("{:<id_width$}", agent.id)),
            color::status(agent.status, &format!("{:<8}", agent.status.to_string())),
            memory_cell(agent.ram_used.state, &agent.ram_used.to_string()),
            memory_cell(agent.ram_limit.state, &agent.ram_limit.to_string()),
            color::context(&format!("{:<18}", format_activity(&agent.last_activity, now))),
            agent.model,
            agent.template_state,
        )?;
    }
    Ok(())
}

fn memory_cell(state: MemoryState, text: &str) -> String {
    let padded = format!("{text:<18}");
    match state {
        MemoryState::Real => padded,
        MemoryState::Unlimited | MemoryState::Unavailable => color::muted(&padded),
    }
}

#[cfg(test)]
#[path = "agents_tests.rs"]
mod tests;
