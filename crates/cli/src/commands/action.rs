// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `zb action`, `zb task` and `zb template`

use std::io::Write;

use anyhow::Result;
use zb_adapters::{dispatch_task, run_actions, set_template, ActionOutcome};
use zb_core::Clock;

use super::App;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, handle_list};

/// Run one lifecycle action against each id. Exits 1 if any agent failed.
pub async fn action<C: Clock>(app: &App<C>, action: &str, agent_ids: &[String]) -> Result<()> {
    let outcomes = run_actions(&app.backend, &app.store, action, agent_ids, app.now()).await?;
    handle_list(app.format, &outcomes, "No agents", |items, out| {
        for outcome in items {
            writeln!(out, "{}", outcome_line(outcome))?;
        }
        Ok(())
    })?;

    let failed = outcomes.iter().filter(|o| !o.ok).count();
    if failed > 0 {
        return Err(ExitError::failed(format!("{failed} of {} action(s) failed", outcomes.len())).into());
    }
    Ok(())
}

fn outcome_line(outcome: &ActionOutcome) -> String {
    let verdict = if outcome.ok { color::header("ok") } else { color::muted("failed") };
    format!("{} {verdict}: {}", color::literal(&outcome.agent_id), outcome.message)
}

pub async fn task<C: Clock>(app: &App<C>, agent_id: &str, task: &str) -> Result<()> {
    let result = dispatch_task(&app.backend, &app.store, agent_id, task, app.now()).await?;
    format_or_json(app.format, &result, || {
        println!("{}: {}", color::literal(agent_id), result.message);
    })?;
    if !result.ok {
        return Err(ExitError::failed(format!("task not dispatched: {}", result.message)).into());
    }
    Ok(())
}

pub fn template<C: Clock>(app: &App<C>, agent_id: &str, text: &str) -> Result<()> {
    let record = set_template(&app.store, agent_id, text, app.now())?;
    format_or_json(app.format, &record, || {
        println!("Template updated for {} ({})", color::literal(&record.id), record.template_state);
    })
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
