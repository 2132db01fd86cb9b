// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `zb refresh` and `zb watch`

use anyhow::Result;
use zb_adapters::FleetAdapter;
use zb_core::{Clock, RefreshResult};

use super::App;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

/// One refresh cycle. A failed cycle exits with code 1.
pub async fn handle<C: Clock>(app: &App<C>) -> Result<()> {
    let result = app.backend.refresh_agents().await;
    print_result(app.format, &result)?;
    if result.ok {
        Ok(())
    } else {
        Err(ExitError::failed(format!("refresh failed: {}", result.message)).into())
    }
}

/// Refresh every poll interval until `cycles` have run or Ctrl-C.
///
/// Failed cycles are reported and the loop keeps going.
pub async fn watch<C: Clock>(app: &App<C>, cycles: Option<u32>) -> Result<()> {
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut completed = 0u32;
    loop {
        let result = app.backend.refresh_agents().await;
        if !result.ok {
            tracing::warn!(message = %result.message, "refresh cycle failed");
        }
        print_result(app.format, &result)?;
        completed += 1;
        if cycles.is_some_and(|limit| completed >= limit) {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(app.config.poll_interval) => {}
            _ = &mut ctrl_c => break,
        }
    }
    tracing::info!(cycles = completed, "watch stopped");
    Ok(())
}

fn print_result(format: OutputFormat, result: &RefreshResult) -> Result<()> {
    match format {
        // One object per line so `watch` output stays line-delimited.
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(result)?);
            Ok(())
        }
        OutputFormat::Text => {
            let verdict = if result.ok { "ok" } else { "failed" };
            println!("{verdict}: {} ({} updated)", result.message, result.updated);
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
