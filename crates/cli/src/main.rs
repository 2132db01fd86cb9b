// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zb: inventory and control for a fleet of zeroclaw agents

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::App;
use crate::config::Config;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "zb",
    version,
    about = "Track and control a fleet of zeroclaw agents",
    styles = color::styles()
)]
struct Cli {
    /// Config file (default: ./zerobitch.toml, or ZEROBITCH_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend: none, docker, openclaw or clawtrol
    #[arg(long, global = true, value_name = "NAME")]
    adapter: Option<String>,

    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    /// Log at info level (ZB_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tracked agents
    Agents,
    /// Run one refresh cycle through the configured backend
    Refresh,
    /// Refresh repeatedly at the poll interval
    Watch {
        /// Stop after N cycles (default: run until Ctrl-C)
        #[arg(long)]
        cycles: Option<u32>,
    },
    /// Fleet status counts and RAM totals
    Metrics,
    /// Apply a lifecycle action to one or more agents
    Action {
        /// start, stop, restart or delete
        action: String,
        #[arg(required = true, value_name = "AGENT_ID")]
        agent_ids: Vec<String>,
    },
    /// Send a task to an agent
    Task { agent_id: String, text: String },
    /// Replace an agent's template text
    Template { agent_id: String, text: String },
    /// Show recent log lines for an agent
    Logs {
        agent_id: String,
        /// Number of recent lines (1-1000)
        #[arg(short = 'n', long = "tail", default_value_t = commands::logs::DEFAULT_TAIL)]
        tail: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref(), cli.adapter.as_deref())?;
    tracing::debug!(?config, "resolved configuration");
    let app = App::open(config, cli.output)?;

    match cli.command {
        Commands::Agents => commands::agents::handle(&app),
        Commands::Refresh => commands::refresh::handle(&app).await,
        Commands::Watch { cycles } => commands::refresh::watch(&app, cycles).await,
        Commands::Metrics => commands::metrics::handle(&app),
        Commands::Action { action, agent_ids } => {
            commands::action::action(&app, &action, &agent_ids).await
        }
        Commands::Task { agent_id, text } => commands::action::task(&app, &agent_id, &text).await,
        Commands::Template { agent_id, text } => commands::action::template(&app, &agent_id, &text),
        Commands::Logs { agent_id, tail } => commands::logs::handle(&app, &agent_id, tail).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("error: {exit}");
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
