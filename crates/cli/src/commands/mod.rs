// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod action;
pub mod agents;
pub mod logs;
pub mod metrics;
pub mod refresh;

use anyhow::{Context, Result};
use zb_adapters::FleetBackend;
use zb_core::{Clock, SystemClock};
use zb_storage::FleetStore;

use crate::config::Config;
use crate::output::OutputFormat;

/// Everything a command needs: the opened store, the selected backend and
/// the resolved settings.
pub struct App<C: Clock = SystemClock> {
    pub config: Config,
    pub store: FleetStore,
    pub backend: FleetBackend<C>,
    pub clock: C,
    pub format: OutputFormat,
}

impl App {
    /// Open (and on first use seed) the store, then build the backend.
    pub fn open(config: Config, format: OutputFormat) -> Result<Self> {
        let clock = SystemClock;
        let store = FleetStore::open(&config.db_path)
            .with_context(|| format!("failed to open store {}", config.db_path.display()))?;
        if store.seed_if_empty(clock.epoch_secs())? {
            tracing::info!(path = %config.db_path.display(), "seeded demo inventory");
        }
        let backend =
            FleetBackend::build(config.adapter, store.clone(), config.backend_settings(), clock)?;
        tracing::debug!(adapter = %backend.kind(), "backend ready");
        Ok(Self { config, store, backend, clock, format })
    }
}

impl<C: Clock> App<C> {
    pub fn now(&self) -> i64 {
        self.clock.epoch_secs()
    }
}
