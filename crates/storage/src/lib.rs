// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zb-storage: persisted agent, log and dispatch store for the fleet inventory

mod error;
mod seed;
mod snapshot;
mod state;
mod store;

pub use error::StoreError;
pub use seed::{seed_agents, SEED_LOGS};
pub use snapshot::{Snapshot, CURRENT_SNAPSHOT_VERSION};
pub use state::{FleetState, StoredLog, Upsert, MAX_LOGS_PER_AGENT};
pub use store::FleetStore;
