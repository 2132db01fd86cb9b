// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zb-adapters: fleet backends and the container-runtime inventory

mod backend;
pub mod runtime;
mod service;
mod simulated;
pub mod webhook;

pub use backend::{AdapterKind, BackendError, BackendSettings, FleetAdapter, FleetBackend, UnknownAdapter};
pub use runtime::{DockerAdapter, DockerConfig, RuntimeError};
pub use service::{dispatch_task, run_actions, set_template, ActionOutcome, ServiceError};
pub use simulated::SimulatedAdapter;
pub use webhook::{ClawTrolAdapter, ClawTrolConfig, OpenClawAdapter, OpenClawConfig};
