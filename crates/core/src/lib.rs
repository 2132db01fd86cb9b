// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zb-core: domain types for the zerobitch fleet inventory

pub mod macros;

pub mod agent_record;
pub mod clock;
pub mod log;
pub mod namespace;
pub mod outcome;
pub mod summary;

pub use agent_record::{
    ActivityReading, ActivityState, AgentPatch, AgentRecord, AgentStatus, MemoryReading,
    MemoryState, TemplateState,
};
#[cfg(any(test, feature = "test-support"))]
pub use agent_record::AgentRecordBuilder;
pub use clock::{Clock, FakeClock, SystemClock};
pub use log::{Dispatch, LogLine};
pub use namespace::{is_managed, MANAGED_PREFIX};
pub use outcome::{ActionResult, AgentAction, RefreshResult, UnsupportedAction};
pub use summary::{FleetSummary, RamTotals, StatusCounts};
