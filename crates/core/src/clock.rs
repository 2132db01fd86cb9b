// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so refresh and log code can be tested with fixed time.
//!
//! Everything in the fleet inventory is expressed in epoch seconds.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A clock that provides the current wall time
pub trait Clock: Clone + Send + Sync + 'static {
    fn epoch_secs(&self) -> i64;
}

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_secs(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Debug)]
pub struct FakeClock {
    epoch_secs: Arc<Mutex<i64>>,
}

impl FakeClock {
    /// 2024-01-01T00:00:00Z
    pub const DEFAULT_EPOCH_SECS: i64 = 1_704_067_200;

    pub fn new() -> Self {
        Self::at(Self::DEFAULT_EPOCH_SECS)
    }

    pub fn at(epoch_secs: i64) -> Self {
        Self { epoch_secs: Arc::new(Mutex::new(epoch_secs)) }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        *self.epoch_secs.lock() += duration.as_secs() as i64;
    }

    pub fn set(&self, epoch_secs: i64) {
        *self.epoch_secs.lock() = epoch_secs;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn epoch_secs(&self) -> i64 {
        *self.epoch_secs.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
