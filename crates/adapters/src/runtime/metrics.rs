// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Memory readings derived from inspection and stats payloads.

use super::payload::{Inspection, Stats};
use zb_core::MemoryReading;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Configured memory ceiling. A ceiling of 0 means "unlimited".
pub fn memory_limit(inspection: Option<&Inspection>) -> MemoryReading {
    match inspection.and_then(Inspection::memory_limit_bytes) {
        Some(bytes) if bytes == 0.0 => MemoryReading::unlimited(),
        Some(bytes) if bytes > 0.0 => MemoryReading::real(to_mb(bytes)),
        _ => MemoryReading::unavailable(),
    }
}

/// Current memory usage. Never `unlimited`.
pub fn memory_used(stats: Option<&Stats>) -> MemoryReading {
    match stats.and_then(Stats::memory_usage_bytes) {
        Some(bytes) if bytes >= 0.0 => MemoryReading::real(to_mb(bytes)),
        _ => MemoryReading::unavailable(),
    }
}

/// Bytes to MiB, rounded to 2 decimals.
fn to_mb(bytes: f64) -> f64 {
    (bytes / BYTES_PER_MB * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
