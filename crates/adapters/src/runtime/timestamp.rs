// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tolerant RFC 3339 parsing for timestamps emitted by the container runtime.

use chrono::{DateTime, NaiveDateTime};

/// Sentinel the runtime reports for "never happened"
const ZERO_DATE_PREFIX: &str = "0001-01-01";

/// Maximum fractional-second digits kept before parsing
const MAX_FRACTION_DIGITS: usize = 6;

/// Parse an RFC 3339 timestamp to epoch seconds.
///
/// Returns `None` for empty input, the zero-date sentinel, or anything that
/// still fails to parse after normalization. Fractional seconds of any
/// precision are accepted (truncated to microseconds); a timestamp without an
/// offset is read as UTC.
pub fn parse_rfc3339(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() || text.starts_with(ZERO_DATE_PREFIX) {
        return None;
    }
    let normalized = normalize(text);
    DateTime::parse_from_rfc3339(&normalized)
        .map(|dt| dt.timestamp())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc().timestamp())
        })
}

fn normalize(text: &str) -> String {
    let text = match text.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => text.to_string(),
    };
    let Some((head, tail)) = text.split_once('.') else {
        return text;
    };

    let zone_at = tail.char_indices().find(|&(i, c)| i > 0 && (c == '+' || c == '-'));
    let (fraction, zone) = match zone_at {
        Some((i, _)) => tail.split_at(i),
        None => (tail, ""),
    };
    let fraction: String = fraction.chars().take(MAX_FRACTION_DIGITS).collect();
    if fraction.is_empty() {
        format!("{head}{zone}")
    } else {
        format!("{head}.{fraction}{zone}")
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
