// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log tailing: live from the runtime for managed agents, from the store
//! for everyone else.

use super::fetcher::log_path;
use super::http::SocketHttpClient;
use super::timestamp::parse_rfc3339;
use std::borrow::Cow;
use zb_core::{is_managed, LogLine};
use zb_storage::{FleetStore, StoreError};

/// Size of the runtime's stdout/stderr frame header
const FRAME_HEADER_LEN: usize = 8;

/// Strip multiplexed-stream frame headers from a log body.
///
/// Containers without a TTY get their output framed as
/// `[stream, 0, 0, 0, len_be32]` + payload. Bodies that do not start with a
/// valid header are returned untouched; a malformed frame part-way through
/// ends demultiplexing and the remainder is kept as-is.
pub fn demux(body: &[u8]) -> Cow<'_, [u8]> {
    if !is_frame_header(body) {
        return Cow::Borrowed(body);
    }
    let mut out = Vec::with_capacity(body.len());
    let mut pos = 0;
    while pos < body.len() {
        let rest = &body[pos..];
        if !is_frame_header(rest) {
            out.extend_from_slice(rest);
            break;
        }
        let len = u32::from_be_bytes([rest[4], rest[5], rest[6], rest[7]]) as usize;
        let end = (FRAME_HEADER_LEN + len).min(rest.len());
        out.extend_from_slice(&rest[FRAME_HEADER_LEN..end]);
        pos += end;
    }
    Cow::Owned(out)
}

fn is_frame_header(bytes: &[u8]) -> bool {
    bytes.len() >= FRAME_HEADER_LEN && bytes[0] <= 2 && bytes[1..4] == [0, 0, 0]
}

/// Split a `timestamps=1` log line into its timestamp and message.
///
/// A line without a space is its own message.
pub(crate) fn split_timestamp(line: &str) -> (Option<i64>, &str) {
    match line.split_once(' ') {
        Some((token, message)) => (parse_rfc3339(token), message),
        None => (parse_rfc3339(line), line),
    }
}

/// Parse timestamped log text, stamping unparsable lines with `now`.
pub fn parse_log_lines(text: &str, now: i64) -> Vec<LogLine> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (ts, message) = split_timestamp(line);
            LogLine::new(ts.unwrap_or(now), message)
        })
        .collect()
}

/// Most recent `limit` lines for `agent_id`, oldest first.
///
/// Runtime failures come back as a single `[docker-error]` line instead of an
/// error; only store failures propagate.
pub async fn tail(
    client: &SocketHttpClient,
    store: &FleetStore,
    prefix: &str,
    agent_id: &str,
    limit: usize,
    now: i64,
) -> Result<Vec<LogLine>, StoreError> {
    if !is_managed(agent_id, prefix) {
        return store.tail_logs(agent_id, limit);
    }
    let path = format!("{}&tail={limit}", log_path(agent_id));
    let body = match client.get_bytes(&path).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(agent_id, error = %e, "docker log fetch failed");
            return Ok(vec![LogLine::new(now, format!("[docker-error] {e}"))]);
        }
    };
    let text = String::from_utf8_lossy(&demux(&body)).into_owned();
    let mut lines = parse_log_lines(&text, now);
    let skip = lines.len().saturating_sub(limit);
    lines.drain(..skip);
    Ok(lines)
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
