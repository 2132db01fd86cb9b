// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoder for `Transfer-Encoding: chunked` bodies.
//!
//! Decoding never fails. A malformed size line, a missing chunk terminator or
//! a truncated chunk stops decoding and keeps whatever was read so far;
//! [`ChunkedBody::complete`] tells the caller whether the terminating
//! zero-size chunk was seen.

/// Result of decoding a chunked body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkedBody {
    pub data: Vec<u8>,
    /// True once the zero-size final chunk was reached
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SizeLine,
    Data { remaining: usize },
    Trailer,
    Done,
}

pub fn decode_chunked(body: &[u8]) -> ChunkedBody {
    let mut data = Vec::new();
    let mut pos = 0;
    let mut state = State::SizeLine;

    loop {
        match state {
            State::SizeLine => {
                let Some(end) = find_crlf(&body[pos..]) else { break };
                let Some(size) = parse_size_line(&body[pos..pos + end]) else { break };
                pos += end + 2;
                state = if size == 0 { State::Done } else { State::Data { remaining: size } };
            }
            State::Data { remaining } => {
                let take = remaining.min(body.len() - pos);
                data.extend_from_slice(&body[pos..pos + take]);
                pos += take;
                if take < remaining {
                    break;
                }
                state = State::Trailer;
            }
            State::Trailer => {
                if !body[pos..].starts_with(b"\r\n") {
                    break;
                }
                pos += 2;
                state = State::SizeLine;
            }
            State::Done => break,
        }
    }

    ChunkedBody { data, complete: state == State::Done }
}

fn find_crlf(bytes: &[u8]) -> Option<usize> {
    bytes.windows(2).position(|w| w == b"\r\n")
}

/// Hex size, ignoring any `;`-delimited chunk extension.
fn parse_size_line(line: &[u8]) -> Option<usize> {
    let line = std::str::from_utf8(line).ok()?;
    let size = line.split(';').next().unwrap_or_default().trim();
    if size.is_empty() {
        return None;
    }
    usize::from_str_radix(size, 16).ok()
}

#[cfg(test)]
#[path = "chunked_tests.rs"]
mod tests;
