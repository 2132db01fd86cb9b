// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP/1.1 client for the container runtime's Unix socket API.
//!
//! One connection per request: the request carries `Connection: close` and the
//! response is read until the peer closes. The whole exchange (connect, write,
//! read) runs under a single timeout.

use super::chunked::decode_chunked;
use super::RuntimeError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

#[derive(Debug, Clone)]
pub struct SocketHttpClient {
    socket_path: PathBuf,
    timeout: Duration,
}

impl SocketHttpClient {
    pub fn new(socket_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self { socket_path: socket_path.into(), timeout }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// GET `path` and return the body as text, replacing invalid UTF-8.
    pub async fn get(&self, path: &str) -> Result<String, RuntimeError> {
        let body = self.get_bytes(path).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// GET `path` and parse the body as JSON.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, RuntimeError> {
        let body = self.get_bytes(path).await?;
        serde_json::from_slice(&body).map_err(|e| RuntimeError::Parse(e.to_string()))
    }

    /// GET `path` and return the raw (de-chunked) body.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, RuntimeError> {
        if !self.socket_path.exists() {
            return Err(RuntimeError::Connectivity(format!(
                "docker socket not mounted at {}",
                self.socket_path.display()
            )));
        }
        tracing::debug!(path, "docker request");
        let request = format!("GET {path} HTTP/1.1\r\nHost: docker\r\nConnection: close\r\n\r\n");
        let raw = tokio::time::timeout(self.timeout, send_request(&self.socket_path, &request))
            .await
            .map_err(|_| RuntimeError::Timeout(self.timeout))??;
        parse_response(&raw)
    }
}

async fn send_request(socket_path: &Path, request: &str) -> Result<Vec<u8>, RuntimeError> {
    let mut stream = UnixStream::connect(socket_path)
        .await
        .map_err(|e| RuntimeError::Connectivity(format!("connect failed: {e}")))?;
    stream
        .write_all(request.as_bytes())
        .await
        .map_err(|e| RuntimeError::Connectivity(format!("write failed: {e}")))?;

    let mut raw = Vec::new();
    stream
        .read_to_end(&mut raw)
        .await
        .map_err(|e| RuntimeError::Connectivity(format!("read failed: {e}")))?;
    Ok(raw)
}

/// Split a raw response into head and body, check the status, and decode a
/// chunked body.
pub(crate) fn parse_response(raw: &[u8]) -> Result<Vec<u8>, RuntimeError> {
    let (head, body) = match raw.windows(4).position(|w| w == b"\r\n\r\n") {
        Some(i) => (&raw[..i], &raw[i + 4..]),
        None => (raw, &raw[raw.len()..]),
    };
    let head = String::from_utf8_lossy(head);
    let mut lines = head.split("\r\n");

    let status_line = lines.next().unwrap_or_default().trim();
    let status = status_line.split_whitespace().nth(1).and_then(|code| code.parse::<u16>().ok());
    match status {
        Some(code) if (200..300).contains(&code) => {}
        _ if status_line.is_empty() => {
            return Err(RuntimeError::Protocol("empty response".to_string()));
        }
        _ => return Err(RuntimeError::Protocol(status_line.to_string())),
    }

    let chunked = lines.any(|line| {
        line.split_once(':').is_some_and(|(name, value)| {
            name.trim().eq_ignore_ascii_case("transfer-encoding")
                && value.to_ascii_lowercase().contains("chunked")
        })
    });
    if !chunked {
        return Ok(body.to_vec());
    }

    let decoded = decode_chunked(body);
    if !decoded.complete {
        tracing::debug!(bytes = decoded.data.len(), "chunked body ended without final chunk");
    }
    Ok(decoded.data)
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
