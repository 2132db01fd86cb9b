// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process stand-in for the container runtime API, served on a Unix socket.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::task::JoinHandle;

/// Canned response for one route.
#[derive(Debug, Clone)]
pub struct FakeResponse {
    status: u16,
    body: Vec<u8>,
    chunked: bool,
    delay: Option<Duration>,
}

impl FakeResponse {
    pub fn json(value: serde_json::Value) -> Self {
        Self::status(200, value.to_string())
    }

    pub fn status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into(), chunked: false, delay: None }
    }

    /// Send the body with chunked transfer encoding, split into small chunks.
    pub fn chunked(mut self) -> Self {
        self.chunked = true;
        self
    }

    /// Wait before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = format!("HTTP/1.1 {} FAKE\r\nContent-Type: application/json\r\n", self.status)
            .into_bytes();
        if self.chunked {
            out.extend_from_slice(b"Transfer-Encoding: chunked\r\n\r\n");
            for chunk in self.body.chunks(7) {
                out.extend_from_slice(format!("{:x}\r\n", chunk.len()).as_bytes());
                out.extend_from_slice(chunk);
                out.extend_from_slice(b"\r\n");
            }
            out.extend_from_slice(b"0\r\n\r\n");
        } else {
            out.extend_from_slice(format!("Content-Length: {}\r\n\r\n", self.body.len()).as_bytes());
            out.extend_from_slice(&self.body);
        }
        out
    }
}

type Routes = Arc<Mutex<HashMap<String, FakeResponse>>>;

/// Routes match on the request path without its query string. Unrouted
/// paths answer 404.
pub struct FakeDockerApi {
    socket_path: PathBuf,
    routes: Routes,
    requests: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl FakeDockerApi {
    pub fn start(socket_path: &Path) -> std::io::Result<Self> {
        let listener = UnixListener::bind(socket_path)?;
        let routes: Routes = Arc::default();
        let requests: Arc<Mutex<Vec<String>>> = Arc::default();
        let task = tokio::spawn(serve(listener, Arc::clone(&routes), Arc::clone(&requests)));
        Ok(Self { socket_path: socket_path.to_path_buf(), routes, requests, task })
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn route(&self, path: &str, response: FakeResponse) -> &Self {
        self.routes.lock().insert(path.to_string(), response);
        self
    }

    /// Request targets received so far, including query strings.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl Drop for FakeDockerApi {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(listener: UnixListener, routes: Routes, requests: Arc<Mutex<Vec<String>>>) {
    while let Ok((stream, _)) = listener.accept().await {
        tokio::spawn(answer(stream, Arc::clone(&routes), Arc::clone(&requests)));
    }
}

async fn answer(mut stream: UnixStream, routes: Routes, requests: Arc<Mutex<Vec<String>>>) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&head);
    let target = head.split_whitespace().nth(1).unwrap_or_default().to_string();
    let path = target.split('?').next().unwrap_or_default().to_string();
    requests.lock().push(target);

    let response = routes
        .lock()
        .get(&path)
        .cloned()
        .unwrap_or_else(|| FakeResponse::status(404, r#"{"message":"page not found"}"#));
    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }
    let _ = stream.write_all(&response.encode()).await;
    let _ = stream.shutdown().await;
}
