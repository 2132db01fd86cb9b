// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forwarding backends that relay requests to external control planes over
//! HTTP webhooks.
//!
//! These backends do not observe the fleet: refresh is unsupported and logs
//! come from the store. Successful forwards are mirrored into the store by
//! the action service.

mod clawtrol;
mod openclaw;

#[cfg(test)]
pub(crate) mod responder;

pub use clawtrol::{ClawTrolAdapter, ClawTrolConfig};
pub use openclaw::{OpenClawAdapter, OpenClawConfig};

use std::time::Duration;
use zb_core::ActionResult;

/// Value of the `source` field in every forwarded payload
pub const SOURCE: &str = "zerobitch-fleet";

pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Response bodies are quoted in error messages up to this many characters
const SNIPPET_CHARS: usize = 200;

pub(crate) fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(WEBHOOK_TIMEOUT).build()
}

/// POST `payload` as JSON and translate the response into an outcome.
///
/// `label` names the remote in failure messages.
pub(crate) async fn post_json(
    client: &reqwest::Client,
    label: &str,
    url: &str,
    bearer: Option<&str>,
    payload: &serde_json::Value,
    success: &str,
) -> ActionResult {
    let mut request = client.post(url).json(payload);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(remote = label, url, error = %e, "webhook unreachable");
            return ActionResult::failed(format!("{label} unreachable: {e}"));
        }
    };

    let status = response.status();
    if status.is_success() {
        tracing::info!(remote = label, status = status.as_u16(), "webhook accepted");
        return ActionResult::ok(success);
    }

    let body = response.text().await.unwrap_or_default();
    let snippet: String = body.trim().chars().take(SNIPPET_CHARS).collect();
    let snippet = if snippet.is_empty() { "no response body".to_string() } else { snippet };
    tracing::warn!(remote = label, status = status.as_u16(), "webhook rejected");
    ActionResult::failed(format!("{label} returned {}: {snippet}", status.as_u16()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
