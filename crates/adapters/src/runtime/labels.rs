// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Model and template detection from container env and labels.

use super::payload::Inspection;

pub const UNKNOWN_MODEL: &str = "unknown";

/// Label keys consulted for the model, in priority order
const MODEL_LABELS: [&str; 3] = ["model", "ai.model", "zeroclaw.model"];

/// Label keys consulted for the template, in priority order
const TEMPLATE_LABELS: [&str; 2] = ["zeroclaw.template", "template"];

/// A non-empty `MODEL=` env assignment wins over any label.
pub fn detect_model(inspection: Option<&Inspection>) -> String {
    let Some(inspection) = inspection else {
        return UNKNOWN_MODEL.to_string();
    };
    let from_env = inspection
        .env()
        .iter()
        .find_map(|entry| entry.strip_prefix("MODEL="))
        .filter(|value| !value.is_empty());
    from_env
        .or_else(|| MODEL_LABELS.iter().find_map(|key| inspection.label(key)))
        .unwrap_or(UNKNOWN_MODEL)
        .to_string()
}

pub fn detect_template(inspection: Option<&Inspection>) -> String {
    inspection
        .and_then(|inspection| TEMPLATE_LABELS.iter().find_map(|key| inspection.label(key)))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
