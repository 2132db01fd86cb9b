// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ownership of agent ids.
//!
//! Ids carrying the managed prefix belong to the container-runtime
//! reconciliation: it may create, update, and prune them. Every other id is
//! owned by some other source of truth and is never pruned.

/// Prefix marking an agent id as owned by runtime reconciliation.
pub const MANAGED_PREFIX: &str = "zeroclaw-";

/// True if `id` belongs to the managed namespace `prefix`.
pub fn is_managed(id: &str, prefix: &str) -> bool {
    !prefix.is_empty() && id.starts_with(prefix)
}

#[cfg(test)]
#[path = "namespace_tests.rs"]
mod tests;
