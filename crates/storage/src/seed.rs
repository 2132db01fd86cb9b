// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo inventory written into an empty store.

use zb_core::{
    ActivityReading, ActivityState, AgentRecord, AgentStatus, MemoryReading, TemplateState,
};

/// (agent id, line) pairs appended after the seeded agents.
pub const SEED_LOGS: [(&str, &str); 5] = [
    ("zb-alpha", "Scheduler tick - health OK"),
    ("zb-alpha", "Metrics push 0.26 GB RAM"),
    ("zb-bravo", "Agent stopped by operator"),
    ("zb-charlie", "Restarted after panic"),
    ("zb-charlie", "Crash loop detected"),
];

struct SeedAgent {
    id: &'static str,
    name: &'static str,
    status: AgentStatus,
    restart_count: u32,
    ram_used_mb: f64,
    uptime_sec: u64,
    idle_secs: i64,
    observability: (&'static str, &'static str),
    cron: (&'static str, &'static str),
    mode: &'static str,
}

const SEED_RAM_LIMIT_MB: f64 = 512.0;

const SEED_AGENTS: [SeedAgent; 3] = [
    SeedAgent {
        id: "zb-alpha",
        name: "ZB Alpha",
        status: AgentStatus::Running,
        restart_count: 2,
        ram_used_mb: 256.0,
        uptime_sec: 86_400,
        idle_secs: 120,
        observability: ("prometheus", "prometheus://metrics/zb-alpha"),
        cron: ("0 */6 * * *", "sync-registry@hourly"),
        mode: "proactive",
    },
    SeedAgent {
        id: "zb-bravo",
        name: "ZB Bravo",
        status: AgentStatus::Stopped,
        restart_count: 0,
        ram_used_mb: 0.0,
        uptime_sec: 0,
        idle_secs: 7_200,
        observability: ("none", "offline"),
        cron: ("30 2 * * *", "registry-refresh@daily"),
        mode: "standby",
    },
    SeedAgent {
        id: "zb-charlie",
        name: "ZB Charlie",
        status: AgentStatus::Error,
        restart_count: 7,
        ram_used_mb: 384.0,
        uptime_sec: 3_600,
        idle_secs: 30,
        observability: ("grafana", "grafana://dashboards/zb-charlie"),
        cron: ("*/15 * * * *", "registry-sync@15m"),
        mode: "auto-heal",
    },
];

/// The demo agents, with activity timestamps relative to `now`.
pub fn seed_agents(now: i64) -> Vec<AgentRecord> {
    SEED_AGENTS
        .iter()
        .map(|seed| {
            let template = format!("# Default template for {}\nmode: {}\n", seed.id, seed.mode);
            AgentRecord {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                status: seed.status,
                restart_count: seed.restart_count,
                ram_used: MemoryReading::real(seed.ram_used_mb),
                ram_limit: MemoryReading::real(SEED_RAM_LIMIT_MB),
                uptime_sec: seed.uptime_sec,
                last_activity: ActivityReading::new(now - seed.idle_secs, ActivityState::Event),
                observability_backend: seed.observability.0.to_string(),
                observability_details: seed.observability.1.to_string(),
                cron_native: seed.cron.0.to_string(),
                cron_registry: seed.cron.1.to_string(),
                model: "unknown".to_string(),
                template_state: TemplateState::of(&template),
                template,
            }
        })
        .collect()
}
