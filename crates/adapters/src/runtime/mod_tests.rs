// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::runtime::fake::{FakeDockerApi, FakeResponse};
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;
use zb_core::{AgentRecord, AgentStatus, FakeClock, MemoryReading};

fn adapter(socket_path: &Path, store: &FleetStore, clock: &FakeClock) -> DockerAdapter<FakeClock> {
    let config = DockerConfig {
        socket_path: socket_path.to_path_buf(),
        request_timeout: Duration::from_secs(2),
        ..DockerConfig::default()
    };
    DockerAdapter::new(store.clone(), config, clock.clone())
}

fn route_running_container(api: &FakeDockerApi) {
    api.route(
        "/containers/json",
        FakeResponse::json(json!([
            {"Id": "0123456789abcdef", "Names": ["/zeroclaw-a"], "State": "running"}
        ])),
    )
    .route(
        "/containers/zeroclaw-a/json",
        FakeResponse::json(json!({
            "State": {"StartedAt": "2024-01-01T00:00:00Z", "FinishedAt": "0001-01-01T00:00:00Z"},
            "RestartCount": 2,
            "HostConfig": {"Memory": 268435456},
            "Config": {"Env": ["MODEL=claude"], "Labels": {"template": "mode: standby"}}
        })),
    )
    .route(
        "/containers/zeroclaw-a/stats",
        FakeResponse::json(json!({"memory_stats": {"usage": 52428800}})),
    )
    .route(
        "/containers/zeroclaw-a/logs",
        FakeResponse::status(200, "2024-01-01T00:30:00Z booted\n"),
    );
}

#[tokio::test]
async fn refresh_reconciles_runtime_into_store() {
    let dir = tempdir().unwrap();
    let api = FakeDockerApi::start(&dir.path().join("docker.sock")).unwrap();
    route_running_container(&api);
    let store = FleetStore::in_memory();
    store.upsert(AgentRecord::builder().id("zeroclaw-gone").build()).unwrap();
    store.upsert(AgentRecord::builder().id("zb-alpha").build()).unwrap();
    let clock = FakeClock::at(FakeClock::DEFAULT_EPOCH_SECS + 3600);

    let result = adapter(api.socket_path(), &store, &clock).refresh_agents().await;

    assert_eq!(result, RefreshResult::ok(reconcile::REFRESHED_MESSAGE, 1));
    let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["zb-alpha", "zeroclaw-a"]);

    let record = store.get("zeroclaw-a").unwrap().unwrap();
    assert_eq!(record.status, AgentStatus::Running);
    assert_eq!(record.restart_count, 2);
    assert_eq!(record.uptime_sec, 3600);
    assert_eq!(record.ram_used, MemoryReading::real(50.0));
    assert_eq!(record.ram_limit, MemoryReading::real(256.0));
    assert_eq!(
        record.last_activity,
        ActivityReading::new(FakeClock::DEFAULT_EPOCH_SECS + 1800, ActivityState::Log)
    );
    assert_eq!(record.model, "claude");
    assert_eq!(record.template, "mode: standby");
    assert_eq!(record.observability_details, "container:0123456789ab");
}

#[tokio::test]
async fn refresh_keeps_container_whose_lookups_all_fail() {
    let dir = tempdir().unwrap();
    let api = FakeDockerApi::start(&dir.path().join("docker.sock")).unwrap();
    api.route(
        "/containers/json",
        FakeResponse::json(json!([
            {"Id": "fedcba9876543210", "Names": ["/zeroclaw-dark"], "State": "running"}
        ])),
    )
    .route("/containers/zeroclaw-dark/json", FakeResponse::status(500, "boom"));
    let store = FleetStore::in_memory();

    let result = adapter(api.socket_path(), &store, &FakeClock::new()).refresh_agents().await;

    assert_eq!(result, RefreshResult::ok(reconcile::REFRESHED_MESSAGE, 1));
    let record = store.get("zeroclaw-dark").unwrap().unwrap();
    assert_eq!(record.status, AgentStatus::Running);
    assert_eq!(record.ram_used, MemoryReading::unavailable());
    assert_eq!(record.ram_limit, MemoryReading::unavailable());
    assert_eq!(record.last_activity, ActivityReading::unavailable());
    assert_eq!(record.uptime_sec, 0);
    assert_eq!(record.model, "unknown");
    assert_eq!(record.template_state, zb_core::TemplateState::Unknown);
    assert_eq!(record.observability_details, "container:fedcba987654");

    let requests = api.requests();
    assert!(requests.iter().any(|r| r.starts_with("/containers/zeroclaw-dark/json")));
    assert!(requests.iter().any(|r| r.starts_with("/containers/zeroclaw-dark/stats")));
}

#[tokio::test]
async fn missing_socket_fails_refresh_without_touching_store() {
    let dir = tempdir().unwrap();
    let store = FleetStore::in_memory();
    store.upsert(AgentRecord::builder().id("zeroclaw-a").build()).unwrap();
    let before = store.list().unwrap();

    let result =
        adapter(&dir.path().join("absent.sock"), &store, &FakeClock::new()).refresh_agents().await;

    assert!(!result.ok);
    assert_eq!(result.updated, 0);
    assert!(result.message.contains("docker socket not mounted"), "{}", result.message);
    assert_eq!(store.list().unwrap(), before);
}

#[yare::parameterized(
    start   = { AgentAction::Start },
    stop    = { AgentAction::Stop },
    restart = { AgentAction::Restart },
    delete  = { AgentAction::Delete },
)]
fn actions_are_refused(action: AgentAction) {
    let dir = tempdir().unwrap();
    let store = FleetStore::in_memory();
    store.upsert(AgentRecord::builder().id("zeroclaw-a").build()).unwrap();
    let before = store.list().unwrap();
    let docker = adapter(&dir.path().join("docker.sock"), &store, &FakeClock::new());

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
    let result = rt.block_on(docker.invoke_action("zeroclaw-a", action));

    assert_eq!(result, ActionResult::failed("docker adapter is read-only (actions disabled for safety)"));
    assert_eq!(store.list().unwrap(), before);
}

#[tokio::test]
async fn send_task_records_without_runtime_call() {
    let dir = tempdir().unwrap();
    let store = FleetStore::in_memory();
    store.upsert(AgentRecord::builder().id("zeroclaw-a").build()).unwrap();
    let clock = FakeClock::new();
    let docker = adapter(&dir.path().join("absent.sock"), &store, &clock);

    let result = docker.send_task("zeroclaw-a", "summarize inbox").await;

    assert_eq!(result, ActionResult::ok("mock task accepted (no container mutation)"));
    let dispatches = store.dispatches_for("zeroclaw-a").unwrap();
    assert_eq!(dispatches.len(), 1);
    assert_eq!(dispatches[0].task, "summarize inbox");
    assert_eq!(dispatches[0].created_at, clock.epoch_secs());
    assert_eq!(
        store.tail_logs("zeroclaw-a", 10).unwrap(),
        vec![LogLine::new(clock.epoch_secs(), "Mock dispatch queued: summarize inbox")]
    );
    assert_eq!(
        store.get("zeroclaw-a").unwrap().unwrap().last_activity,
        ActivityReading::new(clock.epoch_secs(), ActivityState::Event)
    );
}

#[tokio::test]
async fn send_task_to_unknown_agent_fails() {
    let dir = tempdir().unwrap();
    let store = FleetStore::in_memory();
    let docker = adapter(&dir.path().join("absent.sock"), &store, &FakeClock::new());

    let result = docker.send_task("zeroclaw-ghost", "hello").await;

    assert_eq!(result, ActionResult::failed("agent not found"));
    assert!(store.dispatches_for("zeroclaw-ghost").unwrap().is_empty());
}

#[tokio::test]
async fn tail_logs_reads_live_runtime_logs() {
    let dir = tempdir().unwrap();
    let api = FakeDockerApi::start(&dir.path().join("docker.sock")).unwrap();
    route_running_container(&api);
    let store = FleetStore::in_memory();

    let lines = adapter(api.socket_path(), &store, &FakeClock::new())
        .tail_logs("zeroclaw-a", 50)
        .await
        .unwrap();

    assert_eq!(lines, vec![LogLine::new(FakeClock::DEFAULT_EPOCH_SECS + 1800, "booted")]);
    assert!(api.requests().iter().any(|target| target.ends_with("&tail=50")));
}
