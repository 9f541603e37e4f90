//! Integration tests for parsing Shipyard controller data.
//!
//! These tests validate that the shipyard-client models can deserialize
//! representative controller responses.

use chrono::{TimeZone, Utc};
use shipyard_client::models::{Account, AuthToken, Container, Engine, Event, Role};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_container_list() {
    let json_data = load_fixture("containers.json");
    let containers: Vec<Container> = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!(
            "Failed to deserialize container list: {}\nJSON: {}",
            e, json_data
        )
    });

    assert_eq!(containers.len(), 2, "Expected 2 containers in test data");

    let web = &containers[0];
    assert_eq!(web.id, "7d1f3c0a9b2e");
    assert_eq!(web.state.as_deref(), Some("running"));

    let image = web.image.as_ref().expect("container should carry its image");
    assert_eq!(image.name, "nginx:1.7");
    assert_eq!(image.container_name.as_deref(), Some("web-01"));
    assert_eq!(image.kind.as_deref(), Some("service"));
    assert_eq!(
        image.environment.get("NGINX_PORT").map(String::as_str),
        Some("80")
    );
    assert_eq!(image.bind_ports.len(), 1);
    assert_eq!(image.bind_ports[0].port, 8080);
    assert_eq!(image.bind_ports[0].container_port, 80);
    let policy = image.restart_policy.as_ref().unwrap();
    assert_eq!(policy.name, "on-failure");
    assert_eq!(policy.maximum_retry_count, 5);

    let engine = web.engine.as_ref().unwrap();
    assert_eq!(engine.addr, "tcp://10.0.1.10:2375");
    assert_eq!(engine.labels, vec!["env.prod", "ssd"]);

    let redis = &containers[1];
    assert!(redis.ports.is_empty());
    assert!(redis.image.as_ref().unwrap().publish);
}

#[test]
fn test_deserialize_engine_list() {
    let json_data = load_fixture("engines.json");
    let engines: Vec<Engine> = serde_json::from_str(&json_data).unwrap();

    assert_eq!(engines.len(), 2);
    assert_eq!(engines[0].engine.id, "node-a");
    assert_eq!(engines[0].docker_version.as_deref(), Some("1.3.2"));
    assert_eq!(engines[0].health.as_ref().unwrap().response_time, 2_817_000);

    assert_eq!(engines[1].health.as_ref().unwrap().status, "down");
    assert!(engines[1].engine.labels.is_empty());
    assert!(engines[1].docker_version.is_none());
}

#[test]
fn test_deserialize_event_list() {
    let json_data = load_fixture("events.json");
    let events: Vec<Event> = serde_json::from_str(&json_data).unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, "start");
    assert_eq!(
        events[0].container.as_ref().map(|c| c.id.as_str()),
        Some("7d1f3c0a9b2e")
    );

    let add_engine = &events[1];
    assert_eq!(add_engine.kind, "add-engine");
    assert!(add_engine.container.is_none());
    assert_eq!(
        add_engine.time,
        Some(Utc.with_ymd_and_hms(2014, 12, 2, 17, 58, 43).unwrap())
    );
    assert_eq!(add_engine.tags, vec!["cluster"]);
}

#[test]
fn test_partial_records_fill_missing_fields() {
    let json_data = load_fixture("partial_records.json");
    let doc: serde_json::Value = serde_json::from_str(&json_data).unwrap();

    let events: Vec<Event> = serde_json::from_value(doc["events"].clone()).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, "start");
    assert_eq!(events[0].message, "x");
    assert!(events[0].time.is_none());
    assert!(events[1].kind.is_empty());
    assert!(events[1].time.is_some());
    let container = events[1].container.as_ref().unwrap();
    assert!(container.id.is_empty());
    assert_eq!(container.state.as_deref(), Some("stopped"));

    let role: Role = serde_json::from_value(doc["role"].clone()).unwrap();
    assert_eq!(role.id.as_deref(), Some("r1"));
    assert!(role.name.is_empty());

    let account: Account = serde_json::from_value(doc["account"].clone()).unwrap();
    assert_eq!(account.id.as_deref(), Some("acc-7"));
    assert!(account.username.is_empty());

    let token: AuthToken = serde_json::from_value(doc["auth_token"].clone()).unwrap();
    assert!(token.token.is_empty());
    assert!(token.user_agent.is_none());

    let container: Container = serde_json::from_value(doc["container"].clone()).unwrap();
    let image = container.image.unwrap();
    assert!(image.name.is_empty());
    assert!(image.publish);
}
