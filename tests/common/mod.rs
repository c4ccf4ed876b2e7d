#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use serde_json::{Value, json};
use std::{env, path::PathBuf, time::Duration};
use tembo_branch::{
    api::Client,
    config::{PollPolicy, ProvisionRequest},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

pub const ORG_ID: &str = "org123";
pub const TOKEN: &str = "token789";
pub const SOURCE_ID: &str = "instance456";
pub const INSTANCE_NAME: &str = "test-instance";
pub const NEW_ID: &str = "inst123";

/// Endpoint nothing listens on, requests fail before any response
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1";

pub fn binary_path() -> PathBuf {
    env::var_os("CARGO_BIN_EXE_tembo-branch")
        .map_or_else(|| PathBuf::from("target/debug/tembo-branch"), PathBuf::from)
}

pub fn request(endpoint: &str) -> ProvisionRequest {
    ProvisionRequest {
        api_endpoint: endpoint.to_string(),
        org_id: ORG_ID.to_string(),
        instance_id: SOURCE_ID.to_string(),
        instance_name: INSTANCE_NAME.to_string(),
        environment: "prod".to_string(),
        token: TOKEN.to_string(),
        poll: PollPolicy {
            interval: Duration::from_millis(5),
            max_attempts: 5,
            error_retries: 0,
        },
        request_timeout: Duration::from_secs(5),
    }
}

pub fn client(endpoint: &str) -> Client {
    Client::from_request(&request(endpoint)).unwrap()
}

pub fn instances_path() -> String {
    format!("/api/v1/orgs/{ORG_ID}/instances")
}

pub fn instance_path(instance_id: &str) -> String {
    format!("/api/v1/orgs/{ORG_ID}/instances/{instance_id}")
}

pub fn restore_path() -> String {
    format!("/api/v1/orgs/{ORG_ID}/restore")
}

/// Authenticated request matcher shared by every mock
pub fn api(verb: &str, route: &str) -> wiremock::MockBuilder {
    Mock::given(method(verb))
        .and(path(route))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("Content-Type", "application/json"))
}

pub async fn count_requests(server: &MockServer, verb: &str, route: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == verb && request.url.path() == route)
        .count()
}

pub fn connection_info() -> Value {
    json!({
        "host": "test-host",
        "port": 5432,
        "user": "test-user",
        "password": "test-password"
    })
}

pub fn state_body(state: &str) -> Value {
    if state == "Up" {
        json!({
            "state": "Up",
            "instance_id": NEW_ID,
            "instance_name": INSTANCE_NAME,
            "connection_info": connection_info()
        })
    } else {
        json!({"state": state})
    }
}

/// Serve `states` in order from the status endpoint, one response each
pub async fn mount_states(server: &MockServer, instance_id: &str, states: &[&str]) {
    for state in states {
        api("GET", &instance_path(instance_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(state_body(state)))
            .up_to_n_times(1)
            .mount(server)
            .await;
    }
}

/// Serve the same state for every status request
pub async fn mount_state_forever(server: &MockServer, instance_id: &str, state: &str) {
    api("GET", &instance_path(instance_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(state_body(state)))
        .mount(server)
        .await;
}

pub async fn mount_listing(server: &MockServer, names: &[&str]) {
    let instances: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| json!({"instance_id": format!("inst_{i}"), "instance_name": name}))
        .collect();
    api("GET", &instances_path())
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(instances)))
        .mount(server)
        .await;
}

pub async fn mount_restore_accepted(server: &MockServer) {
    api("POST", &restore_path())
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "instance_id": NEW_ID,
            "instance_name": INSTANCE_NAME
        })))
        .mount(server)
        .await;
}
