#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{ORG_ID, SOURCE_ID, TOKEN, api, binary_path, instance_path};
use std::process::Output;
use tokio::process::Command;
use wiremock::{MockServer, ResponseTemplate};

/// Run the binary the way a workflow step does, configured only through `INPUT_*`
async fn run(inputs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(binary_path());
    command.env_clear();
    for (name, value) in inputs {
        command.env(format!("INPUT_{}", name.to_uppercase()), value);
    }
    command.output().await.unwrap()
}

fn required(endpoint: &str) -> Vec<(&str, &str)> {
    vec![
        ("tembo-api-endpoint", endpoint),
        ("org-id", ORG_ID),
        ("instance-id", SOURCE_ID),
        ("tembo-token", TOKEN),
    ]
}

#[tokio::test]
async fn test_unsupported_action_fails_the_step() {
    let server = MockServer::start().await;
    let uri = server.uri();
    let mut inputs = required(&uri);
    inputs.push(("action", "create"));

    let output = run(&inputs).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout
            .lines()
            .filter(|line| line.starts_with("::error::"))
            .collect::<Vec<_>>(),
        vec!["::error::Unsupported operation: create"]
    );
    assert!(!stderr.contains("Unsupported operation"), "{stderr}");
    assert!(
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .is_empty()
    );
}

#[tokio::test]
async fn test_empty_required_input_fails_the_step() {
    let output = run(&[
        ("org-id", ""),
        ("instance-id", SOURCE_ID),
        ("tembo-token", TOKEN),
    ])
    .await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout.contains("::error::Input required and not supplied: org-id"),
        "{stdout}"
    );
}

#[tokio::test]
async fn test_delete_through_inputs() {
    let server = MockServer::start().await;
    api("DELETE", &instance_path(SOURCE_ID))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let mut inputs = required(&uri);
    inputs.push(("action", "delete"));
    inputs.push(("instance-name", ""));

    let output = run(&inputs).await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{stdout}");
    assert!(!stdout.contains("::error::"), "{stdout}");
}
