use std::collections::HashMap;

use httpmock::Method::{DELETE, GET, POST};
use httpmock::MockServer;
use recap::registrar::{RegistrarAction, run, summarize_command};
use serde_json::json;

fn lookup(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect();
    move |key| map.get(key).cloned()
}

fn full_env(server: &MockServer) -> impl Fn(&str) -> Option<String> + use<> {
    lookup(&[
        ("APP_ID", "APP1".to_string()),
        ("DISCORD_TOKEN", "discord-token".to_string()),
        ("DISCORD_API_BASE", server.base_url()),
    ])
}

#[test]
fn test_command_definition_shape() {
    let value = serde_json::to_value(summarize_command()).expect("serialize");
    assert_eq!(
        value,
        json!({
            "name": "summarize",
            "description": "Summarize the conversation from the past specified number of days",
            "type": 1,
            "options": [{
                "name": "days",
                "description": "Number of days to summarize",
                "type": 4,
                "required": true
            }]
        })
    );
}

#[tokio::test]
async fn test_register_without_app_id_makes_no_request() {
    let server = MockServer::start_async().await;
    let posts = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200);
        })
        .await;
    let gets = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200);
        })
        .await;

    let env = lookup(&[
        ("DISCORD_TOKEN", "discord-token".to_string()),
        ("DISCORD_API_BASE", server.base_url()),
    ]);
    let code = run(RegistrarAction::Register, env).await;

    assert_eq!(code, 1);
    posts.assert_calls_async(0).await;
    gets.assert_calls_async(0).await;
}

#[tokio::test]
async fn test_register_posts_command_definition() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/applications/APP1/commands")
                .header("authorization", "Bot discord-token")
                .json_body(serde_json::to_value(summarize_command()).expect("serialize"));
            then.status(201).json_body(json!({ "id": "555", "name": "summarize" }));
        })
        .await;

    let code = run(RegistrarAction::Register, full_env(&server)).await;

    assert_eq!(code, 0);
    create.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_register_rejection_exits_non_zero() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/applications/APP1/commands");
            then.status(401)
                .json_body(json!({ "message": "401: Unauthorized", "code": 0 }));
        })
        .await;

    let code = run(RegistrarAction::Register, full_env(&server)).await;

    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_unregister_deletes_every_listed_command() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/applications/APP1/commands");
            then.status(200).json_body(json!([
                { "id": "11", "name": "summarize", "type": 1 },
                { "id": "12", "name": "legacy", "type": 1 }
            ]));
        })
        .await;
    let first = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/applications/APP1/commands/11");
            then.status(204);
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/applications/APP1/commands/12");
            then.status(204);
        })
        .await;

    let code = run(RegistrarAction::Unregister, full_env(&server)).await;

    assert_eq!(code, 0);
    list.assert_calls_async(1).await;
    first.assert_calls_async(1).await;
    second.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_unregister_stops_at_first_failed_delete() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/applications/APP1/commands");
            then.status(200).json_body(json!([{ "id": "11" }, { "id": "12" }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/applications/APP1/commands/11");
            then.status(404)
                .json_body(json!({ "message": "Unknown application command", "code": 10063 }));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/applications/APP1/commands/12");
            then.status(204);
        })
        .await;

    let code = run(RegistrarAction::Unregister, full_env(&server)).await;

    assert_eq!(code, 1);
    second.assert_calls_async(0).await;
}
