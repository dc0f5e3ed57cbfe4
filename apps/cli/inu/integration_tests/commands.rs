//! End-to-end tests of `inu put` / `inu get` against a mock paste server.

use inu::cli::{Cli, Command, GetArgs, PutArgs};
use inu::commands;
use inu::error::InuError;
use inu::settings::SettingsSources;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn put_args(argv: &[&str]) -> PutArgs {
    match Cli::parse_from(argv.iter().copied()).into_command() {
        Command::Put(args) => args,
        other => panic!("Expected Put, got {other:?}"),
    }
}

fn get_args(argv: &[&str]) -> GetArgs {
    match Cli::parse_from(argv.iter().copied()).into_command() {
        Command::Get(args) => args,
        other => panic!("Expected Get, got {other:?}"),
    }
}

/// **VALUE**: Verifies `inu -r <server> SLUG CONTENT` uploads and prints the link.
#[tokio::test]
async fn given_slug_and_content_when_put_then_prints_document_url() {
    // GIVEN: A dogbin server accepting a custom slug
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .and(body_json(json!({"slug": "works", "content": "random content"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"key":"works","isUrl":false}"#))
        .expect(1)
        .mount(&server)
        .await;
    let uri = server.uri();
    let args = put_args(&["inu", "-r", uri.as_str(), "works", "random content"]);

    // WHEN: Running put
    let output = commands::put::execute(&args, &SettingsSources::default(), None)
        .await
        .unwrap();

    // THEN: The shareable link is printed
    assert_eq!(output, format!("{}/works", server.uri()));
}

/// **VALUE**: Verifies the environment-supplied key reaches the server.
#[tokio::test]
async fn given_env_key_when_put_from_stdin_then_key_header_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .and(header("x-api-key", "env-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"key":"piped"}"#))
        .expect(1)
        .mount(&server)
        .await;
    let sources = SettingsSources {
        env_server: Some(server.uri()),
        env_key: common::RedactedApiKey::from_input("env-key"),
        settings_dir: None,
    };
    let args = put_args(&["inu", "put", "--json"]);

    let output = commands::put::execute(&args, &sources, Some(String::from("from stdin")))
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["key"], "piped");
}

#[tokio::test]
async fn given_no_content_when_put_then_empty_content_message() {
    let args = put_args(&["inu", "put", "-r", "http://127.0.0.1:9"]);

    let err = commands::put::execute(&args, &SettingsSources::default(), None)
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "no content was provided");
}

/// **VALUE**: Verifies a pasted link is fetched from the link's own server.
///
/// **WHY THIS MATTERS**: `inu get http://host/abc` must ignore the configured default
/// server, otherwise links to other instances never resolve.
#[tokio::test]
async fn given_full_link_when_get_then_fetches_from_link_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/existshaste"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"data":"works", "key":"existshaste"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    let link = format!("{}/existshaste.rs", server.uri());
    let args = get_args(&["inu", "get", "-r", "del.dog", link.as_str()]);

    let output = commands::get::execute(&args, &SettingsSources::default())
        .await
        .unwrap();

    assert_eq!(output, "works");
}

#[tokio::test]
async fn given_unknown_slug_when_get_then_server_message_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/notexist"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"Document not found."}"#))
        .mount(&server)
        .await;
    let uri = server.uri();
    let args = get_args(&["inu", "get", "-r", uri.as_str(), "notexist"]);

    let err = commands::get::execute(&args, &SettingsSources::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InuError::Paste(_)));
    assert_eq!(err.user_message(), "Document not found.");
}

#[tokio::test]
async fn given_no_slug_when_get_then_usage_error() {
    let args = get_args(&["inu", "get"]);

    let err = commands::get::execute(&args, &SettingsSources::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InuError::Usage { .. }));
}
