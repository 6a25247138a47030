mod common;

use common::{TestContext, VALID_RESULT, gemini_envelope};
use mockito::Matcher;
use predicates::prelude::*;
use serial_test::serial;

const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";

#[test]
#[serial]
fn generate_renders_result() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "Counting money\nRiding slow"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope(VALID_RESULT))
        .expect(1)
        .create();
    ctx.write_config_for_server(&server.url());
    let lyrics = ctx.write_lyrics("Counting money\nRiding slow");

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .args(["generate", "-s", "trap", "-f"])
        .arg(&lyrics)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cold flex"))
        .stdout(predicate::str::contains("Yeah, we up"))
        .stdout(predicate::str::contains("Stock Energy Shots"));

    mock.assert();
}

#[test]
#[serial]
fn generate_json_output_round_trips() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope(VALID_RESULT))
        .create();
    ctx.write_config_for_server(&server.url());

    let output = ctx
        .cli()
        .env("API_KEY", "fallback-key")
        .args(["generate", "--json"])
        .write_stdin("Counting money")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["signatureCall"], "Yeah, we up");
    assert_eq!(value["lyricSuggestions"][0]["reason"], "Adds internal rhyme");
}

#[test]
#[serial]
fn non_json_reply_reports_generic_message() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope("Sorry, I can't help with that"))
        .create();
    ctx.write_config_for_server(&server.url());

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .arg("generate")
        .write_stdin("Counting money\n(laughs)")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to generate ad-libs. Please try again."))
        .stderr(predicate::str::contains("Rerun with --verbose"))
        .stderr(predicate::str::contains("Sorry").not());
}

#[test]
#[serial]
fn upstream_failure_is_reported_once() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .with_status(500)
        .with_body("internal")
        .expect(1)
        .create();
    ctx.write_config_for_server(&server.url());

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .arg("generate")
        .write_stdin("Counting money")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    mock.assert();
}

#[test]
#[serial]
fn verbose_logs_parse_detail() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope(r#"{"annotatedLyrics": "x"}"#))
        .create();
    ctx.write_config_for_server(&server.url());

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .args(["--verbose", "generate"])
        .write_stdin("Counting money")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid response JSON"))
        .stderr(predicate::str::contains("test-key").not());
}
