mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn styles_lists_catalog() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("trap"))
        .stdout(predicate::str::contains("latin-trap"))
        .stdout(predicate::str::contains("Horror"));
}

#[test]
fn styles_alias_matches() {
    let ctx = TestContext::new();
    let output = ctx.cli().arg("ls").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 20);
}

#[test]
fn schema_prints_required_fields() {
    let ctx = TestContext::new();

    let output = ctx.cli().arg("schema").output().unwrap();
    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let required = schema["required"].as_array().unwrap();
    assert_eq!(required.len(), 5);
    assert_eq!(schema["type"], "OBJECT");
}

#[test]
fn prompt_preview_uses_selected_styles() {
    let ctx = TestContext::new();
    let lyrics = ctx.write_lyrics("Counting money\nRiding slow");

    ctx.cli()
        .args(["prompt", "-s", "drill", "-s", "Horror", "-f"])
        .arg(&lyrics)
        .assert()
        .success()
        .stdout(predicate::str::contains("Drill ("))
        .stdout(predicate::str::contains("Horror ("))
        .stdout(predicate::str::contains("--- user content ---\nCounting money\nRiding slow"));
}

#[test]
fn prompt_reads_stdin_and_defaults_style() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("prompt")
        .write_stdin("Ride out")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trap ("));
}

#[test]
fn prompt_honors_configured_default_style() {
    let ctx = TestContext::new();
    ctx.write_config("[studio]\ndefault_style = \"phonk\"\n");

    ctx.cli()
        .arg("prompt")
        .write_stdin("Ride out")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phonk ("))
        .stdout(predicate::str::contains("Trap (").not());
}

#[test]
fn prompt_rejects_blank_lyrics() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("prompt")
        .write_stdin("   \n  ")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Lyrics must not be empty"));
}

#[test]
fn unknown_style_is_rejected_by_parser() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prompt", "-s", "horrorcore"])
        .write_stdin("Ride out")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown style 'horrorcore'"));
}

#[test]
fn unknown_config_key_fails() {
    let ctx = TestContext::new();
    ctx.write_config("[studio]\ndefault_vibe = \"trap\"\n");

    ctx.cli()
        .arg("prompt")
        .write_stdin("Ride out")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "missing.toml", "schema"])
        .assert()
        .success();

    ctx.cli()
        .args(["--config", "missing.toml", "prompt"])
        .write_stdin("Ride out")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn library_lists_entries() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("library")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. Skrrt!"))
        .stdout(predicate::str::contains("14. It's lit!"));
}

#[test]
fn library_copy_out_of_range_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["library", "--copy", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No library entry #99 (choose 1-14)"))
        .stderr(predicate::str::contains("--verbose").not());
}

#[test]
fn unreadable_lyrics_file_names_the_path() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prompt", "-f", "missing-verse.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read lyrics file missing-verse.txt"));
}

#[test]
fn generate_without_api_key_fails() {
    let ctx = TestContext::new();
    let lyrics = ctx.write_lyrics("Counting money");

    ctx.cli()
        .args(["generate", "-f"])
        .arg(&lyrics)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}
