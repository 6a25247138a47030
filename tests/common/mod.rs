//! Shared testing utilities for adlib CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Raw JSON payload a well-behaved model returns.
#[allow(dead_code)]
pub const VALID_RESULT: &str = r#"{"annotatedLyrics":"Counting money (cash!)\nRiding slow (skrrt)","generalAdLibs":["Skrrt!","Pah!"],"vibeAnalysis":"Cold flex","signatureCall":"Yeah, we up","lyricSuggestions":[{"originalLine":"Riding slow","suggestedChange":"Riding slow through the snow","reason":"Adds internal rhyme"}]}"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `adlib` binary with a scrubbed environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("adlib").expect("Failed to locate adlib binary");
        cmd.current_dir(self.work_dir())
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("ADLIB_CONFIG")
            .env_remove("ADLIB_LOG");
        cmd
    }

    /// Write `.adlib/config.toml` in the working directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.work_dir().join(".adlib");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Point the Gemini endpoint at a mock server.
    pub fn write_config_for_server(&self, server_url: &str) -> PathBuf {
        self.write_config(&format!(
            "[gemini]\napi_url = \"{}/v1beta/\"\nmodel = \"test-model\"\ntimeout_secs = 5\n",
            server_url
        ))
    }

    /// Write a lyrics file and return its path.
    pub fn write_lyrics(&self, content: &str) -> PathBuf {
        let path = self.work_dir().join("lyrics.txt");
        fs::write(&path, content).expect("Failed to write lyrics");
        path
    }
}

/// Wrap model output text in a Gemini `generateContent` envelope.
#[allow(dead_code)]
pub fn gemini_envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
    })
    .to_string()
}
