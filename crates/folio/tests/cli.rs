// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runs the built `folio` binary against throwaway config files.

use std::path::Path;
use std::process::{Command, Output};

fn folio(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("GEMINI_API_KEY")
        .env("RUST_LOG", "off")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run folio binary")
}

fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("folio.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn ask_about_resume_prints_canned_reply() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "");

    let out = folio(&config, &["ask", "Can", "I", "download", "your", "resume?"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("You can download Haryiank's resume using the button below!"), "{stdout}");
}

#[test]
fn ask_without_backend_prints_default_reply() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        "[profile]\nfirst_name = \"Ada\"\nfull_name = \"Ada Lovelace\"\nemail = \"ada@example.com\"\n",
    );

    let out = folio(&config, &["ask", "What's your favorite food?"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.trim(),
        "I'm here to help you learn about Ada's experience, skills, and projects. What would you like to know?"
    );
}

#[test]
fn config_command_masks_secrets() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[gemini]\napi_key = \"AIzaSyTopSecret\"\n");

    let out = folio(&config, &["config"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("AIza****"), "{stdout}");
    assert!(!stdout.contains("TopSecret"));
}

#[test]
fn unknown_key_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[limiter]\nmax_cals = 3\n");

    let out = folio(&config, &["config"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("max_cals"));
}

#[test]
fn contact_without_emailjs_keys_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "");

    let out = folio(
        &config,
        &["contact", "--name", "Ada", "--email", "ada@example.com", "--message", "Hello"],
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Email configuration is missing"));
}
