//! Tests for error handling and exit codes.

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn quill(home: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("quill");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_variable_fails_with_user_error() {
    let home = TempDir::new().unwrap();
    quill(&home)
        .args(["render", "-s", "Hello {{ name }}"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Undefined variable"))
        .stderr(predicate::str::contains("quill inspect"));
}

#[test]
fn test_malformed_template_fails() {
    let home = TempDir::new().unwrap();
    quill(&home)
        .args(["render", "-s", "Hello {{ name "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Template syntax error"));
}

#[test]
fn test_template_file_not_found() {
    let home = TempDir::new().unwrap();
    quill(&home)
        .args(["render", "-t"])
        .arg(home.path().join("missing.j2"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Template file not found"))
        .stderr(predicate::str::contains("--template-str"));
}

#[test]
fn test_wrong_component_type() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("other.json");
    fs::write(
        &config,
        r#"{"type": "AnswerBuilder", "init_parameters": {"template": "x"}}"#,
    )
    .unwrap();

    quill(&home)
        .args(["render", "--from"])
        .arg(&config)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("AnswerBuilder"));
}

#[test]
fn test_malformed_component_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.json");
    fs::write(&config, "{ not json").unwrap();

    quill(&home)
        .args(["inspect", "--from"])
        .arg(&config)
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_missing_explicit_config_file() {
    let home = TempDir::new().unwrap();
    quill(&home)
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .args(["config", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    let home = TempDir::new().unwrap();
    quill(&home)
        .args(["config", "get", "render.nope"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_template_source_is_usage_error() {
    let home = TempDir::new().unwrap();
    quill(&home)
        .args(["render", "--var", "a=b"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_verbose_shows_no_hint() {
    let home = TempDir::new().unwrap();
    quill(&home)
        .args(["-v", "render", "-s", "{{ x }}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run again with -v").not());
}

#[test]
fn test_unwritable_export_target_is_internal_error() {
    let home = TempDir::new().unwrap();
    let blocker = home.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    quill(&home)
        .args(["export", "-s", "Hi", "-o"])
        .arg(blocker.join("builder.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not found:").not());
}

#[test]
fn test_no_color_env_is_accepted_on_failure_paths() {
    let home = TempDir::new().unwrap();
    quill(&home)
        .env("NO_COLOR", "1")
        .args(["render", "-s", "{{ missing }}"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Undefined variable"));
}
