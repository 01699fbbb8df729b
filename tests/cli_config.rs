//! Tests for `issued config`: configuration layering as seen from the binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn issued(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("issued").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ISSUED_BIND")
        .env_remove("ISSUED_ID_PREFIX")
        .env_remove("ISSUED_CORS_ORIGINS")
        .env_remove("ISSUED_LOG_JSON")
        .env_remove("RUST_LOG");
    cmd
}

fn config_json(cmd: &mut Command) -> Value {
    let output = cmd.arg("config").arg("--json").output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn defaults_without_sources() {
    let dir = TempDir::new().unwrap();
    let config = config_json(&mut issued(&dir));
    assert_eq!(config["bind"], "127.0.0.1:8000");
    assert_eq!(config["id_prefix"], "iss");
    assert_eq!(config["log_json"], false);
    assert_eq!(config["cors_origins"][0], "http://localhost:3000");
}

#[test]
fn yaml_file_in_working_directory_is_read() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("issued.yaml"),
        "bind: 0.0.0.0:9000\nid-prefix: bug\n",
    )
    .unwrap();

    let config = config_json(&mut issued(&dir));
    assert_eq!(config["bind"], "0.0.0.0:9000");
    assert_eq!(config["id_prefix"], "bug");
}

#[test]
fn env_overrides_file_and_cli_overrides_env() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("issued.yaml"), "id-prefix: file\n").unwrap();

    let config = config_json(issued(&dir).env("ISSUED_ID_PREFIX", "env"));
    assert_eq!(config["id_prefix"], "env");

    let config = config_json(
        issued(&dir)
            .env("ISSUED_ID_PREFIX", "env")
            .args(["--id-prefix", "cli"]),
    );
    assert_eq!(config["id_prefix"], "cli");
}

#[test]
fn cli_can_turn_off_env_log_json() {
    let dir = TempDir::new().unwrap();
    let config = config_json(issued(&dir).env("ISSUED_LOG_JSON", "true"));
    assert_eq!(config["log_json"], true);

    let config = config_json(
        issued(&dir)
            .env("ISSUED_LOG_JSON", "true")
            .arg("--log-json=false"),
    );
    assert_eq!(config["log_json"], false);
}

#[test]
fn cors_origins_from_env() {
    let dir = TempDir::new().unwrap();
    let config = config_json(
        issued(&dir).env("ISSUED_CORS_ORIGINS", "http://a.test, http://b.test"),
    );
    assert_eq!(
        config["cors_origins"],
        serde_json::json!(["http://a.test", "http://b.test"])
    );
}

#[test]
fn yaml_output_by_default() {
    let dir = TempDir::new().unwrap();
    issued(&dir)
        .args(["--bind", "127.0.0.1:9100", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:9100"))
        .stdout(predicate::str::contains("id_prefix: iss"));
}

#[test]
fn invalid_prefix_fails() {
    let dir = TempDir::new().unwrap();
    issued(&dir)
        .args(["--id-prefix", "not a prefix", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("id-prefix"));
}

#[test]
fn invalid_bind_fails() {
    let dir = TempDir::new().unwrap();
    issued(&dir)
        .args(["--bind", "nowhere", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bind"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    issued(&dir)
        .args(["--config", "absent.yaml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
