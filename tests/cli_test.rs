//! Integration tests for the endpoint-resolver binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "ENDPOINTS_HOST",
    "ENDPOINTS_LOCAL_WS",
    "ENDPOINTS_LOCAL_HTTP",
    "ENDPOINTS_PRODUCTION_WS",
    "ENDPOINTS_PRODUCTION_HTTP",
];

const CONFIG: &str = r#"
production:
  ws: wss://chat.example.com
  http: https://chat.example.com
"#;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".endpoints");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

fn resolver(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("endpoint-resolver"));
    cmd.current_dir(temp.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resolver(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("endpoint URLs"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resolver(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn resolve_localhost() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["resolve", "--host", "localhost"])
        .assert()
        .success()
        .stdout("API_URL='http://localhost:8000'\nWS_URL='ws://localhost:8000'\n");
    Ok(())
}

#[test]
fn resolve_loopback_ip() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["resolve", "--host", "127.0.0.1"])
        .assert()
        .success()
        .stdout("API_URL='http://localhost:8000'\nWS_URL='ws://localhost:8000'\n");
    Ok(())
}

#[test]
fn resolve_public_host() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["resolve", "--host", "example.com"])
        .assert()
        .success()
        .stdout("API_URL='https://chat.example.com'\nWS_URL='wss://chat.example.com'\n");
    Ok(())
}

#[test]
fn resolve_without_host_is_production() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("API_URL='https://chat.example.com'"));
    Ok(())
}

#[test]
fn default_command_is_resolve() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .env("ENDPOINTS_HOST", "localhost")
        .assert()
        .success()
        .stdout(predicate::str::contains("API_URL='http://localhost:8000'"));
    Ok(())
}

#[test]
fn default_command_accepts_resolve_flags() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["--host", "127.0.0.1"])
        .env("ENDPOINTS_HOST", "example.com")
        .assert()
        .success()
        .stdout("API_URL='http://localhost:8000'\nWS_URL='ws://localhost:8000'\n");
    Ok(())
}

#[test]
fn debug_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["resolve", "--host", "localhost", "--debug"])
        .assert()
        .success()
        .stdout("API_URL='http://localhost:8000'\nWS_URL='ws://localhost:8000'\n")
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("Resolved endpoint tier"));
    Ok(())
}

#[test]
fn no_logs_without_debug() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["resolve", "--host", "localhost"])
        .assert()
        .success()
        .stderr("");
    Ok(())
}

#[test]
fn resolve_host_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .arg("resolve")
        .env("ENDPOINTS_HOST", "127.0.0.1")
        .assert()
        .success()
        .stdout(predicate::str::contains("WS_URL='ws://localhost:8000'"));
    Ok(())
}

#[test]
fn resolve_from_url() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["resolve", "--url", "http://localhost:3000/interview.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API_URL='http://localhost:8000'"));
    Ok(())
}

#[test]
fn resolve_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    let output = resolver(&temp)
        .args(["resolve", "--host", "example.com", "--format", "json"])
        .output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["API_URL"], "https://chat.example.com");
    assert_eq!(value["WS_URL"], "wss://chat.example.com");
    Ok(())
}

#[test]
fn env_overrides_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["resolve", "--host", "example.com"])
        .env("ENDPOINTS_PRODUCTION_HTTP", "https://canary.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("API_URL='https://canary.example.com'"))
        .stdout(predicate::str::contains("WS_URL='wss://chat.example.com'"));
    Ok(())
}

#[test]
fn resolve_fails_without_production() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resolver(&temp)
        .args(["resolve", "--host", "localhost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("production.http is not configured"));
    Ok(())
}

#[test]
fn resolve_with_explicit_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let custom = temp.path().join("endpoints.yml");
    fs::write(&custom, CONFIG)?;
    resolver(&temp)
        .args(["resolve", "--host", "example.com", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://chat.example.com"));
    Ok(())
}

#[test]
fn project_discovered_from_subdirectory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    let nested = temp.path().join("frontend").join("static");
    fs::create_dir_all(&nested)?;
    let mut cmd = resolver(&temp);
    cmd.current_dir(&nested);
    cmd.args(["resolve", "--host", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://chat.example.com"));
    Ok(())
}

#[test]
fn check_passes_for_valid_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Endpoint configuration is valid"));
    Ok(())
}

#[test]
fn quiet_check_prints_nothing_on_success() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["--quiet", "check"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
    Ok(())
}

#[test]
fn quiet_check_still_reports_problems() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resolver(&temp)
        .args(["check", "--quiet"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("missing-url"));
    Ok(())
}

#[test]
fn no_color_flag_gives_plain_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .env_remove("NO_COLOR")
        .args(["check", "--no-color"])
        .assert()
        .success()
        .stdout("✓ Endpoint configuration is valid\n");
    Ok(())
}

#[test]
fn check_reports_problems() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("production:\n  ws: https://chat.example.com\n");
    resolver(&temp)
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("wrong-scheme"))
        .stderr(predicate::str::contains("missing-url"));
    Ok(())
}

#[test]
fn config_lists_sources() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .arg("config")
        .env("ENDPOINTS_LOCAL_HTTP", "http://localhost:9000")
        .assert()
        .success()
        .stdout(predicate::str::contains("(built-in default)"))
        .stdout(predicate::str::contains("http://localhost:9000  (environment)"));
    Ok(())
}

#[test]
fn schema_is_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = resolver(&temp).arg("schema").output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(value["properties"]["production"].is_object());
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    resolver(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("endpoint-resolver"));
    Ok(())
}

#[test]
fn unknown_format_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    resolver(&temp)
        .args(["resolve", "--format", "toml"])
        .assert()
        .failure()
        .code(2);
    Ok(())
}
