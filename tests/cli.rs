use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("flagx").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("flagx"));
}

fn mock_backend(server: &mut mockito::ServerGuard) -> (mockito::Mock, mockito::Mock) {
    let health = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy","service":"country-api"}"#)
        .create();
    let countries = server
        .mock("GET", "/countries")
        .with_status(200)
        .with_body(r#"[{"name":"Canada","flag":"https://x/ca.png","population":38000000}]"#)
        .create();
    (health, countries)
}

#[test]
fn list_renders_one_card_with_abbreviated_population() {
    let mut server = mockito::Server::new();
    let _mocks = mock_backend(&mut server);

    let url = server.url();
    let mut cmd = Command::cargo_bin("flagx").unwrap();
    cmd.args(["--api-url", url.as_str(), "list", "--sort", "pop-desc"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Canada"))
        .stdout(predicate::str::contains("38.0M"))
        .stdout(predicate::str::contains("Found 1 countries"));
}

#[test]
fn list_fails_fast_when_the_health_probe_fails() {
    let mut server = mockito::Server::new();
    let _health = server.mock("GET", "/health").with_status(503).create();
    let countries = server.mock("GET", "/countries").expect(0).create();

    let url = server.url();
    let mut cmd = Command::cargo_bin("flagx").unwrap();
    cmd.args(["--api-url", url.as_str(), "list"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Backend API is not available"));
    countries.assert();
}

#[test]
fn list_saves_the_fetched_countries() {
    let mut server = mockito::Server::new();
    let _mocks = mock_backend(&mut server);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("countries.json");

    let url = server.url();
    let mut cmd = Command::cargo_bin("flagx").unwrap();
    cmd.args(["--api-url", url.as_str(), "list", "--out"]);
    cmd.arg(&out);
    cmd.assert().success();

    let saved = std::fs::read_to_string(&out).unwrap();
    assert!(saved.contains("Canada"));
}

#[test]
fn show_renders_the_detail_fields() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/countries/Canada")
        .with_status(200)
        .with_body(
            r#"{
              "name":"Canada","flag":"https://x/ca.png","population":38000000,
              "capital":"Ottawa","region":"Americas","area":9984670.0,"code":"CA"
            }"#,
        )
        .create();

    let url = server.url();
    let mut cmd = Command::cargo_bin("flagx").unwrap();
    cmd.args(["--api-url", url.as_str(), "show", "Canada"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ottawa"))
        .stdout(predicate::str::contains("38,000,000"))
        .stdout(predicate::str::contains("9,984,670 km²"));
}

#[test]
fn show_distinguishes_not_found_from_generic_failures() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/countries/Atlantis")
        .with_status(404)
        .create();

    let url = server.url();
    let mut cmd = Command::cargo_bin("flagx").unwrap();
    cmd.args(["--api-url", url.as_str(), "show", "Atlantis"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// Live test (opt-in): requires a running backend. Use: cargo test --features online
#[cfg(feature = "online")]
#[test]
fn health_against_live_backend() {
    let mut cmd = Command::cargo_bin("flagx").unwrap();
    cmd.arg("health");
    cmd.assert().success();
}
