//! Integration tests for the `geocat` binary.
//!
//! Argument parsing, help output, completions, and a couple of
//! mock-backend round trips through the full binary.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `geocat` binary with env isolation.
///
/// Points config and cache directories at a temp path so tests never
/// touch the user's real configuration or snapshot cache.
fn geocat_cmd(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("geocat");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_CACHE_HOME", home.join("cache"))
        .env_remove("GEOCAT_BACKEND")
        .env_remove("GEOCAT_EMAIL")
        .env_remove("GEOCAT_OUTPUT")
        .env_remove("GEOCAT_TIMEOUT")
        .env_remove("GEOCAT_NO_CACHE");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Mount a valid, verified session check for `admin@example.com`.
async fn mount_session(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/check-session"))
        .and(query_param("email", "admin@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": true,
            "user": { "email": "admin@example.com", "name": "Admin", "isVerified": true }
        })))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = geocat_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn help_lists_entity_commands() {
    let home = tempfile::tempdir().unwrap();
    geocat_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("countries")
            .and(predicate::str::contains("cities"))
            .and(predicate::str::contains("products"))
            .and(predicate::str::contains("seo"))
            .and(predicate::str::contains("inquiries")),
    );
}

#[test]
fn version_flag() {
    let home = tempfile::tempdir().unwrap();
    geocat_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("geocat"));
}

#[test]
fn delete_requires_an_id() {
    let home = tempfile::tempdir().unwrap();
    geocat_cmd(home.path())
        .args(["cities", "delete"])
        .assert()
        .failure()
        .code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn completions_bash() {
    let home = tempfile::tempdir().unwrap();
    geocat_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn config_path_prints_a_location() {
    let home = tempfile::tempdir().unwrap();
    geocat_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_then_show_round_trips() {
    let home = tempfile::tempdir().unwrap();
    geocat_cmd(home.path())
        .args([
            "config",
            "init",
            "--backend",
            "http://backend.test:5000",
            "--email",
            "admin@example.com",
        ])
        .assert()
        .success();

    geocat_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("http://backend.test:5000")
                .and(predicate::str::contains("admin@example.com")),
        );
}

// ── Session gating ──────────────────────────────────────────────────

#[test]
fn listing_without_a_session_fails_with_auth_exit_code() {
    let home = tempfile::tempdir().unwrap();
    geocat_cmd(home.path())
        .args(["countries", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Not signed in"));
}

// ── Mock-backend round trips ────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn list_renders_resolved_reference_names() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/cities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "x1", "name": "Munich", "country": "c1" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "c1", "name": "Germany", "code": "DE" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        geocat_cmd(home.path())
            .env("GEOCAT_BACKEND", &uri)
            .env("GEOCAT_EMAIL", "admin@example.com")
            .args(["cities", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Munich").and(predicate::str::contains("Germany")));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_with_yes_flag_hits_the_backend_once() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/cities/x1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        geocat_cmd(home.path())
            .env("GEOCAT_BACKEND", &uri)
            .env("GEOCAT_EMAIL", "admin@example.com")
            .args(["cities", "delete", "x1", "--yes"])
            .assert()
            .success()
            .stderr(predicate::str::contains("City deleted successfully!"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn stats_counts_every_entity_collection() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    let collections: [(&str, usize); 6] = [
        ("/api/countries", 2),
        ("/api/states", 3),
        ("/api/cities", 1),
        ("/api/locations", 0),
        ("/api/products", 4),
        ("/api/inquiries", 1),
    ];
    for (route, len) in collections {
        let body: Vec<serde_json::Value> = (0..len)
            .map(|i| json!({ "_id": format!("id{i}"), "name": format!("n{i}") }))
            .collect();
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let home = tempfile::tempdir().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        geocat_cmd(home.path())
            .env("GEOCAT_BACKEND", &uri)
            .env("GEOCAT_EMAIL", "admin@example.com")
            .args(["-o", "plain", "stats"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("countries 2")
                    .and(predicate::str::contains("states 3"))
                    .and(predicate::str::contains("cities 1"))
                    .and(predicate::str::contains("locations 0"))
                    .and(predicate::str::contains("products 4"))
                    .and(predicate::str::contains("inquiries 1")),
            );
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_draft_fails_before_any_network_call() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/locations"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        geocat_cmd(home.path())
            .env("GEOCAT_BACKEND", &uri)
            .env("GEOCAT_EMAIL", "admin@example.com")
            .args(["locations", "add", "--name", "East depot", "--yes"])
            .assert()
            .failure()
            .code(5)
            .stderr(predicate::str::contains(
                "At least one of country, state, or city must be specified",
            ));
    })
    .await
    .unwrap();
}
