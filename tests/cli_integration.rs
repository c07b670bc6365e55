//! CLI integration tests for folio
//!
//! These tests drive the binary from initialization through building and
//! inspecting a site.

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the folio binary
fn folio_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("folio"));
    cmd.env_remove("FOLIO_CONTENT_ROOT").env_remove("RUST_LOG");
    cmd
}

/// Create a temporary directory and initialize a folio site
fn setup_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    folio_cmd().arg("init").arg(dir.path()).assert().success();
    dir
}

fn content_dir(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("assets/content")
}

// =============================================================================
// Initialization Tests
// =============================================================================

#[test]
fn test_init_creates_structure() {
    let dir = TempDir::new().unwrap();

    folio_cmd()
        .arg("init")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized folio site"));

    assert!(dir.path().join("folio.toml").is_file());
    assert!(dir.path().join("layout.toml").is_file());
    for name in [
        "config.json",
        "intro.json",
        "experience.json",
        "education.json",
        "interests.json",
        "publications.json",
        "contact.json",
    ] {
        assert!(content_dir(&dir).join(name).is_file(), "missing {}", name);
    }
}

#[test]
fn test_init_is_idempotent() {
    let dir = TempDir::new().unwrap();

    folio_cmd().arg("init").arg(dir.path()).assert().success();
    folio_cmd().arg("init").arg(dir.path()).assert().success();
}

// =============================================================================
// Build Tests
// =============================================================================

#[test]
fn test_build_writes_page() {
    let dir = setup_site();

    folio_cmd()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built"));

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<h1>Your Name</h1>"));
    assert!(html.contains("mailto:you@example.com"));
}

#[test]
fn test_build_outside_site_fails() {
    let dir = TempDir::new().unwrap();

    folio_cmd()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in a folio site"));
}

#[test]
fn test_build_from_subdirectory() {
    let dir = setup_site();

    folio_cmd()
        .current_dir(content_dir(&dir))
        .arg("build")
        .assert()
        .success();

    assert!(dir.path().join("index.html").is_file());
}

#[test]
fn test_build_json_summary() {
    let dir = setup_site();

    let assert = folio_cmd()
        .current_dir(dir.path())
        .args(["build", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let summary: Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(summary["rendered"], true);
    assert_eq!(summary["failures"].as_array().unwrap().len(), 0);
    assert_eq!(
        summary["sections"],
        serde_json::json!(["about", "experience", "publications", "education", "interests", "contact"])
    );
}

#[test]
fn test_build_with_broken_document_keeps_others() {
    let dir = setup_site();
    fs::write(content_dir(&dir).join("education.json"), "{ broken").unwrap();

    folio_cmd()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success()
        .stderr(predicate::str::contains("education.json"));

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<div id=\"education-content\"></div>"));
    assert!(html.contains("Software Engineer"));
}

#[test]
fn test_build_without_config_keeps_layout_order() {
    let dir = setup_site();
    fs::remove_file(content_dir(&dir).join("config.json")).unwrap();

    let assert = folio_cmd()
        .current_dir(dir.path())
        .args(["build", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let summary: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(
        summary["sections"],
        serde_json::json!(["about", "experience", "education", "publications", "interests", "contact"])
    );
}

#[test]
fn test_build_out_override() {
    let dir = setup_site();

    folio_cmd()
        .current_dir(dir.path())
        .args(["build", "--out", "public/index.html"])
        .assert()
        .success();

    assert!(dir.path().join("public/index.html").is_file());
}

// =============================================================================
// Inspection Tests
// =============================================================================

#[test]
fn test_sections_lists_configured_order() {
    let dir = setup_site();

    folio_cmd()
        .current_dir(dir.path())
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("about"))
        .stdout(predicate::str::contains("experience"))
        .stdout(predicate::str::contains("contact"));
}

#[test]
fn test_sections_json_navigation() {
    let dir = setup_site();
    fs::write(
        content_dir(&dir).join("config.json"),
        r#"{"sections":[
            {"id":"projects","title":"Projects","order":2,"visible":true},
            {"id":"skills","title":"Skills","order":1,"visible":true},
            {"id":"talks","title":"Talks","order":0,"visible":false}
        ]}"#,
    )
    .unwrap();

    let assert = folio_cmd()
        .current_dir(dir.path())
        .args(["sections", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(json["configured"], true);
    assert_eq!(
        json["navigation"],
        r##"<a href="#about">About</a><a href="#skills">Skills</a><a href="#projects">Projects</a><a href="#contact">Contact</a>"##
    );
    assert_eq!(json["sections"].as_array().unwrap().len(), 2);
}

#[test]
fn test_check_passes_on_sample_content() {
    let dir = setup_site();

    folio_cmd()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All content documents load"));
}

#[test]
fn test_check_reports_failures() {
    let dir = setup_site();
    fs::remove_file(content_dir(&dir).join("interests.json")).unwrap();
    fs::write(content_dir(&dir).join("contact.json"), r#"{"email":"x"}"#).unwrap();

    folio_cmd()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED  interests.json"))
        .stdout(predicate::str::contains("FAILED  contact.json"))
        .stderr(predicate::str::contains("2 of 7"));
}

#[test]
fn test_content_env_override() {
    let dir = setup_site();
    let other = TempDir::new().unwrap();
    fs::write(
        other.path().join("intro.json"),
        r#"{"name":"Other Person","details":["A","B"],"description":["x"],"socials":[]}"#,
    )
    .unwrap();

    folio_cmd()
        .current_dir(dir.path())
        .env("FOLIO_CONTENT_ROOT", other.path())
        .arg("build")
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<h1>Other Person</h1>"));
    assert!(!html.contains("Your Name"));
}
