//! Integration tests for the venue-search CLI
//!
//! These tests run the venue-search binary against a small catalog.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Get a Command for venue-search with ambient config isolated
fn venue_search(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("venue-search");
    cmd.current_dir(dir)
        .env("VENUE_SEARCH_CONFIG_DIR", dir)
        .env_remove("VENUE_SEARCH_CONFIG")
        .env_remove("VENUE_SEARCH_VENUES")
        .env_remove("RUST_LOG");
    cmd
}

const CATALOG: &str = r#"[
    {"id": 1, "name": "Grand Hall", "location": {"city": "Kathmandu"}, "categories": ["WEDDING"]},
    {"id": 2, "name": "Royal Banquet", "location": {"city": "Kathmandu"}, "categories": ["WEDDING"]},
    {"id": 3, "name": "City Lounge", "location": {"city": "Kathmandu"}},
    {"id": 4, "name": "Lakeside Pavilion", "location": {"city": "Pokhara"}, "category": "CONCERT"}
]"#;

/// Write the sample catalog and a config allowing WEDDING and PARTY_HALL
fn setup() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let venues = dir.path().join("venues.json");
    fs::write(&venues, CATALOG).unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "categories = [\"PARTY_HALL\", \"WEDDING\"]\n",
    )
    .unwrap();
    (dir, venues)
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    venue_search(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: venue-search"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("similar"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    venue_search(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("venue-search"));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_category_prefix() {
    let (dir, venues) = setup();
    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["search", "wed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Grand Hall (Kathmandu)"))
        .stdout(predicate::str::contains("2 Royal Banquet (Kathmandu)"))
        .stdout(predicate::str::contains("Suggestions: wedding"));
}

#[test]
fn test_search_no_results() {
    let (dir, venues) = setup();
    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["search", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'xyz'"));
}

#[test]
fn test_search_json_output() {
    let (dir, venues) = setup();
    let output = venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["--format", "json", "search", "WED"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["suggestions"], serde_json::json!(["wedding"]));
    assert_eq!(json["venues"].as_array().unwrap().len(), 2);
    assert_eq!(json["venues"][0]["id"], "1");
}

#[test]
fn test_disallowed_category_not_searchable() {
    let (dir, venues) = setup();
    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["search", "concert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));

    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["--allow", "concert", "search", "concert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 Lakeside Pavilion (Pokhara)"));
}

#[test]
fn test_search_requires_venues() {
    let (dir, _) = setup();
    venue_search(dir.path())
        .args(["search", "wed"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--venues"));
}

#[test]
fn test_malformed_catalog_is_data_error() {
    let dir = tempdir().unwrap();
    let venues = dir.path().join("venues.json");
    fs::write(&venues, r#"[{"name": "missing id"}]"#).unwrap();

    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["search", "m"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid catalog"));
}

#[test]
fn test_null_services_do_not_reject_catalog() {
    let dir = tempdir().unwrap();
    let venues = dir.path().join("venues.json");
    fs::write(
        &venues,
        r#"[{"id": 18446744073709551615, "name": "Grand Hall", "services": null}]"#,
    )
    .unwrap();

    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["search", "grand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18446744073709551615 Grand Hall"));
}

// ============================================================================
// similar
// ============================================================================

#[test]
fn test_similar_ranks_by_score() {
    let (dir, venues) = setup();
    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["similar", "1", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)5  2 Royal Banquet.*2  3 City Lounge").unwrap())
        .stdout(predicate::str::contains("Grand Hall").not());
}

#[test]
fn test_similar_json_output() {
    let (dir, venues) = setup();
    let output = venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["--format", "json", "similar", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let similar = json["similar"].as_array().unwrap();
    assert_eq!(similar.len(), 2);
    assert_eq!(similar[0]["venue"]["id"], "2");
    assert_eq!(similar[0]["score"], 5);
    assert_eq!(similar[1]["venue"]["id"], "3");
    assert_eq!(similar[1]["score"], 2);
}

#[test]
fn test_similar_unknown_venue() {
    let (dir, venues) = setup();
    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["--format", "json", "similar", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("venue_not_found"));
}

#[test]
fn test_similar_zero_limit_is_usage_error() {
    let (dir, venues) = setup();
    venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["similar", "1", "--limit", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_similar_uses_configured_limit() {
    let (dir, venues) = setup();
    fs::write(
        dir.path().join("config.toml"),
        "categories = [\"WEDDING\"]\nsimilar_limit = 1\n",
    )
    .unwrap();

    let output = venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["--format", "json", "similar", "1"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["similar"].as_array().unwrap().len(), 1);
}

// ============================================================================
// category and stats
// ============================================================================

#[test]
fn test_category_check_is_case_insensitive() {
    let (dir, _) = setup();
    venue_search(dir.path())
        .args(["category", "Wedding"])
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed: Wedding"));

    venue_search(dir.path())
        .args(["category", "Karnali"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not allowed: Karnali"));
}

#[test]
fn test_allow_flag_extends_configured_gate() {
    let (dir, _) = setup();
    venue_search(dir.path())
        .args(["--allow", "Karnali", "--allow", "gandaki", "category", "KARNALI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed: KARNALI"))
        .stdout(predicate::str::contains("not allowed").not());

    venue_search(dir.path())
        .args(["--allow", "Karnali", "category", "Wedding"])
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed: Wedding"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "categories = [\"gandaki\"]\n").unwrap();

    venue_search(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "category", "Gandaki"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allowed\": true"));
}

#[test]
fn test_stats_json() {
    let (dir, venues) = setup();
    let output = venue_search(dir.path())
        .arg("--venues")
        .arg(&venues)
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["records"], 4);
    assert_eq!(json["venues"], 4);
    assert_eq!(json["categories"], 2);
}
