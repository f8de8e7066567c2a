use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn aquacarbon(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("aquacarbon");
    cmd.env("AQUACARBON_HOME", home)
        .env_remove("AQUACARBON_DATA")
        .env_remove("AQUACARBON_ROLE")
        .env_remove("RUST_LOG");
    cmd
}

fn run_json(home: &Path, args: &[&str]) -> Value {
    let out = aquacarbon(home)
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("registry"))
        .stdout(predicate::str::contains("marketplace"))
        .stdout(predicate::str::contains("explorer"));
}

#[test]
fn test_default_command_is_dashboard() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("AquaCarbon  [Credit Buyer]"))
        .stdout(predicate::str::contains("Trust Score      91%"));
}

#[test]
fn test_registry_status_filter() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["registry", "--status", "verified"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 3 projects"))
        .stdout(predicate::str::contains("Tamil Nadu Coastal Protection"))
        .stdout(predicate::str::contains("Sundarbans").not());
}

#[test]
fn test_registry_search_is_case_insensitive() {
    let home = TempDir::new().unwrap();
    let data = run_json(home.path(), &["registry", "--search", "PHILIPPINES"]);
    assert_eq!(data["ok"], true);
    let projects = data["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], "3");
}

#[test]
fn test_registry_unknown_status_shows_all() {
    let home = TempDir::new().unwrap();
    let data = run_json(home.path(), &["registry", "--status", "archived"]);
    assert_eq!(data["data"]["projects"].as_array().unwrap().len(), 3);
    assert_eq!(data["data"]["filter"]["status"], "all");
}

#[test]
fn test_marketplace_cart_total() {
    let home = TempDir::new().unwrap();
    let data = run_json(
        home.path(),
        &[
            "marketplace",
            "--add",
            "1",
            "--add",
            "2",
            "--add",
            "1",
            "--remove",
            "1",
        ],
    );
    let cart = &data["data"]["cart"];
    assert_eq!(cart["count"], 1);
    assert_eq!(cart["total"].as_f64(), Some(30.0));

    let credits = data["data"]["credits"].as_array().unwrap();
    let second = credits.iter().find(|c| c["id"] == "2").unwrap();
    assert_eq!(second["inCart"], true);
}

#[test]
fn test_marketplace_empty_cart_text() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["marketplace", "--price", "25-50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 of 3 credit lots"))
        .stdout(predicate::str::contains("Your cart is empty"));
}

#[test]
fn test_marketplace_unknown_credit_fails() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["marketplace", "--add", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot add credit '99' to cart"));
}

#[test]
fn test_data_file_replaces_mock_catalog() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("catalog.json");
    let catalog = json!({
        "credits": [{
            "id": "lot-9",
            "projectId": "proj-9",
            "tokenId": "BC-900-2025",
            "price": 60.0,
            "vintage": "2025",
            "quantity": 10,
            "status": "available",
            "owner": "Kelp Partners"
        }]
    });
    fs::write(&path, catalog.to_string()).unwrap();

    let data = run_json(
        home.path(),
        &[
            "--data",
            path.to_str().unwrap(),
            "marketplace",
            "--price",
            "50+",
            "--add",
            "lot-9",
        ],
    );
    assert_eq!(data["data"]["total"], 1);
    assert_eq!(data["data"]["cart"]["total"].as_f64(), Some(60.0));

    let data = run_json(home.path(), &["--data", path.to_str().unwrap(), "registry"]);
    assert_eq!(data["data"]["total"], 0);
}

#[test]
fn test_missing_data_file_fails() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["--data", "/nonexistent/catalog.json", "registry"])
        .assert()
        .failure();
}

#[test]
fn test_explorer_supply_and_audit() {
    let home = TempDir::new().unwrap();
    let data = run_json(home.path(), &["explorer", "--credit", "BC-001-2024"]);
    assert_eq!(data["data"]["tab"], "transactions");
    assert_eq!(data["data"]["supply"], 500);
    assert_eq!(data["data"]["transactions"].as_array().unwrap().len(), 3);

    aquacarbon(home.path())
        .args(["explorer", "audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A+"));
}

#[test]
fn test_mrv_variance() {
    let home = TempDir::new().unwrap();
    let data = run_json(home.path(), &["mrv", "--urgent"]);
    let verification = &data["data"]["verification"];
    assert_eq!(verification["reportId"], "MR-001");
    assert_eq!(verification["withinTolerance"], true);
    assert_eq!(data["data"]["notifications"].as_array().unwrap().len(), 2);
}

#[test]
fn test_farmer_tabs() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["--role", "farmer", "tabs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> community"))
        .stdout(predicate::str::contains("marketplace").not());
}

#[test]
fn test_unknown_role_fails() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["--role", "pirate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --role"));
}

#[test]
fn test_unlisted_tab_still_renders() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["--role", "farmer", "marketplace"])
        .env("RUST_LOG", "warn")
        .assert()
        .success()
        .stdout(predicate::str::contains("Carbon Credit Marketplace"))
        .stderr(predicate::str::contains("Tab is not in this role's menu"));
}

#[test]
fn test_config_save_is_picked_up() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["--role", "verifier", "config", "--save"])
        .assert()
        .success();
    assert!(home.path().join("config.json").exists());

    let data = run_json(home.path(), &["config"]);
    assert_eq!(data["data"]["role"], "verifier");

    let data = run_json(home.path(), &["dashboard"]);
    assert!(data["data"]["stats"].is_null());
}

#[test]
fn test_role_env_override() {
    let home = TempDir::new().unwrap();
    let out = aquacarbon(home.path())
        .env("AQUACARBON_ROLE", "ngo")
        .args(["--json", "tabs"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let menu: Value = serde_json::from_slice(&out).unwrap();
    let ids: Vec<&str> = menu["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["overview", "registry", "community", "settings"]);
}

#[test]
fn test_no_json_overrides_saved_config() {
    let home = TempDir::new().unwrap();
    aquacarbon(home.path())
        .args(["--json", "config", "--save"])
        .assert()
        .success();

    let data = run_json(home.path(), &["config"]);
    assert_eq!(data["data"]["json"], true);

    aquacarbon(home.path())
        .arg("registry")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));

    aquacarbon(home.path())
        .args(["--no-json", "registry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blue Carbon Registry"))
        .stdout(predicate::str::starts_with("{").not());
}

#[test]
fn test_explorer_ledger_figures() {
    let home = TempDir::new().unwrap();
    let data = run_json(home.path(), &["explorer"]);
    assert_eq!(data["data"]["retired"], 500);
    assert_eq!(data["data"]["allVerified"], true);

    let data = run_json(home.path(), &["explorer", "certificates"]);
    assert_eq!(data["data"]["active"], 1);

    aquacarbon(home.path())
        .args(["explorer", "wallet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wallet"));
}

#[test]
fn test_registry_type_accepts_display_name() {
    let home = TempDir::new().unwrap();
    let data = run_json(home.path(), &["registry", "--type", "mangrove"]);
    let echoed = data["data"]["filter"]["category"].as_str().unwrap().to_string();
    assert_eq!(echoed, "Mangrove Restoration");

    let again = run_json(home.path(), &["registry", "--type", &echoed]);
    assert_eq!(again["data"]["projects"], data["data"]["projects"]);
    assert_eq!(again["data"]["projects"].as_array().unwrap().len(), 1);
}
