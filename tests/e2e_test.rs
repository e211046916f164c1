/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Writes a config that skips the confirmation delay
fn fast_config(dir: &TempDir) -> String {
    let path = dir.path().join("fast.config.yml");
    fs::write(&path, "confirmation_delay_ms: 0\n").unwrap();
    path.to_str().unwrap().to_string()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - catalog renders
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("app-catalog").arg("catalog").assert().code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("app-catalog").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("app-catalog").arg("--version").assert().code(0);
    }

    /// Exit code 1: Request rejected - blank justification
    #[test]
    fn test_exit_code_blank_justification() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("app-catalog")
            .args(["request", "2", "--config", &fast_config(&dir)])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Business justification is required"));
    }

    /// Exit code 1: Request rejected - access already granted
    #[test]
    fn test_exit_code_already_granted() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("app-catalog")
            .args(["request", "1", "-j", "need it", "--config", &fast_config(&dir)])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Slack cannot be requested"));
    }

    /// Exit code 1: Request rejected - company-wide department
    #[test]
    fn test_exit_code_company_wide_department() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("app-catalog")
            .args([
                "request",
                "2",
                "-j",
                "Design reviews",
                "--department",
                "all",
                "--config",
                &fast_config(&dir),
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cannot request access"));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("app-catalog")
            .args(["catalog", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("app-catalog")
            .args(["catalog", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Unknown filter value
    #[test]
    fn test_exit_code_invalid_status() {
        cargo_bin_cmd!("app-catalog")
            .args(["catalog", "--status", "archived"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - unknown app id
    #[test]
    fn test_exit_code_unknown_app() {
        cargo_bin_cmd!("app-catalog")
            .args(["details", "99"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("App not found: 99"));
    }

    /// Exit code 3: Application error - missing explicit config
    #[test]
    fn test_exit_code_missing_config() {
        cargo_bin_cmd!("app-catalog")
            .args(["catalog", "--config", "/nonexistent/app-catalog.config.yml"])
            .assert()
            .code(3);
    }
}

#[test]
fn test_e2e_catalog_markdown() {
    cargo_bin_cmd!("app-catalog")
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("# App Catalog"))
        .stdout(predicate::str::contains("## Recommended for You"))
        .stdout(predicate::str::contains("## All Apps"))
        .stdout(predicate::str::contains("**[Catalog]**"));
}

#[test]
fn test_e2e_catalog_search_json() {
    let output = cargo_bin_cmd!("app-catalog")
        .args(["catalog", "--search", "slack", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["screen"], "catalog");
    assert_eq!(json["body"]["resultsHeading"], "Search Results (1)");
    assert_eq!(json["body"]["results"][0]["name"], "Slack");
    assert!(json["body"]["recommended"].is_null());
}

#[test]
fn test_e2e_catalog_filters() {
    let output = cargo_bin_cmd!("app-catalog")
        .args([
            "catalog",
            "-f",
            "json",
            "--category",
            "design",
            "--status",
            "available",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json["body"]["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Figma"]);
    assert_eq!(json["body"]["activeFilters"], 2);
}

#[test]
fn test_e2e_role_filter_warns() {
    cargo_bin_cmd!("app-catalog")
        .args(["catalog", "--role", "developer"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Role filter (Developer) is not applied"));
}

#[test]
fn test_e2e_details() {
    cargo_bin_cmd!("app-catalog")
        .args(["details", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# App Details"))
        .stdout(predicate::str::contains("Figma"))
        .stdout(predicate::str::contains("**Action:** Request Access"));
}

#[test]
fn test_e2e_tabs() {
    for (command, heading) in [
        ("my-apps", "# My Apps"),
        ("analytics", "# Analytics"),
        ("bundles", "# App Bundles"),
    ] {
        cargo_bin_cmd!("app-catalog")
            .arg(command)
            .assert()
            .success()
            .stdout(predicate::str::contains(heading));
    }
}

#[test]
fn test_e2e_request_access() {
    let dir = TempDir::new().unwrap();
    let output = cargo_bin_cmd!("app-catalog")
        .args([
            "request",
            "5",
            "-j",
            "Sprint planning",
            "-u",
            "high",
            "-f",
            "json",
            "--config",
            &fast_config(&dir),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["screen"], "requestFlow");
    assert_eq!(json["body"]["step"], "success");
    assert_eq!(json["body"]["receipt"]["appName"], "Linear");
    let request_id = json["body"]["receipt"]["requestId"].as_str().unwrap();
    assert!(request_id.starts_with("REQ-"));
    assert_eq!(json["body"]["receipt"]["form"]["businessJustification"], "Sprint planning");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Next: My Apps"));
}

#[test]
fn test_e2e_request_go_to_catalog() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("app-catalog")
        .args([
            "request",
            "6",
            "-j",
            "Client calls",
            "--go-to",
            "catalog",
            "--config",
            &fast_config(&dir),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## ✅ Request Submitted"))
        .stderr(predicate::str::contains("Next: App Catalog"));
}

#[test]
fn test_e2e_output_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("analytics.md");

    cargo_bin_cmd!("app-catalog")
        .args(["analytics", "-o", output_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("# Analytics"));
    assert!(content.contains("## Top Apps"));
}
