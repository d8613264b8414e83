// Dweve SalesTech - Synthetic Sales CRM Data
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DATASETS: [&str; 5] = ["users", "leads", "opportunities", "activities", "targets"];

// Test helper to create a salestech command
fn salestech_cmd() -> Command {
    Command::cargo_bin("salestech").expect("Failed to find salestech binary")
}

fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&content).expect("Output is not valid JSON")
}

// Generate five of each with a fixed seed and date into `dir`.
fn generate_small(dir: &Path, extra: &[&str]) {
    salestech_cmd()
        .arg("generate")
        .arg("--output")
        .arg(dir)
        .args([
            "--users",
            "5",
            "--leads",
            "5",
            "--opportunities",
            "5",
            "--activities",
            "5",
            "--targets",
            "5",
            "--seed",
            "42",
            "--as-of",
            "2025-06-30",
        ])
        .args(extra)
        .assert()
        .success();
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    salestech_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SalesTech - synthetic sales CRM data generator"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version_output() {
    salestech_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("salestech"));
}

#[test]
fn test_generate_help_lists_flags() {
    salestech_cmd()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--references"))
        .stdout(predicate::str::contains("--as-of"));
}

// ===== Generate Command Tests =====

#[test]
fn test_no_arguments_generates_defaults_in_current_dir() {
    let dir = temp_dir();

    salestech_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 20 users records"))
        .stdout(predicate::str::contains("Generated 100 leads records"))
        .stdout(predicate::str::contains("Generated 150 opportunities records"))
        .stdout(predicate::str::contains("Generated 300 activities records"))
        .stdout(predicate::str::contains("Generated 50 targets records"))
        .stdout(predicate::str::contains("All datasets generated successfully (json in .)"));

    let expected = [
        ("users", 20),
        ("leads", 100),
        ("opportunities", 150),
        ("activities", 300),
        ("targets", 50),
    ];
    for (name, count) in expected {
        let records = read_json(&dir.path().join(format!("{}.json", name)));
        assert_eq!(records.as_array().unwrap().len(), count, "{}", name);
    }
}

#[test]
fn test_generate_five_of_each() {
    let dir = temp_dir();
    generate_small(dir.path(), &[]);

    for name in DATASETS {
        let records = read_json(&dir.path().join(format!("{}.json", name)));
        assert_eq!(records.as_array().unwrap().len(), 5, "{}", name);
    }

    let users = read_json(&dir.path().join("users.json"));
    assert_eq!(users[0]["user_id"], "user_001");
    assert_eq!(users[4]["user_id"], "user_005");
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let first = temp_dir();
    let second = temp_dir();
    generate_small(first.path(), &[]);
    generate_small(second.path(), &[]);

    for name in DATASETS {
        let file = format!("{}.json", name);
        assert_eq!(
            fs::read_to_string(first.path().join(&file)).unwrap(),
            fs::read_to_string(second.path().join(&file)).unwrap(),
            "{} differs between runs",
            name
        );
    }
}

#[test]
fn test_generate_yaml_and_csv() {
    for (format, ext) in [("yaml", "yaml"), ("csv", "csv")] {
        let dir = temp_dir();
        generate_small(dir.path(), &["--format", format]);

        for name in DATASETS {
            assert!(
                dir.path().join(format!("{}.{}", name, ext)).exists(),
                "missing {}.{}",
                name,
                ext
            );
        }
    }

    let dir = temp_dir();
    generate_small(dir.path(), &["--format", "csv"]);
    let content = fs::read_to_string(dir.path().join("users.csv")).unwrap();
    assert_eq!(content.lines().count(), 6);
    assert!(content.starts_with("user_id,"));
}

#[test]
fn test_generate_with_verify() {
    let dir = temp_dir();

    salestech_cmd()
        .arg("generate")
        .arg("--output")
        .arg(dir.path())
        .args(["--seed", "7", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified 620 records (0 warnings)"));
}

#[test]
fn test_generate_strict_fixed_small_fails_without_writing() {
    let dir = temp_dir();
    let out = dir.path().join("out");

    salestech_cmd()
        .arg("generate")
        .arg("--output")
        .arg(&out)
        .args([
            "--users",
            "3",
            "--leads",
            "3",
            "--opportunities",
            "3",
            "--activities",
            "20",
            "--targets",
            "20",
            "--seed",
            "1",
            "--references",
            "fixed",
            "--strict",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Validation failed"));

    assert!(!out.exists());
}

#[test]
fn test_generate_unknown_format_fails() {
    let dir = temp_dir();

    salestech_cmd()
        .arg("generate")
        .arg("--output")
        .arg(dir.path())
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Unknown format 'xml'"));
}

#[test]
fn test_generate_invalid_date_fails() {
    salestech_cmd()
        .args(["generate", "--as-of", "not-a-date"])
        .assert()
        .failure();
}

#[test]
fn test_generate_as_of_at_calendar_limit_fails_cleanly() {
    let dir = temp_dir();

    salestech_cmd()
        .arg("generate")
        .arg("--output")
        .arg(dir.path())
        .args(["--seed", "1", "--as-of=+262142-12-31"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid configuration parameter 'as_of'"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_generate_zero_users_with_leads_fails() {
    let dir = temp_dir();

    salestech_cmd()
        .arg("generate")
        .arg("--output")
        .arg(dir.path())
        .args(["--users", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("users"));
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_generated_directory() {
    let dir = temp_dir();
    generate_small(dir.path(), &[]);

    salestech_cmd()
        .arg("validate")
        .arg(dir.path())
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("opportunities: 5"));
}

#[test]
fn test_validate_yaml_directory() {
    let dir = temp_dir();
    generate_small(dir.path(), &["--format", "yaml"]);

    salestech_cmd()
        .arg("validate")
        .arg(dir.path())
        .args(["--format", "yaml"])
        .assert()
        .success();
}

#[test]
fn test_validate_fixed_references_strict_vs_lenient() {
    let dir = temp_dir();
    generate_small(dir.path(), &["--references", "fixed"]);

    salestech_cmd()
        .arg("validate")
        .arg(dir.path())
        .assert()
        .success();

    salestech_cmd()
        .arg("validate")
        .arg(dir.path())
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("Error: Validation failed: 0 error(s)"));
}

#[test]
fn test_validate_detects_stage_violation() {
    let dir = temp_dir();
    generate_small(dir.path(), &[]);

    let path = dir.path().join("opportunities.json");
    let mut deals = read_json(&path);
    deals[0]["stage"] = json!("closed_won");
    deals[0]["probability"] = json!(0.5);
    fs::write(&path, serde_json::to_string_pretty(&deals).unwrap()).unwrap();

    salestech_cmd()
        .arg("validate")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("deal_0001"))
        .stderr(predicate::str::contains("Validation failed: 1 error(s)"));
}

#[test]
fn test_validate_missing_directory_fails() {
    let dir = temp_dir();

    salestech_cmd()
        .arg("validate")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}
