//
//  jiratool
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Binary-level tests. None of them reach the network: every case fails
//! configuration before the first request or needs no credentials at all.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// A command isolated from the caller's environment and config file.
fn jiratool(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("jiratool").unwrap();
    cmd.env_remove("JIRA_USER")
        .env_remove("JIRA_API_KEY")
        .env_remove("JIRA_CLOUD")
        .env_remove("JIRA_PROJECTS")
        .env_remove("JIRATOOL_CONFIG")
        .arg("--config")
        .arg(config.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    let config = NamedTempFile::new().unwrap();
    jiratool(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("release"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_missing_credentials() {
    let config = NamedTempFile::new().unwrap();
    jiratool(&config)
        .args(["-c", "example", "-p", "DB", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Bitte Jira-Usernamen und API-Key angeben"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_cloud_alias() {
    let config = NamedTempFile::new().unwrap();
    jiratool(&config)
        .args(["-u", "me", "-a", "key", "-p", "DB"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Bitte den Jira Cloud Alias angeben"));
}

#[test]
fn test_empty_project_list() {
    let config = NamedTempFile::new().unwrap();
    jiratool(&config)
        .args(["-u", "me", "-a", "key", "-c", "example", "-p", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Bitte mindestens ein Jira-Projekt angeben"));
}

#[test]
fn test_malformed_release_date() {
    let config = NamedTempFile::new().unwrap();
    jiratool(&config)
        .args(["-u", "me", "-a", "key", "-c", "example", "-p", "DB"])
        .args(["release", "2021-02", "--date", "01.04.2021"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JJJJ-MM-TT"));
}

#[test]
fn test_malformed_config_file() {
    let config = NamedTempFile::new().unwrap();
    std::fs::write(config.path(), "user = ").unwrap();

    jiratool(&config)
        .args(["-a", "key", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ist ungültig"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let config = NamedTempFile::new().unwrap();
    std::fs::write(config.path(), "user = \"me\"\nprojects = \"DB\"\n").unwrap();

    // User and projects come from the file, so the cloud alias is the first
    // thing missing.
    jiratool(&config)
        .args(["-a", "key"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Bitte den Jira Cloud Alias angeben"));
}

#[test]
fn test_completion_needs_no_credentials() {
    let config = NamedTempFile::new().unwrap();
    jiratool(&config)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jiratool"));
}

#[test]
fn test_cloud_alias_must_be_single_label() {
    let config = NamedTempFile::new().unwrap();
    jiratool(&config)
        .args(["-u", "me", "-a", "key", "-c", "evil.com/", "-p", "DB"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Ungültiger Jira Cloud Alias"));
}
