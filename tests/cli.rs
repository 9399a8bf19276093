use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    Command::cargo_bin("svcpanel")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "svcpanel v{}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_build_info_flag() {
    Command::cargo_bin("svcpanel")
        .unwrap()
        .arg("--build-info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target:").and(predicate::str::contains("Profile:")));
}

#[test]
fn test_malformed_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "port: not-a-number\n").unwrap();

    Command::cargo_bin("svcpanel")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    Command::cargo_bin("svcpanel")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure();
}
