use assert_cmd::Command;
use predicates::prelude::*;

const BIN: &str = "survolctl";

#[test]
fn test_empty_args() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.assert().failure();
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-h").assert().success();
}

#[test]
fn test_version_cmd() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("version").assert().success();
}

#[test]
fn test_scan_missing_dir() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("scan")
        .arg("testdata/nonexistent")
        .assert()
        .failure();
}

#[test]
fn test_corners_no_centre() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("corners").assert().failure();
}

#[test]
fn test_corners_single() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("corners")
        .arg("--lat=-30.2744")
        .arg("--lon=149.7981")
        .assert()
        .success()
        .stdout(predicate::str::contains("Southwest"));
}

#[test]
fn test_corners_bad_block_size() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("corners")
        .arg("-B")
        .arg("0")
        .arg("--lat=-30.2744")
        .arg("--lon=149.7981")
        .assert()
        .failure();
}

#[test]
fn test_list_centres() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["list", "centres"]).assert().success();
}
