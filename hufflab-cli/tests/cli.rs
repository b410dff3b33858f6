//! Integration tests for the hufflab CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_table(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Huffman coding analysis"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hufflab"));
}

#[test]
fn test_analyze_from_file() {
    let table = write_table("A,0.5\nB,0.25\nC,0.25\n");
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("analyze")
        .arg(table.path())
        .args(["--channel-rate", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entropy (H)"))
        .stdout(predicate::str::contains("1.5000 bits"));
}

#[test]
fn test_analyze_from_stdin() {
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("analyze")
        .arg("-")
        .args(["--channel-rate", "1"])
        .write_stdin("A,0.5\nB,0.5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coding efficiency"));
}

#[test]
fn test_analyze_json_output() {
    let table = write_table("A,0.5\nB,0.5\n");
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    let assert = cmd
        .arg("analyze")
        .arg(table.path())
        .args(["--channel-rate", "2", "-o", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["statistics"]["entropy"], 1.0);
    assert_eq!(value["symbols"].as_array().unwrap().len(), 2);
}

#[test]
fn test_analyze_rejects_bad_sum() {
    let table = write_table("A,0.5\nB,0.4\n");
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("analyze")
        .arg(table.path())
        .args(["--channel-rate", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sum"));
}

#[test]
fn test_analyze_rejects_duplicate_symbol() {
    let table = write_table("A,0.5\nA,0.5\n");
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("analyze")
        .arg(table.path())
        .args(["--channel-rate", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate symbol"));
}

#[test]
fn test_missing_channel_rate() {
    let table = write_table("A,0.5\nB,0.5\n");
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("analyze")
        .arg(table.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("channel rate"));
}

#[test]
fn test_missing_input_file() {
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("analyze")
        .arg("no-such-file.txt")
        .args(["--channel-rate", "1"])
        .assert()
        .failure();
}

#[test]
fn test_tree_command() {
    let table = write_table("A,0.5\nB,0.25\nC,0.25\n");
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("tree")
        .arg(table.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("└── 1.000"))
        .stdout(predicate::str::contains("A (0.500)"));
}

#[test]
fn test_export_writes_report() {
    let table = write_table("A,0.4\nB,0.2\nC,0.2\nD,0.1\nE,0.1\n");
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.txt");

    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("export")
        .arg(table.path())
        .args(["--channel-rate", "2.5", "-t"])
        .arg(&target)
        .assert()
        .success();

    let report = std::fs::read_to_string(&target).unwrap();
    assert!(report.contains("HUFFMAN CODING ANALYSIS REPORT"));
    assert!(report.contains("TREE STRUCTURE:"));
    assert!(report.contains("E: 0.1000"));
}

#[test]
fn test_completion_generation() {
    let mut cmd = Command::cargo_bin("hufflab").unwrap();
    cmd.arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("hufflab"));
}
