//! Integration tests for top-level CLI behavior.

use std::process::Command;

use uuid::Uuid;

fn run_uuidgen(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_uuidgen");
    Command::new(bin)
        .args(args)
        .env_remove("UUIDGEN_DEFAULT_NAMESPACE")
        .output()
        .expect("failed to run uuidgen binary")
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

#[test]
fn v4_prints_one_uuid_per_line() {
    let output = run_uuidgen(&["v4", "--number", "5"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5);
    for line in &lines {
        assert_eq!(Uuid::parse_str(line).unwrap().get_version_num(), 4);
    }
}

#[test]
fn v5_is_deterministic_for_a_name() {
    let output = run_uuidgen(&["v5", "example.com"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![Uuid::new_v5(&Uuid::NAMESPACE_DNS, b"example.com").to_string()]
    );
}

#[test]
fn env_default_namespace_applies_to_v3() {
    let output = Command::new(env!("CARGO_BIN_EXE_uuidgen"))
        .args(["v3", "example.com"])
        .env("UUIDGEN_DEFAULT_NAMESPACE", "url")
        .output()
        .expect("failed to run uuidgen binary");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![Uuid::new_v3(&Uuid::NAMESPACE_URL, b"example.com").to_string()]
    );
}

#[test]
fn invalid_namespace_fails_with_no_output() {
    let output = run_uuidgen(&["v3", "example.com", "--namespace", "invalid"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("invalid namespace"));
}

#[test]
fn invalid_epoch_fails_with_no_output() {
    let output = run_uuidgen(&["v7", "--epoch", "invalid"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("invalid epoch"));
}

#[test]
fn v7_with_epoch_prints_one_uuid() {
    let output = run_uuidgen(&["v7", "--epoch", "2024-06-15T10:30:00.123456789Z"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(Uuid::parse_str(&lines[0]).unwrap().get_version_num(), 7);
}

#[test]
fn null_prints_nil_uuid() {
    let output = run_uuidgen(&["null"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "00000000-0000-0000-0000-000000000000"
    );
}

#[test]
fn name_based_without_value_shows_error() {
    let output = run_uuidgen(&["v3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("VALUE"));
}

#[test]
fn zero_number_is_rejected() {
    let output = run_uuidgen(&["v1", "--number", "0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn v4_help_shows_number_flag() {
    let output = run_uuidgen(&["v4", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--number"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_uuidgen(&["v2"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
