use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn charfreq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_charfreq"))
        .args(args)
        .env_remove("CHARFREQ_SEED")
        .env_remove("CHARFREQ_WORKERS")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn text_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_report_sections_and_success_status() {
    let file = text_file("abBA!! 12");
    let output = charfreq(&["--file-path", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], r#"Character counts: {"A":1,"B":1,"a":1,"b":1}"#);
    assert_eq!(lines[1], "Number of keys: 4");
    assert_eq!(lines[2], "Max value key: A");
    assert!(lines[3].starts_with("Random character count tables: ["));
    assert_eq!(lines[4], r#"Merged character count table: {"A":1,"B":1,"a":1,"b":1}"#);
    assert_eq!(lines[5], "Number of keys: 4");
    assert_eq!(lines[6], "Max value key: A");
    assert_eq!(lines[7], "Test passed: Merged counts match char counts.");
}

#[test]
fn test_seeded_output_is_reproducible() {
    let file = text_file("The quick brown fox jumps over the lazy dog");
    let path = file.path().to_str().unwrap();
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_charfreq"))
            .args(["--file-path", path])
            .env("CHARFREQ_SEED", "17")
            .env_remove("CHARFREQ_WORKERS")
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("HadoopBlurb.txt");
    let output = charfreq(&["--file-path", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("input not found"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = charfreq(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--file-path"));
}

#[test]
fn test_invalid_seed_fails_before_loading() {
    let file = text_file("abc");
    let output = Command::new(env!("CARGO_BIN_EXE_charfreq"))
        .args(["--file-path", file.path().to_str().unwrap()])
        .env("CHARFREQ_SEED", "not-a-number")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("CHARFREQ_SEED"));
}
