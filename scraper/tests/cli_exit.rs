use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_helpdesk-scraper"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_missing_config_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yml");

    let output = run(&["--config", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_webhook_file_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hook.txt");

    let output = run(&["--webhook-file", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_config_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("countries.yml");
    fs::write(&path, "- country: us\n  search_keys: [\n").unwrap();

    let output = run(&["--config", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}
