//! End-to-end runs of the `seqtour` binary.

use std::fs;
use std::process::{Command, Output};

use serde_json::Value;

fn seqtour(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqtour"))
        .args(args)
        .env_remove("SEQTOUR_CATEGORY")
        .env_remove("SEQTOUR_OUTPUT")
        .env_remove("SEQTOUR_OUT")
        .output()
        .unwrap()
}

#[test]
fn test_json_to_file_tags_every_value() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("tour.jsonl");

    let out = seqtour(&["filtering", "--output", "json", "--out", path.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    let text = fs::read_to_string(&path).unwrap();
    let records: Vec<Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["category"] == "Filtering"));
    assert_eq!(records[0]["label"], "Where");
    assert_eq!(records[0]["value"], serde_json::json!([4]));
}

#[test]
fn test_text_output_has_one_banner_per_category() {
    let out = seqtour(&["--output", "text"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Filtering (deferred)"));
    assert!(stdout.contains("Sorting (deferred)"));
    assert!(stdout.contains("Single: 6"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_environment_selects_category() {
    let out = Command::new(env!("CARGO_BIN_EXE_seqtour"))
        .args(["--output", "csv"])
        .env("SEQTOUR_CATEGORY", "sequence-manipulation")
        .env_remove("SEQTOUR_OUTPUT")
        .env_remove("SEQTOUR_OUT")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "category,label,value");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("SequenceManipulation,Append,"));
}

#[test]
fn test_list_names_every_category() {
    let out = seqtour(&["--list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 13);
    assert!(stdout.contains("existence-or-quantity-checks"));
    assert!(stdout.contains("Zip, Join, GroupJoin"));
}

#[test]
fn test_list_columns_line_up() {
    let out = seqtour(&["--list"]);
    let stdout = String::from_utf8(out.stdout).unwrap();
    let starts: Vec<usize> = stdout
        .lines()
        .filter(|line| !line.starts_with("all "))
        .map(|line| line.find(|c: char| c.is_ascii_uppercase()).unwrap())
        .collect();
    assert_eq!(starts.len(), 12);
    assert!(starts.iter().all(|s| *s == starts[0]), "{starts:?}");
}

#[test]
fn test_unknown_category_exits_with_error() {
    let out = seqtour(&["everything"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown category 'everything'"));
}

#[test]
fn test_missing_output_directory_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("missing").join("tour.txt");
    let out = seqtour(&["sorting", "--out", path.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("cannot open output"));
}
