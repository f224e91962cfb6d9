//! Integration tests for the tortoise-hare binary.
//!
//! Each test feeds an edge-list source on stdin and checks the frames
//! or JSON printed on stdout.

#![cfg(feature = "cli")]

use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_tortoise-hare");

/// Run the binary with the given stdin input and extra CLI args.
/// Returns (stdout, stderr).
fn run(input: &str, extra_args: &[&str]) -> (String, String) {
    let output = Command::new(BIN)
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("failed to run binary");

    assert!(
        output.status.success(),
        "binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    (
        String::from_utf8(output.stdout).expect("non-UTF8 stdout"),
        String::from_utf8(output.stderr).expect("non-UTF8 stderr"),
    )
}

const FIVE: &str = "head: A\nA -> B\nB -> C\nC -> D\nD -> E\nE -> -1\n";

#[test]
fn test_frames_on_stdout() {
    let (stdout, _) = run(FIVE, &["--ascii"]);
    assert!(stdout.contains("| A | --> | B |"));
    assert!(stdout.contains("Initialize: Both pointers start at the head (position 0)"));
    assert!(stdout.contains("Middle node: C"));
}

#[test]
fn test_unicode_default() {
    let (stdout, _) = run(FIVE, &[]);
    assert!(stdout.contains("──►"));
}

#[test]
fn test_json_output() {
    let (stdout, _) = run(FIVE, &["--json"]);
    assert!(stdout.contains("\"tortoisePos\""));
    assert!(stdout.contains("\"middleNode\""));
    assert!(stdout.contains("\"id\": \"C\""));
}

#[test]
fn test_head_override() {
    let (stdout, _) = run(FIVE, &["--head", "C", "--ascii"]);
    assert!(stdout.contains("Middle node: D"));
}

#[test]
fn test_empty_list_message() {
    let (stdout, _) = run("head: Z\nA -> B\n", &[]);
    assert!(stdout.contains("List is empty"));
}

#[test]
fn test_cycle_note_on_stderr() {
    let (_, stderr) = run("head: A\nA -> B\nB -> A\n", &["--ascii"]);
    assert!(stderr.contains("cycle"));
}

#[test]
fn test_branch_note_on_stderr() {
    let (_, stderr) = run("head: A\nA -> B\nA -> C\nC -> -1\n", &["--ascii"]);
    assert!(stderr.contains("more than one outgoing edge"));
}

#[test]
fn test_unreachable_note_on_stderr() {
    let (_, stderr) = run("head: A\nA -> -1\nX -> Y\n", &["--ascii"]);
    assert!(stderr.contains("not reachable"));
    assert!(stderr.contains("X, Y"));
}

#[test]
fn test_missing_head_fails() {
    let output = Command::new(BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(b"A -> B\n").ok();
            }
            child.wait_with_output()
        })
        .expect("failed to run binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("head"));
}

#[test]
fn test_output_file() {
    let dir = std::env::temp_dir();
    let path = dir.join("tortoise_hare_cli_test_out.txt");
    let _ = std::fs::remove_file(&path);
    let (stdout, _) = run(
        FIVE,
        &["--ascii", "-o", path.to_str().expect("temp path")],
    );
    assert!(stdout.is_empty());
    let written = std::fs::read_to_string(&path).expect("output file");
    assert!(written.contains("Middle node: C"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_play_prints_all_frames() {
    let (stdout, _) = run(FIVE, &["--ascii", "--play", "--delay-ms", "1"]);
    assert!(stdout.contains("Initialize"));
    assert!(stdout.contains("Completed!"));
}
