//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::process::{Command, Output};

/// Path to the furnish binary
pub fn furnish_bin() -> &'static str {
    env!("CARGO_BIN_EXE_furnish")
}

/// Runs the binary with the given arguments.
pub fn run(args: &[&str]) -> Output {
    Command::new(furnish_bin())
        .args(args)
        .output()
        .expect("failed to execute furnish")
}

/// Parses the command's stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not valid JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

/// Asserts the exit code, printing stderr on mismatch.
pub fn assert_exit_code(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "stderr: {}\nstdout: {}",
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );
}
