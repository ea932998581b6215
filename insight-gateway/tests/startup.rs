//! Integration test: process startup of the `insight-gateway` binary.
//!
//! Runs the built binary with a controlled environment and checks that
//! fatal startup errors stop the process with exit code 1 before it serves.

use std::process::{Command, Output};

/// Run the gateway binary with `vars` set, from an empty working directory
/// so no `.env` file is picked up.
fn run_gateway(vars: &[(&str, &str)]) -> Output {
    let dir = match tempfile::tempdir() {
        Ok(d) => d,
        Err(e) => panic!("tempdir failed: {e}"),
    };
    let mut command = Command::new(env!("CARGO_BIN_EXE_insight-gateway"));
    command
        .current_dir(dir.path())
        .env_remove("MONGO_URI")
        .env_remove("INSIGHT_LISTEN_ADDR")
        .env("RUST_LOG", "info");
    for (key, value) in vars {
        command.env(key, value);
    }
    match command.output() {
        Ok(output) => output,
        Err(e) => panic!("failed to run gateway: {e}"),
    }
}

fn logs(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn unreachable_store_exits_before_serving() {
    let output = run_gateway(&[
        ("MONGO_URI", "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200"),
        ("INSIGHT_LISTEN_ADDR", "127.0.0.1:0"),
    ]);
    let logs = logs(&output);

    assert_eq!(output.status.code(), Some(1), "logs: {logs}");
    assert!(logs.contains("error connecting to document store"), "logs: {logs}");
    assert!(!logs.contains("insight-gateway listening"), "must not serve: {logs}");
}

#[test]
fn unbindable_address_exits_with_error() {
    let output = run_gateway(&[("INSIGHT_LISTEN_ADDR", "not-an-address")]);
    let logs = logs(&output);

    assert_eq!(output.status.code(), Some(1), "logs: {logs}");
    assert!(logs.contains("MONGO_URI is not set"), "logs: {logs}");
    assert!(logs.contains("failed to bind"), "logs: {logs}");
}
