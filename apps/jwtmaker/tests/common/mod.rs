#![allow(dead_code)]

// tests/common/mod.rs
use std::path::Path;
use std::process::{Command, Output};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    jwtmaker_test_support::logging::init();
}

const ENV_VARS: [&str; 10] = [
    "JWTMAKER_WORKER_ID",
    "JWTMAKER_WORKER_TYPE",
    "JWTMAKER_RUNTIME_ID",
    "JWTMAKER_PEM_PRIVATE_KEY_FILE",
    "JWTMAKER_PLAYER_IDENTITY_ID",
    "JWTMAKER_PLAYER_IDENTITY_PROVIDER",
    "JWTMAKER_PLAYER_IDENTITY_METADATA",
    "JWTMAKER_TOKEN_ID",
    "JWTMAKER_EXIT_CODE_POLICY",
    "JWTMAKER_LOG_FORMAT",
];

/// A `jwtmaker` command with no inherited configuration.
pub fn jwtmaker() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jwtmaker"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run with the four mandatory parameters plus `extra`.
pub fn run_with_key(key_file: &Path, extra: &[&str]) -> Output {
    jwtmaker()
        .args([
            "-worker_id",
            "worker-1",
            "-worker_type",
            "server",
            "-runtime_id",
            "runtime-a",
        ])
        .arg("-pem_private_key_file")
        .arg(key_file)
        .args(extra)
        .output()
        .expect("failed to spawn jwtmaker")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

/// The single line printed on stdout.
pub fn stdout_line(output: &Output) -> String {
    let out = stdout(output);
    let mut lines = out.lines();
    let line = lines.next().unwrap_or_default().to_string();
    assert_eq!(lines.next(), None, "expected exactly one line, got {out:?}");
    line
}

/// Decode the claims segment of a compact token.
pub fn claims_of(token: &str) -> Value {
    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3, "not a compact JWS: {token}");
    let bytes = URL_SAFE_NO_PAD.decode(segments[1]).expect("base64url claims");
    serde_json::from_slice(&bytes).expect("claims are JSON")
}

pub fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}
