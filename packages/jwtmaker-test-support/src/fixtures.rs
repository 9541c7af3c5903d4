//! Key material checked in under `fixtures/`.
//!
//! The keys are throwaway test keys and must never be used outside tests.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// 2048-bit RSA private key, PKCS#1 (`RSA PRIVATE KEY`).
pub const WORKER_RSA_PKCS1: &[u8] = include_bytes!("../fixtures/worker_rsa_pkcs1.pem");

/// Same key as [`WORKER_RSA_PKCS1`], PKCS#8 (`PRIVATE KEY`).
pub const WORKER_RSA_PKCS8: &[u8] = include_bytes!("../fixtures/worker_rsa_pkcs8.pem");

/// Public half of the worker key.
pub const WORKER_RSA_PUBLIC: &[u8] = include_bytes!("../fixtures/worker_rsa_public.pem");

/// Public key of an unrelated RSA pair, for signature-mismatch checks.
pub const OTHER_RSA_PUBLIC: &[u8] = include_bytes!("../fixtures/other_rsa_public.pem");

/// A P-256 EC key in SEC1 form. Valid PEM, wrong key type for RS512.
pub const EC_P256: &[u8] = include_bytes!("../fixtures/ec_p256.pem");

/// Absolute path of a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Write `contents` to a fresh temporary file. The file lives as long as the
/// returned handle.
pub fn temp_key_file(contents: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(file)
}

/// A path inside a fresh temp dir that is guaranteed not to exist.
pub fn missing_key_path() -> std::io::Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("does-not-exist.pem");
    Ok((dir, path))
}
