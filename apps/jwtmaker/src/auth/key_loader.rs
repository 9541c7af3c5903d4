use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::AppError;

/// Read the private key file verbatim.
///
/// The bytes are not inspected here; PEM and key-type errors surface when
/// the token is signed.
pub fn load_private_key_pem(path: impl AsRef<Path>) -> Result<Vec<u8>, AppError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| AppError::key_read(path, e))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Loaded private key file");
    Ok(bytes)
}
