//! File-backed byte sources and sinks.
//!
//! The cipher and statistics code only sees in-memory byte slices; these
//! helpers are where files enter and leave, with failures reported as
//! [`CipherError::Io`] naming the path.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::CipherError;

/// Reads the whole file at `path`.
///
/// # Errors
/// Returns [`CipherError::Io`] if the file cannot be opened or read.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>, CipherError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| CipherError::io(path.display().to_string(), &e))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Writes `bytes` to `path`, replacing any existing file.
///
/// # Errors
/// Returns [`CipherError::Io`] if the file cannot be created or written.
pub fn write_bytes(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), CipherError> {
    let path = path.as_ref();
    fs::write(path, bytes).map_err(|e| CipherError::io(path.display().to_string(), &e))?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
