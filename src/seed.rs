use crate::error::{PwgenError, Result};
use log::debug;
use sha1::{Digest, Sha1};
use std::fs;
use std::path::Path;

pub fn seed_from_bytes(content: &[u8]) -> u64 {
    let digest = Sha1::digest(content);
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head)
}

/// Reads the whole file and derives the seed from its content, so the same
/// file always reproduces the same password sequence.
pub fn seed_from_file(path: &Path) -> Result<u64> {
    let content = fs::read(path).map_err(|source| PwgenError::SeedFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "derived seed from {} ({} bytes)",
        path.display(),
        content.len()
    );
    Ok(seed_from_bytes(&content))
}
