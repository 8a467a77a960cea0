//! Local pre-network validation for uploads and console commands
//!
//! The mod repository rejects bad candidates before any network traffic:
//! only `.jar` archives, and nothing over the service's size ceiling. The
//! generic file repository performs no such checks.

use crate::error::{Error, Result};

/// Size ceiling for mod uploads (10 MiB, matching the control service)
pub const MAX_MOD_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// The one archive extension the mod service accepts
pub const MOD_ARCHIVE_EXTENSION: &str = ".jar";

/// Validate a mod upload candidate by filename and size.
///
/// Fails with [`Error::Validation`] on an unrecognized extension or a file
/// larger than [`MAX_MOD_UPLOAD_BYTES`]. The caller must leave nothing
/// staged on failure.
pub fn validate_mod_upload(filename: &str, size_bytes: u64) -> Result<()> {
    let lower = filename.to_lowercase();
    if !lower.ends_with(MOD_ARCHIVE_EXTENSION) {
        return Err(Error::validation(format!(
            "Only {MOD_ARCHIVE_EXTENSION} archives are allowed"
        )));
    }
    if size_bytes > MAX_MOD_UPLOAD_BYTES {
        return Err(Error::validation(format!(
            "File is too large (max {} MiB)",
            MAX_MOD_UPLOAD_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Reject empty or whitespace-only console commands before they hit the wire.
pub fn validate_command(command: &str) -> Result<()> {
    if command.trim().is_empty() {
        return Err(Error::validation("Command is empty"));
    }
    Ok(())
}
