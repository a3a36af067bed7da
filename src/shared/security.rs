use crate::shared::error::AnalysisError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum data file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that `path` is an existing regular file that may be read.
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than its
/// target. Returns the file size in bytes on success.
///
/// # Errors
/// - the path does not exist or its metadata cannot be read
/// - the path is a symbolic link
/// - the path is not a regular file
/// - the file is larger than `max_size`
pub fn validate_readable_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AnalysisError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read file metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(AnalysisError::SecurityError {
            path: path.to_path_buf(),
            reason: "The path is a symbolic link".to_string(),
            hint: "Point --data at the real file instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(AnalysisError::InvalidDataPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, max_size)?;
    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(AnalysisError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the architecture into smaller snapshots".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Rejects output targets that already exist as symbolic links.
pub fn validate_not_symlink(path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(AnalysisError::FileWriteError {
                path: path.to_path_buf(),
                details: "Security: Output path is a symbolic link. Writing through symbolic links is not allowed.".to_string(),
            }
            .into());
        }
    }
    Ok(())
}
