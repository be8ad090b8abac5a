//! Utility functions for error handling
//!
//! File-system helpers that attach the offending path and the purpose of
//! the access to every failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{OccupationError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(OccupationError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found (needed for: {purpose})"),
            ),
        ));
    }

    if !path.is_file() {
        return Err(OccupationError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a file (expected a file for: {purpose})"),
            ),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "permission denied - check file permissions".to_string()
            }
            _ => format!("failed to open file for: {purpose}"),
        };
        OccupationError::io(path, io::Error::new(e.kind(), format!("{context}: {e}")))
    })
}

/// Create a file for writing, creating missing parent directories first
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent, purpose)?;
        }
    }

    fs::File::create(path).map_err(|e| {
        OccupationError::io(
            path,
            io::Error::new(e.kind(), format!("failed to create file for: {purpose}: {e}")),
        )
    })
}

/// Make sure a directory exists, creating it (and its parents) if needed
pub fn ensure_directory(path: &Path, purpose: &str) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        return Err(OccupationError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path exists but is not a directory (needed for: {purpose})"),
            ),
        ));
    }

    fs::create_dir_all(path).map_err(|e| OccupationError::io(path, e))
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    io::Read::read_to_string(&mut file, &mut content).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::InvalidData => {
                "file contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("failed to read file content for: {purpose}"),
        };
        OccupationError::io(path, io::Error::new(e.kind(), format!("{context}: {e}")))
    })?;

    Ok(content)
}
