//! Results directory validation
//!
//! Runs before anything else in the pipeline. Checks are ordered:
//! existence, then readability, then type. A nonexistent path cannot
//! meaningfully be evaluated for permissions or type, so the first
//! failing check determines the reported error.

use std::fs;
use std::io;
use std::path::Path;

use super::error::ReportError;

/// Validate that `directory` exists, is readable, and is a directory.
pub fn validate(directory: &Path) -> Result<(), ReportError> {
    let metadata = match fs::metadata(directory) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ReportError::MissingDirectory(directory.to_path_buf()));
        }
        Err(_) => {
            return Err(ReportError::UnreadableDirectory(directory.to_path_buf()));
        }
    };

    if metadata.is_dir() {
        // Readable means we can actually list it
        if fs::read_dir(directory).is_err() {
            return Err(ReportError::UnreadableDirectory(directory.to_path_buf()));
        }
        Ok(())
    } else {
        // Readability is still checked first: an unreadable file is
        // reported as unreadable, a readable one as not-a-directory
        if fs::File::open(directory).is_err() {
            return Err(ReportError::UnreadableDirectory(directory.to_path_buf()));
        }
        Err(ReportError::NotADirectory(directory.to_path_buf()))
    }
}
