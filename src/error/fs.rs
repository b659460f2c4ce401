//! Convenience constructors for file system errors

use std::path::Path;

use super::ComposerError;

/// File read failure with the offending path
pub fn read_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> ComposerError {
    ComposerError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

/// File write failure with the offending path
pub fn write_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> ComposerError {
    ComposerError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

/// Generic IO failure
pub fn io_error(message: impl Into<String>) -> ComposerError {
    ComposerError::IoError {
        message: message.into(),
    }
}
