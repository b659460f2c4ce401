//! Error types and handling for Composer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Variants are grouped by domain:
//! - descriptor: `app.yaml` discovery and validation errors
//! - values: value-file and `key=value` override errors
//! - template: rendering errors
//! - storage: state-store and staging errors
//! - engine: external deployment-engine errors
//! - fs: low-level file system errors

pub mod fs;

#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Composer operations
#[derive(Error, Diagnostic, Debug)]
pub enum ComposerError {
    // Descriptor errors
    #[error("Descriptor not found: {path}")]
    #[diagnostic(
        code(composer::descriptor::not_found),
        help("Every installable directory must contain an app.yaml with a name and version")
    )]
    DescriptorNotFound { path: String },

    #[error("Invalid descriptor at {path}: {reason}")]
    #[diagnostic(code(composer::descriptor::invalid))]
    DescriptorInvalid { path: String, reason: String },

    #[error("Invalid descriptor at {path}")]
    #[diagnostic(
        code(composer::descriptor::incomplete),
        help("The descriptor must have a name and version")
    )]
    DescriptorIncomplete { path: String },

    // Values errors
    #[error("Values file does not exist: {path}")]
    #[diagnostic(code(composer::values::not_found))]
    ValuesFileNotFound { path: String },

    #[error("Failed to parse values file {path}: {reason}")]
    #[diagnostic(code(composer::values::parse_failed))]
    ValuesParseFailed { path: String, reason: String },

    #[error("Values file {path} is not a mapping")]
    #[diagnostic(
        code(composer::values::not_a_mapping),
        help("Value files must contain top-level key: value pairs")
    )]
    ValuesNotMapping { path: String },

    #[error("Value '{input}' must be in format key=value")]
    #[diagnostic(code(composer::values::malformed_override))]
    OverrideMalformed { input: String },

    // Template errors
    #[error("Template file not found: {path}")]
    #[diagnostic(code(composer::template::not_found))]
    TemplateNotFound { path: String },

    #[error("Error when rendering template {path}: {message}")]
    #[diagnostic(code(composer::template::render_failed))]
    TemplateRenderFailed {
        path: String,
        message: String,
        detail: String,
    },

    // Storage errors
    #[error("Application '{id}' not found")]
    #[diagnostic(
        code(composer::storage::application_not_found),
        help("Use `composer list` to see installed applications")
    )]
    ApplicationNotFound { id: String },

    #[error("State record does not exist: {path}")]
    #[diagnostic(code(composer::storage::record_missing))]
    StateRecordMissing { path: String },

    #[error("Failed to parse state record {path}: {reason}")]
    #[diagnostic(code(composer::storage::record_parse_failed))]
    StateRecordParseFailed { path: String, reason: String },

    #[error("Path {path} used for local storage is already in use")]
    #[diagnostic(
        code(composer::storage::root_occupied),
        help("Remove the file at that path and try again")
    )]
    StorageRootOccupied { path: String },

    #[error("Path {path} used for local storage is not writable")]
    #[diagnostic(code(composer::storage::not_writable))]
    StorageNotWritable { path: String },

    // Engine errors
    #[error("{binary} is not installed")]
    #[diagnostic(
        code(composer::engine::not_installed),
        help("Install docker-compose and make sure it is on PATH")
    )]
    EngineNotInstalled { binary: String },

    #[error("Failed to run {binary}: {reason}")]
    #[diagnostic(code(composer::engine::spawn_failed))]
    EngineSpawnFailed { binary: String, reason: String },

    #[error("{operation} has failed for {unit}")]
    #[diagnostic(code(composer::engine::operation_failed))]
    EngineOperationFailed {
        operation: String,
        unit: String,
        detail: String,
    },

    // Usage errors surfaced by the semantic layer
    #[error("Please include an application id to {action}")]
    #[diagnostic(
        code(composer::cli::missing_id),
        help("e.g. composer {action} moon-baboon")
    )]
    MissingApplicationId { action: String },

    #[error("Please include an argument to forward to the engine")]
    #[diagnostic(
        code(composer::cli::missing_command),
        help("e.g. composer cmd moon-baboon images")
    )]
    MissingCommandArguments,

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(composer::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(composer::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(composer::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ComposerError {
    fn from(err: std::io::Error) -> Self {
        ComposerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ComposerError {
    fn from(err: serde_json::Error) -> Self {
        ComposerError::StateRecordParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ComposerError {
    fn from(err: inquire::InquireError) -> Self {
        ComposerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ComposerError>;
