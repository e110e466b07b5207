//! Error types for hostcheck operations.
//!
//! This module defines [`HostCheckError`], the infrastructure error type, and
//! a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `HostCheckError` covers things that go wrong around the checks:
//!   loading configuration, spawning processes, talking to the OS
//! - A failed check is not an error; it is a
//!   [`CheckFailure`](crate::requirements::CheckFailure) value that gets
//!   reported and counted
//! - Use `anyhow::Error` (via `HostCheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hostcheck operations.
#[derive(Debug, Error)]
pub enum HostCheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Command could not be spawned, or exited unsuccessfully.
    #[error("`{command}` {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The kernel release string could not be read.
    #[error("cannot read kernel release: {message}")]
    KernelRelease { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "could not be run".to_string(),
    }
}

/// Result type alias for hostcheck operations.
pub type Result<T> = std::result::Result<T, HostCheckError>;
