//! Error types for endpoint resolution.
//!
//! This module defines [`ResolverError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! Resolving a host never fails. Errors only come from loading and
//! validating the tier configuration, and from I/O in the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for configuration and CLI operations.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;
