//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitoscopeError`], the single error type returned by every
//! gitoscope operation that can fail loudly. It uses `thiserror` for ergonomic error
//! definitions and includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`GitoscopeError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitoscopeError>`
//!
//! # Error Categories
//! - **Repository**: Repository not found, git2 library errors, failed plumbing calls
//! - **Objects**: Unknown identifiers and plumbing output that cannot be decoded
//! - **Configuration**: Unreadable or unparseable configuration files
//!
//! Missing content and unreadable reference namespaces are not errors: those lookups
//! return empty values instead.

use crate::core::objects::ObjectKind;
use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gitoscope
#[derive(Error, Debug)]
pub enum GitoscopeError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("git {command} failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    // Object decoding errors
    #[error("Object not found: {kind} {id}")]
    ObjectNotFound { id: String, kind: ObjectKind },

    #[error("Malformed {kind} object {id}: {reason}")]
    MalformedObject {
        id: String,
        kind: ObjectKind,
        reason: String,
    },

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown content source '{source_name}'. Use one of: tree, cache, working")]
    InvalidContentSource { source_name: String },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitoscopeError
pub type Result<T> = std::result::Result<T, GitoscopeError>;

impl GitoscopeError {
    /// Create an object not found error
    pub fn object_not_found(id: impl Into<String>, kind: ObjectKind) -> Self {
        Self::ObjectNotFound {
            id: id.into(),
            kind,
        }
    }

    /// Create a malformed object error
    pub fn malformed_object(
        id: impl Into<String>,
        kind: ObjectKind,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedObject {
            id: id.into(),
            kind,
            reason: reason.into(),
        }
    }

    /// Create a failed git command error from the arguments and captured stderr
    pub fn git_command_failed(args: &[&str], stderr: &[u8]) -> Self {
        Self::GitCommandFailed {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }

    /// Create an invalid content source error
    pub fn invalid_content_source(source_name: impl Into<String>) -> Self {
        Self::InvalidContentSource {
            source_name: source_name.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// True when the identifier did not resolve to an object of the requested kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound { .. })
    }

    /// True for the two failures an explicit object lookup may surface to a user
    pub fn is_object_error(&self) -> bool {
        matches!(
            self,
            Self::ObjectNotFound { .. } | Self::MalformedObject { .. }
        )
    }
}
