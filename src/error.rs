//! Error types for chaindoc.
//!
//! Uses thiserror for ergonomic error handling with proper
//! error chain propagation.

use crate::security::SecurityError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level server error.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Doc(#[from] DocError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Repository search and document read errors.
///
/// Only `NotFound`, `UnknownRepository`, `Security` and `RootAccess` ever
/// reach a caller. `Traversal` and `Decode` are built by the walker for its
/// log lines and then dropped.
#[derive(Error, Debug)]
pub enum DocError {
    #[error(
        "Document not found: '{}' ({source}). Use the 'search_docs' tool to locate the correct path.",
        path.display()
    )]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Repositories directory is not accessible: '{}' ({source})", path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot list directory '{}': {reason}", path.display())]
    Traversal { path: PathBuf, reason: String },

    #[error("Not a UTF-8 text file: '{}'", path.display())]
    Decode { path: PathBuf },

    #[error("Unknown repository '{name}'. Available repositories: {}", available.join(", "))]
    UnknownRepository {
        name: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Security(#[from] SecurityError),
}

/// Static catalog lookup errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Query '{query}' requires variable '{variable}'")]
    MissingVariable {
        query: &'static str,
        variable: &'static str,
    },

    #[error("Invalid value for variable '{variable}': {reason}")]
    InvalidVariable { variable: String, reason: String },

    #[error("Unknown {kind} '{value}'. Valid values: {valid}")]
    UnknownKey {
        kind: &'static str,
        value: String,
        valid: String,
    },
}

/// Startup configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Repository label must be a single non-empty path component, got '{0}'")]
    InvalidRepositoryLabel(String),

    #[error("At least one repository must be configured")]
    NoRepositories,
}

/// Result type alias for document operations.
pub type DocResult<T> = std::result::Result<T, DocError>;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

// Error code implementations for machine-readable error responses
impl ServerError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Doc(e) => e.code(),
            Self::Catalog(e) => e.code(),
        }
    }
}

impl DocError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "DOC_NOT_FOUND",
            Self::RootAccess { .. } => "ROOT_ACCESS",
            Self::Traversal { .. } => "TRAVERSAL_FAILED",
            Self::Decode { .. } => "DECODE_FAILED",
            Self::UnknownRepository { .. } => "UNKNOWN_REPOSITORY",
            Self::Security(e) => e.code(),
        }
    }
}

impl CatalogError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingVariable { .. } => "MISSING_VARIABLE",
            Self::InvalidVariable { .. } => "INVALID_VARIABLE",
            Self::UnknownKey { .. } => "UNKNOWN_KEY",
        }
    }
}
