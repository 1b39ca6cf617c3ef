//! Single-document reads.
//!
//! # Security
//!
//! Caller-supplied paths go through [`security::validate_read_access`]:
//! absolute paths, `..` escapes and sensitive files (keys, mnemonics, `.env`)
//! are refused before anything is opened.

use crate::config::RepositoryConfig;
use crate::error::{DocError, DocResult};
use crate::security;
use crate::services::excerpt::extract_title;
use std::fs;
use std::path::{Path, PathBuf};

/// A document loaded in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub content: String,
    /// Path as requested, relative to the resolved root
    pub path: String,
    pub repository: Option<String>,
}

/// Loads a document and derives its title.
///
/// With a repository label the path is resolved against that repository's
/// root, otherwise against the base repositories directory (so the path
/// usually starts with a label, e.g. `docs/intro.md`).
///
/// # Errors
///
/// - `DocError::UnknownRepository` if the label is not configured
/// - `DocError::Security` for absolute, escaping or sensitive paths
/// - `DocError::NotFound` if the file is missing or unreadable as text
pub fn read_document(
    config: &RepositoryConfig,
    repository: Option<&str>,
    path: &str,
) -> DocResult<Document> {
    let root = match repository {
        Some(name) => config
            .repository_root(name)
            .ok_or_else(|| DocError::UnknownRepository {
                name: name.to_string(),
                available: config.repositories().to_vec(),
            })?,
        None => config.base_dir().to_path_buf(),
    };

    let full_path = security::validate_read_access(&root, path)?;

    let content = fs::read_to_string(&full_path).map_err(|source| DocError::NotFound {
        path: attempted_path(repository, path),
        source,
    })?;

    let file_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);

    tracing::debug!(?repository, path, bytes = content.len(), "Read document");

    Ok(Document {
        title: extract_title(&content, file_name),
        content,
        path: path.to_string(),
        repository: repository.map(str::to_string),
    })
}

/// The path as the caller would recognize it in a search result.
fn attempted_path(repository: Option<&str>, path: &str) -> PathBuf {
    match repository {
        Some(name) => Path::new(name).join(path),
        None => PathBuf::from(path),
    }
}
