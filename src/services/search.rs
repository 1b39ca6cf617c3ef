//! Multi-repository document search.
//!
//! Every call walks the configured repositories from scratch; nothing is
//! cached between queries. Work is strictly sequential: repository *i* is
//! fully walked before repository *i+1* starts.

use crate::config::RepositoryConfig;
use crate::error::{DocError, DocResult};
use crate::services::matcher::SearchResult;
use crate::services::reader::{read_document, Document};
use crate::services::walker::walk_repository;
use crate::types::SearchTerms;
use std::cmp::Reverse;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// On-disk state of one configured repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryStatus {
    pub name: String,
    pub path: PathBuf,
    /// Exists and is a directory
    pub present: bool,
}

/// Search and read access to the configured repositories.
///
/// Stateless apart from the immutable configuration, so it is `Send + Sync`
/// and can serve concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct SearchService {
    config: Arc<RepositoryConfig>,
}

impl SearchService {
    #[must_use]
    pub fn new(config: Arc<RepositoryConfig>) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Searches every configured repository and ranks the hits.
    ///
    /// Returns the full list sorted by score, highest first; documents with
    /// equal scores keep walk order. An empty or whitespace-only query
    /// returns no results without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns `DocError::RootAccess` if the base repositories directory is
    /// missing or not a directory. Missing individual repositories are
    /// skipped.
    pub fn search(&self, query: &str) -> DocResult<Vec<SearchResult>> {
        let terms = SearchTerms::parse(query);
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        self.check_base_dir()?;

        let mut results = Vec::new();
        for name in self.config.repositories() {
            let root = self.config.base_dir().join(name);
            if !root.is_dir() {
                tracing::debug!(repository = %name, "Repository not present, skipping");
                continue;
            }
            results.extend(walk_repository(&root, name, &terms));
        }

        // Stable: ties keep walk order
        results.sort_by_key(|r| Reverse(r.score));

        tracing::debug!(query, terms = %terms, total = results.len(), "Search complete");
        Ok(results)
    }

    /// Reads one document. See [`read_document`].
    ///
    /// # Errors
    ///
    /// Returns `DocError::NotFound`, `DocError::UnknownRepository` or
    /// `DocError::Security`.
    pub fn read(&self, repository: Option<&str>, path: &str) -> DocResult<Document> {
        read_document(&self.config, repository, path)
    }

    /// Reports which configured repositories exist on disk.
    #[must_use]
    pub fn repository_status(&self) -> Vec<RepositoryStatus> {
        self.config
            .repositories()
            .iter()
            .map(|name| {
                let path = self.config.base_dir().join(name);
                RepositoryStatus {
                    present: path.is_dir(),
                    name: name.clone(),
                    path,
                }
            })
            .collect()
    }

    fn check_base_dir(&self) -> DocResult<()> {
        let base = self.config.base_dir();
        let root_access = |source| DocError::RootAccess {
            path: base.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(base).map_err(root_access)?;
        if !metadata.is_dir() {
            return Err(root_access(io::Error::other("not a directory")));
        }
        // A directory we cannot list is as useless as a missing one
        fs::read_dir(base).map_err(root_access)?;
        Ok(())
    }
}
