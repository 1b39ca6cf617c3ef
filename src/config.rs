//! Repository layout configuration.
//!
//! Built once at startup from CLI flags / environment and shared immutably.

use crate::error::ConfigError;
use std::path::{Component, Path, PathBuf};

/// Default base directory holding the repository checkouts.
pub const DEFAULT_REPOS_DIR: &str = "./repositories";

/// Default repository labels, in search order.
pub const DEFAULT_REPOSITORIES: &[&str] = &[
    "docs",
    "sdk-typescript",
    "sdk-rust",
    "ui-kit",
    "sample-apps",
];

/// Where the searchable repositories live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    base_dir: PathBuf,
    repositories: Vec<String>,
}

impl RepositoryConfig {
    /// Creates a configuration, validating every repository label.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the list is empty or a label is not a single
    /// plain path component (no separators, no `.`/`..`).
    pub fn new(base_dir: PathBuf, repositories: Vec<String>) -> Result<Self, ConfigError> {
        if repositories.is_empty() {
            return Err(ConfigError::NoRepositories);
        }
        for label in &repositories {
            if !is_plain_component(label) {
                return Err(ConfigError::InvalidRepositoryLabel(label.clone()));
            }
        }
        Ok(Self {
            base_dir,
            repositories,
        })
    }

    /// Uses the default repository list under `base_dir`.
    #[must_use]
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            repositories: DEFAULT_REPOSITORIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }

    /// Root directory of a configured repository, `None` for unknown labels.
    #[must_use]
    pub fn repository_root(&self, label: &str) -> Option<PathBuf> {
        self.repositories
            .iter()
            .any(|r| r == label)
            .then(|| self.base_dir.join(label))
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self::with_defaults(PathBuf::from(DEFAULT_REPOS_DIR))
    }
}

fn is_plain_component(label: &str) -> bool {
    let mut components = Path::new(label).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !label.contains(['/', '\\'])
}
