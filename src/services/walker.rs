//! Sequential depth-first walk of one repository.
//!
//! Uses the `ignore` walker with its standard filters turned off: gitignore
//! files are not consulted. Instead a fixed exclusion list prunes dependency,
//! build output and hidden directories before they are descended into.

use crate::error::DocError;
use crate::services::classify::is_searchable;
use crate::services::matcher::{match_file, SearchResult};
use crate::types::SearchTerms;
use ignore::WalkBuilder;
use std::path::Path;

/// Directory names that are never descended into (in addition to any name
/// starting with `.`).
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "out",
    "target",
    "coverage",
    "vendor",
    "__pycache__",
    "_site",
    "site",
    "public",
];

/// Returns true if a directory with this name must be skipped.
#[must_use]
pub fn is_excluded_dir(name: &str) -> bool {
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name)
}

/// Walks `root` and matches every searchable file against `terms`.
///
/// Entries are visited depth-first, pre-order, sorted by file name within a
/// directory. A directory that cannot be listed is logged and contributes no
/// results; the rest of the tree is still walked.
#[must_use]
pub fn walk_repository(root: &Path, repository: &str, terms: &SearchTerms) -> Vec<SearchResult> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir && entry.file_name().to_str().is_some_and(is_excluded_dir))
        })
        .build();

    let mut results = Vec::new();
    let mut files_scanned = 0usize;

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let failure = DocError::Traversal {
                    path: error_path(&err).unwrap_or(root).to_path_buf(),
                    reason: err.to_string(),
                };
                tracing::warn!(repository, code = failure.code(), "{failure}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_searchable(name) {
            continue;
        }

        files_scanned += 1;
        let rel_path = relative_path(root, entry.path());
        if let Some(hit) = match_file(entry.path(), terms, &rel_path, repository) {
            results.push(hit);
        }
    }

    tracing::debug!(
        repository,
        files_scanned,
        matches = results.len(),
        "Walked repository"
    );
    results
}

/// `path` relative to `root`, `/`-separated on every platform.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Digs the offending path out of a (possibly nested) walk error.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn paths(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_excluded_dir_names() {
        assert!(is_excluded_dir("node_modules"));
        assert!(is_excluded_dir(".git"));
        assert!(is_excluded_dir(".docusaurus"));
        assert!(is_excluded_dir("dist"));
        assert!(!is_excluded_dir("docs"));
        assert!(!is_excluded_dir("builds"));
    }

    #[test]
    fn test_walk_finds_nested_documents() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "guides/deep/nested/wallet.md", "connect a wallet");
        write(dir.path(), "top.md", "wallet");

        let terms = SearchTerms::parse("wallet");
        let results = walk_repository(dir.path(), "docs", &terms);
        assert_eq!(paths(&results), ["guides/deep/nested/wallet.md", "top.md"]);
        assert!(results.iter().all(|r| r.repository == "docs"));
    }

    #[test]
    fn test_walk_skips_excluded_and_hidden_dirs() {
        let dir = TempDir::new().unwrap();
        for excluded in ["node_modules", ".git", "dist", "build", ".cache"] {
            write(dir.path(), &format!("{excluded}/doc.md"), "wallet");
        }
        write(dir.path(), "src/doc.md", "wallet");

        let results = walk_repository(dir.path(), "docs", &SearchTerms::parse("wallet"));
        assert_eq!(paths(&results), ["src/doc.md"]);
    }

    #[test]
    fn test_walk_prunes_excluded_dirs_at_any_depth() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "guides/node_modules/x.md", "wallet");
        write(dir.path(), "packages/core/dist/index.js", "wallet");
        write(dir.path(), "guides/deep/.vitepress/cache.md", "wallet");
        write(dir.path(), "guides/wallets.md", "wallet");

        let results = walk_repository(dir.path(), "docs", &SearchTerms::parse("wallet"));
        assert_eq!(paths(&results), ["guides/wallets.md"]);
    }

    #[test]
    fn test_walk_searches_hidden_files() {
        // Only hidden *directories* are pruned
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".prettierrc.json", "{\"wallet\": true}");

        let results = walk_repository(dir.path(), "docs", &SearchTerms::parse("wallet"));
        assert_eq!(paths(&results), [".prettierrc.json"]);
    }

    #[test]
    fn test_walk_ignores_non_searchable_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "logo.png", "wallet wallet");
        write(dir.path(), "yarn.lock", "wallet");
        write(dir.path(), "README", "wallet");

        let results = walk_repository(dir.path(), "docs", &SearchTerms::parse("wallet"));
        assert_eq!(paths(&results), ["README"]);
    }

    #[test]
    fn test_walk_ignores_gitignore() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".gitignore", "ignored.md\n");
        write(dir.path(), "ignored.md", "wallet");

        let results = walk_repository(dir.path(), "docs", &SearchTerms::parse("wallet"));
        assert_eq!(paths(&results), ["ignored.md"]);
    }

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = Path::new("/repos/docs");
        assert_eq!(
            relative_path(root, &root.join("a").join("b.md")),
            "a/b.md"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write(dir.path(), "locked/secret.md", "wallet");
        write(dir.path(), "open/doc.md", "wallet");

        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let results = walk_repository(dir.path(), "docs", &SearchTerms::parse("wallet"));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Root ignores permission bits, so only assert the sibling survived
        assert!(paths(&results).contains(&"open/doc.md"));
    }
}
