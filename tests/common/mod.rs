//! Common test utilities for chaindoc integration tests.
//!
//! Provides `TestEnv` for setting up an isolated repositories directory with
//! a search service wired to it.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use chaindoc::config::RepositoryConfig;
use chaindoc::services::{SearchResult, SearchService};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Repository labels used by every test environment, in search order.
pub const TEST_REPOS: &[&str] = &["docs", "sdk-typescript", "ui-kit"];

/// A temporary repositories directory plus a search service over it.
pub struct TestEnv {
    pub dir: TempDir,
    pub search: SearchService,
}

impl TestEnv {
    /// Creates an environment with an empty base directory. Repository
    /// directories are created on first write.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let config = RepositoryConfig::new(
            dir.path().to_path_buf(),
            TEST_REPOS.iter().map(|s| s.to_string()).collect(),
        )
        .expect("Failed to build config");

        Self {
            dir,
            search: SearchService::new(Arc::new(config)),
        }
    }

    /// Writes a document into a repository.
    pub fn write_doc(&self, repo: &str, rel: &str, content: &str) {
        self.write_bytes(repo, rel, content.as_bytes());
    }

    /// Writes raw bytes into a repository.
    pub fn write_bytes(&self, repo: &str, rel: &str, content: &[u8]) {
        let path = self.path(repo, rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// Full path to a file in a repository.
    pub fn path(&self, repo: &str, rel: &str) -> PathBuf {
        self.dir.path().join(repo).join(rel)
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search.search(query).expect("search failed")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A small documentation set spread over all test repositories.
pub fn docs_site() -> TestEnv {
    let env = TestEnv::new();

    env.write_doc(
        "docs",
        "getting-started.md",
        r#"# Getting Started

Install the SDK and connect a wallet.

## Connecting

Create a client, then ask the wallet to connect.
The wallet prompts the user once per session.
"#,
    );

    env.write_doc(
        "docs",
        "guides/gas.md",
        r#"# Gas and Fees

Every transaction pays a fee.
The fee is gas used times gas price.
Estimate gas before sending a transaction.
"#,
    );

    env.write_doc(
        "docs",
        "node_modules/pkg/README.md",
        "wallet wallet wallet wallet wallet wallet",
    );

    env.write_doc(
        "sdk-typescript",
        "src/wallet.ts",
        r#"export class Wallet {
  // connect prompts the wallet extension
  async connect(): Promise<string> {
    return this.provider.request("connect");
  }
}
"#,
    );

    env.write_doc("sdk-typescript", "dist/index.js", "wallet wallet wallet");

    env.write_doc(
        "ui-kit",
        "components/WalletButton.mdx",
        "# WalletButton\n\nA button that opens the wallet connect dialog.\n",
    );

    env
}

/// Asserts that results contain a document at `repo`/`path`.
pub fn assert_results_contain(results: &[SearchResult], repo: &str, path: &str) {
    let found = results
        .iter()
        .any(|r| r.repository == repo && r.path == path);
    assert!(
        found,
        "Expected results to contain '{repo}/{path}', but got: {:?}",
        locations(results)
    );
}

/// Asserts that no result comes from `repo`/`path`.
pub fn assert_results_not_contain(results: &[SearchResult], repo: &str, path: &str) {
    let found = results
        .iter()
        .any(|r| r.repository == repo && r.path == path);
    assert!(
        !found,
        "Expected results NOT to contain '{repo}/{path}', but it was found"
    );
}

pub fn locations(results: &[SearchResult]) -> Vec<String> {
    results
        .iter()
        .map(|r| format!("{}/{}", r.repository, r.path))
        .collect()
}
