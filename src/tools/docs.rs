//! Repository document tools: search, read and repository listing.
//!
//! # Security
//!
//! `read_doc` is the only tool taking a caller-chosen path. It goes through
//! [`crate::security`] (traversal and sensitive-file checks) before any file
//! is opened.

use super::Render;
use crate::error::ServerError;
use crate::services::{SearchResult, SearchService};
use crate::types::Score;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Results shown when the caller does not ask for a limit.
pub const MAX_DISPLAYED_RESULTS: usize = 10;

/// Upper bound on a caller-supplied limit.
pub const MAX_LIMIT: usize = 50;

/// Input for the search_docs tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchDocsInput {
    /// Free-text query; words are matched case-insensitively as substrings
    pub query: String,
    /// Maximum results to show (default 10, max 50)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One ranked document.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchHit {
    pub title: String,
    /// Path relative to the repository root
    pub path: String,
    pub repository: String,
    /// Total term occurrences in the document
    pub score: Score,
    /// Highlighted context around the first matching line
    pub excerpt: String,
    /// Number of lines containing any term
    pub match_count: usize,
}

impl From<SearchResult> for SearchHit {
    fn from(r: SearchResult) -> Self {
        Self {
            title: r.title,
            path: r.path,
            repository: r.repository,
            score: r.score,
            excerpt: r.excerpt,
            match_count: r.match_count,
        }
    }
}

/// Output for the search_docs tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchDocsOutput {
    pub query: String,
    /// Matching documents before the display limit was applied
    pub total: usize,
    pub results: Vec<SearchHit>,
}

impl SearchDocsOutput {
    /// True if matches were cut by the display limit.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.total > self.results.len()
    }
}

/// Executes the search_docs tool.
///
/// # Errors
///
/// Returns `ServerError::Doc` if the repositories directory is inaccessible.
pub fn execute_search_docs(
    service: &SearchService,
    input: SearchDocsInput,
) -> Result<SearchDocsOutput, ServerError> {
    let limit = input
        .limit
        .unwrap_or(MAX_DISPLAYED_RESULTS)
        .clamp(1, MAX_LIMIT);

    let results = service.search(&input.query)?;
    let total = results.len();

    Ok(SearchDocsOutput {
        query: input.query,
        total,
        results: results.into_iter().take(limit).map(SearchHit::from).collect(),
    })
}

impl Render for SearchDocsOutput {
    fn render(&self) -> String {
        if self.results.is_empty() {
            return format!(
                "No documents found matching \"{}\". Try broader or different terms.",
                self.query.trim()
            );
        }

        let mut out = format!(
            "Found {} document{} matching \"{}\":\n",
            self.total,
            if self.total == 1 { "" } else { "s" },
            self.query.trim()
        );
        for (i, hit) in self.results.iter().enumerate() {
            let _ = write!(
                out,
                "\n## {}. {}\n\n**Repository:** {} | **Path:** `{}` | **Score:** {} ({} matching line{})\n\n{}\n",
                i + 1,
                hit.title,
                hit.repository,
                hit.path,
                hit.score,
                hit.match_count,
                if hit.match_count == 1 { "" } else { "s" },
                hit.excerpt
            );
        }
        if self.has_more() {
            let _ = write!(
                out,
                "\n---\nShowing top {} of {} results. Refine the query to narrow them down.\n",
                self.results.len(),
                self.total
            );
        }
        out.push_str("\nUse `read_doc` with the repository and path to read a full document.\n");
        out
    }
}

/// Input for the read_doc tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadDocInput {
    /// Document path. Relative to the repository root when `repository` is
    /// given, otherwise relative to the repositories directory (e.g. `docs/intro.md`)
    pub path: String,
    /// Repository label as shown in search results
    #[serde(default)]
    pub repository: Option<String>,
}

/// Output for the read_doc tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ReadDocOutput {
    pub title: String,
    pub path: String,
    pub repository: Option<String>,
    pub content: String,
}

/// Executes the read_doc tool.
///
/// # Errors
///
/// Returns an error for unknown repositories, blocked paths and missing files.
pub fn execute_read_doc(
    service: &SearchService,
    input: ReadDocInput,
) -> Result<ReadDocOutput, ServerError> {
    let doc = service.read(input.repository.as_deref(), &input.path)?;
    Ok(ReadDocOutput {
        title: doc.title,
        path: doc.path,
        repository: doc.repository,
        content: doc.content,
    })
}

impl ReadDocOutput {
    /// `repository/path`, or just the path when no repository was given.
    #[must_use]
    pub fn display_path(&self) -> String {
        match &self.repository {
            Some(repo) => format!("{repo}/{}", self.path),
            None => self.path.clone(),
        }
    }
}

/// Wraps file content in boundary markers so consumers can tell tool output
/// from document text.
fn mark_content_boundary(content: &str, path: &str) -> String {
    format!("--- BEGIN DOCUMENT: {path} ---\n{content}\n--- END DOCUMENT: {path} ---")
}

impl Render for ReadDocOutput {
    fn render(&self) -> String {
        let path = self.display_path();
        format!(
            "# {}\n\n**Path:** `{path}`\n\n{}\n",
            self.title,
            mark_content_boundary(&self.content, &path)
        )
    }
}

/// One configured repository.
#[derive(Debug, Serialize, JsonSchema)]
pub struct RepositoryEntry {
    pub name: String,
    pub path: String,
    /// Exists on disk as a directory
    pub present: bool,
}

/// Output for the list_repositories tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ListRepositoriesOutput {
    pub base_dir: String,
    pub repositories: Vec<RepositoryEntry>,
}

/// Executes the list_repositories tool.
///
/// # Errors
///
/// Infallible today; returns `Result` like every other tool.
pub fn execute_list_repositories(
    service: &SearchService,
) -> Result<ListRepositoriesOutput, ServerError> {
    let repositories = service
        .repository_status()
        .into_iter()
        .map(|status| RepositoryEntry {
            name: status.name,
            path: status.path.display().to_string(),
            present: status.present,
        })
        .collect();

    Ok(ListRepositoriesOutput {
        base_dir: service.config().base_dir().display().to_string(),
        repositories,
    })
}

impl Render for ListRepositoriesOutput {
    fn render(&self) -> String {
        let mut out = format!("Repositories under `{}`:\n\n", self.base_dir);
        for repo in &self.repositories {
            let _ = writeln!(
                out,
                "- **{}**: {}",
                repo.name,
                if repo.present { "available" } else { "not found on disk" }
            );
        }
        out
    }
}
