//! Per-document scoring.
//!
//! A document's score is the total number of non-overlapping occurrences of
//! every term in its lowercased content. Documents scoring zero produce no
//! result; everything else produces exactly one.

use crate::error::DocError;
use crate::services::excerpt::build_excerpt;
use crate::types::{Score, SearchTerms};
use std::fs;
use std::path::Path;

/// A matching document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    /// Repository label the document was found in
    pub repository: String,
    pub score: Score,
    pub excerpt: String,
    /// Distinct lines containing any term
    pub match_count: usize,
}

/// Counts occurrences of every term in `content`, case-insensitively.
///
/// ```
/// use chaindoc::services::score_content;
/// use chaindoc::types::SearchTerms;
///
/// let terms = SearchTerms::parse("transaction fee");
/// let score = score_content("This covers transaction flow and fees.", &terms);
/// assert_eq!(score.as_u32(), 2);
/// ```
#[must_use]
pub fn score_content(content: &str, terms: &SearchTerms) -> Score {
    let lowered = content.to_lowercase();
    terms.iter().fold(Score::ZERO, |score, term| {
        let count = lowered.matches(term).count();
        score.add(u32::try_from(count).unwrap_or(u32::MAX))
    })
}

/// Matches already-loaded content. `rel_path` is used for the result path
/// and its file name for the fallback title.
#[must_use]
pub fn match_document(
    content: &str,
    terms: &SearchTerms,
    rel_path: &str,
    repository: &str,
) -> Option<SearchResult> {
    let score = score_content(content, terms);
    if score.is_zero() {
        return None;
    }

    let file_name = rel_path.rsplit('/').next().unwrap_or(rel_path);
    let excerpt = build_excerpt(content, terms, file_name);

    Some(SearchResult {
        title: excerpt.title,
        path: rel_path.to_string(),
        repository: repository.to_string(),
        score,
        excerpt: excerpt.text,
        match_count: excerpt.matched_lines,
    })
}

/// Reads `path` as UTF-8 and matches it.
///
/// Unreadable or non-UTF-8 files are skipped: the failure is logged at debug
/// level and `None` is returned so the walk continues.
#[must_use]
pub fn match_file(
    path: &Path,
    terms: &SearchTerms,
    rel_path: &str,
    repository: &str,
) -> Option<SearchResult> {
    let content = match read_text(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(code = e.code(), "Skipping file: {e}");
            return None;
        }
    };
    match_document(&content, terms, rel_path, repository)
}

fn read_text(path: &Path) -> Result<String, DocError> {
    let bytes = fs::read(path).map_err(|_| DocError::Decode {
        path: path.to_path_buf(),
    })?;
    String::from_utf8(bytes).map_err(|_| DocError::Decode {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn terms(q: &str) -> SearchTerms {
        SearchTerms::parse(q)
    }

    #[test]
    fn test_score_counts_every_occurrence() {
        let content = "Gas gas GAS\ngas limit";
        assert_eq!(score_content(content, &terms("gas")).as_u32(), 4);
    }

    #[test]
    fn test_score_sums_terms() {
        let content = "nonce nonce\nsignature";
        assert_eq!(score_content(content, &terms("nonce signature")).as_u32(), 3);
    }

    #[test]
    fn test_score_non_overlapping() {
        assert_eq!(score_content("aaaa", &terms("aa")).as_u32(), 2);
    }

    #[test]
    fn test_zero_score_yields_nothing() {
        assert!(match_document("nothing relevant", &terms("wallet"), "a.md", "docs").is_none());
        assert!(match_document("anything", &SearchTerms::default(), "a.md", "docs").is_none());
    }

    #[test]
    fn test_match_document_fields() {
        let content = "# Intro\n\nThis covers transaction flow and fees.";
        let hit = match_document(content, &terms("transaction fee"), "docs/a.md", "docs").unwrap();

        assert_eq!(hit.title, "Intro");
        assert_eq!(hit.path, "docs/a.md");
        assert_eq!(hit.repository, "docs");
        assert_eq!(hit.score.as_u32(), 2);
        assert_eq!(hit.match_count, 1);
        assert!(hit.excerpt.contains("**transaction**"));
        assert!(hit.excerpt.contains("**fee**s"));
    }

    #[test]
    fn test_match_count_independent_of_score() {
        let content = "fee fee fee fee\nother\nfee";
        let hit = match_document(content, &terms("fee"), "x.md", "docs").unwrap();
        assert_eq!(hit.score.as_u32(), 5);
        assert_eq!(hit.match_count, 2);
    }

    #[test]
    fn test_fallback_title_uses_file_name_only() {
        let hit = match_document("wallet", &terms("wallet"), "guides/connect-wallet.md", "docs")
            .unwrap();
        assert_eq!(hit.title, "connect wallet");
    }

    #[test]
    fn test_match_file_skips_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.md");
        fs::write(&path, [0x77, 0x61, 0x6c, 0xff, 0xfe]).unwrap();
        assert!(match_file(&path, &terms("wal"), "bad.md", "docs").is_none());
    }

    #[test]
    fn test_match_file_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.md");
        assert!(match_file(&path, &terms("x"), "gone.md", "docs").is_none());
    }
}
