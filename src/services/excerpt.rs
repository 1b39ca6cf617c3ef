//! Title extraction and highlighted excerpts for search results.

use crate::types::SearchTerms;
use regex::{Regex, RegexBuilder};
use std::path::Path;

/// Only the first lines of a document are scanned for a `# ` heading.
pub const TITLE_SCAN_LINES: usize = 10;

/// Lines of context kept on each side of a matched line.
pub const CONTEXT_LINES: usize = 2;

/// Excerpts longer than this (in characters, after highlighting) are cut.
pub const MAX_EXCERPT_CHARS: usize = 500;

/// Appended to an excerpt that was cut.
pub const TRUNCATION_MARKER: &str = "...";

/// A line containing at least one term, with its surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchContext {
    /// 1-indexed line number of the matched line
    pub line_number: usize,
    /// Matched line plus up to `CONTEXT_LINES` lines on each side, newline-joined
    pub context_block: String,
    /// The matched line itself
    pub matched_line: String,
}

/// Title, excerpt and matched-line count for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub title: String,
    /// Highlighted, bounded context around the first matched line
    pub text: String,
    /// Number of distinct lines containing any term
    pub matched_lines: usize,
}

/// Builds the title and excerpt for a document already known to match.
///
/// The excerpt is the context block of the *first* matched line in document
/// order, regardless of how many terms other lines contain.
#[must_use]
pub fn build_excerpt(content: &str, terms: &SearchTerms, file_name: &str) -> Excerpt {
    let matches = locate_matches(content, terms);
    let text = matches
        .first()
        .map(|m| truncate_excerpt(highlight(&m.context_block, terms)))
        .unwrap_or_default();

    Excerpt {
        title: extract_title(content, file_name),
        text,
        matched_lines: matches.len(),
    }
}

/// Returns the first `# ` heading within the first lines, or a title derived
/// from the file name.
///
/// ```
/// use chaindoc::services::excerpt::extract_title;
///
/// assert_eq!(extract_title("# Hello World\nbody", "x.md"), "Hello World");
/// assert_eq!(extract_title("no heading here", "my-doc.md"), "my doc");
/// ```
#[must_use]
pub fn extract_title(content: &str, file_name: &str) -> String {
    content
        .lines()
        .take(TITLE_SCAN_LINES)
        .find_map(heading_text)
        .map(str::to_string)
        .unwrap_or_else(|| title_from_file_name(file_name))
}

/// Text of a level-1 markdown heading (`# Title`), if the line is one.
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with(char::is_whitespace) {
        // "##" headings and "#hashtag" lines
        return None;
    }
    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

fn title_from_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.replace(['-', '_'], " ")
}

/// Finds every line whose lowercase form contains any term.
#[must_use]
pub fn locate_matches(content: &str, terms: &SearchTerms) -> Vec<MatchContext> {
    if terms.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = content.lines().collect();
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| terms.any_in(&line.to_lowercase()))
        .map(|(idx, line)| {
            let start = idx.saturating_sub(CONTEXT_LINES);
            let end = (idx + CONTEXT_LINES + 1).min(lines.len());
            MatchContext {
                line_number: idx + 1,
                context_block: lines[start..end].join("\n"),
                matched_line: (*line).to_string(),
            }
        })
        .collect()
}

/// Wraps every case-insensitive occurrence of each term in `**`.
///
/// Terms are applied one after another, so a term that occurs inside an
/// earlier term's highlight gets nested markers (`**trans**action**`-style
/// output is possible for overlapping terms).
#[must_use]
pub fn highlight(text: &str, terms: &SearchTerms) -> String {
    terms
        .iter()
        .filter_map(term_matcher)
        .fold(text.to_string(), |acc, re| {
            re.replace_all(&acc, "**${0}**").into_owned()
        })
}

fn term_matcher(term: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Cuts `text` to `MAX_EXCERPT_CHARS` characters plus a marker.
#[must_use]
pub fn truncate_excerpt(text: String) -> String {
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        return text;
    }
    let mut cut: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
    cut.push_str(TRUNCATION_MARKER);
    cut
}
