//! Human-friendly CLI output formatters.
//!
//! Each `fmt_*` function formats one tool's output for terminal display.
//! When `color` is true, ANSI escape codes are emitted via `owo_colors`.
//! Catalog tools have no dedicated formatter; their markdown is printed as is.

use crate::tools::{ListRepositoriesOutput, ReadDocOutput, SearchDocsOutput};
use owo_colors::OwoColorize;
use std::io::{self, Write};

// ── search ──────────────────────────────────────────────────────────────────

pub fn fmt_search(w: &mut impl Write, out: &SearchDocsOutput, color: bool) -> io::Result<()> {
    if out.results.is_empty() {
        return writeln!(w, "No documents found matching \"{}\".", out.query.trim());
    }

    for hit in &out.results {
        let location = format!("{}/{}", hit.repository, hit.path);
        if color {
            writeln!(
                w,
                "{}  {}  ({} · {} lines)",
                location.bold(),
                hit.title.cyan(),
                hit.score,
                hit.match_count
            )?;
        } else {
            writeln!(
                w,
                "{}  {}  ({} · {} lines)",
                location, hit.title, hit.score, hit.match_count
            )?;
        }

        for line in hit.excerpt.lines() {
            if color {
                writeln!(w, "  {}{}", "│ ".dimmed(), line)?;
            } else {
                writeln!(w, "  │ {line}")?;
            }
        }
        writeln!(w)?;
    }

    if out.has_more() {
        let notice = format!("showing top {} of {} results", out.results.len(), out.total);
        if color {
            writeln!(w, "{}", notice.dimmed())?;
        } else {
            writeln!(w, "{notice}")?;
        }
    }

    Ok(())
}

// ── read ────────────────────────────────────────────────────────────────────

pub fn fmt_read(w: &mut impl Write, out: &ReadDocOutput, color: bool) -> io::Result<()> {
    let path = out.display_path();
    if color {
        writeln!(w, "{} ({})", out.title.bold(), path.dimmed())?;
    } else {
        writeln!(w, "{} ({})", out.title, path)?;
    }
    writeln!(w)?;
    w.write_all(out.content.as_bytes())?;
    if !out.content.ends_with('\n') {
        writeln!(w)?;
    }
    Ok(())
}

// ── repos ───────────────────────────────────────────────────────────────────

pub fn fmt_repos(w: &mut impl Write, out: &ListRepositoriesOutput, color: bool) -> io::Result<()> {
    writeln!(w, "{}", out.base_dir)?;
    for repo in &out.repositories {
        let status = if repo.present { "ok" } else { "missing" };
        if color {
            let status = if repo.present {
                status.green().to_string()
            } else {
                status.red().to_string()
            };
            writeln!(w, "  {:<20} {}", repo.name.bold(), status)?;
        } else {
            writeln!(w, "  {:<20} {}", repo.name, status)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{RepositoryEntry, SearchHit};
    use crate::types::Score;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn hit(path: &str, score: u32) -> SearchHit {
        SearchHit {
            title: "Fees".into(),
            path: path.into(),
            repository: "docs".into(),
            score: Score::new(score),
            excerpt: "line one\n**fee** two".into(),
            match_count: 1,
        }
    }

    #[test]
    fn test_fmt_search_plain() {
        let out = SearchDocsOutput {
            query: "fee".into(),
            total: 3,
            results: vec![hit("a.md", 2), hit("b.md", 1)],
        };
        let text = render(|w| fmt_search(w, &out, false));
        assert!(text.contains("docs/a.md  Fees  (2 · 1 lines)"));
        assert!(text.contains("  │ **fee** two"));
        assert!(text.ends_with("showing top 2 of 3 results\n"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_fmt_search_color_emits_ansi() {
        let out = SearchDocsOutput {
            query: "fee".into(),
            total: 1,
            results: vec![hit("a.md", 2)],
        };
        let text = render(|w| fmt_search(w, &out, true));
        assert!(text.contains('\x1b'));
    }

    #[test]
    fn test_fmt_read_appends_newline() {
        let out = ReadDocOutput {
            title: "Intro".into(),
            path: "intro.md".into(),
            repository: Some("docs".into()),
            content: "body".into(),
        };
        let text = render(|w| fmt_read(w, &out, false));
        assert_eq!(text, "Intro (docs/intro.md)\n\nbody\n");
    }

    #[test]
    fn test_fmt_repos() {
        let out = ListRepositoriesOutput {
            base_dir: "./repositories".into(),
            repositories: vec![RepositoryEntry {
                name: "docs".into(),
                path: "./repositories/docs".into(),
                present: false,
            }],
        };
        let text = render(|w| fmt_repos(w, &out, false));
        assert!(text.contains("docs"));
        assert!(text.contains("missing"));
    }
}
