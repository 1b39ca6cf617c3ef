//! File eligibility by name.
//!
//! The allow-list is the only filter: there is no content sniffing, so a
//! `.png` containing ASCII text is still skipped and a binary `.json` is
//! still read (and then dropped by the UTF-8 decode step).

use std::path::Path;

/// Extensions (lowercase) of text, markup, code and config files.
pub const SEARCHABLE_EXTENSIONS: &[&str] = &[
    // docs & markup
    "md", "mdx", "markdown", "txt", "rst", "adoc", "html", "htm", "xml", "csv",
    // config
    "json", "jsonc", "yaml", "yml", "toml", "ini", "cfg", "conf",
    // code
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts", "rs", "py", "go", "java", "kt", "kts",
    "swift", "c", "h", "cc", "cpp", "hpp", "cs", "rb", "php", "sh", "bash", "zsh", "sql",
    // contracts & schemas
    "sol", "move", "vy", "graphql", "gql", "proto",
    // styles & components
    "css", "scss", "vue", "svelte",
];

/// Extension-less file names that are always searchable (case-sensitive).
pub const SEARCHABLE_NAMES: &[&str] = &["README", "LICENSE"];

/// Returns true if a file with this name should be searched.
///
/// ```
/// use chaindoc::services::is_searchable;
///
/// assert!(is_searchable("guide.MD"));
/// assert!(is_searchable("README"));
/// assert!(!is_searchable("readme"));
/// assert!(!is_searchable("logo.png"));
/// ```
#[must_use]
pub fn is_searchable(file_name: &str) -> bool {
    let path = Path::new(file_name);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => SEARCHABLE_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
        None => SEARCHABLE_NAMES.contains(&file_name),
    }
}
