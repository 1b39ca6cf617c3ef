//! Path safety for the document reader.
//!
//! Provides protection against:
//! - Path traversal (escaping a repository root)
//! - Sensitive file exposure (wallet keys, mnemonics, `.env` files)
//!
//! Only `read_doc` goes through these checks. Search paths are produced by
//! the walker, never supplied by the caller, and the file classifier's
//! allow-list is the only filter applied to them.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Security-related errors.
#[derive(Error, Debug, Clone)]
pub enum SecurityError {
    #[error("Path traversal blocked: '{attempted}' escapes root '{}'", root.display())]
    PathTraversal { attempted: String, root: PathBuf },

    #[error("Access denied: '{path}' is a sensitive file ({reason})")]
    SensitiveFile { path: String, reason: &'static str },

    #[error("Absolute path not allowed: '{path}'")]
    AbsolutePath { path: String },
}

impl SecurityError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PathTraversal { .. } => "PATH_TRAVERSAL",
            Self::SensitiveFile { .. } => "SENSITIVE_FILE",
            Self::AbsolutePath { .. } => "ABSOLUTE_PATH",
        }
    }
}

// ============================================================================
// Path Validation
// ============================================================================

/// Validates that a user-provided path stays within the root directory.
///
/// # Security Properties
///
/// 1. Rejects absolute paths
/// 2. Normalizes path components (resolves `.` and `..`)
/// 3. Ensures final path starts with root (after symlink resolution when the
///    target exists)
///
/// The returned path does not have to exist; callers report a missing file
/// themselves.
///
/// # Example
///
/// ```
/// use chaindoc::security::validate_path;
/// use std::path::Path;
///
/// let root = Path::new("/repositories");
///
/// assert!(validate_path(root, "docs/intro.md").is_ok());
/// assert!(validate_path(root, "./docs/../sdk-rust/README").is_ok());
///
/// assert!(validate_path(root, "../etc/passwd").is_err());
/// assert!(validate_path(root, "/etc/passwd").is_err());
/// ```
pub fn validate_path(root: &Path, user_path: &str) -> Result<PathBuf, SecurityError> {
    let user_path_obj = Path::new(user_path);

    if user_path_obj.is_absolute() {
        return Err(SecurityError::AbsolutePath {
            path: user_path.to_string(),
        });
    }

    let normalized = normalize_path(user_path_obj);

    if normalized
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(SecurityError::PathTraversal {
            attempted: user_path.to_string(),
            root: root.to_path_buf(),
        });
    }

    let canonical_root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let joined = root.join(&normalized);

    // Existing targets are canonicalized so symlinks cannot point outside root
    let resolved = if joined.exists() {
        dunce::canonicalize(&joined).map_err(|_| SecurityError::PathTraversal {
            attempted: user_path.to_string(),
            root: root.to_path_buf(),
        })?
    } else {
        canonical_root.join(&normalized)
    };

    if !resolved.starts_with(&canonical_root) {
        return Err(SecurityError::PathTraversal {
            attempted: user_path.to_string(),
            root: root.to_path_buf(),
        });
    }

    Ok(resolved)
}

/// Normalizes a path by resolving `.` and `..` components without filesystem access.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Pop the last component if possible, otherwise keep ".."
                if components
                    .last()
                    .is_some_and(|c| !matches!(c, Component::ParentDir))
                {
                    components.pop();
                } else {
                    components.push(component);
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

// ============================================================================
// Sensitive File Detection
// ============================================================================

/// How to match a sensitive pattern against a file name.
#[derive(Debug, Clone, Copy)]
enum PatternMatchType {
    Exact,
    Prefix,
    Suffix,
}

/// A pattern for matching sensitive files.
#[derive(Debug, Clone, Copy)]
pub struct SensitivePattern {
    pattern: &'static str,
    reason: &'static str,
    match_type: PatternMatchType,
}

impl SensitivePattern {
    const fn exact(pattern: &'static str, reason: &'static str) -> Self {
        Self {
            pattern,
            reason,
            match_type: PatternMatchType::Exact,
        }
    }

    const fn prefix(pattern: &'static str, reason: &'static str) -> Self {
        Self {
            pattern,
            reason,
            match_type: PatternMatchType::Prefix,
        }
    }

    const fn suffix(pattern: &'static str, reason: &'static str) -> Self {
        Self {
            pattern,
            reason,
            match_type: PatternMatchType::Suffix,
        }
    }

    fn matches(&self, file_name: &str) -> bool {
        match self.match_type {
            PatternMatchType::Exact => file_name == self.pattern,
            PatternMatchType::Prefix => file_name.starts_with(self.pattern),
            PatternMatchType::Suffix => file_name.ends_with(self.pattern),
        }
    }
}

/// Files that may sit in a sample-app or SDK checkout but must never be
/// returned verbatim.
pub const SENSITIVE_PATTERNS: &[SensitivePattern] = &[
    SensitivePattern::exact(".env", "environment variables"),
    SensitivePattern::prefix(".env.", "environment variables"),
    SensitivePattern::suffix(".env", "environment variables"),
    SensitivePattern::exact(".npmrc", "npm config (may contain tokens)"),
    SensitivePattern::suffix(".pem", "private key/certificate"),
    SensitivePattern::suffix(".key", "private key"),
    SensitivePattern::suffix(".keystore", "keystore"),
    SensitivePattern::prefix("keystore.", "wallet keystore"),
    SensitivePattern::exact("mnemonic.txt", "wallet mnemonic"),
    SensitivePattern::exact(".secret", "deployer secret"),
    SensitivePattern::prefix("id_rsa", "SSH private key"),
    SensitivePattern::prefix("id_ed25519", "SSH private key"),
    SensitivePattern::exact("credentials.json", "credentials file"),
    SensitivePattern::exact("secrets.json", "secrets file"),
];

/// Checks if a path points to a sensitive file.
///
/// Returns `Some(reason)` if the file is sensitive, `None` otherwise.
///
/// ```
/// use chaindoc::security::is_sensitive_file;
/// use std::path::Path;
///
/// assert!(is_sensitive_file(Path::new("sample-apps/dex/.env.local")).is_some());
/// assert!(is_sensitive_file(Path::new("docs/keys.md")).is_none());
/// ```
#[must_use]
pub fn is_sensitive_file(path: &Path) -> Option<&'static str> {
    let file_name = path.file_name().and_then(|n| n.to_str())?;
    SENSITIVE_PATTERNS
        .iter()
        .find(|p| p.matches(file_name))
        .map(|p| p.reason)
}

/// Validates a path is safe to read (not traversal, not sensitive).
pub fn validate_read_access(root: &Path, user_path: &str) -> Result<PathBuf, SecurityError> {
    let resolved = validate_path(root, user_path)?;

    // Check both: a symlink may resolve to a differently named file
    if let Some(reason) =
        is_sensitive_file(&resolved).or_else(|| is_sensitive_file(Path::new(user_path)))
    {
        return Err(SecurityError::SensitiveFile {
            path: user_path.to_string(),
            reason,
        });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        let root = Path::new("/repositories");

        assert!(validate_path(root, "docs/intro.md").is_ok());
        assert!(validate_path(root, "README").is_ok());
        assert!(validate_path(root, "./docs/guide.md").is_ok());
        assert!(validate_path(root, "docs/./guide.md").is_ok());
    }

    #[test]
    fn test_path_traversal_blocked() {
        let root = Path::new("/repositories");

        assert!(validate_path(root, "../etc/passwd").is_err());
        assert!(validate_path(root, "docs/../../etc/passwd").is_err());
        assert!(matches!(
            validate_path(root, "/etc/passwd"),
            Err(SecurityError::AbsolutePath { .. })
        ));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("./foo")), Path::new("foo"));
        assert_eq!(normalize_path(Path::new("foo/../bar")), Path::new("bar"));
        assert_eq!(normalize_path(Path::new("../foo")), Path::new("../foo"));
    }

    #[test]
    fn test_sensitive_wallet_files() {
        assert!(is_sensitive_file(Path::new(".env")).is_some());
        assert!(is_sensitive_file(Path::new("app/.env.production")).is_some());
        assert!(is_sensitive_file(Path::new("deployer.key")).is_some());
        assert!(is_sensitive_file(Path::new("keystore.json")).is_some());
        assert!(is_sensitive_file(Path::new("mnemonic.txt")).is_some());
    }

    #[test]
    fn test_non_sensitive_files() {
        assert!(is_sensitive_file(Path::new("README.md")).is_none());
        assert!(is_sensitive_file(Path::new("docs/keys-and-accounts.md")).is_none());
        assert!(is_sensitive_file(Path::new("package.json")).is_none());
    }

    #[test]
    fn test_validate_read_access() {
        let root = Path::new("/repositories");

        assert!(matches!(
            validate_read_access(root, "../etc/passwd"),
            Err(SecurityError::PathTraversal { .. })
        ));
        assert!(matches!(
            validate_read_access(root, "sample-apps/.env"),
            Err(SecurityError::SensitiveFile { .. })
        ));
    }
}
