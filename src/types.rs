//! Type-safe newtypes for chaindoc.
//!
//! These newtypes provide compile-time safety and semantic clarity
//! for core domain concepts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relevance score: the total number of term occurrences in a document.
///
/// Unlike a normalized similarity, two scores are only comparable within a
/// single query. A score of zero never leaves the matcher.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    /// Zero relevance score.
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds an occurrence count, saturating at `u32::MAX`.
    #[must_use]
    pub const fn add(self, count: u32) -> Self {
        Self(self.0.saturating_add(count))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Score {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

/// Lowercase search terms derived from a free-text query.
///
/// Terms are split on Unicode whitespace and deduplicated, keeping the
/// first occurrence order (which is also the highlighting order).
///
/// ```
/// use chaindoc::types::SearchTerms;
///
/// let terms = SearchTerms::parse("  Transaction  fee transaction ");
/// assert_eq!(terms.as_slice(), ["transaction", "fee"]);
/// assert!(SearchTerms::parse("   ").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut terms: Vec<String> = Vec::new();
        for word in query.split_whitespace() {
            let term = word.to_lowercase();
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
        Self(terms)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True if `lowered` (an already lowercased line) contains any term.
    #[must_use]
    pub fn any_in(&self, lowered: &str) -> bool {
        self.iter().any(|t| lowered.contains(t))
    }
}

impl fmt::Display for SearchTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

// Compile-time assertions for thread safety.
#[cfg(test)]
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Score>();
    assert_send_sync::<SearchTerms>();
};
