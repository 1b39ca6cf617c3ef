//! Core services for repository search and document reads.

mod classify;
pub mod excerpt;
mod matcher;
mod reader;
mod search;
pub mod walker;

pub use classify::{is_searchable, SEARCHABLE_EXTENSIONS, SEARCHABLE_NAMES};
pub use matcher::{match_document, match_file, score_content, SearchResult};
pub use reader::{read_document, Document};
pub use search::{RepositoryStatus, SearchService};
pub use walker::walk_repository;
