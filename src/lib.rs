//! chaindoc: MCP documentation server for a blockchain platform.
//!
//! Answers questions from two sources:
//! - Full-text search over local checkouts of the documentation and SDK
//!   repositories, re-walked on every query (no index)
//! - Static reference catalogs compiled into the binary: API endpoints, SDK
//!   examples, debugging guides, implementation patterns, UI components and
//!   GraphQL query templates
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              MCP Server (rmcp)              │
//! │         JSON-RPC over stdin/stdout          │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │               Tool Router                   │
//! │  search_docs, read_doc, get_api_reference.. │
//! └────────┬───────────────────────────┬────────┘
//!          │                           │
//! ┌────────▼─────────────────┐ ┌───────▼────────┐
//! │     Search Service       │ │    Catalogs    │
//! │ (spawn_blocking bridge)  │ │ (static data)  │
//! └────────┬─────────────────┘ └────────────────┘
//!          │ per repository, in order
//! ┌────────▼─────────┐
//! │   Tree Walker    │  ignore::WalkBuilder, excluded dirs pruned
//! └────────┬─────────┘
//!          │ per eligible file
//! ┌────────▼─────────┐
//! │ Document Matcher │  score = term occurrences
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Excerpt Builder  │  title, context, **highlight**
//! └──────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fmt;
pub mod security;
pub mod server;
pub mod services;
pub mod tools;
pub mod types;

pub use config::RepositoryConfig;
pub use error::ServerError;
pub use types::{Score, SearchTerms};
