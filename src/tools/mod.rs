//! MCP tool implementations.
//!
//! Each `execute_*` function is synchronous and side-effect free apart from
//! filesystem reads; the server runs it on the blocking pool and renders the
//! output with [`Render`].

mod catalog;
mod docs;

/// Markdown rendering of a tool output, as sent to MCP clients.
pub trait Render {
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

// docs
pub use docs::{
    execute_list_repositories, execute_read_doc, execute_search_docs, ListRepositoriesOutput,
    ReadDocInput, ReadDocOutput, RepositoryEntry, SearchDocsInput, SearchDocsOutput, SearchHit,
    MAX_DISPLAYED_RESULTS,
};

// catalog
pub use catalog::{
    execute_api_reference, execute_debugging_guide, execute_graphql_query,
    execute_implementation_pattern, execute_list_ui_components, execute_sdk_example,
    execute_ui_component, ApiReferenceInput, DebuggingGuideInput, GraphqlQueryInput,
    ImplementationPatternInput, SdkExampleInput, UiComponentInput, UiComponentList,
};
