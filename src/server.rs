//! MCP server implementation using rmcp.

use crate::config::RepositoryConfig;
use crate::services::SearchService;
use crate::tools::{self, Render};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;
use std::time::Instant;

/// Maximum response size in bytes. Responses exceeding this are truncated
/// to prevent context window exhaustion in LLM consumers.
const MAX_RESPONSE_BYTES: usize = 512 * 1024; // 512KB

const INSTRUCTIONS: &str = "Answers questions about the Nexa platform from its documentation \
and SDK repositories plus built-in reference catalogs.\n\n\
Workflow: call 'search_docs' with a few keywords, then 'read_doc' with the repository and \
path of the most relevant hit. 'list_repositories' shows what is searchable.\n\
For API endpoints use 'get_api_reference'; for code use 'get_sdk_example'; for errors use \
'get_debugging_guide'; for architecture use 'get_implementation_pattern'; for UI work use \
'list_ui_components' / 'get_ui_component'; for indexer queries use 'generate_graphql_query'.";

/// Truncates a response at the last line break before the limit, appending
/// a truncation notice.
fn truncate_response(mut text: String) -> String {
    if text.len() <= MAX_RESPONSE_BYTES {
        return text;
    }
    let original_len = text.len();

    let mut limit = MAX_RESPONSE_BYTES;
    while !text.is_char_boundary(limit) {
        limit -= 1;
    }
    let cut = text[..limit].rfind('\n').map_or(limit, |i| i + 1);

    text.truncate(cut);
    text.push_str(&format!(
        "...\n[TRUNCATED: response exceeded {original_len} bytes, showing first {cut}]"
    ));
    text
}

/// Runs a blocking tool operation and converts it to an MCP result.
///
/// Returns:
/// - `CallToolResult::success()` with the rendered markdown on success
/// - `CallToolResult::error()` with the error message for tool errors
/// - `McpError::internal_error()` if the blocking task panicked
async fn run_tool<T, E, F>(name: &'static str, f: F) -> Result<CallToolResult, McpError>
where
    T: Render + Send + 'static,
    E: std::fmt::Display + Send + 'static,
    F: FnOnce() -> Result<T, E> + Send + 'static,
{
    let start = Instant::now();
    let result = tokio::task::spawn_blocking(f).await;

    match result {
        Ok(Ok(output)) => {
            let text = truncate_response(output.render());
            tracing::debug!(tool = name, elapsed = ?start.elapsed(), bytes = text.len(), "Tool completed");
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Ok(Err(e)) => {
            tracing::debug!(tool = name, elapsed = ?start.elapsed(), "Tool failed: {e}");
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
        Err(e) => {
            tracing::error!(tool = name, "Tool task failed: {e}");
            Err(McpError::internal_error(e.to_string(), None))
        }
    }
}

/// MCP server for platform documentation.
#[derive(Clone)]
pub struct ChaindocServer {
    service: Arc<SearchService>,
    tool_router: ToolRouter<Self>,
}

impl ChaindocServer {
    #[must_use]
    pub fn new(config: RepositoryConfig) -> Self {
        Self {
            service: Arc::new(SearchService::new(Arc::new(config))),
            tool_router: Self::tool_router(),
        }
    }

    #[must_use]
    pub fn service(&self) -> &Arc<SearchService> {
        &self.service
    }
}

#[tool_router]
impl ChaindocServer {
    #[tool(
        description = "Search all documentation and SDK repositories. Words are matched case-insensitively as substrings; results are ranked by total occurrences.\n\nExamples: 'wallet connect', 'gas estimation', 'nonce'\n\nTip: Use 'read_doc' with a result's repository and path to read the full document."
    )]
    async fn search_docs(
        &self,
        Parameters(input): Parameters<tools::SearchDocsInput>,
    ) -> Result<CallToolResult, McpError> {
        let service = Arc::clone(&self.service);
        run_tool("search_docs", move || tools::execute_search_docs(&service, input)).await
    }

    #[tool(
        description = "Read a full document. Pass the repository and path from a search result, or a path starting with the repository name.\n\nExamples: repository='docs', path='guides/wallets.md'"
    )]
    async fn read_doc(
        &self,
        Parameters(input): Parameters<tools::ReadDocInput>,
    ) -> Result<CallToolResult, McpError> {
        let service = Arc::clone(&self.service);
        run_tool("read_doc", move || tools::execute_read_doc(&service, input)).await
    }

    #[tool(description = "List the configured repositories and whether each is available on disk.")]
    async fn list_repositories(&self) -> Result<CallToolResult, McpError> {
        let service = Arc::clone(&self.service);
        run_tool("list_repositories", move || {
            tools::execute_list_repositories(&service)
        })
        .await
    }

    #[tool(
        description = "REST API reference for one category: endpoints, parameters and response shapes.\n\nCategories: accounts, transactions, blocks, tokens, events"
    )]
    async fn get_api_reference(
        &self,
        Parameters(input): Parameters<tools::ApiReferenceInput>,
    ) -> Result<CallToolResult, McpError> {
        run_tool("get_api_reference", move || tools::execute_api_reference(input)).await
    }

    #[tool(
        description = "SDK code example for a common operation.\n\nOperations: connect, get_balance, send_transaction, subscribe_events, query_graphql\nLanguages: typescript (default), rust, python"
    )]
    async fn get_sdk_example(
        &self,
        Parameters(input): Parameters<tools::SdkExampleInput>,
    ) -> Result<CallToolResult, McpError> {
        run_tool("get_sdk_example", move || tools::execute_sdk_example(input)).await
    }

    #[tool(
        description = "Troubleshooting guide with symptoms, causes and steps.\n\nTopics: transaction_failed, insufficient_gas, nonce_mismatch, rpc_timeout, invalid_signature"
    )]
    async fn get_debugging_guide(
        &self,
        Parameters(input): Parameters<tools::DebuggingGuideInput>,
    ) -> Result<CallToolResult, McpError> {
        run_tool("get_debugging_guide", move || {
            tools::execute_debugging_guide(input)
        })
        .await
    }

    #[tool(
        description = "Recommended implementation pattern with guidance and a TypeScript sketch.\n\nPatterns: wallet_connection, pagination, event_indexing, retry_with_backoff, optimistic_updates"
    )]
    async fn get_implementation_pattern(
        &self,
        Parameters(input): Parameters<tools::ImplementationPatternInput>,
    ) -> Result<CallToolResult, McpError> {
        run_tool("get_implementation_pattern", move || {
            tools::execute_implementation_pattern(input)
        })
        .await
    }

    #[tool(
        description = "UI kit component documentation: props table and usage snippet.\n\nComponents: wallet_button, balance_card, transaction_list, address_display, network_selector"
    )]
    async fn get_ui_component(
        &self,
        Parameters(input): Parameters<tools::UiComponentInput>,
    ) -> Result<CallToolResult, McpError> {
        run_tool("get_ui_component", move || tools::execute_ui_component(input)).await
    }

    #[tool(description = "List every UI kit component with a one-line description.")]
    async fn list_ui_components(&self) -> Result<CallToolResult, McpError> {
        run_tool("list_ui_components", tools::execute_list_ui_components).await
    }

    #[tool(
        description = "Generate a GraphQL query for the indexer from a template.\n\nTypes and variables: account_balance(address), transaction_by_hash(hash), latest_blocks(limit?), token_holders(contract, limit?), events_by_type(event_type, limit?)\nlimit is 1-100, default 10."
    )]
    async fn generate_graphql_query(
        &self,
        Parameters(input): Parameters<tools::GraphqlQueryInput>,
    ) -> Result<CallToolResult, McpError> {
        run_tool("generate_graphql_query", move || {
            tools::execute_graphql_query(input)
        })
        .await
    }
}

#[tool_handler]
impl ServerHandler for ChaindocServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn server(dir: &TempDir) -> ChaindocServer {
        let config =
            RepositoryConfig::new(dir.path().to_path_buf(), vec!["docs".into()]).unwrap();
        ChaindocServer::new(config)
    }

    #[test]
    fn test_truncate_response_under_limit() {
        let text = "short".to_string();
        assert_eq!(truncate_response(text.clone()), text);
    }

    #[test]
    fn test_truncate_response_cuts_at_line_boundary() {
        let line = format!("{}\n", "x".repeat(99));
        let text = line.repeat(MAX_RESPONSE_BYTES / 100 + 10);
        let out = truncate_response(text);

        let (body, notice) = out.split_once("...\n[TRUNCATED").unwrap();
        assert!(body.len() <= MAX_RESPONSE_BYTES);
        assert!(body.ends_with('\n'));
        assert!(notice.contains("response exceeded"));
    }

    #[test]
    fn test_truncate_response_respects_char_boundaries() {
        // No newlines, multi-byte chars straddling the limit
        let text = "é".repeat(MAX_RESPONSE_BYTES);
        let out = truncate_response(text);
        assert!(out.contains("[TRUNCATED"));
    }

    #[test]
    fn test_all_tools_registered() {
        let dir = TempDir::new().unwrap();
        let mut names: Vec<String> = server(&dir)
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "generate_graphql_query",
                "get_api_reference",
                "get_debugging_guide",
                "get_implementation_pattern",
                "get_sdk_example",
                "get_ui_component",
                "list_repositories",
                "list_ui_components",
                "read_doc",
                "search_docs",
            ]
        );
    }

    #[test]
    fn test_get_info_enables_tools() {
        let dir = TempDir::new().unwrap();
        let info = server(&dir).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("search_docs"));
    }

    #[tokio::test]
    async fn test_tool_errors_are_results_not_protocol_errors() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();

        let result = server(&dir)
            .read_doc(Parameters(tools::ReadDocInput {
                path: "missing.md".into(),
                repository: Some("docs".into()),
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_search_docs_success() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/gas.md"), "# Gas\n\ngas limits").unwrap();

        let result = server(&dir)
            .search_docs(Parameters(tools::SearchDocsInput {
                query: "gas".into(),
                limit: None,
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }
}
