//! chaindoc: MCP documentation server for a blockchain platform.
//!
//! Usage:
//!   chaindoc --mcp                    # Start MCP server on stdin/stdout
//!   chaindoc search <query>           # CLI search mode
//!   chaindoc read <path> --repo docs  # Print one document
//!   chaindoc api transactions         # Print a catalog entry

use anyhow::Context as _;
use chaindoc::catalog::{
    ApiCategory, ComponentName, DebugTopic, Language, PatternName, QueryType, SdkOperation,
};
use chaindoc::config::{RepositoryConfig, DEFAULT_REPOS_DIR};
use chaindoc::fmt;
use chaindoc::server::ChaindocServer;
use chaindoc::services::SearchService;
use chaindoc::tools::{self, Render};
use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chaindoc")]
#[command(about = "MCP documentation server for blockchain platform docs, SDKs and UI kit")]
#[command(version)]
struct Cli {
    /// Run as MCP server (stdin/stdout JSON-RPC)
    #[arg(long)]
    mcp: bool,

    /// Directory containing the repository checkouts
    #[arg(long, env = "CHAINDOC_REPOS_DIR", default_value = DEFAULT_REPOS_DIR)]
    repos_dir: PathBuf,

    /// Repositories to search, in order (repeat or comma-separate; default: built-in list)
    #[arg(long, env = "CHAINDOC_REPOS", value_delimiter = ',')]
    repos: Vec<String>,

    /// Print tool output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the repositories
    Search {
        /// Search query
        query: String,

        /// Maximum results shown
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Print one document
    Read {
        /// Document path (relative to the repository, or to the repositories dir without --repo)
        path: String,

        /// Repository label
        #[arg(short, long)]
        repo: Option<String>,
    },

    /// List configured repositories
    Repos,

    /// API reference for a category
    Api { category: ApiCategory },

    /// SDK example for an operation
    Sdk {
        operation: SdkOperation,

        #[arg(short, long, default_value_t = Language::TypeScript)]
        language: Language,
    },

    /// Debugging guide
    Guide { topic: DebugTopic },

    /// Implementation pattern
    Pattern { name: PatternName },

    /// UI component documentation (all components when omitted)
    Component { name: Option<ComponentName> },

    /// Generate a GraphQL query
    Graphql {
        query_type: QueryType,

        /// Template variable, e.g. --var address=0x9f2c
        #[arg(long = "var", value_parser = parse_key_value)]
        vars: Vec<(String, String)>,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CRITICAL: Log to stderr only (stdout is JSON-RPC for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("chaindoc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = if cli.repos.is_empty() {
        RepositoryConfig::with_defaults(cli.repos_dir)
    } else {
        RepositoryConfig::new(cli.repos_dir, cli.repos).context("invalid --repos")?
    };

    if cli.mcp {
        run_mcp_server(config).await
    } else if let Some(cmd) = cli.command {
        run_cli(config, cmd, cli.json)
    } else {
        // Default: show help
        eprintln!("Use --mcp to start MCP server, or a subcommand for CLI mode.");
        eprintln!("Run with --help for more information.");
        std::process::exit(1);
    }
}

async fn run_mcp_server(config: RepositoryConfig) -> anyhow::Result<()> {
    tracing::info!(
        repos_dir = %config.base_dir().display(),
        repositories = ?config.repositories(),
        "Starting MCP server"
    );

    let server = ChaindocServer::new(config);

    // Run the MCP server on stdin/stdout
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

fn run_cli(config: RepositoryConfig, cmd: Commands, json: bool) -> anyhow::Result<()> {
    let service = SearchService::new(Arc::new(config));
    let color = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();

    match cmd {
        Commands::Search { query, limit } => {
            let input = tools::SearchDocsInput {
                query,
                limit: Some(limit),
            };
            let out = tools::execute_search_docs(&service, input)?;
            if json {
                print_json(&mut stdout, &out)?;
            } else {
                fmt::fmt_search(&mut stdout, &out, color)?;
            }
        }

        Commands::Read { path, repo } => {
            let input = tools::ReadDocInput {
                path,
                repository: repo,
            };
            let out = tools::execute_read_doc(&service, input)?;
            if json {
                print_json(&mut stdout, &out)?;
            } else {
                fmt::fmt_read(&mut stdout, &out, color)?;
            }
        }

        Commands::Repos => {
            let out = tools::execute_list_repositories(&service)?;
            if json {
                print_json(&mut stdout, &out)?;
            } else {
                fmt::fmt_repos(&mut stdout, &out, color)?;
            }
        }

        Commands::Api { category } => {
            let out = tools::execute_api_reference(tools::ApiReferenceInput { category })?;
            print_output(&mut stdout, &out, json)?;
        }

        Commands::Sdk {
            operation,
            language,
        } => {
            let out = tools::execute_sdk_example(tools::SdkExampleInput {
                operation,
                language,
            })?;
            print_output(&mut stdout, &out, json)?;
        }

        Commands::Guide { topic } => {
            let out = tools::execute_debugging_guide(tools::DebuggingGuideInput { topic })?;
            print_output(&mut stdout, &out, json)?;
        }

        Commands::Pattern { name } => {
            let out = tools::execute_implementation_pattern(tools::ImplementationPatternInput {
                pattern: name,
            })?;
            print_output(&mut stdout, &out, json)?;
        }

        Commands::Component { name: Some(name) } => {
            let out = tools::execute_ui_component(tools::UiComponentInput { component: name })?;
            print_output(&mut stdout, &out, json)?;
        }

        Commands::Component { name: None } => {
            let out = tools::execute_list_ui_components()?;
            print_output(&mut stdout, &out, json)?;
        }

        Commands::Graphql { query_type, vars } => {
            let variables: BTreeMap<String, String> = vars.into_iter().collect();
            let out = tools::execute_graphql_query(tools::GraphqlQueryInput {
                query_type,
                variables,
            })?;
            print_output(&mut stdout, &out, json)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn print_json(w: &mut impl Write, out: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *w, out)?;
    writeln!(w)?;
    Ok(())
}

/// Catalog output: JSON, or the same markdown MCP clients receive.
fn print_output<T: Serialize + Render>(w: &mut impl Write, out: &T, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(w, out)
    } else {
        writeln!(w, "{}", out.render())?;
        Ok(())
    }
}
