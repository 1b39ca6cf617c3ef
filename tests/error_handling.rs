//! Tests for error paths and their machine-readable codes.

mod common;

use chaindoc::catalog::QueryType;
use chaindoc::config::RepositoryConfig;
use chaindoc::error::{ConfigError, DocError, ServerError};
use chaindoc::services::SearchService;
use chaindoc::tools::*;
use common::{docs_site, TestEnv};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn service_at(base: PathBuf) -> SearchService {
    let config = RepositoryConfig::new(base, vec!["docs".into()]).unwrap();
    SearchService::new(Arc::new(config))
}

fn read(service: &SearchService, repository: Option<&str>, path: &str) -> ServerError {
    execute_read_doc(
        service,
        ReadDocInput {
            path: path.into(),
            repository: repository.map(str::to_string),
        },
    )
    .unwrap_err()
}

// ============================================================================
// Repositories directory
// ============================================================================

#[test]
fn test_missing_base_dir_is_root_access() {
    let dir = TempDir::new().unwrap();
    let service = service_at(dir.path().join("does-not-exist"));

    let err = service.search("wallet").unwrap_err();
    assert!(matches!(err, DocError::RootAccess { .. }));
    assert_eq!(err.code(), "ROOT_ACCESS");
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn test_base_dir_is_a_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("repos");
    fs::write(&file, "not a directory").unwrap();

    let err = service_at(file).search("wallet").unwrap_err();
    assert_eq!(err.code(), "ROOT_ACCESS");
}

#[test]
fn test_empty_query_skips_root_check() {
    let dir = TempDir::new().unwrap();
    let service = service_at(dir.path().join("does-not-exist"));
    assert!(service.search("  ").unwrap().is_empty());
}

#[test]
fn test_search_tool_propagates_root_error() {
    let dir = TempDir::new().unwrap();
    let service = service_at(dir.path().join("gone"));
    let err = execute_search_docs(
        &service,
        SearchDocsInput {
            query: "gas".into(),
            limit: None,
        },
    )
    .unwrap_err();
    assert_eq!(err.code(), "ROOT_ACCESS");
}

#[test]
fn test_empty_base_dir_is_not_an_error() {
    let env = TestEnv::new();
    assert!(env.search("gas").is_empty());
}

// ============================================================================
// read_doc
// ============================================================================

#[test]
fn test_read_missing_document() {
    let env = docs_site();
    let err = read(&env.search, Some("docs"), "guides/missing.md");

    assert_eq!(err.code(), "DOC_NOT_FOUND");
    let msg = err.to_string();
    assert!(msg.starts_with("Document not found: "), "message: {msg}");
    assert!(msg.contains("docs/guides/missing.md"), "message: {msg}");
    assert!(msg.contains("search_docs"));
}

#[test]
fn test_read_directory_is_not_found() {
    let env = docs_site();
    let err = read(&env.search, Some("docs"), "guides");
    assert_eq!(err.code(), "DOC_NOT_FOUND");
}

#[test]
fn test_read_non_utf8_is_not_found() {
    let env = TestEnv::new();
    env.write_bytes("docs", "logo.md", &[0x89, b'P', b'N', b'G', 0xff]);
    let err = read(&env.search, Some("docs"), "logo.md");
    assert_eq!(err.code(), "DOC_NOT_FOUND");
}

#[test]
fn test_read_unknown_repository() {
    let env = docs_site();
    let err = read(&env.search, Some("sdk-cobol"), "README.md");

    assert_eq!(err.code(), "UNKNOWN_REPOSITORY");
    let msg = err.to_string();
    assert!(msg.contains("sdk-cobol"));
    assert!(msg.contains("docs, sdk-typescript, ui-kit"));
}

// ============================================================================
// Catalogs and configuration
// ============================================================================

#[test]
fn test_graphql_missing_variable() {
    let err = execute_graphql_query(GraphqlQueryInput {
        query_type: QueryType::AccountBalance,
        variables: BTreeMap::new(),
    })
    .unwrap_err();
    assert_eq!(err.code(), "MISSING_VARIABLE");
    assert!(err.to_string().contains("address"));
}

#[test]
fn test_graphql_invalid_limit() {
    for bad in ["0", "101", "ten", "-5"] {
        let mut variables = BTreeMap::new();
        variables.insert("limit".to_string(), bad.to_string());
        let err = execute_graphql_query(GraphqlQueryInput {
            query_type: QueryType::LatestBlocks,
            variables,
        })
        .unwrap_err();
        assert_eq!(err.code(), "INVALID_VARIABLE", "limit {bad}");
    }
}

#[test]
fn test_unknown_catalog_key_from_mcp_arguments() {
    let parsed: Result<ApiReferenceInput, _> =
        serde_json::from_str(r#"{"category": "validators"}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_config_rejects_bad_labels() {
    let base = PathBuf::from("/repositories");
    for label in ["", "..", "docs/sub", "."] {
        let err = RepositoryConfig::new(base.clone(), vec![label.to_string()]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidRepositoryLabel(_)),
            "label {label:?}"
        );
    }
    assert_eq!(
        RepositoryConfig::new(base, Vec::new()).unwrap_err(),
        ConfigError::NoRepositories
    );
}
