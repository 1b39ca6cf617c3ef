//! Static catalog tools.
//!
//! Keys are typed enums, so unknown values are rejected when the arguments
//! are deserialized and these functions only fail on bad GraphQL variables.

use super::Render;
use crate::catalog::{
    self, ApiCategory, ApiSection, ComponentName, DebugTopic, DebuggingGuide, GeneratedQuery,
    ImplementationPattern, Language, PatternName, QueryType, SdkExample, SdkOperation,
    UiComponent,
};
use crate::error::ServerError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ApiReferenceInput {
    /// API category
    pub category: ApiCategory,
}

pub fn execute_api_reference(input: ApiReferenceInput) -> Result<&'static ApiSection, ServerError> {
    Ok(catalog::api_reference(input.category))
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SdkExampleInput {
    /// Operation to show
    pub operation: SdkOperation,
    /// SDK language (default: typescript)
    #[serde(default)]
    pub language: Language,
}

pub fn execute_sdk_example(input: SdkExampleInput) -> Result<SdkExample, ServerError> {
    Ok(catalog::sdk_example(input.operation, input.language))
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DebuggingGuideInput {
    /// Problem to troubleshoot
    pub topic: DebugTopic,
}

pub fn execute_debugging_guide(
    input: DebuggingGuideInput,
) -> Result<&'static DebuggingGuide, ServerError> {
    Ok(catalog::debugging_guide(input.topic))
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ImplementationPatternInput {
    /// Pattern name
    pub pattern: PatternName,
}

pub fn execute_implementation_pattern(
    input: ImplementationPatternInput,
) -> Result<&'static ImplementationPattern, ServerError> {
    Ok(catalog::implementation_pattern(input.pattern))
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UiComponentInput {
    /// Component name
    pub component: ComponentName,
}

pub fn execute_ui_component(input: UiComponentInput) -> Result<&'static UiComponent, ServerError> {
    Ok(catalog::ui_component(input.component))
}

/// Output for the list_ui_components tool.
#[derive(Debug, Serialize)]
pub struct UiComponentList {
    pub components: &'static [UiComponent],
}

pub fn execute_list_ui_components() -> Result<UiComponentList, ServerError> {
    Ok(UiComponentList {
        components: catalog::ui_components(),
    })
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GraphqlQueryInput {
    /// Query template to fill in
    pub query_type: QueryType,
    /// Template variables, e.g. {"address": "0x...", "limit": "5"}
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

/// Executes the generate_graphql_query tool.
///
/// # Errors
///
/// Returns `ServerError::Catalog` when a required variable is missing or
/// `limit` is out of range.
pub fn execute_graphql_query(input: GraphqlQueryInput) -> Result<GeneratedQuery, ServerError> {
    Ok(catalog::generate_query(input.query_type, &input.variables)?)
}

impl Render for ApiSection {
    fn render(&self) -> String {
        self.to_markdown()
    }
}

impl Render for SdkExample {
    fn render(&self) -> String {
        self.to_markdown()
    }
}

impl Render for DebuggingGuide {
    fn render(&self) -> String {
        self.to_markdown()
    }
}

impl Render for ImplementationPattern {
    fn render(&self) -> String {
        self.to_markdown()
    }
}

impl Render for UiComponent {
    fn render(&self) -> String {
        self.to_markdown()
    }
}

impl Render for GeneratedQuery {
    fn render(&self) -> String {
        self.to_markdown()
    }
}

impl Render for UiComponentList {
    fn render(&self) -> String {
        let mut out = String::from("# UI kit components\n\n");
        for component in self.components {
            let _ = writeln!(
                out,
                "- **{}** (`<{}>`): {}",
                component.name, component.export, component.description
            );
        }
        out.push_str("\nUse `get_ui_component` for props and usage.\n");
        out
    }
}
