//! GraphQL query templates for the indexer.
//!
//! Templates carry `{name}` placeholders. Only declared variable names are
//! substituted, so GraphQL selection-set braces pass through untouched.

use super::catalog_key;
use crate::error::{CatalogError, CatalogResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Default for `limit` when the caller omits it.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest accepted `limit`.
pub const MAX_LIMIT: u32 = 100;

catalog_key! {
    /// Ready-made indexer query.
    "query type" => QueryType {
        /// Balance and nonce of one account (`address`)
        AccountBalance => "account_balance",
        /// One transaction with its receipt (`hash`)
        TransactionByHash => "transaction_by_hash",
        /// Most recent blocks (`limit`)
        LatestBlocks => "latest_blocks",
        /// Largest holders of a token (`contract`, `limit`)
        TokenHolders => "token_holders",
        /// Recent events of one type (`event_type`, `limit`)
        EventsByType => "events_by_type",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VarKind {
    /// Required, escaped into a string literal
    Text,
    /// Optional integer in `1..=MAX_LIMIT`
    Limit,
}

#[derive(Debug, Clone, Copy)]
struct Variable {
    name: &'static str,
    kind: VarKind,
}

const fn text(name: &'static str) -> Variable {
    Variable {
        name,
        kind: VarKind::Text,
    }
}

const LIMIT: Variable = Variable {
    name: "limit",
    kind: VarKind::Limit,
};

struct Template {
    variables: &'static [Variable],
    body: &'static str,
}

/// A query with every placeholder filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedQuery {
    pub query_type: QueryType,
    pub query: String,
    /// Values actually substituted, defaults included
    pub variables: BTreeMap<String, String>,
}

impl GeneratedQuery {
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n\n```graphql\n{}\n```\n", self.query_type, self.query);
        if !self.variables.is_empty() {
            out.push_str("\n**Variables**\n\n");
            for (name, value) in &self.variables {
                out.push_str(&format!("- `{name}` = `{value}`\n"));
            }
        }
        out
    }
}

/// Fills in a query template.
///
/// Variables the template does not declare are ignored.
///
/// # Errors
///
/// - `CatalogError::MissingVariable` if a required variable is absent or blank
/// - `CatalogError::InvalidVariable` if `limit` is not an integer in `1..=100`
pub fn generate_query(
    query_type: QueryType,
    supplied: &BTreeMap<String, String>,
) -> CatalogResult<GeneratedQuery> {
    let template = template(query_type);
    let mut used = BTreeMap::new();

    for var in template.variables {
        let raw = supplied
            .get(var.name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty());

        let value = match (var.kind, raw) {
            (VarKind::Text, Some(v)) => escape_string(v),
            (VarKind::Text, None) => {
                return Err(CatalogError::MissingVariable {
                    query: query_type.as_str(),
                    variable: var.name,
                })
            }
            (VarKind::Limit, Some(v)) => parse_limit(var.name, v)?.to_string(),
            (VarKind::Limit, None) => DEFAULT_LIMIT.to_string(),
        };

        used.insert(var.name.to_string(), value);
    }

    Ok(GeneratedQuery {
        query_type,
        query: fill(template.body.trim_end(), &used),
        variables: used,
    })
}

/// Substitutes `{name}` placeholders in one pass, so substituted values are
/// never rescanned.
fn fill(body: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let placeholder = after
            .find('}')
            .and_then(|end| values.get(&after[..end]).map(|value| (end, value)));
        match placeholder {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn parse_limit(name: &str, raw: &str) -> CatalogResult<u32> {
    let invalid = || CatalogError::InvalidVariable {
        variable: name.to_string(),
        reason: format!("expected an integer between 1 and {MAX_LIMIT}, got '{raw}'"),
    };
    let limit: u32 = raw.parse().map_err(|_| invalid())?;
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(invalid())
    }
}

/// Escapes a value for use inside a GraphQL string literal.
fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

fn template(query_type: QueryType) -> &'static Template {
    match query_type {
        QueryType::AccountBalance => &ACCOUNT_BALANCE,
        QueryType::TransactionByHash => &TRANSACTION_BY_HASH,
        QueryType::LatestBlocks => &LATEST_BLOCKS,
        QueryType::TokenHolders => &TOKEN_HOLDERS,
        QueryType::EventsByType => &EVENTS_BY_TYPE,
    }
}

static ACCOUNT_BALANCE: Template = Template {
    variables: &[text("address")],
    body: r#"query AccountBalance {
  account(address: "{address}") {
    address
    balance
    nonce
    tokenBalances(first: 20) {
      token { symbol decimals }
      balance
    }
  }
}
"#,
};

static TRANSACTION_BY_HASH: Template = Template {
    variables: &[text("hash")],
    body: r#"query TransactionByHash {
  transaction(hash: "{hash}") {
    hash
    from
    to
    value
    nonce
    status
    block { number timestamp }
    receipt {
      gasUsed
      events { type data }
    }
  }
}
"#,
};

static LATEST_BLOCKS: Template = Template {
    variables: &[LIMIT],
    body: r"query LatestBlocks {
  blocks(first: {limit}, orderBy: NUMBER_DESC) {
    number
    hash
    timestamp
    txCount
  }
}
",
};

static TOKEN_HOLDERS: Template = Template {
    variables: &[text("contract"), LIMIT],
    body: r#"query TokenHolders {
  token(address: "{contract}") {
    symbol
    decimals
    holders(first: {limit}, orderBy: BALANCE_DESC) {
      address
      balance
    }
  }
}
"#,
};

static EVENTS_BY_TYPE: Template = Template {
    variables: &[text("event_type"), LIMIT],
    body: r#"query EventsByType {
  events(where: { type: "{event_type}" }, first: {limit}, orderBy: BLOCK_DESC) {
    type
    contract
    txHash
    block { number timestamp }
    data
  }
}
"#,
};
