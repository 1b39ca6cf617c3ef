//! REST API reference, grouped by category.

use super::{catalog_key, fields_table, Field};
use serde::Serialize;

catalog_key! {
    /// API reference category.
    "API category" => ApiCategory {
        /// Account state, balances and nonces
        Accounts => "accounts",
        /// Submitting and inspecting transactions
        Transactions => "transactions",
        /// Block headers and ranges
        Blocks => "blocks",
        /// Fungible token contracts
        Tokens => "tokens",
        /// Contract event logs and subscriptions
        Events => "events",
    }
}

/// One REST endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub params: &'static [Field],
    /// JSON sketch of a successful response body
    pub response: &'static str,
}

/// All endpoints of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiSection {
    pub category: ApiCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub endpoints: &'static [Endpoint],
}

impl ApiSection {
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n\n{}\n", self.title, self.description);
        for endpoint in self.endpoints {
            out.push_str(&format!(
                "\n## `{} {}`\n\n{}\n\n",
                endpoint.method, endpoint.path, endpoint.summary
            ));
            if !endpoint.params.is_empty() {
                out.push_str("**Parameters**\n\n");
                fields_table(&mut out, endpoint.params);
                out.push('\n');
            }
            out.push_str("**Response**\n\n```json\n");
            out.push_str(endpoint.response);
            out.push_str("\n```\n");
        }
        out
    }
}

/// Looks up the reference for a category.
#[must_use]
pub fn api_reference(category: ApiCategory) -> &'static ApiSection {
    match category {
        ApiCategory::Accounts => &ACCOUNTS,
        ApiCategory::Transactions => &TRANSACTIONS,
        ApiCategory::Blocks => &BLOCKS,
        ApiCategory::Tokens => &TOKENS,
        ApiCategory::Events => &EVENTS,
    }
}

const ADDRESS: Field = Field::required("address", "string", "Hex-encoded account address (0x...)");
const LIMIT: Field = Field::optional("limit", "integer", "Page size, 1-100 (default 20)");
const CURSOR: Field = Field::optional("cursor", "string", "Opaque cursor from a previous page");

static ACCOUNTS: ApiSection = ApiSection {
    category: ApiCategory::Accounts,
    title: "Accounts API",
    description: "Read account state. All amounts are returned as decimal strings in the \
                  smallest unit to avoid precision loss.",
    endpoints: &[
        Endpoint {
            method: "GET",
            path: "/v1/accounts/{address}",
            summary: "Fetch an account's balance, nonce and code hash.",
            params: &[ADDRESS],
            response: r#"{
  "address": "0x9f2c...e41a",
  "balance": "1250000000000000000",
  "nonce": 42,
  "code_hash": null
}"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/accounts/{address}/balance",
            summary: "Fetch only the native balance, optionally at a historical block.",
            params: &[
                ADDRESS,
                Field::optional("block", "integer | \"latest\"", "Block height (default latest)"),
            ],
            response: r#"{ "balance": "1250000000000000000", "block": 1843211 }"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/accounts/{address}/nonce",
            summary: "Next nonce to use when signing a transaction. Includes pending \
                      transactions from the mempool.",
            params: &[ADDRESS],
            response: r#"{ "nonce": 43, "pending": 1 }"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/accounts/{address}/transactions",
            summary: "Paginated transaction history, newest first.",
            params: &[ADDRESS, LIMIT, CURSOR],
            response: r#"{
  "items": [{ "hash": "0x51ab...", "block": 1843200, "status": "success" }],
  "next_cursor": "eyJibG9jayI6MTg0MzIwMH0"
}"#,
        },
    ],
};

static TRANSACTIONS: ApiSection = ApiSection {
    category: ApiCategory::Transactions,
    title: "Transactions API",
    description: "Submit signed transactions and track them to finality.",
    endpoints: &[
        Endpoint {
            method: "POST",
            path: "/v1/transactions",
            summary: "Broadcast a signed transaction. Returns as soon as the node accepts \
                      it into the mempool; poll the receipt for inclusion.",
            params: &[Field::required(
                "signed_tx",
                "string",
                "Hex-encoded signed transaction envelope",
            )],
            response: r#"{ "hash": "0x51ab...", "status": "pending" }"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/transactions/{hash}",
            summary: "Fetch a transaction by hash, pending or included.",
            params: &[Field::required("hash", "string", "Transaction hash")],
            response: r#"{
  "hash": "0x51ab...",
  "from": "0x9f2c...",
  "to": "0x77d0...",
  "value": "1000000000000000000",
  "nonce": 42,
  "status": "success",
  "block": 1843200
}"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/transactions/{hash}/receipt",
            summary: "Execution receipt: status, gas used and emitted events. 404 until \
                      the transaction is included.",
            params: &[Field::required("hash", "string", "Transaction hash")],
            response: r#"{
  "status": "success",
  "gas_used": "21000",
  "effective_gas_price": "1500000000",
  "events": []
}"#,
        },
        Endpoint {
            method: "POST",
            path: "/v1/transactions/estimate-gas",
            summary: "Simulate an unsigned transaction and return the gas it would use.",
            params: &[
                Field::required("from", "string", "Sender address"),
                Field::required("to", "string", "Recipient or contract address"),
                Field::optional("value", "string", "Amount in smallest unit"),
                Field::optional("data", "string", "Hex-encoded call data"),
            ],
            response: r#"{ "gas": "53412", "gas_price": "1500000000" }"#,
        },
    ],
};

static BLOCKS: ApiSection = ApiSection {
    category: ApiCategory::Blocks,
    title: "Blocks API",
    description: "Block headers. Bodies are available through the transactions API.",
    endpoints: &[
        Endpoint {
            method: "GET",
            path: "/v1/blocks/latest",
            summary: "The most recent finalized block.",
            params: &[],
            response: r#"{ "number": 1843211, "hash": "0xaa10...", "timestamp": 1718035200, "tx_count": 87 }"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/blocks/{number}",
            summary: "A block by height.",
            params: &[Field::required("number", "integer", "Block height")],
            response: r#"{ "number": 1843200, "hash": "0x3c9e...", "parent_hash": "0x0b77...", "timestamp": 1718035090 }"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/blocks",
            summary: "A range of block headers, at most 100 per request.",
            params: &[
                Field::required("from", "integer", "First height, inclusive"),
                Field::required("to", "integer", "Last height, inclusive"),
            ],
            response: r#"{ "items": [{ "number": 1843200, "hash": "0x3c9e..." }] }"#,
        },
    ],
};

static TOKENS: ApiSection = ApiSection {
    category: ApiCategory::Tokens,
    title: "Tokens API",
    description: "Metadata and balances for fungible token contracts.",
    endpoints: &[
        Endpoint {
            method: "GET",
            path: "/v1/tokens/{contract}",
            summary: "Token metadata: name, symbol, decimals and total supply.",
            params: &[Field::required("contract", "string", "Token contract address")],
            response: r#"{ "name": "Wrapped Ether", "symbol": "WETH", "decimals": 18, "total_supply": "52000000000000000000000" }"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/tokens/{contract}/balances/{address}",
            summary: "Token balance of one holder.",
            params: &[
                Field::required("contract", "string", "Token contract address"),
                ADDRESS,
            ],
            response: r#"{ "balance": "2500000000000000000", "decimals": 18 }"#,
        },
        Endpoint {
            method: "GET",
            path: "/v1/tokens/{contract}/holders",
            summary: "Holders ordered by balance, largest first.",
            params: &[
                Field::required("contract", "string", "Token contract address"),
                LIMIT,
                CURSOR,
            ],
            response: r#"{ "items": [{ "address": "0x9f2c...", "balance": "900000000000000000000" }], "next_cursor": null }"#,
        },
    ],
};

static EVENTS: ApiSection = ApiSection {
    category: ApiCategory::Events,
    title: "Events API",
    description: "Contract event logs. Use the WebSocket stream for live updates and the \
                  REST endpoint to backfill.",
    endpoints: &[
        Endpoint {
            method: "GET",
            path: "/v1/events",
            summary: "Query historical events by contract and type.",
            params: &[
                Field::optional("contract", "string", "Emitting contract address"),
                Field::optional("type", "string", "Event name, e.g. Transfer"),
                Field::optional("from_block", "integer", "First block, inclusive"),
                Field::optional("to_block", "integer", "Last block, inclusive"),
                LIMIT,
                CURSOR,
            ],
            response: r#"{
  "items": [{
    "type": "Transfer",
    "contract": "0x77d0...",
    "block": 1843200,
    "tx_hash": "0x51ab...",
    "data": { "from": "0x9f2c...", "to": "0x1d3e...", "value": "1000" }
  }],
  "next_cursor": null
}"#,
        },
        Endpoint {
            method: "WS",
            path: "/v1/events/subscribe",
            summary: "Stream events as blocks finalize. Send a JSON filter after connecting; \
                      the server acknowledges with a subscription id.",
            params: &[
                Field::optional("contract", "string", "Emitting contract address"),
                Field::optional("type", "string", "Event name"),
            ],
            response: r#"{ "subscription": "sub_8f1c", "event": { "type": "Transfer", "block": 1843212 } }"#,
        },
    ],
};
