//! SDK code templates per operation and language.

use super::catalog_key;
use serde::Serialize;

catalog_key! {
    /// Operation an SDK example demonstrates.
    "SDK operation" => SdkOperation {
        /// Create a client and connect to a node
        Connect => "connect",
        /// Read a native balance
        GetBalance => "get_balance",
        /// Sign and broadcast a transfer, then wait for the receipt
        SendTransaction => "send_transaction",
        /// Stream contract events
        SubscribeEvents => "subscribe_events",
        /// Run a query against the GraphQL indexer
        QueryGraphql => "query_graphql",
    }
}

catalog_key! {
    /// SDK language.
    #[derive(Default)]
    "language" => Language {
        #[default]
        TypeScript => "typescript",
        Rust => "rust",
        Python => "python",
    }
}

impl Language {
    const fn fence(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Rust => "rust",
            Self::Python => "python",
        }
    }

    const fn install(self) -> &'static str {
        match self {
            Self::TypeScript => "npm install @nexa/sdk",
            Self::Rust => "cargo add nexa-sdk tokio --features tokio/full",
            Self::Python => "pip install nexa-sdk",
        }
    }
}

/// One code template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SdkExample {
    pub operation: SdkOperation,
    pub language: Language,
    pub description: &'static str,
    pub install: &'static str,
    pub code: &'static str,
}

impl SdkExample {
    #[must_use]
    pub fn to_markdown(&self) -> String {
        format!(
            "# {} ({})\n\n{}\n\n**Install**\n\n```sh\n{}\n```\n\n```{}\n{}\n```\n",
            self.operation,
            self.language,
            self.description,
            self.install,
            self.language.fence(),
            self.code.trim_end()
        )
    }
}

/// Looks up the template for an operation in a language.
#[must_use]
pub fn sdk_example(operation: SdkOperation, language: Language) -> SdkExample {
    SdkExample {
        operation,
        language,
        description: description(operation),
        install: language.install(),
        code: code(operation, language),
    }
}

const fn description(operation: SdkOperation) -> &'static str {
    match operation {
        SdkOperation::Connect => {
            "Create a client for a network. The client is cheap to clone and should be \
             shared across the application."
        }
        SdkOperation::GetBalance => {
            "Read an account's native balance. Amounts are big integers in the smallest \
             unit; format them only for display."
        }
        SdkOperation::SendTransaction => {
            "Build, sign and broadcast a transfer, then wait for the receipt. The SDK fills \
             in nonce and gas when they are omitted."
        }
        SdkOperation::SubscribeEvents => {
            "Subscribe to contract events over WebSocket. Reconnection is handled by the \
             client; unsubscribe when the consumer goes away."
        }
        SdkOperation::QueryGraphql => {
            "Query the indexer's GraphQL endpoint. Use `generate_graphql_query` for \
             ready-made query bodies."
        }
    }
}

const fn code(operation: SdkOperation, language: Language) -> &'static str {
    use Language::{Python, Rust, TypeScript};
    use SdkOperation::{Connect, GetBalance, QueryGraphql, SendTransaction, SubscribeEvents};

    match (operation, language) {
        (Connect, TypeScript) => {
            r#"import { NexaClient } from "@nexa/sdk";

const client = new NexaClient({
  network: "testnet",
  rpcUrl: process.env.NEXA_RPC_URL,
});

const block = await client.blocks.latest();
console.log(`connected, head at #${block.number}`);
"#
        }
        (Connect, Rust) => {
            r#"use nexa_sdk::{Client, Network};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::builder()
        .network(Network::Testnet)
        .build()
        .await?;

    let block = client.blocks().latest().await?;
    println!("connected, head at #{}", block.number);
    Ok(())
}
"#
        }
        (Connect, Python) => {
            r#"import asyncio
from nexa_sdk import NexaClient

async def main():
    async with NexaClient(network="testnet") as client:
        block = await client.blocks.latest()
        print(f"connected, head at #{block.number}")

asyncio.run(main())
"#
        }
        (GetBalance, TypeScript) => {
            r#"import { NexaClient, formatUnits } from "@nexa/sdk";

const client = new NexaClient({ network: "testnet" });

const balance = await client.accounts.getBalance("0x9f2c...e41a");
console.log(`${formatUnits(balance, 18)} NXA`);
"#
        }
        (GetBalance, Rust) => {
            r#"use nexa_sdk::{units::format_units, Address, Client, Network};

let client = Client::builder().network(Network::Testnet).build().await?;

let address: Address = "0x9f2c...e41a".parse()?;
let balance = client.accounts().balance(&address).await?;
println!("{} NXA", format_units(balance, 18));
"#
        }
        (GetBalance, Python) => {
            r#"from nexa_sdk import NexaClient, format_units

async with NexaClient(network="testnet") as client:
    balance = await client.accounts.get_balance("0x9f2c...e41a")
    print(f"{format_units(balance, 18)} NXA")
"#
        }
        (SendTransaction, TypeScript) => {
            r#"import { NexaClient, Wallet, parseUnits } from "@nexa/sdk";

const client = new NexaClient({ network: "testnet" });
const wallet = Wallet.fromPrivateKey(process.env.PRIVATE_KEY!, client);

const tx = await wallet.sendTransaction({
  to: "0x77d0...",
  value: parseUnits("1.5", 18),
});
const receipt = await tx.wait();
if (receipt.status !== "success") {
  throw new Error(`transaction ${tx.hash} failed`);
}
"#
        }
        (SendTransaction, Rust) => {
            r#"use nexa_sdk::{units::parse_units, Client, LocalWallet, Network, TransactionRequest};

let client = Client::builder().network(Network::Testnet).build().await?;
let wallet = LocalWallet::from_env("PRIVATE_KEY")?.connect(client);

let request = TransactionRequest::new()
    .to("0x77d0...".parse()?)
    .value(parse_units("1.5", 18)?);

let pending = wallet.send_transaction(request).await?;
let receipt = pending.await?;
anyhow::ensure!(receipt.is_success(), "transaction {} failed", receipt.hash);
"#
        }
        (SendTransaction, Python) => {
            r#"import os
from nexa_sdk import NexaClient, Wallet, parse_units

async with NexaClient(network="testnet") as client:
    wallet = Wallet.from_private_key(os.environ["PRIVATE_KEY"], client)
    tx = await wallet.send_transaction(to="0x77d0...", value=parse_units("1.5", 18))
    receipt = await tx.wait()
    if receipt.status != "success":
        raise RuntimeError(f"transaction {tx.hash} failed")
"#
        }
        (SubscribeEvents, TypeScript) => {
            r#"import { NexaClient } from "@nexa/sdk";

const client = new NexaClient({ network: "testnet" });

const subscription = client.events.subscribe(
  { contract: "0x77d0...", type: "Transfer" },
  (event) => console.log(event.data.from, "->", event.data.to, event.data.value),
);

// later
await subscription.unsubscribe();
"#
        }
        (SubscribeEvents, Rust) => {
            r#"use futures::StreamExt;
use nexa_sdk::{Client, EventFilter, Network};

let client = Client::builder().network(Network::Testnet).build().await?;

let filter = EventFilter::new()
    .contract("0x77d0...".parse()?)
    .event("Transfer");
let mut stream = client.events().subscribe(filter).await?;

while let Some(event) = stream.next().await {
    let event = event?;
    println!("{} in block {}", event.kind, event.block);
}
"#
        }
        (SubscribeEvents, Python) => {
            r#"from nexa_sdk import NexaClient

async with NexaClient(network="testnet") as client:
    async for event in client.events.subscribe(contract="0x77d0...", type="Transfer"):
        print(event.data["from"], "->", event.data["to"], event.data["value"])
"#
        }
        (QueryGraphql, TypeScript) => {
            r#"import { NexaClient } from "@nexa/sdk";

const client = new NexaClient({ network: "testnet" });

const { data } = await client.graphql.query(
  `query Latest($limit: Int!) {
    blocks(first: $limit, orderBy: NUMBER_DESC) { number hash txCount }
  }`,
  { limit: 5 },
);
console.table(data.blocks);
"#
        }
        (QueryGraphql, Rust) => {
            r#"use nexa_sdk::{Client, Network};
use serde_json::json;

let client = Client::builder().network(Network::Testnet).build().await?;

let query = r"query Latest($limit: Int!) {
    blocks(first: $limit, orderBy: NUMBER_DESC) { number hash txCount }
}";
let data: serde_json::Value = client
    .graphql()
    .query(query, json!({ "limit": 5 }))
    .await?;
println!("{data:#}");
"#
        }
        (QueryGraphql, Python) => {
            r#"from nexa_sdk import NexaClient

QUERY = """
query Latest($limit: Int!) {
  blocks(first: $limit, orderBy: NUMBER_DESC) { number hash txCount }
}
"""

async with NexaClient(network="testnet") as client:
    data = await client.graphql.query(QUERY, {"limit": 5})
    for block in data["blocks"]:
        print(block["number"], block["hash"])
"#
        }
    }
}
