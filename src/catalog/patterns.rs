//! Recommended implementation patterns for dApp code.

use super::catalog_key;
use serde::Serialize;

catalog_key! {
    /// Implementation pattern name.
    "pattern" => PatternName {
        WalletConnection => "wallet_connection",
        Pagination => "pagination",
        EventIndexing => "event_indexing",
        RetryWithBackoff => "retry_with_backoff",
        OptimisticUpdates => "optimistic_updates",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImplementationPattern {
    pub name: PatternName,
    pub title: &'static str,
    pub summary: &'static str,
    pub guidance: &'static [&'static str],
    /// TypeScript sketch
    pub example: &'static str,
}

impl ImplementationPattern {
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n\n{}\n\n## Guidance\n\n", self.title, self.summary);
        for item in self.guidance {
            out.push_str(&format!("- {item}\n"));
        }
        out.push_str("\n## Example\n\n```typescript\n");
        out.push_str(self.example.trim_end());
        out.push_str("\n```\n");
        out
    }
}

#[must_use]
pub fn implementation_pattern(name: PatternName) -> &'static ImplementationPattern {
    match name {
        PatternName::WalletConnection => &WALLET_CONNECTION,
        PatternName::Pagination => &PAGINATION,
        PatternName::EventIndexing => &EVENT_INDEXING,
        PatternName::RetryWithBackoff => &RETRY_WITH_BACKOFF,
        PatternName::OptimisticUpdates => &OPTIMISTIC_UPDATES,
    }
}

static WALLET_CONNECTION: ImplementationPattern = ImplementationPattern {
    name: PatternName::WalletConnection,
    title: "Wallet connection",
    summary: "Keep one connection state machine (disconnected, connecting, connected, \
              wrong network) and drive every wallet-dependent view from it.",
    guidance: &[
        "Restore the previous session on load, but never prompt the user without a click",
        "Listen for account and network change events and reset dependent state",
        "Treat a wrong network as its own state with a switch-network action",
        "Keep the signer out of global stores; pass it to the code that signs",
    ],
    example: r#"type WalletState =
  | { kind: "disconnected" }
  | { kind: "connecting" }
  | { kind: "connected"; address: string; chainId: number }
  | { kind: "wrong_network"; chainId: number };

wallet.on("accountsChanged", ([address]) =>
  setState(address ? { kind: "connected", address, chainId } : { kind: "disconnected" }),
);
"#,
};

static PAGINATION: ImplementationPattern = ImplementationPattern {
    name: PatternName::Pagination,
    title: "Cursor pagination",
    summary: "List endpoints return `next_cursor`; pass it back unchanged until it is null.",
    guidance: &[
        "Never build cursors yourself; they are opaque and may change format",
        "Keep page size at or below 100",
        "Deduplicate by hash when new items can arrive between pages",
    ],
    example: r#"async function* allTransactions(address: string) {
  let cursor: string | null = null;
  do {
    const page = await client.accounts.transactions(address, { limit: 100, cursor });
    yield* page.items;
    cursor = page.nextCursor;
  } while (cursor);
}
"#,
};

static EVENT_INDEXING: ImplementationPattern = ImplementationPattern {
    name: PatternName::EventIndexing,
    title: "Event indexing",
    summary: "Backfill history with the REST events endpoint, then switch to the \
              WebSocket stream, persisting the last processed block.",
    guidance: &[
        "Store the last fully processed block and resume from it after restarts",
        "Backfill in windows of at most 1,000 blocks",
        "Make handlers idempotent keyed by (tx_hash, log_index)",
        "Only treat events from finalized blocks as final",
    ],
    example: r#"let from = (await db.lastBlock()) + 1;
const head = (await client.blocks.latest()).number;
for (let start = from; start <= head; start += 1000) {
  const end = Math.min(start + 999, head);
  for await (const event of client.events.range({ contract, fromBlock: start, toBlock: end })) {
    await handle(event);
  }
  await db.setLastBlock(end);
}
client.events.subscribe({ contract }, handle);
"#,
};

static RETRY_WITH_BACKOFF: ImplementationPattern = ImplementationPattern {
    name: PatternName::RetryWithBackoff,
    title: "Retry with backoff",
    summary: "Retry idempotent reads on timeouts and 429/503 responses with exponential \
              backoff and jitter. Never blindly retry a broadcast.",
    guidance: &[
        "Cap attempts (e.g. 5) and the maximum delay",
        "Add random jitter so clients do not retry in lockstep",
        "For broadcasts, check whether the hash is already known before resending",
    ],
    example: r#"async function withRetry<T>(fn: () => Promise<T>, attempts = 5): Promise<T> {
  for (let i = 0; ; i++) {
    try {
      return await fn();
    } catch (err) {
      if (i + 1 >= attempts || !isRetryable(err)) throw err;
      const delay = Math.min(8000, 250 * 2 ** i) * (0.5 + Math.random());
      await new Promise((r) => setTimeout(r, delay));
    }
  }
}
"#,
};

static OPTIMISTIC_UPDATES: ImplementationPattern = ImplementationPattern {
    name: PatternName::OptimisticUpdates,
    title: "Optimistic updates",
    summary: "Show the expected result as soon as a transaction is broadcast, mark it \
              pending, and reconcile when the receipt arrives.",
    guidance: &[
        "Keep optimistic entries separate from confirmed data so they can be rolled back",
        "Key pending entries by transaction hash",
        "On a failed receipt, remove the entry and surface the revert reason",
    ],
    example: r#"const tx = await wallet.sendTransaction(request);
pending.add({ hash: tx.hash, delta: -amount });
try {
  await tx.wait();
} finally {
  pending.remove(tx.hash);
  await refetchBalance();
}
"#,
};
