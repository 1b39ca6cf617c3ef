//! Troubleshooting guides for common transaction and RPC failures.

use super::catalog_key;
use serde::Serialize;

catalog_key! {
    /// Debugging guide topic.
    "debugging topic" => DebugTopic {
        /// Receipt status is `failed` / `reverted`
        TransactionFailed => "transaction_failed",
        /// Rejected or reverted for lack of gas
        InsufficientGas => "insufficient_gas",
        /// `nonce too low` / `nonce too high`
        NonceMismatch => "nonce_mismatch",
        /// RPC requests hang or time out
        RpcTimeout => "rpc_timeout",
        /// Node rejects the signature or recovers the wrong sender
        InvalidSignature => "invalid_signature",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebuggingGuide {
    pub topic: DebugTopic,
    pub title: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub steps: &'static [&'static str],
}

impl DebuggingGuide {
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        bullet_section(&mut out, "Symptoms", self.symptoms, false);
        bullet_section(&mut out, "Likely causes", self.causes, false);
        bullet_section(&mut out, "Steps", self.steps, true);
        out
    }
}

fn bullet_section(out: &mut String, heading: &str, items: &[&str], numbered: bool) {
    out.push_str(&format!("\n## {heading}\n\n"));
    for (i, item) in items.iter().enumerate() {
        if numbered {
            out.push_str(&format!("{}. {item}\n", i + 1));
        } else {
            out.push_str(&format!("- {item}\n"));
        }
    }
}

#[must_use]
pub fn debugging_guide(topic: DebugTopic) -> &'static DebuggingGuide {
    match topic {
        DebugTopic::TransactionFailed => &TRANSACTION_FAILED,
        DebugTopic::InsufficientGas => &INSUFFICIENT_GAS,
        DebugTopic::NonceMismatch => &NONCE_MISMATCH,
        DebugTopic::RpcTimeout => &RPC_TIMEOUT,
        DebugTopic::InvalidSignature => &INVALID_SIGNATURE,
    }
}

static TRANSACTION_FAILED: DebuggingGuide = DebuggingGuide {
    topic: DebugTopic::TransactionFailed,
    title: "Transaction failed",
    symptoms: &[
        "Receipt `status` is `failed` while the transaction is included in a block",
        "Gas was charged but balances did not change",
        "SDK throws `TransactionRevertedError` from `tx.wait()`",
    ],
    causes: &[
        "A contract `require`/`assert` rejected the call",
        "Token allowance too small for a `transferFrom`",
        "State changed between simulation and inclusion (price moved, item sold)",
    ],
    steps: &[
        "Fetch the receipt via `GET /v1/transactions/{hash}/receipt` and read `revert_reason`",
        "Re-run the call with `POST /v1/transactions/estimate-gas` against the same block to reproduce",
        "Check allowances and balances of every token the call touches",
        "If the failure is timing related, add slippage bounds or re-read state right before signing",
    ],
};

static INSUFFICIENT_GAS: DebuggingGuide = DebuggingGuide {
    topic: DebugTopic::InsufficientGas,
    title: "Insufficient gas",
    symptoms: &[
        "Node rejects the transaction with `insufficient funds for gas * price + value`",
        "Receipt shows `out of gas` with `gas_used` equal to the gas limit",
    ],
    causes: &[
        "Sender balance does not cover `value + gas_limit * gas_price`",
        "Hard-coded gas limit below what the call needs",
        "Estimate taken against different state than execution saw",
    ],
    steps: &[
        "Compare the sender balance against `value + gas_limit * gas_price`",
        "Drop manual gas limits and let the SDK estimate, or add a 20% margin to the estimate",
        "For loops over user-controlled data, bound the iteration count in the contract",
    ],
};

static NONCE_MISMATCH: DebuggingGuide = DebuggingGuide {
    topic: DebugTopic::NonceMismatch,
    title: "Nonce mismatch",
    symptoms: &[
        "`nonce too low` when broadcasting",
        "Transactions stay pending forever behind a gap (`nonce too high` on some nodes)",
    ],
    causes: &[
        "Several processes sign for the same account and each tracks its own nonce",
        "A cached nonce was reused after a transaction was replaced or dropped",
        "Nonce read from `latest` instead of including pending transactions",
    ],
    steps: &[
        "Read the next nonce from `GET /v1/accounts/{address}/nonce`, which includes pending transactions",
        "Route all signing for one account through a single queue",
        "Fill a gap by sending a zero-value self-transfer with the missing nonce",
        "To cancel a stuck transaction, resend the same nonce with a higher gas price",
    ],
};

static RPC_TIMEOUT: DebuggingGuide = DebuggingGuide {
    topic: DebugTopic::RpcTimeout,
    title: "RPC timeout",
    symptoms: &[
        "Requests hang and fail after the client timeout",
        "Intermittent `429 Too Many Requests` or `503` responses",
    ],
    causes: &[
        "Public endpoint rate limits",
        "Large range queries (`/v1/events`, `/v1/blocks`) that scan too many blocks",
        "WebSocket connection silently dropped by a proxy",
    ],
    steps: &[
        "Retry idempotent reads with exponential backoff (see the `retry_with_backoff` pattern)",
        "Split event and block range queries into windows of at most 1,000 blocks",
        "Use a dedicated RPC URL instead of the shared public endpoint",
        "Enable WebSocket keepalive pings and resubscribe on reconnect",
    ],
};

static INVALID_SIGNATURE: DebuggingGuide = DebuggingGuide {
    topic: DebugTopic::InvalidSignature,
    title: "Invalid signature",
    symptoms: &[
        "Node rejects the transaction with `invalid signature`",
        "Transaction is accepted but `from` is an unexpected address",
    ],
    causes: &[
        "Signed for the wrong chain id (testnet vs mainnet)",
        "Payload modified after signing",
        "Private key loaded with a stray newline or missing `0x` prefix",
    ],
    steps: &[
        "Confirm the client network matches the chain id embedded in the signature",
        "Serialize once and sign the exact bytes that are broadcast",
        "Derive the address from the key and compare it with the expected sender",
    ],
};
