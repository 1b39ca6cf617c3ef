//! UI kit component registry.

use super::{catalog_key, fields_table, Field};
use serde::Serialize;

catalog_key! {
    /// UI kit component.
    "UI component" => ComponentName {
        WalletButton => "wallet_button",
        BalanceCard => "balance_card",
        TransactionList => "transaction_list",
        AddressDisplay => "address_display",
        NetworkSelector => "network_selector",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiComponent {
    pub name: ComponentName,
    /// Exported React component name
    pub export: &'static str,
    pub description: &'static str,
    pub props: &'static [Field],
    pub usage: &'static str,
}

impl UiComponent {
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!(
            "# `<{}>`\n\n{}\n\n```typescript\nimport {{ {} }} from \"@nexa/ui-kit\";\n```\n\n## Props\n\n",
            self.export, self.description, self.export
        );
        fields_table(&mut out, self.props);
        out.push_str("\n## Usage\n\n```tsx\n");
        out.push_str(self.usage.trim_end());
        out.push_str("\n```\n");
        out
    }
}

#[must_use]
pub fn ui_component(name: ComponentName) -> &'static UiComponent {
    match name {
        ComponentName::WalletButton => &COMPONENTS[0],
        ComponentName::BalanceCard => &COMPONENTS[1],
        ComponentName::TransactionList => &COMPONENTS[2],
        ComponentName::AddressDisplay => &COMPONENTS[3],
        ComponentName::NetworkSelector => &COMPONENTS[4],
    }
}

/// Every component, in registry order.
#[must_use]
pub fn ui_components() -> &'static [UiComponent] {
    &COMPONENTS
}

static COMPONENTS: [UiComponent; 5] = [
    UiComponent {
        name: ComponentName::WalletButton,
        export: "WalletButton",
        description: "Connect/disconnect button that shows the connected address and \
                      handles the wrong-network state.",
        props: &[
            Field::optional("label", "string", "Text while disconnected (default \"Connect wallet\")"),
            Field::optional("onConnect", "(address: string) => void", "Called after a successful connection"),
            Field::optional("onDisconnect", "() => void", "Called after disconnecting"),
            Field::optional("size", "\"sm\" | \"md\" | \"lg\"", "Button size (default \"md\")"),
        ],
        usage: r#"<WalletButton
  label="Sign in"
  onConnect={(address) => analytics.track("wallet_connected", { address })}
/>"#,
    },
    UiComponent {
        name: ComponentName::BalanceCard,
        export: "BalanceCard",
        description: "Native or token balance for an address, refreshed on new blocks.",
        props: &[
            Field::required("address", "string", "Account to display"),
            Field::optional("token", "string", "Token contract; native balance when omitted"),
            Field::optional("decimals", "number", "Display precision (default 4)"),
            Field::optional("showFiat", "boolean", "Show the fiat estimate (default false)"),
        ],
        usage: r#"<BalanceCard address={account} token={WETH_ADDRESS} showFiat />"#,
    },
    UiComponent {
        name: ComponentName::TransactionList,
        export: "TransactionList",
        description: "Paginated transaction history with status badges and explorer links.",
        props: &[
            Field::required("address", "string", "Account whose history is listed"),
            Field::optional("pageSize", "number", "Rows per page, at most 100 (default 20)"),
            Field::optional("onSelect", "(hash: string) => void", "Row click handler"),
            Field::optional("showPending", "boolean", "Include pending transactions (default true)"),
        ],
        usage: r#"<TransactionList
  address={account}
  pageSize={50}
  onSelect={(hash) => router.push(`/tx/${hash}`)}
/>"#,
    },
    UiComponent {
        name: ComponentName::AddressDisplay,
        export: "AddressDisplay",
        description: "Shortened address with copy-to-clipboard and optional identicon.",
        props: &[
            Field::required("address", "string", "Address to display"),
            Field::optional("chars", "number", "Characters kept on each side (default 4)"),
            Field::optional("copyable", "boolean", "Show the copy button (default true)"),
            Field::optional("identicon", "boolean", "Show the identicon (default false)"),
        ],
        usage: r#"<AddressDisplay address="0x9f2c...e41a" chars={6} identicon />"#,
    },
    UiComponent {
        name: ComponentName::NetworkSelector,
        export: "NetworkSelector",
        description: "Dropdown that switches the wallet between supported networks.",
        props: &[
            Field::optional("networks", "Network[]", "Networks offered (default mainnet and testnet)"),
            Field::optional("value", "Network", "Controlled selection"),
            Field::optional("onChange", "(network: Network) => void", "Called after the wallet switched"),
        ],
        usage: r#"<NetworkSelector
  networks={["mainnet", "testnet"]}
  onChange={(network) => client.setNetwork(network)}
/>"#,
    },
];
