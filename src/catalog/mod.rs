//! Static reference catalogs compiled into the binary.
//!
//! Each catalog is an immutable table selected by an enumerated key. Keys
//! deserialize from `snake_case` strings and expose a JSON schema, so an
//! invalid key is rejected during argument validation, before any lookup.

pub mod api;
pub mod graphql;
pub mod guides;
pub mod patterns;
pub mod sdk;
pub mod ui;

pub use api::{api_reference, ApiCategory, ApiSection, Endpoint};
pub use graphql::{generate_query, GeneratedQuery, QueryType};
pub use guides::{debugging_guide, DebugTopic, DebuggingGuide};
pub use patterns::{implementation_pattern, ImplementationPattern, PatternName};
pub use sdk::{sdk_example, Language, SdkExample, SdkOperation};
pub use ui::{ui_component, ui_components, ComponentName, UiComponent};

/// Name and type of one parameter, prop or variable, rendered as a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Field {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub required: bool,
    pub description: &'static str,
}

impl Field {
    pub(crate) const fn required(
        name: &'static str,
        ty: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            ty,
            required: true,
            description,
        }
    }

    pub(crate) const fn optional(
        name: &'static str,
        ty: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            ty,
            required: false,
            description,
        }
    }
}

/// Renders fields as a markdown table. Empty input renders nothing.
pub(crate) fn fields_table(out: &mut String, fields: &[Field]) {
    if fields.is_empty() {
        return;
    }
    out.push_str("| Name | Type | Required | Description |\n");
    out.push_str("|------|------|----------|-------------|\n");
    // Union types like `"sm" | "md"` would otherwise split the cell
    let cell = |s: &str| s.replace('|', "\\|");
    for field in fields {
        out.push_str(&format!(
            "| `{}` | `{}` | {} | {} |\n",
            field.name,
            cell(field.ty),
            if field.required { "yes" } else { "no" },
            cell(field.description)
        ));
    }
}

/// Declares a catalog key enum.
///
/// Generates serde/schemars derives with explicit wire names, an `ALL` list
/// in declaration order, `as_str`, `Display` and a forgiving `FromStr`
/// (case-insensitive, `-` accepted for `_`) for command-line use.
macro_rules! catalog_key {
    (
        $(#[$meta:meta])*
        $kind:literal => $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, schemars::JsonSchema,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// Every key, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|key| key.as_str() == wanted)
                    .ok_or_else(|| $crate::error::CatalogError::UnknownKey {
                        kind: $kind,
                        value: s.to_string(),
                        valid: Self::ALL
                            .iter()
                            .map(|key| key.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

pub(crate) use catalog_key;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_key_from_str_is_forgiving() {
        assert_eq!("ACCOUNTS".parse::<ApiCategory>(), Ok(ApiCategory::Accounts));
        assert_eq!(
            "get-balance".parse::<SdkOperation>(),
            Ok(SdkOperation::GetBalance)
        );
    }

    #[test]
    fn test_unknown_key_lists_valid_values() {
        let err = "ledger".parse::<ApiCategory>().unwrap_err();
        match &err {
            CatalogError::UnknownKey { kind, valid, .. } => {
                assert_eq!(*kind, "API category");
                assert!(valid.contains("transactions"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.code(), "UNKNOWN_KEY");
    }

    #[test]
    fn test_keys_round_trip_through_serde() {
        let json = serde_json::to_string(&DebugTopic::NonceMismatch).unwrap();
        assert_eq!(json, "\"nonce_mismatch\"");
        let back: DebugTopic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DebugTopic::NonceMismatch);
    }

    #[test]
    fn test_fields_table() {
        let mut out = String::new();
        fields_table(
            &mut out,
            &[
                Field::required("address", "string", "Account address"),
                Field::optional("limit", "number", "Page size"),
            ],
        );
        assert!(out.contains("| `address` | `string` | yes | Account address |"));
        assert!(out.contains("| `limit` | `number` | no | Page size |"));

        let mut empty = String::new();
        fields_table(&mut empty, &[]);
        assert!(empty.is_empty());
    }
}
