//! Menu entry and client selection types.
//!
//! Menu entries are the nodes of the navigation document (see `menu.json`).
//! The document uses camelCase attributes (`allowedClients`, `isDivider`)
//! matching the payloads the dashboard front-end consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel token meaning "operate across all clients".
pub const ALL_CLIENTS: &str = "All";

/// One node of the navigation tree: a page link, a group header, or a divider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Unique identifier; equals the route path for navigable entries.
    pub key: String,

    /// Display text. Dividers carry none.
    #[serde(default)]
    pub label: String,

    /// Absolute route path. Absent for pure group headers and dividers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Symbolic icon name, resolved by the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Client codes allowed to see this entry. Absent means all clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_clients: Option<Vec<String>>,

    /// Ordered child entries. Absent for leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuEntry>>,

    /// Purely visual separator: no path, no children, no access rules.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_divider: bool,
}

impl MenuEntry {
    /// Whether this entry is visible to the given client token.
    ///
    /// An entry without `allowed_clients` is open to every client.
    pub fn allows(&self, client: &str) -> bool {
        match &self.allowed_clients {
            Some(clients) => clients.iter().any(|c| c == client),
            None => true,
        }
    }
}

/// The tenant context the signed-in user is operating under.
///
/// Either the distinguished "all clients" sentinel or one specific client
/// token. Persisted outside this kernel (the front-end keeps it in local
/// storage) and supplied on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSelection {
    /// Operating across all clients; every access check passes.
    All,
    /// Operating as one specific client.
    Client(String),
}

impl ClientSelection {
    /// Build a selection from a caller-supplied parameter.
    ///
    /// An absent or empty value and the literal sentinel `"All"` both mean
    /// the all-clients mode (permissive default, a deliberate policy).
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None => Self::All,
            Some(v) if v.is_empty() || v == ALL_CLIENTS => Self::All,
            Some(v) => Self::Client(v.to_string()),
        }
    }

    /// Whether this is the all-clients sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for ClientSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CLIENTS),
            Self::Client(token) => f.write_str(token),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn selection_from_absent_param_is_all() {
        assert_eq!(ClientSelection::from_param(None), ClientSelection::All);
    }

    #[test]
    fn selection_from_empty_param_is_all() {
        assert_eq!(ClientSelection::from_param(Some("")), ClientSelection::All);
    }

    #[test]
    fn selection_from_sentinel_is_all() {
        assert_eq!(ClientSelection::from_param(Some("All")), ClientSelection::All);
    }

    #[test]
    fn selection_from_token_is_specific() {
        assert_eq!(
            ClientSelection::from_param(Some("CMRL")),
            ClientSelection::Client("CMRL".to_string())
        );
    }

    #[test]
    fn entry_without_allowed_clients_allows_everyone() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{"key": "/assets", "label": "Assets", "path": "/assets"}"#)
                .unwrap();
        assert!(entry.allows("CMRL"));
        assert!(entry.allows("anyone-at-all"));
    }

    #[test]
    fn entry_with_allowed_clients_restricts() {
        let entry: MenuEntry = serde_json::from_str(
            r#"{"key": "/inventory", "label": "Inventory", "path": "/inventory", "allowedClients": ["A1"]}"#,
        )
        .unwrap();
        assert!(entry.allows("A1"));
        assert!(!entry.allows("CMRL"));
    }

    #[test]
    fn divider_parses_from_document() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{"key": "divider-1", "isDivider": true}"#).unwrap();
        assert!(entry.is_divider);
        assert!(entry.path.is_none());
        assert!(entry.children.is_none());
    }

    #[test]
    fn serialized_leaf_omits_absent_attributes() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{"key": "/assets", "label": "Assets", "path": "/assets"}"#)
                .unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("children").is_none());
        assert!(json.get("allowedClients").is_none());
        assert!(json.get("isDivider").is_none());
    }
}
