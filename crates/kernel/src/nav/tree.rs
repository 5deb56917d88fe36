//! The navigation tree: an ordered forest of menu entries.
//!
//! The tree is parsed once at startup from a JSON document and never mutated
//! afterwards, so it can be shared across request handlers without locking.
//! All lookups are pre-order traversals (parent before children, children in
//! document order) returning the first hit; duplicate paths are an external
//! data-quality concern and are not validated here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::entry::{ClientSelection, MenuEntry};

/// Default navigation document compiled into the binary.
///
/// Overridden at runtime via the `MENU_FILE` environment variable.
const DEFAULT_MENU_JSON: &str = include_str!("../../menu.json");

/// The immutable navigation tree.
#[derive(Debug, Clone)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
}

impl MenuTree {
    /// Build a tree from already-parsed entries.
    pub fn from_entries(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// Parse a tree from a JSON document (an array of entries).
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<MenuEntry> =
            serde_json::from_str(json).context("failed to parse menu document")?;
        Ok(Self { entries })
    }

    /// Load a tree from a JSON document on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read menu document {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Parse the navigation document compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_MENU_JSON).context("embedded menu document is malformed")
    }

    /// Top-level entries in document order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Total number of entries, including nested children and dividers.
    pub fn len(&self) -> usize {
        fn count(entries: &[MenuEntry]) -> usize {
            entries
                .iter()
                .map(|e| 1 + e.children.as_deref().map_or(0, count))
                .sum()
        }
        count(&self.entries)
    }

    /// Whether the tree has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry whose path exactly equals `path`.
    ///
    /// Exact string equality: no trailing-slash or case normalization.
    /// Dividers and pure group headers have no path and never match.
    pub fn find_by_path(&self, path: &str) -> Option<&MenuEntry> {
        fn find<'a>(entries: &'a [MenuEntry], path: &str) -> Option<&'a MenuEntry> {
            for entry in entries {
                if entry.path.as_deref() == Some(path) {
                    return Some(entry);
                }
                if let Some(children) = &entry.children
                    && let Some(found) = find(children, path)
                {
                    return Some(found);
                }
            }
            None
        }
        find(&self.entries, path)
    }

    /// Decide whether `path` is reachable under the given client selection.
    ///
    /// The all-clients sentinel passes unconditionally, without a tree
    /// lookup. For a specific client, unknown paths fail closed, and a
    /// matched entry is checked against its own `allowed_clients` only —
    /// ancestors are deliberately not consulted, matching the observed
    /// behavior of the dashboard this kernel serves.
    pub fn is_allowed(&self, path: &str, selection: &ClientSelection) -> bool {
        let client = match selection {
            ClientSelection::All => return true,
            ClientSelection::Client(token) => token,
        };

        let allowed = self
            .find_by_path(path)
            .is_some_and(|entry| entry.allows(client));
        if !allowed {
            debug!(path = %path, client = %client, "navigation denied");
        }
        allowed
    }

    /// Produce the subtree visible to the given client selection.
    ///
    /// The all-clients sentinel returns the forest unchanged. For a specific
    /// client, entries are kept iff they are dividers or allow the client;
    /// a kept entry whose children all filter away becomes a leaf (the
    /// `children` attribute is dropped, not emptied). Order is preserved.
    pub fn filter_for_client(&self, selection: &ClientSelection) -> Vec<MenuEntry> {
        let client = match selection {
            ClientSelection::All => return self.entries.clone(),
            ClientSelection::Client(token) => token,
        };

        fn filter(entries: &[MenuEntry], client: &str) -> Vec<MenuEntry> {
            entries
                .iter()
                .filter(|entry| entry.is_divider || entry.allows(client))
                .map(|entry| {
                    let mut kept = entry.clone();
                    if let Some(children) = &entry.children {
                        let filtered = filter(children, client);
                        kept.children = if filtered.is_empty() {
                            None
                        } else {
                            Some(filtered)
                        };
                    }
                    kept
                })
                .collect()
        }
        filter(&self.entries, client)
    }
}
