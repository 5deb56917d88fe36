//! Navigation service with DashMap-based caching of filtered menus.

use std::sync::Arc;

use dashmap::DashMap;

use super::breadcrumb::{Breadcrumb, resolve_breadcrumbs};
use super::entry::{ClientSelection, MenuEntry};
use super::tree::MenuTree;

/// Navigation service wrapping the immutable tree with per-client caching.
///
/// The tree never changes after startup, so a filtered forest computed for
/// one client token can be reused for every later request under that token.
#[derive(Clone)]
pub struct NavService {
    inner: Arc<NavServiceInner>,
}

struct NavServiceInner {
    /// The immutable navigation tree.
    tree: Arc<MenuTree>,

    /// Full forest served under the all-clients sentinel.
    full: Arc<Vec<MenuEntry>>,

    /// Cache of client token -> filtered forest.
    filtered_cache: DashMap<String, Arc<Vec<MenuEntry>>>,
}

impl NavService {
    /// Create a new navigation service over a loaded tree.
    pub fn new(tree: Arc<MenuTree>) -> Self {
        let full = Arc::new(tree.entries().to_vec());
        Self {
            inner: Arc::new(NavServiceInner {
                tree,
                full,
                filtered_cache: DashMap::new(),
            }),
        }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &MenuTree {
        &self.inner.tree
    }

    /// Menu forest visible to the given selection.
    ///
    /// The all-clients sentinel takes the uncached fast path; specific
    /// clients hit the cache.
    pub fn menu_for(&self, selection: &ClientSelection) -> Arc<Vec<MenuEntry>> {
        let token = match selection {
            ClientSelection::All => return Arc::clone(&self.inner.full),
            ClientSelection::Client(token) => token,
        };

        if let Some(cached) = self.inner.filtered_cache.get(token) {
            return Arc::clone(&cached);
        }

        let filtered = Arc::new(self.inner.tree.filter_for_client(selection));
        self.inner
            .filtered_cache
            .insert(token.clone(), Arc::clone(&filtered));
        filtered
    }

    /// Whether `path` is reachable under the given selection.
    pub fn is_allowed(&self, path: &str, selection: &ClientSelection) -> bool {
        self.inner.tree.is_allowed(path, selection)
    }

    /// Breadcrumb trail for `path`.
    pub fn breadcrumbs(&self, path: &str) -> Vec<Breadcrumb> {
        resolve_breadcrumbs(&self.inner.tree, path)
    }

    /// Drop all cached filtered forests.
    ///
    /// Only useful when a new tree is swapped in at a restart boundary;
    /// kept for parity with the monitoring API.
    pub fn invalidate_all(&self) {
        self.inner.filtered_cache.clear();
    }

    /// Number of cached client forests (for monitoring).
    pub fn cache_size(&self) -> usize {
        self.inner.filtered_cache.len()
    }
}
