//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::nav::{MenuTree, NavService};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Navigation service over the immutable menu tree.
    nav: NavService,
}

impl AppState {
    /// Create new application state, loading the navigation tree.
    ///
    /// The tree comes from `MENU_FILE` when configured, otherwise from the
    /// document embedded in the binary. Frozen at startup: changing the menu
    /// requires a restart.
    pub fn new(config: &Config) -> Result<Self> {
        let tree = match &config.menu_file {
            Some(path) => MenuTree::from_file(path)
                .with_context(|| format!("failed to load menu document {}", path.display()))?,
            None => MenuTree::builtin()?,
        };

        info!(entries = tree.len(), "Menu tree loaded");

        Ok(Self::with_tree(tree))
    }

    /// Build state directly from a tree (used by tests).
    pub fn with_tree(tree: MenuTree) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                nav: NavService::new(Arc::new(tree)),
            }),
        }
    }

    /// Navigation service.
    pub fn nav(&self) -> &NavService {
        &self.inner.nav
    }
}
