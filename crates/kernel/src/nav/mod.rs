//! Navigation core: menu tree, client-scoped access control, breadcrumbs.
//!
//! The tree is loaded once at startup from a JSON document and provides:
//! - Visible navigation structure per client selection
//! - Route guarding (is this path reachable for this client?)
//! - Breadcrumb trails and open-submenu key derivation

mod breadcrumb;
mod entry;
mod icons;
mod service;
mod tree;

pub use breadcrumb::{Breadcrumb, DASHBOARD_PATH, open_keys_for_path, resolve_breadcrumbs};
pub use entry::{ALL_CLIENTS, ClientSelection, MenuEntry};
pub use icons::{DEFAULT_ICON, resolve_icon};
pub use service::NavService;
pub use tree::MenuTree;
