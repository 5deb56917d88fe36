//! Breadcrumb trail and open-submenu derivations for the current path.

use serde::Serialize;

use super::entry::MenuEntry;
use super::tree::MenuTree;

/// Canonical landing page; every breadcrumb trail starts here.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Label of the fixed root crumb.
const HOME_LABEL: &str = "Home";

/// One crumb of the breadcrumb strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    /// Route path the crumb links to. Pure group headers have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Breadcrumb {
    fn home() -> Self {
        Self {
            label: HOME_LABEL.to_string(),
            path: Some(DASHBOARD_PATH.to_string()),
        }
    }
}

/// Compute the ordered ancestor trail for `path`.
///
/// The trail always starts with the fixed Home crumb. When the path matches
/// an entry (first pre-order hit), the chain from root to the matched entry
/// follows, except that the dashboard itself is not listed twice. An unknown
/// path — a profile or settings page living outside the navigation tree —
/// yields just the Home crumb; that is defined behavior, not an error.
pub fn resolve_breadcrumbs(tree: &MenuTree, path: &str) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb::home()];

    let mut chain = Vec::new();
    if find_chain(tree.entries(), path, &mut chain) {
        for entry in chain {
            if entry.path.as_deref() == Some(DASHBOARD_PATH) {
                continue;
            }
            trail.push(Breadcrumb {
                label: entry.label.clone(),
                path: entry.path.clone(),
            });
        }
    }

    trail
}

/// Depth-first search accumulating the root-to-match ancestor chain.
///
/// On a hit, `chain` holds every ancestor plus the matched entry in
/// root-to-leaf order. On a miss the chain is left empty.
fn find_chain<'a>(entries: &'a [MenuEntry], path: &str, chain: &mut Vec<&'a MenuEntry>) -> bool {
    for entry in entries {
        chain.push(entry);
        if entry.path.as_deref() == Some(path) {
            return true;
        }
        if let Some(children) = &entry.children
            && find_chain(children, path, chain)
        {
            return true;
        }
        chain.pop();
    }
    false
}

/// Cumulative path prefixes for `path`, used to expand ancestor submenus.
///
/// `/reports/daily/energy-consumption` yields `["/reports",
/// "/reports/daily", "/reports/daily/energy-consumption"]`. This is a pure
/// string operation: it does not consult the tree, and the presentation
/// layer reconciles the prefixes against actual menu keys.
pub fn open_keys_for_path(path: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut prefix = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        prefix.push('/');
        prefix.push_str(segment);
        keys.push(prefix.clone());
    }
    keys
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const TREE_JSON: &str = r#"[
        {"key": "/dashboard", "label": "Dashboard", "path": "/dashboard"},
        {"key": "/reports", "label": "Reports", "path": "/reports",
         "children": [
            {"key": "/reports/daily", "label": "Daily Reports", "path": "/reports/daily",
             "children": [
                {"key": "/reports/daily/energy-consumption", "label": "Energy Consumption Details", "path": "/reports/daily/energy-consumption"}
             ]}
         ]},
        {"key": "group-admin", "label": "Administration",
         "children": [
            {"key": "/master-settings", "label": "Master Settings", "path": "/master-settings"}
         ]}
    ]"#;

    fn tree() -> MenuTree {
        MenuTree::from_json(TREE_JSON).unwrap()
    }

    fn labels(trail: &[Breadcrumb]) -> Vec<&str> {
        trail.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn trail_always_starts_at_home() {
        let trail = resolve_breadcrumbs(&tree(), "/reports");
        assert_eq!(
            trail[0],
            Breadcrumb {
                label: "Home".to_string(),
                path: Some("/dashboard".to_string()),
            }
        );
    }

    #[test]
    fn trail_lists_ancestors_root_to_leaf() {
        let trail = resolve_breadcrumbs(&tree(), "/reports/daily/energy-consumption");
        assert_eq!(
            labels(&trail),
            [
                "Home",
                "Reports",
                "Daily Reports",
                "Energy Consumption Details"
            ]
        );
    }

    #[test]
    fn dashboard_is_not_listed_twice() {
        let trail = resolve_breadcrumbs(&tree(), "/dashboard");
        assert_eq!(labels(&trail), ["Home"]);
    }

    #[test]
    fn unknown_path_yields_home_only() {
        let trail = resolve_breadcrumbs(&tree(), "/profile");
        assert_eq!(labels(&trail), ["Home"]);
    }

    #[test]
    fn pathless_group_appears_in_trail_without_a_link() {
        let trail = resolve_breadcrumbs(&tree(), "/master-settings");
        assert_eq!(labels(&trail), ["Home", "Administration", "Master Settings"]);
        assert_eq!(trail[1].path, None);
        assert_eq!(trail[2].path, Some("/master-settings".to_string()));
    }

    #[test]
    fn open_keys_builds_cumulative_prefixes() {
        assert_eq!(
            open_keys_for_path("/reports/daily/energy-consumption"),
            ["/reports", "/reports/daily", "/reports/daily/energy-consumption"]
        );
    }

    #[test]
    fn open_keys_ignores_repeated_slashes() {
        assert_eq!(open_keys_for_path("//reports//daily"), ["/reports", "/reports/daily"]);
    }

    #[test]
    fn open_keys_of_root_or_empty_path_is_empty() {
        assert!(open_keys_for_path("/").is_empty());
        assert!(open_keys_for_path("").is_empty());
    }
}
