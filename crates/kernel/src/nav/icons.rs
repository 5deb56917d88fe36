//! Symbolic icon name resolution.
//!
//! Menu entries carry symbolic icon names; the dashboard renders icon-font
//! glyphs. The mapping is total: unknown names fall back to a generic glyph,
//! so a typo in the menu document degrades to a dot instead of a broken icon.

/// Glyph used when an icon name is not recognized.
pub const DEFAULT_ICON: &str = "ti-point";

/// Resolve a symbolic icon name to an icon-font glyph class.
pub fn resolve_icon(name: &str) -> &'static str {
    match name {
        "dashboard" => "ti-dashboard",
        "assets" => "ti-server",
        "inventory" => "ti-package",
        "work-orders" => "ti-clipboard",
        "attendance" => "ti-id-badge",
        "reports" => "ti-bar-chart",
        "evaluation" => "ti-medall",
        "settings" => "ti-settings",
        "users" => "ti-user",
        _ => DEFAULT_ICON,
    }
}
