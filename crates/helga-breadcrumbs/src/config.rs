//! Breadcrumb settings shared by the builders.

use serde::{Deserialize, Serialize};

/// Provider namespace under which bundle-level settings are stored.
pub const SETTINGS_PROVIDER: &str = "helga_breadcrumbs";

/// Bundle-level setting naming the fallback menu parent for orphan pages,
/// formatted `"<menuName>:<menuItemId>"`.
pub const ORPHANS_MENU_ITEM_SETTING: &str = "orphans_menu_item_id";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbSettings {
    /// Menu consulted for orphan fallback parents. Empty disables the
    /// orphan strategy entirely.
    pub orphans_menu: String,

    /// Menu the menu-based builder walks for regular in-menu pages.
    pub menu_name: String,

    /// Priority tag carried by the menu-based builder registration.
    /// Zero means default/unset.
    pub menu_builder_priority: i64,

    /// Priority of the path-based fallback builder.
    pub path_builder_priority: i64,

    /// Master switch: whether breadcrumbs are produced at all.
    pub enabled: bool,

    /// Whether admin routes get breadcrumbs.
    pub include_admin_routes: bool,

    /// Label of the leading site-root crumb.
    pub home_label: String,

    /// Append the current page as an unlinked crumb on menu-based trails.
    pub append_current_page: bool,
}

impl Default for BreadcrumbSettings {
    fn default() -> Self {
        Self {
            orphans_menu: String::new(),
            menu_name: "main".to_string(),
            menu_builder_priority: 1003,
            path_builder_priority: 1001,
            enabled: true,
            include_admin_routes: false,
            home_label: "Home".to_string(),
            append_current_page: true,
        }
    }
}
