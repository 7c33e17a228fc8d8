//! Menu link manager trait (port)

use crate::domain::MenuLink;

#[cfg(test)]
use mockall::automock;

/// Read access to the navigation menu trees.
#[cfg_attr(test, automock)]
pub trait MenuLinkManager: Send + Sync {
    /// Resolves a plugin id to its menu link, if the link exists.
    fn instance(&self, plugin_id: &str) -> Option<MenuLink>;

    /// Ancestor plugin ids of the given link, ordered root first. The link
    /// itself is not part of the chain.
    fn parent_ids(&self, plugin_id: &str) -> Vec<String>;

    /// Enabled links of one menu, ordered by weight.
    fn links_in_menu(&self, menu_name: &str) -> Vec<MenuLink>;
}
