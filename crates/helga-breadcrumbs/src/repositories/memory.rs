//! In-memory menu tree backed by fixture data.

use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use super::menu_link_manager::MenuLinkManager;
use crate::domain::MenuLink;
use crate::error::DomainError;

/// Menu link manager over an immutable set of links loaded at startup.
#[derive(Debug, Default)]
pub struct InMemoryMenuLinkManager {
    links: BTreeMap<String, MenuLink>,
}

impl InMemoryMenuLinkManager {
    /// Builds the manager, rejecting duplicate ids and dangling parents.
    pub fn from_links(links: Vec<MenuLink>) -> Result<Self, DomainError> {
        let mut map = BTreeMap::new();
        for link in links {
            if map.contains_key(&link.plugin_id) {
                return Err(DomainError::DuplicateMenuLink(link.plugin_id));
            }
            map.insert(link.plugin_id.clone(), link);
        }
        for link in map.values() {
            if let Some(parent) = &link.parent {
                if !map.contains_key(parent) {
                    return Err(DomainError::UnknownMenuParent {
                        link: link.plugin_id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }
        Ok(Self { links: map })
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl MenuLinkManager for InMemoryMenuLinkManager {
    fn instance(&self, plugin_id: &str) -> Option<MenuLink> {
        self.links.get(plugin_id).cloned()
    }

    fn parent_ids(&self, plugin_id: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(plugin_id);

        let mut current = self
            .links
            .get(plugin_id)
            .and_then(|link| link.parent.as_deref());
        while let Some(id) = current {
            if !seen.insert(id) {
                warn!(
                    "Menu parent chain of '{}' contains a cycle at '{}', truncating",
                    plugin_id, id
                );
                break;
            }
            chain.push(id.to_string());
            current = self.links.get(id).and_then(|link| link.parent.as_deref());
        }

        chain.reverse();
        chain
    }

    fn links_in_menu(&self, menu_name: &str) -> Vec<MenuLink> {
        let mut links: Vec<MenuLink> = self
            .links
            .values()
            .filter(|link| link.menu_name == menu_name && link.enabled)
            .cloned()
            .collect();
        links.sort_by(|a, b| {
            a.weight
                .cmp(&b.weight)
                .then_with(|| a.plugin_id.cmp(&b.plugin_id))
        });
        links
    }
}
