//! Menu-based breadcrumb builder.
//!
//! Renders a breadcrumb from a trail of menu links. As a pipeline strategy
//! it derives the active trail from the menu link matching the current route;
//! as a delegate it renders whatever trail another strategy overrides it with.

use std::sync::Arc;

use tracing::debug;

use super::BreadcrumbBuilder;
use crate::config::BreadcrumbSettings;
use crate::domain::{Breadcrumb, BreadcrumbLink, RouteMatch};
use crate::repositories::MenuLinkManager;

#[cfg(test)]
use mockall::automock;

/// Delegate contract of the menu-based builder.
#[cfg_attr(test, automock)]
pub trait MenuTrailBuilder: Send {
    /// Selects the menu subsequent builds read from.
    fn set_menu_name(&mut self, menu_name: String);

    /// Overrides the active trail consumed by the next build.
    fn set_menu_trail(&mut self, trail: Vec<String>);

    fn build(&mut self, route: &RouteMatch) -> Breadcrumb;
}

pub struct MenuBreadcrumbBuilder<M: MenuLinkManager> {
    menu_link_manager: Arc<M>,
    settings: Arc<BreadcrumbSettings>,
    menu_name: String,
    trail_override: Option<Vec<String>>,
    active_trail: Vec<String>,
}

impl<M: MenuLinkManager> MenuBreadcrumbBuilder<M> {
    pub fn new(
        menu_link_manager: Arc<M>,
        settings: Arc<BreadcrumbSettings>,
        menu_name: impl Into<String>,
    ) -> Self {
        Self {
            menu_link_manager,
            settings,
            menu_name: menu_name.into(),
            trail_override: None,
            active_trail: Vec::new(),
        }
    }

    /// Trail of the menu link whose url matches the current route path,
    /// empty when the page is not in the menu.
    fn derive_trail(&self, route: &RouteMatch) -> Vec<String> {
        let Some(link) = self
            .menu_link_manager
            .links_in_menu(&self.menu_name)
            .into_iter()
            .find(|link| link.url.as_deref() == Some(route.path()))
        else {
            return Vec::new();
        };

        let mut trail = self.menu_link_manager.parent_ids(&link.plugin_id);
        if trail.last() != Some(&link.plugin_id) {
            trail.push(link.plugin_id);
        }
        trail
    }

    fn render(&self, trail: &[String], route: &RouteMatch) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        breadcrumb.push_link(BreadcrumbLink::new(self.settings.home_label.clone(), "/"));

        for plugin_id in trail {
            match self.menu_link_manager.instance(plugin_id) {
                Some(link) => {
                    let crumb = match link.url {
                        Some(url) => BreadcrumbLink::new(link.title, url),
                        None => BreadcrumbLink::unlinked(link.title),
                    };
                    breadcrumb.push_link(crumb);
                }
                None => debug!("Trail id '{}' has no menu link, skipping", plugin_id),
            }
        }

        if self.settings.append_current_page {
            if let Some(title) = route.title() {
                let leaf_is_current = breadcrumb
                    .links()
                    .last()
                    .map(|link| link.label == title)
                    .unwrap_or(false);
                if leaf_is_current {
                    // The page is its own trail leaf; strip the self-link.
                    if let Some(leaf) = breadcrumb.pop_link() {
                        breadcrumb.push_link(BreadcrumbLink::unlinked(leaf.label));
                    }
                } else {
                    breadcrumb.push_link(BreadcrumbLink::unlinked(title));
                }
            }
        }

        breadcrumb
    }
}

impl<M: MenuLinkManager> MenuTrailBuilder for MenuBreadcrumbBuilder<M> {
    fn set_menu_name(&mut self, menu_name: String) {
        self.menu_name = menu_name;
    }

    fn set_menu_trail(&mut self, trail: Vec<String>) {
        self.trail_override = Some(trail);
    }

    fn build(&mut self, route: &RouteMatch) -> Breadcrumb {
        let trail = match self.trail_override.take() {
            Some(trail) => trail,
            None => std::mem::take(&mut self.active_trail),
        };
        self.render(&trail, route)
    }
}

impl<M: MenuLinkManager> BreadcrumbBuilder for MenuBreadcrumbBuilder<M> {
    fn applies(&mut self, route: &RouteMatch) -> bool {
        if !self.settings.enabled {
            return false;
        }
        if route.is_admin() && !self.settings.include_admin_routes {
            return false;
        }
        self.active_trail = self.derive_trail(route);
        !self.active_trail.is_empty()
    }

    fn build(&mut self, route: &RouteMatch) -> Breadcrumb {
        MenuTrailBuilder::build(self, route)
    }
}
