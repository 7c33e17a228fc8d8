//! Orphan-page breadcrumb strategy.
//!
//! Content pages without a parent in the navigation menus get their trail
//! from a fallback menu parent configured on their bundle: the parent's
//! ancestor chain becomes the active trail, and rendering is delegated to
//! the menu-based builder.

use std::sync::Arc;

use tracing::debug;

use super::entity_extractor::route_entity;
use super::menu_breadcrumb::MenuTrailBuilder;
use super::{BreadcrumbBuilder, RouteApplicability};
use crate::config::{BreadcrumbSettings, ORPHANS_MENU_ITEM_SETTING, SETTINGS_PROVIDER};
use crate::domain::{Breadcrumb, ContentEntity, MenuLink, MenuLinkKind, RouteMatch};
use crate::repositories::MenuLinkManager;

pub struct OrphanBreadcrumbBuilder<M, D, P>
where
    M: MenuLinkManager,
    D: MenuTrailBuilder,
    P: RouteApplicability,
{
    menu_link_manager: Arc<M>,
    settings: Arc<BreadcrumbSettings>,
    menu_builder: D,
    path_builder: Arc<P>,
    /// Trail resolved by the latest `applies` pass, root first, ending with
    /// the configured parent itself. Request-scoped.
    orphans_active_trail: Vec<String>,
}

impl<M, D, P> OrphanBreadcrumbBuilder<M, D, P>
where
    M: MenuLinkManager,
    D: MenuTrailBuilder,
    P: RouteApplicability,
{
    pub fn new(
        menu_link_manager: Arc<M>,
        settings: Arc<BreadcrumbSettings>,
        menu_builder: D,
        path_builder: Arc<P>,
    ) -> Self {
        Self {
            menu_link_manager,
            settings,
            menu_builder,
            path_builder,
            orphans_active_trail: Vec::new(),
        }
    }

    /// Trail cached by the most recent `applies` pass.
    pub fn active_trail(&self) -> &[String] {
        &self.orphans_active_trail
    }

    /// Fallback menu parent configured on the entity's bundle, if any.
    ///
    /// Every missing or mismatched intermediate resolves to `None`; only a
    /// broken configuration (non-string setting, resolved link of the wrong
    /// kind) asserts.
    fn orphan_menu_parent(&self, entity: &ContentEntity) -> Option<MenuLink> {
        if !entity.entity_type.supports_bundling() {
            return None;
        }
        let orphans_menu = self.settings.orphans_menu.as_str();
        if orphans_menu.is_empty() {
            return None;
        }
        let bundle = entity.bundle.as_ref()?;
        let value = bundle.third_party_setting(SETTINGS_PROVIDER, ORPHANS_MENU_ITEM_SETTING)?;
        if value.is_null() {
            return None;
        }
        assert!(
            value.is_string(),
            "orphans_menu_item_id on bundle '{}' must be a string",
            bundle.id
        );
        let raw = value.as_str().unwrap_or_default();
        if raw.is_empty() {
            return None;
        }

        let (menu_name, item_id) = raw.split_once(':').unwrap_or((raw, ""));
        if menu_name != orphans_menu {
            debug!(
                "Bundle '{}' points at menu '{}', not the configured orphans menu '{}'",
                bundle.id, menu_name, orphans_menu
            );
            return None;
        }

        let Some(link) = self.menu_link_manager.instance(item_id) else {
            debug!(
                "Configured orphan parent '{}' does not exist in menu '{}'",
                item_id, orphans_menu
            );
            return None;
        };
        assert!(
            link.kind == MenuLinkKind::Content,
            "orphan parent '{}' must be a content menu link",
            link.plugin_id
        );
        Some(link)
    }

    /// Expands the configured parent into a root-to-leaf trail of plugin
    /// ids, the parent itself included as the leaf.
    fn resolve_trail(&self, entity: &ContentEntity) -> Vec<String> {
        let Some(parent) = self.orphan_menu_parent(entity) else {
            return Vec::new();
        };

        let mut trail = self.menu_link_manager.parent_ids(&parent.plugin_id);
        if trail.last() != Some(&parent.plugin_id) {
            trail.push(parent.plugin_id);
        }
        trail
    }
}

impl<M, D, P> BreadcrumbBuilder for OrphanBreadcrumbBuilder<M, D, P>
where
    M: MenuLinkManager,
    D: MenuTrailBuilder,
    P: RouteApplicability,
{
    fn applies(&mut self, route: &RouteMatch) -> bool {
        // Exit as early as possible when the feature is off.
        if self.settings.orphans_menu.is_empty() {
            return false;
        }

        // The path-based strategy encodes "is this a content route that gets
        // breadcrumbs at all", admin exclusion included.
        if !self.path_builder.applies(route) {
            return false;
        }

        let Some(entity) = route_entity(route) else {
            return false;
        };

        self.orphans_active_trail = self.resolve_trail(&entity);
        !self.orphans_active_trail.is_empty()
    }

    fn build(&mut self, route: &RouteMatch) -> Breadcrumb {
        self.menu_builder.set_menu_name(self.settings.orphans_menu.clone());
        self.menu_builder.set_menu_trail(self.orphans_active_trail.clone());
        self.menu_builder.build(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use serde_json::{json, Value};

    use crate::domain::{
        BreadcrumbLink, BundleConfig, EntityTypeInfo, ParameterValue, ThirdPartySettings,
    };
    use crate::repositories::MockMenuLinkManager;
    use crate::services::menu_breadcrumb::MockMenuTrailBuilder;
    use crate::services::MockRouteApplicability;

    fn settings(orphans_menu: &str) -> Arc<BreadcrumbSettings> {
        Arc::new(BreadcrumbSettings {
            orphans_menu: orphans_menu.to_string(),
            ..Default::default()
        })
    }

    fn bundle_with_setting(value: Option<Value>) -> Arc<BundleConfig> {
        let mut bundle = BundleConfig::new("article", "Article");
        let mut third_party = ThirdPartySettings::new();
        if let Some(value) = value {
            third_party.set(SETTINGS_PROVIDER, ORPHANS_MENU_ITEM_SETTING, value);
        }
        bundle = bundle.with_third_party(third_party);
        Arc::new(bundle)
    }

    fn entity_with_bundle(bundle: Option<Arc<BundleConfig>>) -> Arc<ContentEntity> {
        let mut entity = ContentEntity::new(
            EntityTypeInfo::new("node").with_bundle_key("type"),
            "57",
            "Annual Report 2019",
        )
        .with_link_template("canonical")
        .with_path("/annual-report-2019");
        if let Some(bundle) = bundle {
            entity = entity.with_bundle(bundle);
        }
        Arc::new(entity)
    }

    fn entity_route(entity: Arc<ContentEntity>) -> RouteMatch {
        RouteMatch::new("entity.node.canonical", "/annual-report-2019")
            .with_title("Annual Report 2019")
            .with_parameter("node", Some("entity:node"), ParameterValue::Entity(entity))
    }

    fn content_link(plugin_id: &str) -> MenuLink {
        MenuLink {
            plugin_id: plugin_id.to_string(),
            menu_name: "main".to_string(),
            title: plugin_id.to_string(),
            url: Some(format!("/{plugin_id}")),
            parent: None,
            kind: MenuLinkKind::Content,
            enabled: true,
            weight: 0,
        }
    }

    fn gate(applies: bool) -> Arc<MockRouteApplicability> {
        let mut gate = MockRouteApplicability::new();
        gate.expect_applies().return_const(applies);
        Arc::new(gate)
    }

    /// Gate that must never be consulted.
    fn untouched_gate() -> Arc<MockRouteApplicability> {
        Arc::new(MockRouteApplicability::new())
    }

    #[test]
    fn applies_is_false_without_a_configured_menu() {
        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(MockMenuLinkManager::new()),
            settings(""),
            MockMenuTrailBuilder::new(),
            untouched_gate(),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "main:link_123"
        ))))));

        assert!(!builder.applies(&route));
        assert!(builder.active_trail().is_empty());
    }

    #[test]
    fn applies_requires_the_path_builder_to_apply() {
        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(MockMenuLinkManager::new()),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(false),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "main:link_123"
        ))))));

        assert!(!builder.applies(&route));
    }

    #[test]
    fn applies_is_false_without_a_route_entity() {
        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(MockMenuLinkManager::new()),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route = RouteMatch::new("system.generic", "/about");

        assert!(!builder.applies(&route));
    }

    #[test]
    fn applies_is_false_without_a_bundle_setting() {
        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(MockMenuLinkManager::new()),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(None))));

        assert!(!builder.applies(&route));
        assert!(builder.active_trail().is_empty());
    }

    #[test]
    fn applies_is_false_without_bundle_support() {
        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(MockMenuLinkManager::new()),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        // Bundle object without third-party settings support.
        let bundle = Arc::new(BundleConfig::new("article", "Article"));
        let route = entity_route(entity_with_bundle(Some(bundle)));

        assert!(!builder.applies(&route));
    }

    #[test]
    fn applies_is_false_when_the_entity_type_has_no_bundles() {
        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(MockMenuLinkManager::new()),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let entity = Arc::new(
            ContentEntity::new(EntityTypeInfo::new("user"), "1", "Some user")
                .with_link_template("canonical"),
        );
        let route = RouteMatch::new("entity.user.canonical", "/user/1")
            .with_parameter("user", Some("entity:user"), ParameterValue::Entity(entity));

        assert!(!builder.applies(&route));
    }

    #[test]
    fn applies_is_false_on_menu_name_mismatch() {
        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(MockMenuLinkManager::new()),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "footer:link_123"
        ))))));

        assert!(!builder.applies(&route));
    }

    #[test]
    fn applies_is_false_when_the_menu_link_is_missing() {
        let mut manager = MockMenuLinkManager::new();
        manager
            .expect_instance()
            .with(eq("link_123"))
            .returning(|_| None);

        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(manager),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "main:link_123"
        ))))));

        assert!(!builder.applies(&route));
    }

    #[test]
    fn applies_resolves_the_configured_parent_chain() {
        let mut manager = MockMenuLinkManager::new();
        manager
            .expect_instance()
            .with(eq("link_123"))
            .returning(|_| Some(content_link("link_123")));
        manager
            .expect_parent_ids()
            .with(eq("link_123"))
            .returning(|_| vec!["link_10".to_string(), "link_11".to_string()]);

        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(manager),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "main:link_123"
        ))))));

        assert!(builder.applies(&route));
        assert_eq!(builder.active_trail(), ["link_10", "link_11", "link_123"]);
    }

    #[test]
    fn applies_twice_is_idempotent() {
        let mut manager = MockMenuLinkManager::new();
        manager
            .expect_instance()
            .times(2)
            .returning(|_| Some(content_link("link_123")));
        manager
            .expect_parent_ids()
            .times(2)
            .returning(|_| vec!["link_10".to_string()]);

        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(manager),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "main:link_123"
        ))))));

        assert!(builder.applies(&route));
        let first = builder.active_trail().to_vec();
        assert!(builder.applies(&route));

        assert_eq!(builder.active_trail(), first.as_slice());
    }

    #[test]
    fn trail_is_cleared_when_resolution_stops_applying() {
        let mut manager = MockMenuLinkManager::new();
        let mut calls = 0;
        manager.expect_instance().returning(move |_| {
            calls += 1;
            // The link disappears between the two passes.
            if calls == 1 {
                Some(content_link("link_123"))
            } else {
                None
            }
        });
        manager
            .expect_parent_ids()
            .returning(|_| vec!["link_10".to_string()]);

        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(manager),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "main:link_123"
        ))))));

        assert!(builder.applies(&route));
        assert!(!builder.active_trail().is_empty());
        assert!(!builder.applies(&route));
        assert!(builder.active_trail().is_empty());
    }

    #[test]
    fn build_hands_menu_and_trail_to_the_delegate() {
        let mut manager = MockMenuLinkManager::new();
        manager
            .expect_instance()
            .returning(|_| Some(content_link("link_123")));
        manager
            .expect_parent_ids()
            .returning(|_| vec!["link_10".to_string(), "link_11".to_string()]);

        let mut delegate = MockMenuTrailBuilder::new();
        delegate
            .expect_set_menu_name()
            .with(eq("main".to_string()))
            .times(1)
            .return_const(());
        delegate
            .expect_set_menu_trail()
            .with(eq(vec![
                "link_10".to_string(),
                "link_11".to_string(),
                "link_123".to_string(),
            ]))
            .times(1)
            .return_const(());
        delegate.expect_build().times(1).returning(|_| {
            let mut breadcrumb = Breadcrumb::new();
            breadcrumb.push_link(BreadcrumbLink::new("Home", "/"));
            breadcrumb.push_link(BreadcrumbLink::unlinked("Annual Report 2019"));
            breadcrumb
        });

        let mut builder =
            OrphanBreadcrumbBuilder::new(Arc::new(manager), settings("main"), delegate, gate(true));
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "main:link_123"
        ))))));

        assert!(builder.applies(&route));
        let links = builder.build(&route).into_links();

        assert_eq!(links.len(), 2);
        assert_eq!(links[1], BreadcrumbLink::unlinked("Annual Report 2019"));
    }

    #[test]
    #[should_panic(expected = "must be a content menu link")]
    fn non_content_parent_is_a_configuration_integrity_violation() {
        let mut manager = MockMenuLinkManager::new();
        manager.expect_instance().returning(|_| {
            let mut link = content_link("link_123");
            link.kind = MenuLinkKind::Static;
            Some(link)
        });

        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(manager),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route = entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(
            "main:link_123"
        ))))));

        builder.applies(&route);
    }

    #[test]
    #[should_panic(expected = "must be a string")]
    fn non_string_setting_is_a_configuration_integrity_violation() {
        let mut builder = OrphanBreadcrumbBuilder::new(
            Arc::new(MockMenuLinkManager::new()),
            settings("main"),
            MockMenuTrailBuilder::new(),
            gate(true),
        );
        let route =
            entity_route(entity_with_bundle(Some(bundle_with_setting(Some(json!(42))))));

        builder.applies(&route);
    }
}
