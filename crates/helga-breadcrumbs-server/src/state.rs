use std::sync::Arc;

use helga_breadcrumbs::services::{
    register_orphan_builder, BreadcrumbPipeline, MenuBreadcrumbBuilder, PathBreadcrumbBuilder,
    MENU_BUILDER_ID, PATH_BUILDER_ID,
};
use helga_breadcrumbs::{BreadcrumbSettings, DomainError};

use crate::config::Settings;
use crate::site::{RouteResolver, SiteStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub breadcrumbs: Arc<BreadcrumbSettings>,
    pub site: Arc<SiteStore>,
    pub routes: Arc<RouteResolver>,
}

impl AppState {
    pub fn new(settings: Settings, site: SiteStore) -> Self {
        let breadcrumbs = Arc::new(settings.breadcrumbs.clone());
        let routes = Arc::new(RouteResolver::new(settings.site.admin_path_prefix.clone()));
        Self {
            settings: Arc::new(settings),
            breadcrumbs,
            site: Arc::new(site),
            routes,
        }
    }

    /// Assembles a fresh pipeline for one request.
    ///
    /// Builders carry request-scoped trail state, so instances are never
    /// shared between requests; the composition step re-runs here exactly as
    /// it would at container-build time.
    pub fn pipeline(&self) -> Result<BreadcrumbPipeline, DomainError> {
        let menu = self.site.menu();
        let settings = self.breadcrumbs.clone();

        let mut pipeline = BreadcrumbPipeline::new();

        pipeline.register(
            MENU_BUILDER_ID,
            settings.menu_builder_priority,
            Box::new(MenuBreadcrumbBuilder::new(
                menu.clone(),
                settings.clone(),
                settings.menu_name.clone(),
            )),
        )?;
        pipeline.register(
            PATH_BUILDER_ID,
            settings.path_builder_priority,
            Box::new(PathBreadcrumbBuilder::new(settings.clone())),
        )?;

        let delegate = MenuBreadcrumbBuilder::new(
            menu.clone(),
            settings.clone(),
            settings.orphans_menu.clone(),
        );
        let path_gate = Arc::new(PathBreadcrumbBuilder::new(settings.clone()));
        register_orphan_builder(&mut pipeline, menu, settings, delegate, path_gate)?;

        Ok(pipeline)
    }
}
