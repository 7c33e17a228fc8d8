//! Breadcrumb pipeline: priority-ordered strategy selection, plus the
//! startup step that slots the orphan builder in under the menu-based one.

use std::sync::Arc;

use tracing::{debug, info};

use super::menu_breadcrumb::MenuTrailBuilder;
use super::orphan_builder::OrphanBreadcrumbBuilder;
use super::{BreadcrumbBuilder, RouteApplicability};
use crate::config::BreadcrumbSettings;
use crate::domain::{Breadcrumb, RouteMatch};
use crate::error::DomainError;
use crate::repositories::MenuLinkManager;

pub const MENU_BUILDER_ID: &str = "menu_breadcrumb.default";
pub const ORPHAN_BUILDER_ID: &str = "helga_breadcrumbs.orphans";
pub const PATH_BUILDER_ID: &str = "path_breadcrumb.default";

struct Registration {
    id: String,
    priority: i64,
    builder: Box<dyn BreadcrumbBuilder>,
}

/// Priority-ordered collection of breadcrumb strategies.
#[derive(Default)]
pub struct BreadcrumbPipeline {
    registrations: Vec<Registration>,
}

impl BreadcrumbPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a strategy under a stable id. Higher priority is consulted
    /// first; equal priorities keep registration order.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        priority: i64,
        builder: Box<dyn BreadcrumbBuilder>,
    ) -> Result<(), DomainError> {
        let id = id.into();
        if self.registrations.iter().any(|existing| existing.id == id) {
            return Err(DomainError::DuplicateBuilder(id));
        }
        let at = self
            .registrations
            .iter()
            .position(|existing| existing.priority < priority)
            .unwrap_or(self.registrations.len());
        debug!("Registered breadcrumb builder '{}' with priority {}", id, priority);
        self.registrations.insert(
            at,
            Registration {
                id,
                priority,
                builder,
            },
        );
        Ok(())
    }

    /// Priority tag of a registration, if present.
    pub fn priority_of(&self, id: &str) -> Option<i64> {
        self.registrations
            .iter()
            .find(|registration| registration.id == id)
            .map(|registration| registration.priority)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Runs the pipeline: the first strategy that applies builds the crumb.
    pub fn build(&mut self, route: &RouteMatch) -> Option<Breadcrumb> {
        for registration in &mut self.registrations {
            if registration.builder.applies(route) {
                debug!(
                    "Breadcrumb for '{}' built by '{}'",
                    route.path(),
                    registration.id
                );
                return Some(registration.builder.build(route));
            }
        }
        None
    }
}

/// Startup composition step for the orphan strategy.
///
/// Reads the menu-based sibling's priority tag and registers the orphan
/// builder exactly one priority below it, so it is consulted after the
/// sibling but before lower-priority builders. When the sibling is absent or
/// carries the default (zero) priority, nothing is registered and the
/// strategy stays inert.
pub fn register_orphan_builder<M, D, P>(
    pipeline: &mut BreadcrumbPipeline,
    menu_link_manager: Arc<M>,
    settings: Arc<BreadcrumbSettings>,
    menu_builder: D,
    path_builder: Arc<P>,
) -> Result<bool, DomainError>
where
    M: MenuLinkManager + 'static,
    D: MenuTrailBuilder + 'static,
    P: RouteApplicability + 'static,
{
    let Some(sibling_priority) = pipeline.priority_of(MENU_BUILDER_ID) else {
        debug!("Menu-based builder is not registered, skipping the orphan builder");
        return Ok(false);
    };
    if sibling_priority == 0 {
        debug!("Menu-based builder priority is unset, skipping the orphan builder");
        return Ok(false);
    }

    let builder =
        OrphanBreadcrumbBuilder::new(menu_link_manager, settings, menu_builder, path_builder);
    pipeline.register(ORPHAN_BUILDER_ID, sibling_priority - 1, Box::new(builder))?;
    info!(
        "Orphan breadcrumb builder registered with priority {}",
        sibling_priority - 1
    );
    Ok(true)
}
