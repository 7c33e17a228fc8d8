//! Breadcrumb strategies and the pipeline consulting them.

pub mod entity_extractor;
pub mod menu_breadcrumb;
pub mod orphan_builder;
pub mod path_breadcrumb;
pub mod pipeline;

pub use entity_extractor::route_entity;
pub use menu_breadcrumb::{MenuBreadcrumbBuilder, MenuTrailBuilder};
pub use orphan_builder::OrphanBreadcrumbBuilder;
pub use path_breadcrumb::PathBreadcrumbBuilder;
pub use pipeline::{
    register_orphan_builder, BreadcrumbPipeline, MENU_BUILDER_ID, ORPHAN_BUILDER_ID,
    PATH_BUILDER_ID,
};

use crate::domain::{Breadcrumb, RouteMatch};

#[cfg(test)]
use mockall::automock;

/// A breadcrumb strategy consulted by the pipeline.
///
/// `build` must only be called after `applies` returned true for the same
/// route; strategies may carry request-scoped state between the two calls.
pub trait BreadcrumbBuilder: Send {
    fn applies(&mut self, route: &RouteMatch) -> bool;

    fn build(&mut self, route: &RouteMatch) -> Breadcrumb;
}

/// Read-only applicability check a strategy exposes to its siblings.
#[cfg_attr(test, automock)]
pub trait RouteApplicability: Send + Sync {
    fn applies(&self, route: &RouteMatch) -> bool;
}
