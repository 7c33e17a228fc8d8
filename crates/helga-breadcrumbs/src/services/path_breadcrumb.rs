//! Path-based fallback breadcrumb builder.
//!
//! Lowest-priority strategy: derives crumbs from the url path segments. Its
//! applicability check doubles as the content gate other strategies consult
//! before doing their own work.

use std::sync::Arc;

use tracing::debug;

use super::{BreadcrumbBuilder, RouteApplicability};
use crate::config::BreadcrumbSettings;
use crate::domain::{Breadcrumb, BreadcrumbLink, RouteMatch};

pub struct PathBreadcrumbBuilder {
    settings: Arc<BreadcrumbSettings>,
}

impl PathBreadcrumbBuilder {
    pub fn new(settings: Arc<BreadcrumbSettings>) -> Self {
        Self { settings }
    }

    fn humanize(segment: &str) -> String {
        segment
            .split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl RouteApplicability for PathBreadcrumbBuilder {
    fn applies(&self, route: &RouteMatch) -> bool {
        if !self.settings.enabled {
            return false;
        }
        if route.is_admin() && !self.settings.include_admin_routes {
            debug!("Admin route '{}' excluded from breadcrumbs", route.path());
            return false;
        }
        true
    }
}

impl BreadcrumbBuilder for PathBreadcrumbBuilder {
    fn applies(&mut self, route: &RouteMatch) -> bool {
        RouteApplicability::applies(self, route)
    }

    fn build(&mut self, route: &RouteMatch) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        breadcrumb.push_link(BreadcrumbLink::new(self.settings.home_label.clone(), "/"));

        let segments: Vec<&str> = route
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let mut url = String::new();
        for (index, segment) in segments.iter().enumerate() {
            url.push('/');
            url.push_str(segment);

            if index + 1 == segments.len() {
                // Current page: prefer the route title over the raw segment.
                let label = route
                    .title()
                    .map(str::to_string)
                    .unwrap_or_else(|| Self::humanize(segment));
                breadcrumb.push_link(BreadcrumbLink::unlinked(label));
            } else {
                breadcrumb.push_link(BreadcrumbLink::new(Self::humanize(segment), url.clone()));
            }
        }

        breadcrumb
    }
}
