//! Request-path to route-match resolution.

use tracing::debug;

use helga_breadcrumbs::domain::{ParameterValue, RouteMatch};

use super::store::SiteStore;

const DEFAULT_ADMIN_PREFIX: &str = "/admin";

/// Maps incoming request paths onto the route model the builders consume.
pub struct RouteResolver {
    admin_prefix: String,
}

impl RouteResolver {
    pub fn new(admin_prefix: Option<String>) -> Self {
        Self {
            admin_prefix: admin_prefix.unwrap_or_else(|| DEFAULT_ADMIN_PREFIX.to_string()),
        }
    }

    pub fn resolve(&self, store: &SiteStore, path: &str) -> RouteMatch {
        let path = normalize(path);

        if self.is_admin_path(&path) {
            return RouteMatch::new("system.admin", path).admin(true);
        }

        if let Some(entity) = store.entity_by_path(&path) {
            let route_name = format!("entity.{}.canonical", entity.entity_type.id);
            let type_hint = format!("entity:{}", entity.entity_type.id);
            let parameter_name = entity.entity_type.id.clone();
            let title = entity.label.clone();
            return RouteMatch::new(route_name, path)
                .with_title(title)
                .with_parameter(
                    &parameter_name,
                    Some(&type_hint),
                    ParameterValue::Entity(entity),
                );
        }

        debug!("No content at '{}', using a plain route", path);
        RouteMatch::new("system.generic", path)
    }

    fn is_admin_path(&self, path: &str) -> bool {
        match path.strip_prefix(&self.admin_prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Leading slash enforced, trailing slash stripped.
fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let mut normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
