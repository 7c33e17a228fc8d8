//! Route entity extraction.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ContentEntity, ParameterValue, RouteMatch};

/// Declared-type prefix marking entity-bearing route parameters.
const ENTITY_TYPE_PREFIX: &str = "entity:";

/// Link template every breadcrumb-capable entity must expose.
pub const CANONICAL_TEMPLATE: &str = "canonical";

/// Extracts the content entity bound to the route, if any.
///
/// Only the first declared parameter with an `entity:` type hint and a bound
/// value is considered; its entity must expose a canonical link template.
pub fn route_entity(route: &RouteMatch) -> Option<Arc<ContentEntity>> {
    let (name, value) = route.parameters().iter().find_map(|parameter| {
        let type_hint = parameter.type_hint.as_deref()?;
        if !type_hint.starts_with(ENTITY_TYPE_PREFIX) {
            return None;
        }
        route.value(&parameter.name).map(|value| (&parameter.name, value))
    })?;

    match value {
        ParameterValue::Entity(entity) if entity.has_link_template(CANONICAL_TEMPLATE) => {
            debug!(
                "Route '{}' binds entity '{}' via parameter '{}'",
                route.route_name(),
                entity.id,
                name
            );
            Some(entity.clone())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityTypeInfo;

    fn entity(id: &str, canonical: bool) -> Arc<ContentEntity> {
        let mut entity = ContentEntity::new(EntityTypeInfo::new("node"), id, format!("Node {id}"));
        if canonical {
            entity = entity.with_link_template(CANONICAL_TEMPLATE);
        }
        Arc::new(entity)
    }

    #[test]
    fn first_bound_entity_parameter_wins() {
        let route = RouteMatch::new("entity.node.canonical", "/node/1")
            .with_parameter("page", None, ParameterValue::Text("0".to_string()))
            .with_parameter(
                "node",
                Some("entity:node"),
                ParameterValue::Entity(entity("1", true)),
            )
            .with_parameter(
                "other",
                Some("entity:node"),
                ParameterValue::Entity(entity("2", true)),
            );

        let found = route_entity(&route).unwrap();
        assert_eq!(found.id, "1");
    }

    #[test]
    fn declared_but_unbound_parameters_are_skipped() {
        let route = RouteMatch::new("entity.node.canonical", "/node/1")
            .with_declared_parameter("node_revision", Some("entity:node"))
            .with_parameter(
                "node",
                Some("entity:node"),
                ParameterValue::Entity(entity("1", true)),
            );

        let found = route_entity(&route).unwrap();
        assert_eq!(found.id, "1");
    }

    #[test]
    fn entity_without_canonical_template_is_rejected() {
        let route = RouteMatch::new("entity.block.edit", "/block/1").with_parameter(
            "block",
            Some("entity:block"),
            ParameterValue::Entity(entity("1", false)),
        );

        assert!(route_entity(&route).is_none());
    }

    #[test]
    fn text_value_under_entity_hint_is_rejected() {
        let route = RouteMatch::new("entity.node.canonical", "/node/1").with_parameter(
            "node",
            Some("entity:node"),
            ParameterValue::Text("1".to_string()),
        );

        assert!(route_entity(&route).is_none());
    }

    #[test]
    fn routes_without_entity_parameters_yield_nothing() {
        let route = RouteMatch::new("system.generic", "/about")
            .with_parameter("page", Some("string"), ParameterValue::Text("0".to_string()));

        assert!(route_entity(&route).is_none());
    }
}
