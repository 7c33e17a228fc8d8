//! Route match model: the request-side view a breadcrumb builder works from.

use std::collections::HashMap;
use std::sync::Arc;

use super::entity::ContentEntity;

/// Declared route parameter metadata, in route-definition order.
#[derive(Debug, Clone)]
pub struct RouteParameter {
    pub name: String,
    /// Declared parameter type, e.g. `"entity:node"`.
    pub type_hint: Option<String>,
}

/// A value bound to a route parameter for the current request.
#[derive(Debug, Clone)]
pub enum ParameterValue {
    Entity(Arc<ContentEntity>),
    Text(String),
}

/// The resolved route of one incoming request.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    route_name: String,
    path: String,
    is_admin: bool,
    title: Option<String>,
    parameters: Vec<RouteParameter>,
    values: HashMap<String, ParameterValue>,
}

impl RouteMatch {
    pub fn new(route_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            path: path.into(),
            is_admin: false,
            title: None,
            parameters: Vec::new(),
            values: HashMap::new(),
        }
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Declares a parameter without binding a value to it.
    pub fn with_declared_parameter(mut self, name: &str, type_hint: Option<&str>) -> Self {
        self.parameters.push(RouteParameter {
            name: name.to_string(),
            type_hint: type_hint.map(str::to_string),
        });
        self
    }

    /// Declares a parameter and binds its value.
    pub fn with_parameter(
        mut self,
        name: &str,
        type_hint: Option<&str>,
        value: ParameterValue,
    ) -> Self {
        self.values.insert(name.to_string(), value);
        self.with_declared_parameter(name, type_hint)
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Declared parameters, in declaration order.
    pub fn parameters(&self) -> &[RouteParameter] {
        &self.parameters
    }

    /// Value bound to the named parameter, if any.
    pub fn value(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }
}
