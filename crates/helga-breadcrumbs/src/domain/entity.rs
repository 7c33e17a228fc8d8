//! Content entity, entity type and bundle configuration models.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity and capabilities of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTypeInfo {
    pub id: String,
    /// Field that carries the bundle reference. `None` means the entity
    /// type has no bundle concept at all.
    pub bundle_key: Option<String>,
}

impl EntityTypeInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bundle_key: None,
        }
    }

    pub fn with_bundle_key(mut self, key: impl Into<String>) -> Self {
        self.bundle_key = Some(key.into());
        self
    }

    pub fn supports_bundling(&self) -> bool {
        self.bundle_key.is_some()
    }
}

/// Settings attached to a bundle by other modules, keyed by provider then
/// setting name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPartySettings(BTreeMap<String, BTreeMap<String, Value>>);

impl ThirdPartySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, provider: &str, key: &str) -> Option<&Value> {
        self.0.get(provider).and_then(|settings| settings.get(key))
    }

    pub fn set(&mut self, provider: impl Into<String>, key: impl Into<String>, value: Value) {
        self.0
            .entry(provider.into())
            .or_default()
            .insert(key.into(), value);
    }
}

/// Per-bundle configuration object.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub id: String,
    pub label: String,
    /// `None` when the bundle type does not support third-party settings.
    pub third_party: Option<ThirdPartySettings>,
}

impl BundleConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            third_party: None,
        }
    }

    pub fn with_third_party(mut self, settings: ThirdPartySettings) -> Self {
        self.third_party = Some(settings);
        self
    }

    /// Setting stored under the given provider, or `None` when the bundle
    /// does not support third-party settings at all.
    pub fn third_party_setting(&self, provider: &str, key: &str) -> Option<&Value> {
        self.third_party
            .as_ref()
            .and_then(|settings| settings.get(provider, key))
    }
}

/// A content entity bound to the current route.
#[derive(Debug, Clone)]
pub struct ContentEntity {
    pub entity_type: EntityTypeInfo,
    pub id: String,
    pub label: String,
    pub bundle: Option<Arc<BundleConfig>>,
    /// Canonical path of the entity, when one is known.
    pub path: Option<String>,
    link_templates: Vec<String>,
}

impl ContentEntity {
    pub fn new(
        entity_type: EntityTypeInfo,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            id: id.into(),
            label: label.into(),
            bundle: None,
            path: None,
            link_templates: Vec::new(),
        }
    }

    pub fn with_bundle(mut self, bundle: Arc<BundleConfig>) -> Self {
        self.bundle = Some(bundle);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_link_template(mut self, name: impl Into<String>) -> Self {
        self.link_templates.push(name.into());
        self
    }

    pub fn has_link_template(&self, name: &str) -> bool {
        self.link_templates.iter().any(|template| template == name)
    }
}
