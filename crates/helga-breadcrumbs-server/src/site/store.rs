//! In-memory site content loaded from the fixture file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use helga_breadcrumbs::domain::{
    BundleConfig, ContentEntity, EntityTypeInfo, MenuLink, ThirdPartySettings,
};
use helga_breadcrumbs::repositories::InMemoryMenuLinkManager;
use helga_breadcrumbs::DomainError;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Cannot read site fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed site fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Content entity '{entity}' references unknown bundle '{bundle}'")]
    UnknownBundle { entity: String, bundle: String },

    #[error("Menu fixture rejected: {0}")]
    Menu(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
struct SiteFixture {
    #[serde(default)]
    menu_links: Vec<MenuLink>,
    #[serde(default)]
    entity_types: Vec<EntityTypeFixture>,
    #[serde(default)]
    bundles: Vec<BundleFixture>,
    #[serde(default)]
    content: Vec<ContentFixture>,
}

#[derive(Debug, Deserialize)]
struct EntityTypeFixture {
    id: String,
    #[serde(default)]
    bundle_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BundleFixture {
    entity_type: String,
    id: String,
    label: String,
    /// Provider-keyed settings; absent means the bundle type does not
    /// support third-party settings.
    #[serde(default)]
    third_party: Option<ThirdPartySettings>,
}

#[derive(Debug, Deserialize)]
struct ContentFixture {
    entity_type: String,
    id: String,
    #[serde(default)]
    bundle: Option<String>,
    label: String,
    path: String,
}

/// Immutable site content shared across requests.
pub struct SiteStore {
    menu: Arc<InMemoryMenuLinkManager>,
    content_by_path: HashMap<String, Arc<ContentEntity>>,
}

impl SiteStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let fixture: SiteFixture = serde_json::from_str(raw)?;

        let menu = Arc::new(InMemoryMenuLinkManager::from_links(fixture.menu_links)?);

        let mut entity_types: HashMap<String, EntityTypeInfo> = HashMap::new();
        for entity_type in fixture.entity_types {
            let mut info = EntityTypeInfo::new(&entity_type.id);
            if let Some(key) = entity_type.bundle_key {
                info = info.with_bundle_key(key);
            }
            entity_types.insert(entity_type.id, info);
        }

        let mut bundles: HashMap<(String, String), Arc<BundleConfig>> = HashMap::new();
        for bundle in fixture.bundles {
            let config = Arc::new(BundleConfig {
                id: bundle.id.clone(),
                label: bundle.label,
                third_party: bundle.third_party,
            });
            bundles.insert((bundle.entity_type, bundle.id), config);
        }

        let mut content_by_path = HashMap::new();
        for content in fixture.content {
            let entity_type = entity_types
                .get(&content.entity_type)
                .cloned()
                .unwrap_or_else(|| EntityTypeInfo::new(&content.entity_type));

            let mut entity = ContentEntity::new(entity_type, content.id.clone(), content.label)
                .with_path(content.path.clone())
                .with_link_template("canonical");

            if let Some(bundle_id) = content.bundle {
                let key = (content.entity_type.clone(), bundle_id.clone());
                let Some(bundle) = bundles.get(&key) else {
                    return Err(SiteError::UnknownBundle {
                        entity: format!("{}/{}", content.entity_type, content.id),
                        bundle: bundle_id,
                    });
                };
                entity = entity.with_bundle(bundle.clone());
            }

            content_by_path.insert(content.path, Arc::new(entity));
        }

        info!(
            "Site fixture loaded: {} menu links, {} content pages",
            menu.len(),
            content_by_path.len()
        );

        Ok(Self {
            menu,
            content_by_path,
        })
    }

    pub fn menu(&self) -> Arc<InMemoryMenuLinkManager> {
        self.menu.clone()
    }

    pub fn entity_by_path(&self, path: &str) -> Option<Arc<ContentEntity>> {
        self.content_by_path.get(path).cloned()
    }

    pub fn content_count(&self) -> usize {
        self.content_by_path.len()
    }
}
