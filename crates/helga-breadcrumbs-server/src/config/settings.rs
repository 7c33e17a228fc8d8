use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use helga_breadcrumbs::BreadcrumbSettings;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub breadcrumbs: BreadcrumbSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    /// Path to the site fixture (menus, bundles, content).
    pub fixture: String,
    /// Path prefix marking admin routes. Defaults to `/admin`.
    #[serde(default)]
    pub admin_path_prefix: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/settings").required(true))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}
