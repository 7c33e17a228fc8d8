use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use helga_breadcrumbs_server::config::Settings;
use helga_breadcrumbs_server::routes::build_router;
use helga_breadcrumbs_server::site::SiteStore;
use helga_breadcrumbs_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,helga_breadcrumbs=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting Helga Breadcrumbs server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded");

    // Load the site fixture (menus, bundles, content)
    let site = SiteStore::load(&settings.site.fixture)?;
    info!("Site content loaded");

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    let state = AppState::new(settings, site);
    let app = build_router(state);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
