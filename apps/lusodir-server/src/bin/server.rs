use std::sync::Arc;

use anyhow::anyhow;
use lusodir_catalog::BusinessCatalog;
use lusodir_core::config::Config;
use lusodir_hybrid::{BusinessSearchService, TracingSearchLogger};
use lusodir_server::{build_rocket, logging::init_logging};
use tracing::info;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    init_logging(&config.logging()?)?;

    let server = config.server()?;
    let catalog_path = config.catalog_path()?;
    let catalog = BusinessCatalog::load(&catalog_path)?;
    if catalog.is_empty() {
        tracing::warn!(path = %catalog_path.display(), "catalog has no businesses");
    }

    let service = BusinessSearchService::new(Arc::new(catalog), Arc::new(TracingSearchLogger), config.search()?)?;
    info!(host = %server.host, port = server.port, "starting lusodir-server");

    let figment = rocket::Config::figment()
        .merge(("address", server.host))
        .merge(("port", server.port));
    build_rocket(service, figment)
        .launch()
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;
    Ok(())
}
