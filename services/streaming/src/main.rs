use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod authz;
mod error;
mod fabric;
mod middleware;
mod models;
mod repositories;
mod routes;
mod service;
mod state;

use std::sync::Arc;

use common::database::{DatabaseConfig, init_pool};

use crate::{
    fabric::{FabricConfig, FabricResolver},
    repositories::PgCatalogStore,
    service::CatalogService,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting streaming service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Initialize the content-fabric resolver
    let fabric_config = FabricConfig::from_env().map_err(anyhow::Error::msg)?;
    let resolver = FabricResolver::new(fabric_config);

    info!("Streaming service initialized successfully");

    // Wire the catalog service with its collaborators
    let store = PgCatalogStore::new(pool);
    let catalog = CatalogService::new(Arc::new(store), Arc::new(resolver));

    let app_state = AppState { catalog };

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
    info!("Streaming service listening on 0.0.0.0:3001");

    axum::serve(listener, app).await?;

    Ok(())
}
