// ABOUTME: Server binary for the Culinaire dinner-matching backend
// ABOUTME: Wires configuration, logging, database, and auth into the HTTP router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! # Culinaire Server Binary
//!
//! Starts the Culinaire REST API with user authentication, per-user saved
//! dinners, and the bundled recipe catalog.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use culinaire::auth::AuthManager;
use culinaire::catalog::CatalogSource;
use culinaire::config::environment::{DatabaseUrl, ServerConfig};
use culinaire::context::ServerResources;
use culinaire::database_plugins::factory::Database;
use culinaire::logging;
use culinaire::routes;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "culinaire-server")]
#[command(about = "Culinaire - dinner matching API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Culinaire server");
    info!("{}", config.summary());

    // SQLite creates the database file, not its parent directory
    if let DatabaseUrl::SQLite { path } = &config.database.url {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    // Initialize database
    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    // Initialize authentication manager
    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes().to_vec(),
        config.auth.jwt_expiry_hours,
    );
    info!("Authentication manager initialized");

    // Select the catalog source: operator-supplied file or the bundled dataset
    let catalog_source = config
        .catalog
        .path
        .clone()
        .map_or(CatalogSource::Bundled, CatalogSource::File);
    info!("Catalog source: {:?}", catalog_source);

    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        catalog_source,
    ));

    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("Listening on port {}", config.http_port);

    axum::serve(listener, app).await?;

    Ok(())
}
