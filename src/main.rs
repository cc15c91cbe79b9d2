//! # Roster Server
//!
//! Minimal user directory HTTP service backed by MongoDB.
//!
//! The binary wires configuration, logging, and the store connection,
//! then serves the router from [`roster_server::routes`]. The store
//! handle is established once here and shared immutably across request
//! handlers.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_server::{
    AppState,
    infra::config::{Config, validate_database_url},
    routes,
    store::{MongoUserStore, UserStore},
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "Minimal user directory HTTP service backed by MongoDB")]
struct Cli {
    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URL")]
    database_url: Option<String>,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DATABASE")]
    database_name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap so env-backed flags see it. A missing file is
    // fine; a malformed one is not.
    let env_file_loaded = match dotenvy::dotenv() {
        Ok(_) => true,
        Err(dotenvy::Error::Io(_)) => false,
        Err(err) => return Err(err).context("failed to load .env file"),
    };

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let mut config = Config::from_env();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = Some(url);
    }
    if let Some(name) = cli.database_name {
        config.database.name = name;
    }

    run_server(config).await
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let Some(database_url) = config.database.url.clone() else {
        error!("MONGODB_URL must be provided for MongoDB connections");
        anyhow::bail!("no MongoDB connection configuration found");
    };
    validate_database_url(&database_url)?;

    info!(database = %config.database.name, "connecting to MongoDB");
    let client = mongodb::Client::with_uri_str(&database_url)
        .await
        .context("failed to initialize MongoDB client")?;
    let store: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(
        client.database(&config.database.name),
    ));

    // Startup connectivity check. An unhealthy store is reported, not
    // fatal; /health keeps tracking the live state.
    if store.ping().await {
        info!("MongoDB connection verified");
    } else {
        warn!("MongoDB did not answer ping; starting anyway");
    }

    let config = Arc::new(config);
    let state = AppState {
        users: store,
        config: Arc::clone(&config),
    };
    let router = routes::create_router(state);

    let addr = config.bind_addr();
    info!("Starting Roster Server (HTTP) on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
