//! albums-api - HTTP service for a catalog of music albums
//!
//! Startup sequence: logging, configuration, store pool, best-effort schema
//! bootstrap, then serve until Ctrl+C or SIGTERM.

use std::path::PathBuf;

use albums_common::config::{ConfigOverrides, ServiceConfig, ENV_BIND, ENV_CONFIG, ENV_DATABASE_URL};
use albums_common::db;
use albums_api::{build_router, AppState, API_BASE_PATH};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for albums-api
#[derive(Parser, Debug)]
#[command(name = "albums-api")]
#[command(about = "HTTP API for a catalog of music albums")]
#[command(version)]
struct Args {
    /// Store connection string (sqlx URL)
    #[arg(short, long, env = ENV_DATABASE_URL)]
    database_url: Option<String>,

    /// Address to listen on
    #[arg(short, long, env = ENV_BIND)]
    bind: Option<String>,

    /// TOML config file
    #[arg(short, long, env = ENV_CONFIG)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "albums_api=info,albums_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting albums-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = ServiceConfig::resolve(ConfigOverrides {
        database_url: args.database_url,
        bind: args.bind,
        config_file: args.config,
    })
    .context("Failed to resolve configuration")?;

    let pool = db::connect_lazy(&config.database_url).context("Invalid database URL")?;

    // Storage may be unreachable here; serve anyway
    if db::seed(&pool).await {
        if let Ok(count) = db::count_albums(&pool).await {
            info!("Catalog holds {} albums", count);
        }
    }

    let app = build_router(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;
    info!("albums-api listening on http://{}{}", config.bind, API_BASE_PATH);
    info!("API description: http://{}/swagger/doc.json", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
