//! HTTP server command for the padron API
//!
//! Resolves database configuration, builds the pool, and runs the server
//! until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::postgres::PgConnectOptions;

use padron_core::DbConfig;
use padron_server::db::create_pool;
use padron_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides the PG_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // One configuration source: DATABASE_URL wins, the PG_* schema is
    // the fallback.
    let options: PgConnectOptions = match args.database_url {
        Some(url) => url
            .parse()
            .context("DATABASE_URL is not a valid postgres URL")?,
        None => DbConfig::from_env()
            .context("database configuration incomplete; set DATABASE_URL or the PG_* variables")?
            .connect_options(),
    };

    tracing::info!("Starting padron server on {}", args.bind);

    // Create database pool
    let pool = create_pool(options)
        .await
        .context("Failed to create database pool")?;

    // Configure server
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
