//! itemhub Server - HTTP item store
//!
//! Serves one surface per process:
//! - rest: GET/POST /items, GET/PUT /items/{id}
//! - pseudo-graphql: /query with literal query dispatch
//! - graphql: GET / playground, /query GraphQL API

use anyhow::Context;
use clap::Parser;
use itemhub_server::{
    AppState, build_router,
    config::{Config, Surface},
};
use std::path::PathBuf;
use std::thread;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// itemhub Server CLI arguments
#[derive(Parser, Debug)]
#[command(name = "itemhub-server")]
#[command(about = "In-memory item store over REST or GraphQL", long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Surface to serve (overrides ITEMHUB_SURFACE)
    #[arg(long, value_enum)]
    surface: Option<Surface>,

    /// Listen port (overrides PORT)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Directory holding itemhub.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Introspection document for the pseudo-GraphQL surface
    #[arg(long)]
    introspection: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // CPU count * 2, minimum 4, maximum 16
    let worker_threads = (thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
        * 2)
    .clamp(4, 16);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .thread_name("itemhub-worker")
        .enable_all()
        .build()?;

    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "itemhub_server=debug,itemhub_core=debug,tower_http=debug".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "itemhub_server=info,itemhub_core=info,tower_http=info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Configured Tokio runtime: {} worker threads", worker_threads);

    rt.block_on(async_main(args))
}

async fn async_main(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(&args.config_dir).context("invalid configuration")?;
    if let Some(surface) = args.surface {
        config = config.with_surface(surface);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(path) = args.introspection {
        config = config.with_introspection_path(path);
    }

    let state = AppState::from_config(&config).with_context(|| {
        format!(
            "failed to load introspection document {}",
            config.introspection_path.display()
        )
    })?;
    let app = build_router(&config, state);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    info!(
        "itemhub server ({}) listening on {}",
        config.surface,
        listener.local_addr()?
    );
    if config.surface == Surface::Graphql {
        info!(
            "connect to http://localhost:{}/ for GraphQL playground",
            config.port
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("itemhub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
