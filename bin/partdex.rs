use anyhow::{Context, Result};
use clap::Parser;
use partdex::{loader, reload, AppState, Reloader, ServiceConfig, Store};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "partdex")]
#[command(about = "In-memory parts catalog query service", long_about = None)]
struct Args {
    /// Path to the delimited source file
    #[arg(long, env = "PARTDEX_SOURCE", default_value = "LE.txt")]
    source: PathBuf,

    /// HTTP API port
    #[arg(long, env = "PARTDEX_PORT", default_value = "3000")]
    port: u16,

    /// Reload automatically when the source file changes
    #[arg(long, env = "PARTDEX_WATCH")]
    watch: bool,

    /// Watcher poll interval in milliseconds
    #[arg(long, env = "PARTDEX_WATCH_INTERVAL_MS", default_value = "2000")]
    watch_interval_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = ServiceConfig::new(args.source)
        .with_port(args.port)
        .with_watch(args.watch)
        .with_watch_interval(Duration::from_millis(args.watch_interval_ms));

    info!("Starting partdex v{}", partdex::VERSION);
    info!("  Source: {}", config.source.display());
    info!("  Port: {}", config.port);
    info!("  Watch: {}", config.watch);

    // The query surface opens only over loaded data: a failed first load
    // is fatal.
    let snapshot = loader::load(&config.source)
        .with_context(|| format!("initial load of {} failed", config.source.display()))?;
    info!(count = snapshot.len(), "initial load complete");

    let store = Arc::new(Store::new(snapshot));
    let reloader = Arc::new(Reloader::new(Arc::clone(&store), config.source.clone()));

    if config.watch {
        tokio::spawn(reload::watch(Arc::clone(&reloader), config.watch_interval));
    }

    let app = partdex::create_router(AppState { store, reloader });
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
            info!("Received shutdown signal, gracefully shutting down");
        })
        .await?;

    Ok(())
}
