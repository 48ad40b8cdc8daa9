use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use gh_cors_proxy::config::schema::DEFAULT_ACCESS_PREFIX;
use gh_cors_proxy::config::{load_config, validate_config, ConfigError, ProxyConfig};
use gh_cors_proxy::lifecycle::{signals, Shutdown};
use gh_cors_proxy::observability::{logging, metrics};
use gh_cors_proxy::HttpServer;

#[derive(Parser)]
#[command(name = "gh-cors-proxy")]
#[command(about = "CORS-enabled proxy for GitHub release assets and raw files", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability.log_level);

    tracing::info!("gh-cors-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        strict_names = config.routing.strict_names,
        github_base = %config.upstream.github_base,
        raw_base = %config.upstream.raw_base,
        "Configuration loaded"
    );
    if config.routing.access_prefix == DEFAULT_ACCESS_PREFIX {
        tracing::warn!("routing.access_prefix is the default placeholder; set a private value");
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config)?;

    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
