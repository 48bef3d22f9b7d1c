use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use robosync_bus::RedisBroker;
use robosync_core::bus::{Topology, DEFAULT_EXCHANGE};
use robosync_notifier::{FanOut, TracingSink};

/// Robosync notifier - logs every robot event published on the exchange
#[derive(Parser, Debug)]
#[command(name = "robosync-notifier")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Redis connection URL of the event bus
    #[arg(long, default_value = "redis://localhost:6379", env = "REDIS_URL")]
    redis_url: String,

    /// Exchange the robot events are published to
    #[arg(long, default_value = DEFAULT_EXCHANGE, env = "EXCHANGE_NAME")]
    exchange: String,

    /// Log output format: "pretty" or "json"
    #[arg(long, default_value = "pretty", env = "LOG_FORMAT")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let fmt_layer = if cli.log_format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "robosync_notifier=info,robosync_bus=info".into()),
        )
        .with(fmt_layer)
        .init();

    let broker = RedisBroker::new(&cli.redis_url).await?;
    let topology = Topology::robots(cli.exchange);

    tracing::info!(
        redis_url = %cli.redis_url,
        exchange = %topology.exchange,
        "Connecting notification fan-out"
    );

    let fanout = FanOut::start(&broker, &topology, Arc::new(TracingSink)).await?;

    shutdown_signal().await;
    fanout.abort();

    tracing::info!("Notifier stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
