//! dsnotify replay node
//!
//! Drives the notification dispatcher from a recorded chain-event log, with
//! logging stand-ins for every masternode subsystem.

mod chain;
mod config;
mod replay;
mod shutdown;
mod subsystems;

use chain::{DeploymentTable, OfflineConnman, ReplayChain};
use clap::Parser;
use config::{CliOverrides, ConfigLoader};
use dsnotify_core::{ChainState, NotificationDispatcher};
use replay::replay;
use shutdown::shutdown_signal;
use std::path::PathBuf;
use std::sync::Arc;
use subsystems::TracingSubsystems;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Replay chain events through the masternode notification dispatcher
#[derive(Parser, Debug)]
#[command(name = "dsnotify-node")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./dsnotify.toml")]
    config: PathBuf,

    /// JSON-lines file of chain events to replay
    #[arg(short, long)]
    events: PathBuf,

    /// Run in lite mode regardless of the configuration file
    #[arg(long, env = "DSNOTIFY_LITE_MODE")]
    lite_mode: bool,

    /// Do not attach the client-side mixing subsystem
    #[arg(long)]
    no_wallet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    tracing::info!("Starting dsnotify-node v{}", env!("CARGO_PKG_VERSION"));

    let overrides = CliOverrides {
        lite_mode: args.lite_mode,
        no_wallet: args.no_wallet,
    };
    let config = ConfigLoader::new(&args.config, overrides)
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;
    tracing::info!(
        network = %config.network,
        lite_mode = config.dispatcher.lite_mode,
        wallet = config.wallet,
        dip0001_height = config.dispatcher.consensus.dip0001_height,
        "Configuration loaded from {:?}",
        args.config
    );

    let subsystems = Arc::new(TracingSubsystems::new());
    let chain = Arc::new(ReplayChain::new(config.initial_block_download_below));
    let dispatcher = NotificationDispatcher::new(
        config.dispatcher,
        subsystems.collaborators(config.wallet),
        chain.clone(),
        Arc::new(DeploymentTable::new(config.deployments.clone())),
        Arc::new(OfflineConnman),
    );

    dispatcher.initialize_current_block_tip()?;

    let file = tokio::fs::File::open(&args.events).await.map_err(|e| {
        tracing::error!("Failed to open event log {:?}: {}", args.events, e);
        e
    })?;
    let stats = replay(&dispatcher, &chain, BufReader::new(file), shutdown_signal()).await?;

    let flags = dispatcher.flags();
    tracing::info!(
        events = stats.events,
        tip_updates = stats.tip_updates,
        transactions = stats.transactions,
        notifications = subsystems.notifications(),
        interrupted = stats.interrupted,
        tip_height = chain.active_tip().map(|t| t.height),
        dip0001_active = flags.dip0001_active_at_tip(),
        autolock_active = flags.autolock_active(),
        "Replay finished"
    );

    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dsnotify_core=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
