use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod cli;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let options = cli.to_options()?;

    bootstrap::init_logging(&options.logging);

    info!("Starting Ferrous Sidecar v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = cli.resolver_config.as_deref() {
        bootstrap::load_resolver_config(path, cli.node_local_cache)?;
    }

    let shutdown = CancellationToken::new();
    tokio::spawn(server::shutdown_signal(shutdown.clone()));

    server::run(options, shutdown, cli.shutdown_grace()).await?;

    info!("Sidecar shutdown complete");
    Ok(())
}
