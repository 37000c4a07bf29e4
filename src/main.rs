use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resource_api::{api, config, AppState};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "resource_api=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut cfg = config::load()?;
    let args = cli::Cli::parse();
    if let Some(cli::Commands::Serve { port: Some(port) }) = args.command {
        cfg.port = port;
    }

    run_server(cfg).await
}

async fn run_server(cfg: config::Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::with_seed_data(cfg));
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = api::resource_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("banking resource API listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
