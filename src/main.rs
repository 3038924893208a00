use anyhow::Context;
use product_store::config::ServerConfig;
use product_store::lifecycle::{setup_tracing, ProductSystem};
use product_store::{http, shutdown};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| e.exit());

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    let system = ProductSystem::new(config.mailbox_capacity.get());
    let app = http::router(system.product_client.clone());

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown::listen().await {
                error!(error = %e, "Shutdown signal handler failed");
                // Without a signal handler, keep serving until the process is killed.
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("server error")?;

    // The router and its client clones are gone once `serve` returns.
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
