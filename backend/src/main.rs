use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{error, info};

use transactions_api::{config::AppConfig, create_router, initialize_backend, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let _log_guard = logging::init_tracing(config.log_dir.as_deref());

    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
