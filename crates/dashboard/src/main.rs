use anyhow::{Context, Result};
use dashboard::{config::Config, handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::utils::{Telemetry, init_logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let providers = match &config.otel_endpoint {
        Some(endpoint) => Some(
            Telemetry::new("dashboard", endpoint.clone())
                .install()
                .context("Failed to initialize telemetry")?,
        ),
        None => None,
    };

    let _log_guard = init_logger(
        providers.as_ref().map(|p| &p.logger),
        "dashboard",
        config.is_dev,
        config.enable_file_log,
    );

    let port = config.port;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("Server started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    if let Some(providers) = providers {
        if let Err(e) = providers.shutdown() {
            error!("{e}");
        }
    }

    Ok(())
}
