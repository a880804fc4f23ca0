use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{error, info, warn};

use tm_api::{create_app, handlers::configure_diagnostics, telemetry, AppState};
use tm_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init(&config.logging);
    configure_diagnostics(config.environment);

    info!(environment = %config.environment, "Starting TourMate API server");

    if let Err(problems) = config.validate() {
        for problem in &problems {
            error!("Configuration error: {}", problem);
        }
        anyhow::bail!("invalid configuration ({} problems)", problems.len());
    }
    if config.otp.deterministic {
        warn!("Deterministic OTP codes are enabled; every passcode is the fixed code");
    }

    let state = web::Data::new(AppState::from_config(&config).await?);
    let sweeper = state.otp_sweeper().start_background_task();

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_state = state.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("binding {}", bind_address))?
        .run()
        .await
        .context("HTTP server failed")?;

    if let Some(handle) = sweeper {
        handle.abort();
    }
    if let Some(pool) = &state.database {
        pool.close().await;
    }
    info!("Server stopped");
    Ok(())
}
