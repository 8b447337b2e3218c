pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod state;

use axum::Router;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::Settings;
use db::Store;
use state::AppState;

pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Loads settings, connects the pool, and serves until interrupted. The
/// caller passes the service's route tree; an empty router is valid and
/// leaves only the built-in health endpoint.
pub async fn run(routes: Router<AppState>) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_tracing(&settings.log_level);

    let store = Store::connect(&settings.async_database_url()?).await?;

    // Startup hook: acquire long-lived resources here (caches, background
    // tasks) before the listener opens.
    info!("Starting up");

    let port = settings.port;
    let state = AppState::new(settings, store);
    let app = api::app(state, routes);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Shutdown hook: release whatever the startup hook acquired.
    info!("Shutting down");

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
