//! cmdr-server - natural-language shell agent
//!
//! Accepts `POST /agent` with `{"msg": "..."}`, asks Gemini for shell
//! commands, runs them in order and returns `{"output": "..."}`.
//!
//! Generated commands are executed without sandboxing or allow-listing, with
//! the privileges of the server process. Bind to localhost only.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cmdr_server=info,cmdr_core=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("cmdr-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = config::Config::load()?;
    info!("Config loaded from {:?}", config.config_path);

    if config.api_key.is_none() {
        warn!(
            "{} is not set; /agent requests will fail until it is provided",
            config::API_KEY_ENV
        );
    }

    let agent = state::build_agent(&config)?;
    info!(
        model = %config.model,
        working_dir = ?config.working_dir,
        "Agent ready"
    );

    let bind = config.bind;
    let app = routes::create_router(state::AppState::new(config, agent));

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    Ok(())
}

/// Resolve on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
