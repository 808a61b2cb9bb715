//! Countdown Ring - a terminal countdown timer
//!
//! This is the main entry point for the countdown-ring application.

use std::{
    fs::File,
    sync::{Arc, Mutex},
};
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use countdown_ring::{
    api::create_router,
    app::run_tui,
    config::Config,
    state::AppState,
    ui::format_clock,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    init_tracing(&config)?;

    info!("Starting countdown-ring v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: duration={}, api={}, headless={}",
        format_clock(config.duration),
        config.serves_api(),
        config.headless
    );

    // Create application state
    let state = Arc::new(AppState::new(config.duration));

    let listener = if config.serves_api() {
        let addr = config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind control API to {}", addr))?;

        info!("Control API running on http://{}", addr);
        info!("Endpoints:");
        info!("  POST /start  - Start the countdown");
        info!("  POST /pause  - Pause the countdown");
        info!("  POST /toggle - Start or pause");
        info!("  POST /reset  - Restore the full duration");
        info!("  GET  /status - Check remaining time");
        info!("  GET  /health - Health check");
        Some(listener)
    } else {
        None
    };

    match listener {
        Some(listener) if config.headless => {
            let server = axum::serve(listener, create_router(Arc::clone(&state)));

            tokio::select! {
                result = server => {
                    if let Err(e) = result {
                        tracing::error!("Server error: {}", e);
                    }
                }
                _ = shutdown_signal() => {
                    info!("Shutdown signal received");
                }
            }
        }
        Some(listener) => {
            let app = create_router(Arc::clone(&state));
            let server = tokio::spawn(async move {
                if let Err(e) = axum::serve(listener, app).await {
                    tracing::error!("Server error: {}", e);
                }
            });

            let result = run_tui(Arc::clone(&state)).await;
            server.abort();
            result?;
        }
        None => run_tui(Arc::clone(&state)).await?,
    }

    // Stop any run still ticking before the runtime winds down
    if let Err(e) = state.pause() {
        tracing::warn!("Failed to stop countdown: {}", e);
    }

    info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing with the configured level and destination.
///
/// Without a log file the screen owns the terminal, so logging stays off
/// unless running headless.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = format!("countdown_ring={},tower_http=info", config.log_level());

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if config.headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .init();
        }
        None => {}
    }

    Ok(())
}
