use idp_server::error::Result as ServerErrorResult;
use idp_server::{AppState, build_router, logger};

use idp_config::{Config, ConfigError, StoreLocation};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting idp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the credential store (runs migrations)
    let pool = match config.store_location()? {
        StoreLocation::InMemory => {
            info!("Opening in-memory store");
            idp_db::open_in_memory_store().await?
        }
        StoreLocation::File(path) => {
            info!("Opening store: {}", path.display());
            idp_db::open_store(&path).await?
        }
    };
    info!("Store ready");

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

    // Build application state
    let app_state = AppState::new(pool, secret.as_bytes(), config.auth.token_ttl());
    info!(
        "JWT: {} tokens, ttl {}d",
        app_state.validator.algorithm(),
        app_state.issuer.ttl().num_days()
    );

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C; never resolves if the signal cannot be installed
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
