//! Keygate server — bearer credential issuing, refresh, and revocation.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use keygate_api::state::AppState;
use keygate_auth::guard::AccessGuard;
use keygate_auth::session::SessionIssuer;
use keygate_auth::token::{JwtDecoder, JwtEncoder};
use keygate_auth::{PasswordHasher, RefreshTokenStore, RevocationList, StaticUserDirectory};
use keygate_core::config::AppConfig;
use keygate_core::error::AuthError;
use keygate_store::StoreManager;

#[tokio::main]
async fn main() {
    let env = std::env::var("KEYGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AuthError> {
    tracing::info!("Starting Keygate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: TTL store ────────────────────────────────────────
    tracing::info!(provider = %config.store.provider, "Initializing TTL store");
    let store = Arc::new(StoreManager::new(&config.store).await?);

    // ── Step 2: User directory ───────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let directory = Arc::new(StaticUserDirectory::seed(&hasher, &config.users)?);
    if directory.is_empty() {
        tracing::warn!("User directory is empty; every login will be rejected");
    } else {
        tracing::info!(users = directory.len(), "Seeded user directory");
    }

    // ── Step 3: Auth components ──────────────────────────────────
    let encoder = Arc::new(JwtEncoder::new(&config.auth));
    let decoder = Arc::new(JwtDecoder::new(&config.auth));
    let refresh_tokens = Arc::new(RefreshTokenStore::new(Arc::clone(&store)));
    let revocations = Arc::new(RevocationList::new(Arc::clone(&store)));

    let issuer = Arc::new(SessionIssuer::new(
        directory,
        hasher,
        encoder,
        Arc::clone(&decoder),
        refresh_tokens,
        Arc::clone(&revocations),
    ));
    let guard = Arc::new(AccessGuard::new(decoder, revocations));

    // ── Step 4: HTTP server ──────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        store,
        issuer,
        guard,
    };
    let router = keygate_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AuthError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AuthError::internal(format!("Server error: {e}")))?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolves when SIGINT (or SIGTERM on unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
