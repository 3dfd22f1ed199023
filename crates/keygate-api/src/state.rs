//! Application state shared across all handlers.

use std::sync::Arc;

use keygate_auth::guard::AccessGuard;
use keygate_auth::session::SessionIssuer;
use keygate_core::config::AppConfig;
use keygate_store::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// TTL store (refresh tokens + revocation blacklist).
    pub store: Arc<StoreManager>,
    /// Session issuer (login / refresh / logout flows).
    pub issuer: Arc<SessionIssuer>,
    /// Per-request authorization guard.
    pub guard: Arc<AccessGuard>,
}
