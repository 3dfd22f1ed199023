//! # keygate-api
//!
//! HTTP boundary for Keygate. Translates the wire contract into calls on the
//! session issuer and authorization guard, and maps every [`AuthError`] kind
//! to its HTTP status.
//!
//! [`AuthError`]: keygate_core::AuthError

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
