//! Unified error type for Keygate.
//!
//! Every crate maps its internal failures into [`AuthError`] so callers can
//! branch on [`ErrorKind`] instead of string-matching messages.

use std::fmt;

use thiserror::Error;

/// Error categorization used across the entire application.
///
/// The authentication-class kinds mirror the denial reasons the authorization
/// guard and session issuer hand to the HTTP boundary; the remaining kinds
/// cover infrastructure failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Login failed. Deliberately covers both unknown-user and wrong-password.
    InvalidCredentials,
    /// Token signature mismatch or malformed token structure.
    InvalidSignature,
    /// Token expiry instant has passed.
    Expired,
    /// Refresh token is invalid, expired, or superseded by a newer login.
    InvalidRefreshToken,
    /// Access token was revoked before its natural expiry.
    Revoked,
    /// Authenticated, but the role claim does not grant access.
    Forbidden,
    /// No credential was presented.
    Unauthenticated,
    /// Request body is missing required fields or failed validation.
    MalformedRequest,
    /// A token submitted for logout is not structurally valid.
    MalformedToken,
    /// The backing TTL store failed or is unreachable.
    Store,
    /// A configuration error occurred.
    Configuration,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::InvalidSignature => write!(f, "INVALID_SIGNATURE"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::InvalidRefreshToken => write!(f, "INVALID_REFRESH_TOKEN"),
            Self::Revoked => write!(f, "REVOKED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::MalformedRequest => write!(f, "MALFORMED_REQUEST"),
            Self::MalformedToken => write!(f, "MALFORMED_TOKEN"),
            Self::Store => write!(f, "STORE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Keygate.
///
/// Crate-specific errors are mapped into `AuthError` via `From` impls or
/// explicit `.map_err()` calls, giving a single error type at every boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AuthError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AuthError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-credentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCredentials, message)
    }

    /// Create an invalid-signature error.
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSignature, message)
    }

    /// Create an expired-token error.
    pub fn expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Expired, message)
    }

    /// Create an invalid-refresh-token error.
    pub fn invalid_refresh_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRefreshToken, message)
    }

    /// Create a revoked-token error.
    pub fn revoked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Revoked, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create an unauthenticated error.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Create a malformed-request error.
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedRequest, message)
    }

    /// Create a malformed-token error.
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedToken, message)
    }

    /// Create a store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Store, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error denies authentication (as opposed to authorization
    /// or infrastructure failure).
    pub fn is_authentication(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidCredentials
                | ErrorKind::InvalidSignature
                | ErrorKind::Expired
                | ErrorKind::InvalidRefreshToken
                | ErrorKind::Revoked
                | ErrorKind::Unauthenticated
        )
    }
}

impl Clone for AuthError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AuthError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
