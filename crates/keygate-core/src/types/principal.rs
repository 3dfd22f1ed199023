//! The authenticated principal derived from validated token claims.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// An authenticated identity for the duration of one request.
///
/// Produced only by the authorization guard after the full validation ladder
/// has passed; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Subject identifier (the username).
    pub subject: String,
    /// Role claim carried by the access token.
    pub role: Role,
}

impl Principal {
    /// Creates a principal from validated claims.
    pub fn new(subject: impl Into<String>, role: Role) -> Self {
        Self {
            subject: subject.into(),
            role,
        }
    }
}
