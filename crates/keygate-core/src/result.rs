//! Convenience result type alias for Keygate.

use crate::error::AuthError;

/// A specialized `Result` type for Keygate operations.
pub type AuthResult<T> = Result<T, AuthError>;
