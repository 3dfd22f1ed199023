//! Domain types shared across the Keygate crates.

pub mod principal;
pub mod role;

pub use principal::Principal;
pub use role::Role;

use serde::{Deserialize, Serialize};

/// A user record as returned by the external user directory.
///
/// The directory is an opaque collaborator; Keygate only ever sees this
/// shape and never manages the records themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
}
