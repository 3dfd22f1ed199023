//! User directory trait — the external credential-store collaborator.

use async_trait::async_trait;

use crate::result::AuthResult;
use crate::types::UserRecord;

/// Opaque lookup into whatever holds the user records.
///
/// Keygate never creates, updates, or enumerates users; the directory is
/// supplied externally (a fixture table, a database, an LDAP bridge). The
/// session issuer only ever calls `find`.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Look up a user by username. Returns `None` when the user is unknown;
    /// the caller must not let that distinction reach the client.
    async fn find(&self, username: &str) -> AuthResult<Option<UserRecord>>;
}
