//! # keygate-auth
//!
//! The token lifecycle and revocation core of Keygate.
//!
//! ## Modules
//!
//! - `password` — Argon2id credential hashing and verification
//! - `token` — JWT claims, signing, and validation
//! - `refresh` — subject-keyed registry of the single live refresh token
//! - `revocation` — blacklist of revoked access tokens
//! - `session` — login / refresh / logout orchestration
//! - `guard` — per-request authorization predicate
//! - `directory` — fixture implementation of the user-directory collaborator

pub mod directory;
pub mod guard;
pub mod password;
pub mod refresh;
pub mod revocation;
pub mod session;
pub mod token;

pub use directory::StaticUserDirectory;
pub use guard::AccessGuard;
pub use password::PasswordHasher;
pub use refresh::RefreshTokenStore;
pub use revocation::RevocationList;
pub use session::SessionIssuer;
pub use token::{Claims, JwtDecoder, JwtEncoder, TokenType};
